pub mod config;
pub mod demo;
pub mod models;
pub mod services;

pub use config::{ConfigError, RankingConfig};
pub use models::{Interaction, InteractionKind, Posting, Profile, RankedPosting};
pub use services::{
    CompatibilityScorer, InteractionBooster, RecommendationPipeline, TrendBlender, TrendSignal,
};
