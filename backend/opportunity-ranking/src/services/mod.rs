pub mod compatibility;
pub mod interaction;
pub mod pipeline;
pub mod trending;

pub use compatibility::{CompatibilityScorer, ScoreBreakdown};
pub use interaction::{InferredInterests, InteractionBooster};
pub use pipeline::RecommendationPipeline;
pub use trending::{TrendBlender, TrendSignal};
