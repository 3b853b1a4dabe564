// ============================================
// Trend Blender (热度融合)
// ============================================
//
// Folds a population-trend estimate into the boosted score:
//
//   trending    = Σ signal.contribution(posting, profile)
//   final_score = min(boosted_score + trending, ceiling)
//
// No cross-user data is available yet, so the default signals simulate it:
// - PopularityNoise:    uniform noise in [0, 5) from an injected RNG
// - DepartmentAffinity: +3 when posting and profile share a department (or both lack one)
// - IdRecency:          (id / 100) mod 5, assuming ids grow with creation time
//
// A real collaborative signal plugs in as another `TrendSignal`
// (see `ExternalPopularity`) without touching the earlier stages.

mod signals;

pub use signals::{DepartmentAffinity, ExternalPopularity, IdRecency, PopularityNoise};

use crate::config::TrendConfig;
use crate::models::{BoostedPosting, Posting, Profile, RankedPosting};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// One additive component of the trend estimate
pub trait TrendSignal: Send {
    fn contribution(&mut self, posting: &Posting, profile: &Profile) -> f64;

    fn name(&self) -> &'static str;
}

pub struct TrendBlender {
    signals: Vec<Box<dyn TrendSignal>>,
    score_ceiling: f64,
}

impl TrendBlender {
    /// Blender with no signals; add them with `with_signal`
    pub fn new(score_ceiling: f64) -> Self {
        Self {
            signals: Vec::new(),
            score_ceiling,
        }
    }

    pub fn with_signal(mut self, signal: impl TrendSignal + 'static) -> Self {
        self.signals.push(Box::new(signal));
        self
    }

    /// The simulated trend model driven by `rng`
    pub fn simulated(config: &TrendConfig, rng: StdRng) -> Self {
        Self::new(config.score_ceiling)
            .with_signal(PopularityNoise::new(rng, config.noise_max))
            .with_signal(DepartmentAffinity::new(config.department_bonus))
            .with_signal(IdRecency::new(config.recency_divisor, config.recency_modulus))
    }

    /// Simulated model seeded from config, or from entropy when no seed is set
    pub fn from_config(config: &TrendConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::simulated(config, rng)
    }

    pub fn signal_names(&self) -> Vec<&'static str> {
        self.signals.iter().map(|s| s.name()).collect()
    }

    /// Trend estimate for one posting
    pub fn trending(&mut self, posting: &Posting, profile: &Profile) -> f64 {
        self.signals
            .iter_mut()
            .map(|signal| signal.contribution(posting, profile))
            .sum()
    }

    /// Add trend contributions and cap final scores, preserving order
    pub fn blend(&mut self, boosted: Vec<BoostedPosting>, profile: &Profile) -> Vec<RankedPosting> {
        boosted
            .into_iter()
            .map(|b| {
                let trending = self.trending(&b.posting, profile);
                let final_score = (b.boosted_score as f64 + trending).min(self.score_ceiling);

                debug!(
                    posting_id = b.posting.id,
                    boosted_score = b.boosted_score,
                    trending = trending,
                    final_score = final_score,
                    "Trend blended"
                );

                RankedPosting {
                    posting: b.posting,
                    base_score: b.base_score,
                    interaction_boost: b.interaction_boost,
                    boosted_score: b.boosted_score,
                    trending,
                    final_score,
                }
            })
            .collect()
    }
}
