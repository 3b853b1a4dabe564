use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid weight {name}: {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Invalid score bounds: floor {floor} > ceiling {ceiling}")]
    InvalidBounds { floor: u32, ceiling: u32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingConfig {
    pub scoring: ScoringWeights,
    pub boost: BoostWeights,
    pub trend: TrendConfig,
}

/// Weights for the compatibility criteria
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub department: f64,
    pub experience: f64,
    pub interest: f64,
    /// Share of the experience weight granted one step away on the scale
    pub adjacent_experience_ratio: f64,
    /// Returned when no criterion applies
    pub neutral_score: u32,
    pub score_floor: u32,
    pub score_ceiling: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 50.0,
            department: 20.0,
            experience: 15.0,
            interest: 15.0,
            adjacent_experience_ratio: 0.5,
            neutral_score: 50,
            score_floor: 30,
            score_ceiling: 100,
        }
    }
}

/// Per-interaction increments and interest bonuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostWeights {
    pub view: u32,
    pub bookmark: u32,
    /// Applied postings are not pushed further up
    pub application: u32,
    pub similar_view: u32,
    pub category_interest: u32,
    /// Per matching skill, uncapped
    pub skill_interest: u32,
}

impl Default for BoostWeights {
    fn default() -> Self {
        Self {
            view: 2,
            bookmark: 5,
            application: 0,
            similar_view: 1,
            category_interest: 3,
            skill_interest: 1,
        }
    }
}

/// Simulated population-trend parameters
#[derive(Debug, Clone, PartialEq)]
pub struct TrendConfig {
    /// Popularity noise is drawn from [0, noise_max)
    pub noise_max: f64,
    pub department_bonus: f64,
    pub recency_divisor: f64,
    pub recency_modulus: f64,
    pub score_ceiling: f64,
    /// Fixed seed for reproducible passes; entropy when unset
    pub seed: Option<u64>,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            noise_max: 5.0,
            department_bonus: 3.0,
            recency_divisor: 100.0,
            recency_modulus: 5.0,
            score_ceiling: 100.0,
            seed: None,
        }
    }
}

/// Flat view of the `RANKING_*` environment variables
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    skills_weight: Option<f64>,
    department_weight: Option<f64>,
    experience_weight: Option<f64>,
    interest_weight: Option<f64>,
    adjacent_experience_ratio: Option<f64>,
    neutral_score: Option<u32>,
    score_floor: Option<u32>,
    score_ceiling: Option<u32>,

    view_boost: Option<u32>,
    bookmark_boost: Option<u32>,
    application_boost: Option<u32>,
    similar_view_boost: Option<u32>,
    category_interest_boost: Option<u32>,
    skill_interest_boost: Option<u32>,

    trend_noise_max: Option<f64>,
    trend_department_bonus: Option<f64>,
    trend_recency_divisor: Option<f64>,
    trend_recency_modulus: Option<f64>,
    trend_seed: Option<u64>,
}

impl RankingConfig {
    pub const ENV_PREFIX: &'static str = "RANKING_";

    /// Load `.env`, then overlay `RANKING_*` variables on the defaults
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let overrides: EnvOverrides = envy::prefixed(Self::ENV_PREFIX).from_env()?;
        let config = Self::default().with_overrides(overrides);
        config.validate()?;

        Ok(config)
    }

    fn with_overrides(mut self, env: EnvOverrides) -> Self {
        let s = &mut self.scoring;
        s.skills = env.skills_weight.unwrap_or(s.skills);
        s.department = env.department_weight.unwrap_or(s.department);
        s.experience = env.experience_weight.unwrap_or(s.experience);
        s.interest = env.interest_weight.unwrap_or(s.interest);
        s.adjacent_experience_ratio = env
            .adjacent_experience_ratio
            .unwrap_or(s.adjacent_experience_ratio);
        s.neutral_score = env.neutral_score.unwrap_or(s.neutral_score);
        s.score_floor = env.score_floor.unwrap_or(s.score_floor);
        s.score_ceiling = env.score_ceiling.unwrap_or(s.score_ceiling);

        let b = &mut self.boost;
        b.view = env.view_boost.unwrap_or(b.view);
        b.bookmark = env.bookmark_boost.unwrap_or(b.bookmark);
        b.application = env.application_boost.unwrap_or(b.application);
        b.similar_view = env.similar_view_boost.unwrap_or(b.similar_view);
        b.category_interest = env.category_interest_boost.unwrap_or(b.category_interest);
        b.skill_interest = env.skill_interest_boost.unwrap_or(b.skill_interest);

        let t = &mut self.trend;
        t.noise_max = env.trend_noise_max.unwrap_or(t.noise_max);
        t.department_bonus = env.trend_department_bonus.unwrap_or(t.department_bonus);
        t.recency_divisor = env.trend_recency_divisor.unwrap_or(t.recency_divisor);
        t.recency_modulus = env.trend_recency_modulus.unwrap_or(t.recency_modulus);
        t.seed = env.trend_seed.or(t.seed);

        self
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        let t = &self.trend;

        let weights = [
            ("skills_weight", s.skills),
            ("department_weight", s.department),
            ("experience_weight", s.experience),
            ("interest_weight", s.interest),
            ("adjacent_experience_ratio", s.adjacent_experience_ratio),
            ("trend_noise_max", t.noise_max),
            ("trend_department_bonus", t.department_bonus),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        // Recency proxy divides by both
        for (name, value) in [
            ("trend_recency_divisor", t.recency_divisor),
            ("trend_recency_modulus", t.recency_modulus),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if s.score_floor > s.score_ceiling {
            return Err(ConfigError::InvalidBounds {
                floor: s.score_floor,
                ceiling: s.score_ceiling,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for (key, _) in env::vars() {
            if key.starts_with(RankingConfig::ENV_PREFIX) {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = RankingConfig::from_env().unwrap();
        assert_eq!(config, RankingConfig::default());
        assert_eq!(config.scoring.skills, 50.0);
        assert_eq!(config.boost.bookmark, 5);
        assert_eq!(config.trend.seed, None);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("RANKING_SKILLS_WEIGHT", "60");
        env::set_var("RANKING_VIEW_BOOST", "4");
        env::set_var("RANKING_TREND_SEED", "42");

        let config = RankingConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.scoring.skills, 60.0);
        assert_eq!(config.scoring.department, 20.0);
        assert_eq!(config.boost.view, 4);
        assert_eq!(config.trend.seed, Some(42));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_env();
        env::set_var("RANKING_BOOKMARK_BOOST", "lots");

        let result = RankingConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::Env(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_max_boost_is_usable() {
        use crate::models::{Interaction, InteractionKind, Posting, ScoredPosting};
        use crate::services::interaction::InteractionBooster;

        clear_env();
        env::set_var("RANKING_BOOKMARK_BOOST", u32::MAX.to_string());

        let config = RankingConfig::from_env().unwrap();
        clear_env();
        assert_eq!(config.boost.bookmark, u32::MAX);

        let scored = vec![ScoredPosting {
            posting: Posting {
                id: 1,
                ..Default::default()
            },
            base_score: 70,
        }];
        let log = vec![Interaction::new(
            uuid::Uuid::nil(),
            1,
            InteractionKind::Bookmark,
        )];
        let boosted = InteractionBooster::with_weights(config.boost).boost(scored, &log);

        assert_eq!(boosted[0].boosted_score, u32::MAX);
    }

    #[test]
    fn test_validate_negative_weight() {
        let mut config = RankingConfig::default();
        config.scoring.interest = -1.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeight {
                name: "interest_weight",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_zero_recency_divisor() {
        let mut config = RankingConfig::default();
        config.trend.recency_divisor = 0.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let mut config = RankingConfig::default();
        config.scoring.score_floor = 90;
        config.scoring.score_ceiling = 80;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { floor: 90, ceiling: 80 })
        ));
    }
}
