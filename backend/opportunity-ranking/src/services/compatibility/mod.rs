// ============================================
// Compatibility Scorer (匹配度打分)
// ============================================
//
// Weighted multi-criteria match between a posting and a profile.
//
// Criteria (default weights):
// - Skills overlap      50  (fraction of required skills covered)
// - Department match    20  (binary)
// - Experience level    15  (exact = full, adjacent = half)
// - Interest match      15  (binary)
//
// A criterion with missing data on either side is left out of both the
// achieved and the maximum total, so missing data never reads as mismatch.
// A profile list that is present but empty is data: it counts and scores 0.
// Score = round(100 * achieved / max), clamped to [floor, ceiling].

use crate::config::ScoringWeights;
use crate::models::{ExperienceLevel, Posting, Profile, ScoredPosting};
use tracing::debug;

/// Achieved / maximum contribution of each applicable criterion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: Option<CriterionScore>,
    pub department: Option<CriterionScore>,
    pub experience: Option<CriterionScore>,
    pub interest: Option<CriterionScore>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionScore {
    pub achieved: f64,
    pub max: f64,
}

impl ScoreBreakdown {
    fn criteria(&self) -> impl Iterator<Item = &CriterionScore> {
        [&self.skills, &self.department, &self.experience, &self.interest]
            .into_iter()
            .flatten()
    }

    pub fn achieved(&self) -> f64 {
        self.criteria().map(|c| c.achieved).sum()
    }

    pub fn max_possible(&self) -> f64 {
        self.criteria().map(|c| c.max).sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Match score in [floor, ceiling]; absent inputs score the floor
    pub fn score(&self, posting: Option<&Posting>, profile: Option<&Profile>) -> u32 {
        let (Some(posting), Some(profile)) = (posting, profile) else {
            return self.weights.score_floor;
        };

        let breakdown = self.breakdown(posting, profile);
        let max_possible = breakdown.max_possible();

        let raw = if max_possible > 0.0 {
            (breakdown.achieved() / max_possible * 100.0).round() as u32
        } else {
            self.weights.neutral_score
        };

        let score = raw
            .max(self.weights.score_floor)
            .min(self.weights.score_ceiling);

        debug!(
            posting_id = posting.id,
            achieved = breakdown.achieved(),
            max_possible = max_possible,
            score = score,
            "Compatibility score computed"
        );

        score
    }

    /// Score every posting of a batch against one profile, preserving order
    pub fn score_all(&self, postings: &[Posting], profile: &Profile) -> Vec<ScoredPosting> {
        postings
            .iter()
            .map(|posting| ScoredPosting {
                base_score: self.score(Some(posting), Some(profile)),
                posting: posting.clone(),
            })
            .collect()
    }

    /// Per-criterion contributions; skipped criteria are `None`
    pub fn breakdown(&self, posting: &Posting, profile: &Profile) -> ScoreBreakdown {
        ScoreBreakdown {
            skills: self.skills_match(&posting.skills, profile.skills.as_deref()),
            department: self.department_match(
                posting.department.as_deref(),
                profile.department.as_deref(),
            ),
            experience: self.experience_match(
                posting.experience_level.as_deref(),
                profile.experience_level.as_deref(),
            ),
            interest: self.interest_match(
                posting.category.as_deref(),
                profile.interests.as_deref(),
            ),
        }
    }

    /// Skipped when the posting requires nothing or the profile never listed
    /// skills; an explicitly empty profile list scores zero
    fn skills_match(
        &self,
        required: &[String],
        owned: Option<&[String]>,
    ) -> Option<CriterionScore> {
        let required = normalized(required);
        if required.is_empty() {
            return None;
        }
        let owned = normalized(owned?);

        let matched = required
            .iter()
            .filter(|skill| owned.iter().any(|own| substring_either_way(skill, own)))
            .count();

        let weight = self.weights.skills;
        Some(CriterionScore {
            achieved: weight * (matched as f64 / required.len() as f64),
            max: weight,
        })
    }

    fn department_match(
        &self,
        posting: Option<&str>,
        profile: Option<&str>,
    ) -> Option<CriterionScore> {
        let (posting, profile) = (present(posting)?, present(profile)?);
        let weight = self.weights.department;

        Some(CriterionScore {
            achieved: if posting.to_lowercase() == profile.to_lowercase() {
                weight
            } else {
                0.0
            },
            max: weight,
        })
    }

    fn experience_match(
        &self,
        posting: Option<&str>,
        profile: Option<&str>,
    ) -> Option<CriterionScore> {
        let (posting, profile) = (present(posting)?, present(profile)?);
        let weight = self.weights.experience;

        let distance = ExperienceLevel::parse(posting)
            .zip(ExperienceLevel::parse(profile))
            .map(|(a, b)| a.distance(&b));

        let achieved = match distance {
            Some(0) => weight,
            Some(1) => weight * self.weights.adjacent_experience_ratio,
            _ => 0.0,
        };

        Some(CriterionScore {
            achieved,
            max: weight,
        })
    }

    fn interest_match(
        &self,
        category: Option<&str>,
        interests: Option<&[String]>,
    ) -> Option<CriterionScore> {
        let category = present(category)?.to_lowercase();
        let interests = normalized(interests?);

        let weight = self.weights.interest;
        let hit = interests
            .iter()
            .any(|interest| substring_either_way(&category, interest));

        Some(CriterionScore {
            achieved: if hit { weight } else { 0.0 },
            max: weight,
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trimmed, lowercased entries with blanks dropped
fn normalized(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Both arguments must already be lowercased
fn substring_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
