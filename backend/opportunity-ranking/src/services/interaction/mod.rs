// ============================================
// Interaction Booster (行为加权)
// ============================================
//
// Re-weights base match scores with the profile's own interaction log.
//
// Two signals:
// 1. Direct: each interaction adds a kind-specific increment to its posting
// 2. Interest: categories/skills of postings the profile browsed (anything
//    but applications) lift every posting sharing them
//
// Only interactions whose posting is part of the current batch count.

use crate::config::BoostWeights;
use crate::models::{BoostedPosting, Interaction, InteractionKind, Posting, ScoredPosting};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Interests inferred from browsing behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferredInterests {
    pub categories: HashSet<String>,
    pub skills: HashSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionBooster {
    weights: BoostWeights,
}

impl InteractionBooster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: BoostWeights) -> Self {
        Self { weights }
    }

    /// Increment for a single interaction of `kind`
    pub fn kind_increment(&self, kind: InteractionKind) -> u32 {
        match kind {
            InteractionKind::View => self.weights.view,
            InteractionKind::Bookmark => self.weights.bookmark,
            InteractionKind::Application => self.weights.application,
            InteractionKind::SimilarView => self.weights.similar_view,
            InteractionKind::Unknown => 0,
        }
    }

    /// Add interaction boosts to a scored batch, preserving order
    pub fn boost(
        &self,
        scored: Vec<ScoredPosting>,
        interactions: &[Interaction],
    ) -> Vec<BoostedPosting> {
        if interactions.is_empty() {
            return scored.into_iter().map(BoostedPosting::unboosted).collect();
        }

        let batch: HashMap<u64, &Posting> = scored
            .iter()
            .map(|s| (s.posting.id, &s.posting))
            .collect();

        let interests = self.extract_interests(&batch, interactions);
        let direct = self.direct_boosts(&batch, interactions);

        debug!(
            interaction_count = interactions.len(),
            interested_categories = interests.categories.len(),
            interested_skills = interests.skills.len(),
            directly_boosted = direct.len(),
            "Interaction signals accumulated"
        );

        scored
            .into_iter()
            .map(|s| {
                // Weights come from the environment unbounded, so sums saturate
                let interaction_boost = direct
                    .get(&s.posting.id)
                    .copied()
                    .unwrap_or(0)
                    .saturating_add(self.interest_boost(&s.posting, &interests));

                BoostedPosting {
                    boosted_score: s.base_score.saturating_add(interaction_boost),
                    base_score: s.base_score,
                    interaction_boost,
                    posting: s.posting,
                }
            })
            .collect()
    }

    /// Categories and skills of in-batch postings the profile browsed.
    /// Applications signal commitment, not browsing, and are left out.
    pub fn extract_interests(
        &self,
        batch: &HashMap<u64, &Posting>,
        interactions: &[Interaction],
    ) -> InferredInterests {
        let mut interests = InferredInterests::default();

        for interaction in interactions {
            if interaction.kind == InteractionKind::Application {
                continue;
            }
            let Some(posting) = batch.get(&interaction.posting_id) else {
                continue;
            };

            if let Some(category) = posting.category.as_deref().filter(|c| !c.is_empty()) {
                interests.categories.insert(category.to_string());
            }
            interests.skills.extend(posting.skills.iter().cloned());
        }

        interests
    }

    /// Summed kind increments per in-batch posting id
    fn direct_boosts(
        &self,
        batch: &HashMap<u64, &Posting>,
        interactions: &[Interaction],
    ) -> HashMap<u64, u32> {
        let mut boosts: HashMap<u64, u32> = HashMap::new();

        for interaction in interactions {
            if !batch.contains_key(&interaction.posting_id) {
                continue;
            }
            let total = boosts.entry(interaction.posting_id).or_insert(0);
            *total = total.saturating_add(self.kind_increment(interaction.kind));
        }

        boosts
    }

    fn interest_boost(&self, posting: &Posting, interests: &InferredInterests) -> u32 {
        let category = match posting.category.as_deref() {
            Some(c) if interests.categories.contains(c) => self.weights.category_interest,
            _ => 0,
        };

        let skill_overlap = posting
            .skills
            .iter()
            .filter(|skill| interests.skills.contains(skill.as_str()))
            .count();
        let skill_overlap = u32::try_from(skill_overlap).unwrap_or(u32::MAX);

        category.saturating_add(skill_overlap.saturating_mul(self.weights.skill_interest))
    }
}
