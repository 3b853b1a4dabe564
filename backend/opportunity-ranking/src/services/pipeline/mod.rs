/// Recommendation Pipeline
///
/// Runs the three scoring stages over one batch and orders the result.
///
/// # Workflow
/// 1. `CompatibilityScorer`: profile match per posting → base score
/// 2. `InteractionBooster`: interaction history → boosted score
/// 3. `TrendBlender`: simulated population trend → final score
/// 4. Stable sort by final score (descending); ties keep input order
use super::{CompatibilityScorer, InteractionBooster, TrendBlender};
use crate::config::RankingConfig;
use crate::models::{Interaction, Posting, Profile, RankedPosting};
use tracing::{debug, info};

pub struct RecommendationPipeline {
    scorer: CompatibilityScorer,
    booster: InteractionBooster,
    blender: TrendBlender,
}

impl RecommendationPipeline {
    pub fn new(
        scorer: CompatibilityScorer,
        booster: InteractionBooster,
        blender: TrendBlender,
    ) -> Self {
        Self {
            scorer,
            booster,
            blender,
        }
    }

    /// Pipeline with the simulated trend model described by `config`
    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(
            CompatibilityScorer::with_weights(config.scoring.clone()),
            InteractionBooster::with_weights(config.boost.clone()),
            TrendBlender::from_config(&config.trend),
        )
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    /// Rank `postings` for `profile`. Empty when there is nothing to rank
    /// or nobody to rank for.
    pub fn recommend(
        &mut self,
        postings: &[Posting],
        profile: Option<&Profile>,
        interactions: &[Interaction],
    ) -> Vec<RankedPosting> {
        let Some(profile) = profile else {
            return Vec::new();
        };
        if postings.is_empty() {
            return Vec::new();
        }

        let scored = self.scorer.score_all(postings, profile);
        debug!(scored_count = scored.len(), "Compatibility stage complete");

        let boosted = self.booster.boost(scored, interactions);
        debug!(boosted_count = boosted.len(), "Interaction stage complete");

        let mut ranked = self.blender.blend(boosted, profile);

        // sort_by is stable
        ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

        info!(
            profile_id = %profile.id,
            posting_count = postings.len(),
            interaction_count = interactions.len(),
            top_score = ranked.first().map(|r| r.final_score),
            "Recommendations ranked"
        );

        ranked
    }
}
