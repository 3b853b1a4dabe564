use opportunity_ranking::{demo, RankingConfig, RecommendationPipeline};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Load config
    let config = RankingConfig::from_env()?;

    info!(
        seed = ?config.trend.seed,
        skills_weight = config.scoring.skills,
        "Starting opportunity-ranking demo"
    );

    let profile = demo::mock_profile();
    let postings = demo::mock_postings();

    let mut rng = match config.trend.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let interactions = demo::mock_interactions(profile.id, &postings, &mut rng);

    info!(
        profile_id = %profile.id,
        interaction_count = interactions.len(),
        "Generated demo interactions"
    );

    let mut pipeline = RecommendationPipeline::from_config(&config);
    let ranked = pipeline.recommend(&postings, Some(&profile), &interactions);

    for (position, item) in ranked.iter().enumerate() {
        info!(
            position = position + 1,
            posting_id = item.posting.id,
            title = %item.posting.title,
            match_score = item.match_score(),
            recommendation_score = item.recommendation_score(),
            "Ranked posting"
        );
    }

    println!("{}", serde_json::to_string_pretty(&ranked)?);

    Ok(())
}
