use super::TrendSignal;
use crate::models::{Posting, Profile};
use rand::Rng;
use std::collections::HashMap;

/// Stand-in for population popularity: uniform noise in [0, max)
pub struct PopularityNoise<R> {
    rng: R,
    max: f64,
}

impl<R: Rng + Send> PopularityNoise<R> {
    pub fn new(rng: R, max: f64) -> Self {
        Self { rng, max }
    }
}

impl<R: Rng + Send> TrendSignal for PopularityNoise<R> {
    fn contribution(&mut self, _posting: &Posting, _profile: &Profile) -> f64 {
        // gen_range panics on an empty or unbounded range; NaN fails both checks
        if !(self.max > 0.0 && self.max.is_finite()) {
            return 0.0;
        }
        self.rng.gen_range(0.0..self.max)
    }

    fn name(&self) -> &'static str {
        "popularity_noise"
    }
}

/// Bonus when the posting belongs to the profile's own department.
/// Two unset departments count as the same department.
pub struct DepartmentAffinity {
    bonus: f64,
}

impl DepartmentAffinity {
    pub fn new(bonus: f64) -> Self {
        Self { bonus }
    }
}

impl TrendSignal for DepartmentAffinity {
    fn contribution(&mut self, posting: &Posting, profile: &Profile) -> f64 {
        if posting.department == profile.department {
            self.bonus
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "department_affinity"
    }
}

/// Recency approximated from the posting id: `(id / divisor) mod modulus`.
///
/// Only meaningful while ids are issued in creation order. Replace with a
/// timestamp-based signal once postings carry their creation time.
pub struct IdRecency {
    divisor: f64,
    modulus: f64,
}

impl IdRecency {
    pub fn new(divisor: f64, modulus: f64) -> Self {
        Self { divisor, modulus }
    }
}

impl TrendSignal for IdRecency {
    fn contribution(&mut self, posting: &Posting, _profile: &Profile) -> f64 {
        (posting.id as f64 / self.divisor) % self.modulus
    }

    fn name(&self) -> &'static str {
        "id_recency"
    }
}

/// Popularity supplied by an outside feed, keyed by posting id.
/// Postings missing from the feed contribute nothing.
pub struct ExternalPopularity {
    scores: HashMap<u64, f64>,
    weight: f64,
}

impl ExternalPopularity {
    pub fn new(scores: HashMap<u64, f64>, weight: f64) -> Self {
        Self { scores, weight }
    }
}

impl TrendSignal for ExternalPopularity {
    fn contribution(&mut self, posting: &Posting, _profile: &Profile) -> f64 {
        self.scores
            .get(&posting.id)
            .map(|score| score * self.weight)
            .unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "external_popularity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn posting(id: u64, department: Option<&str>) -> Posting {
        Posting {
            id,
            department: department.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_popularity_noise_range() {
        let mut noise = PopularityNoise::new(StdRng::seed_from_u64(3), 5.0);
        let profile = Profile::default();

        for id in 0..500 {
            let value = noise.contribution(&posting(id, None), &profile);
            assert!((0.0..5.0).contains(&value));
        }
    }

    #[test]
    fn test_popularity_noise_disabled() {
        let mut noise = PopularityNoise::new(StdRng::seed_from_u64(3), 0.0);
        assert_eq!(noise.contribution(&posting(1, None), &Profile::default()), 0.0);
    }

    #[test]
    fn test_popularity_noise_non_finite_max() {
        let profile = Profile::default();
        for max in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let mut noise = PopularityNoise::new(StdRng::seed_from_u64(3), max);
            assert_eq!(noise.contribution(&posting(1, None), &profile), 0.0);
        }
    }

    #[test]
    fn test_department_affinity_equal_departments() {
        let mut affinity = DepartmentAffinity::new(3.0);
        let profile = Profile {
            department: Some("Biology".to_string()),
            ..Default::default()
        };

        assert_eq!(affinity.contribution(&posting(1, Some("Biology")), &profile), 3.0);
        assert_eq!(affinity.contribution(&posting(1, Some("Chemistry")), &profile), 0.0);
        assert_eq!(affinity.contribution(&posting(1, None), &profile), 0.0);

        let unset = Profile::default();
        assert_eq!(affinity.contribution(&posting(1, None), &unset), 3.0);
        assert_eq!(affinity.contribution(&posting(1, Some("Biology")), &unset), 0.0);
    }

    #[test]
    fn test_id_recency() {
        let mut recency = IdRecency::new(100.0, 5.0);
        let profile = Profile::default();

        assert_eq!(recency.contribution(&posting(0, None), &profile), 0.0);
        assert_eq!(recency.contribution(&posting(250, None), &profile), 2.5);
        // wraps every 500 ids
        assert_eq!(recency.contribution(&posting(600, None), &profile), 1.0);
    }

    #[test]
    fn test_external_popularity() {
        let feed: HashMap<u64, f64> = [(1, 4.0), (2, 1.5)].into_iter().collect();
        let mut external = ExternalPopularity::new(feed, 0.5);
        let profile = Profile::default();

        assert_eq!(external.contribution(&posting(1, None), &profile), 2.0);
        assert_eq!(external.contribution(&posting(2, None), &profile), 0.75);
        assert_eq!(external.contribution(&posting(3, None), &profile), 0.0);
    }
}
