// Sample data for the demo binary and for local experiments.

use crate::models::{Interaction, InteractionKind, Posting, Profile};
use rand::Rng;
use uuid::Uuid;

/// Kinds a simulated user produces
const MOCK_KINDS: [InteractionKind; 3] = [
    InteractionKind::View,
    InteractionKind::Bookmark,
    InteractionKind::Application,
];

/// Chance that a given posting receives a simulated interaction
const MOCK_INTERACTION_RATE: f64 = 0.4;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn mock_profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        department: Some("Computer Science".to_string()),
        skills: Some(strings(&["React", "JavaScript", "UI Design", "Node.js", "Python"])),
        experience_level: Some("intermediate".to_string()),
        interests: Some(strings(&["Academic Project", "Hackathon", "Startup"])),
    }
}

pub fn mock_postings() -> Vec<Posting> {
    vec![
        Posting {
            id: 101,
            title: "Campus event finder".to_string(),
            category: Some("Academic Project".to_string()),
            department: Some("Computer Science".to_string()),
            skills: strings(&["React", "Figma"]),
            experience_level: Some("intermediate".to_string()),
        },
        Posting {
            id: 214,
            title: "Smart irrigation prototype".to_string(),
            category: Some("Research".to_string()),
            department: Some("Electrical Engineering".to_string()),
            skills: strings(&["Arduino", "C++", "Python"]),
            experience_level: Some("advanced".to_string()),
        },
        Posting {
            id: 238,
            title: "Hackathon team: accessibility toolkit".to_string(),
            category: Some("Hackathon".to_string()),
            department: Some("Computer Science".to_string()),
            skills: strings(&["JavaScript", "Node.js", "ARIA"]),
            experience_level: Some("beginner".to_string()),
        },
        Posting {
            id: 305,
            title: "Student marketplace startup".to_string(),
            category: Some("Startup".to_string()),
            department: Some("Business".to_string()),
            skills: strings(&["React.js", "Marketing"]),
            experience_level: None,
        },
        Posting {
            id: 412,
            title: "Brand refresh for the film society".to_string(),
            category: Some("Club".to_string()),
            department: Some("Design".to_string()),
            skills: strings(&["Illustrator", "UI Design"]),
            experience_level: Some("expert".to_string()),
        },
    ]
}

/// Simulated browsing history: each posting is touched with probability 0.4
/// by a view, bookmark or application drawn uniformly.
pub fn mock_interactions<R: Rng>(
    profile_id: Uuid,
    postings: &[Posting],
    rng: &mut R,
) -> Vec<Interaction> {
    postings
        .iter()
        .filter_map(|posting| {
            if rng.gen::<f64>() >= MOCK_INTERACTION_RATE {
                return None;
            }
            let kind = MOCK_KINDS[rng.gen_range(0..MOCK_KINDS.len())];
            Some(Interaction::new(profile_id, posting.id, kind))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mock_postings_unique_ids() {
        let postings = mock_postings();
        let mut ids: Vec<u64> = postings.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), postings.len());
    }

    #[test]
    fn test_mock_interactions_reference_batch() {
        let profile = mock_profile();
        let postings = mock_postings();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let log = mock_interactions(profile.id, &postings, &mut rng);
            assert!(log.len() <= postings.len());
            for interaction in &log {
                assert_eq!(interaction.profile_id, profile.id);
                assert!(postings.iter().any(|p| p.id == interaction.posting_id));
                assert!(MOCK_KINDS.contains(&interaction.kind));
            }
        }
    }

    #[test]
    fn test_mock_interactions_seeded() {
        let postings = mock_postings();
        let id = Uuid::nil();

        let first = mock_interactions(id, &postings, &mut StdRng::seed_from_u64(5));
        let second = mock_interactions(id, &postings, &mut StdRng::seed_from_u64(5));

        let kinds = |log: &[Interaction]| -> Vec<(u64, InteractionKind)> {
            log.iter().map(|i| (i.posting_id, i.kind)).collect()
        };
        assert_eq!(kinds(&first), kinds(&second));
    }
}
