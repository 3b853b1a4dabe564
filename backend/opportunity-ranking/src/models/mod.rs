use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opportunity posting (project, internship, hackathon team slot, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Monotonically issued; larger ids are newer postings
    pub id: u64,
    pub title: String,
    /// Free-text taxonomy label ("Academic Project", "Hackathon", ...)
    #[serde(default, rename = "type")]
    pub category: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
}

/// The person receiving recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub department: Option<String>,
    /// `None` when the profile never listed skills; `Some(vec![])` is an
    /// explicit empty list and still counts against the match
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience_level: Option<String>,
    /// Same absent/empty distinction as `skills`
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    View,
    Bookmark,
    Application,
    SimilarView,
    #[serde(other)]
    Unknown,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::View => "view",
            InteractionKind::Bookmark => "bookmark",
            InteractionKind::Application => "application",
            InteractionKind::SimilarView => "similar_view",
            InteractionKind::Unknown => "unknown",
        }
    }
}

/// One entry of a profile's append-only interaction log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub profile_id: Uuid,
    pub posting_id: u64,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub timestamp: DateTime<Utc>,
}

impl Interaction {
    pub fn new(profile_id: Uuid, posting_id: u64, kind: InteractionKind) -> Self {
        Self {
            profile_id,
            posting_id,
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered experience scale shared by postings and profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    /// Case-insensitive; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            "expert" => Some(ExperienceLevel::Expert),
            _ => None,
        }
    }

    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Number of steps between two levels on the scale
    pub fn distance(&self, other: &ExperienceLevel) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

/// Output of the compatibility stage
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPosting {
    pub posting: Posting,
    pub base_score: u32,
}

/// Output of the interaction boosting stage
#[derive(Debug, Clone, PartialEq)]
pub struct BoostedPosting {
    pub posting: Posting,
    pub base_score: u32,
    pub interaction_boost: u32,
    /// Not clamped; may exceed 100
    pub boosted_score: u32,
}

impl BoostedPosting {
    /// Carries a scored posting through unchanged
    pub fn unboosted(scored: ScoredPosting) -> Self {
        Self {
            posting: scored.posting,
            base_score: scored.base_score,
            interaction_boost: 0,
            boosted_score: scored.base_score,
        }
    }
}

/// Final, ranked item handed back to the caller
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedPosting {
    #[serde(flatten)]
    pub posting: Posting,
    #[serde(rename = "matchScore")]
    pub base_score: u32,
    pub interaction_boost: u32,
    pub boosted_score: u32,
    pub trending: f64,
    #[serde(rename = "recommendationScore")]
    pub final_score: f64,
}

impl RankedPosting {
    /// Profile compatibility, the "why" of a recommendation
    pub fn match_score(&self) -> u32 {
        self.base_score
    }

    /// Ranking key, the "how ranked" of a recommendation
    pub fn recommendation_score(&self) -> f64 {
        self.final_score
    }
}
