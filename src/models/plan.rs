use serde::{Deserialize, Serialize};

use super::{Drill, Equipment, Racket, StringRecommendation};

/// Rank tag for the three recommended rackets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RacketTier {
    Good,
    Better,
    Best,
}

impl RacketTier {
    /// Tag for a 0-based position in the ranked list
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0 => RacketTier::Best,
            1 => RacketTier::Better,
            _ => RacketTier::Good,
        }
    }
}

/// A recommended racket, annotated with its score and rank tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RacketPick {
    #[serde(flatten)]
    pub racket: Racket,
    pub score: f64,
    pub category: RacketTier,
}

/// A recommended string with its score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StringPick {
    #[serde(flatten)]
    pub string: StringRecommendation,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    pub day: String,
    pub focus: String,
    pub drills: Vec<Drill>,
    /// Minutes
    pub total_duration: u32,
    pub intensity: Intensity,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingWeek {
    pub week_number: u32,
    pub days: Vec<TrainingDay>,
    pub weekly_focus: String,
    pub total_hours: f64,
    pub progression: String,
}

/// Everything produced for one quiz submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub rackets: Vec<RacketPick>,
    pub strings: Vec<StringPick>,
    pub equipment: Vec<Equipment>,
    pub training_plan: Vec<TrainingWeek>,
    pub explanation: String,
    pub skill_level: String,
    pub playing_style: String,
    pub training_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_for_rank() {
        assert_eq!(RacketTier::for_rank(0), RacketTier::Best);
        assert_eq!(RacketTier::for_rank(1), RacketTier::Better);
        assert_eq!(RacketTier::for_rank(2), RacketTier::Good);
    }

    #[test]
    fn test_intensity_serialization() {
        assert_eq!(serde_json::to_string(&Intensity::High).unwrap(), "\"high\"");
        assert_eq!(Intensity::Medium.as_str(), "medium");
    }
}
