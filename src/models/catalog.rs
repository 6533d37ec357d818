use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A racket in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Racket {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Strung weight as displayed, e.g. "11.2 oz (318g)"
    pub weight: String,
    /// Head size as displayed, e.g. "100 sq in"
    pub head_size: String,
    /// RA stiffness rating
    pub stiffness: u32,
    pub level: RacketLevel,
    /// Price in USD
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub affiliate_link: String,
    pub image_url: String,
}

/// Player level a racket is built for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RacketLevel {
    Beginner,
    #[serde(rename = "Beginner-Intermediate")]
    BeginnerIntermediate,
    Intermediate,
    #[serde(rename = "Intermediate-Advanced")]
    IntermediateAdvanced,
    Advanced,
}

impl Display for RacketLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RacketLevel::Beginner => "Beginner",
            RacketLevel::BeginnerIntermediate => "Beginner-Intermediate",
            RacketLevel::Intermediate => "Intermediate",
            RacketLevel::IntermediateAdvanced => "Intermediate-Advanced",
            RacketLevel::Advanced => "Advanced",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StringType {
    #[serde(rename = "Synthetic Gut")]
    SyntheticGut,
    Multifilament,
    Polyester,
    #[serde(rename = "Natural Gut")]
    NaturalGut,
    Hybrid,
}

impl StringType {
    /// Softer constructions that are easier on the arm and add power
    pub fn is_soft(self) -> bool {
        matches!(self, StringType::SyntheticGut | StringType::Multifilament)
    }

    /// Stiffer constructions that favour control and spin
    pub fn is_control(self) -> bool {
        matches!(self, StringType::Polyester | StringType::Hybrid)
    }
}

/// A string in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StringRecommendation {
    #[serde(rename = "type")]
    pub string_type: StringType,
    pub name: String,
    pub description: String,
    /// Recommended tension range, e.g. "50-58 lbs"
    pub tension: String,
    pub price: f64,
    pub affiliate_link: String,
    #[serde(default)]
    pub best_for: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DrillCategory {
    Forehand,
    Backhand,
    Serve,
    Volley,
    Return,
    Overhead,
    DropShot,
    Lob,
    Footwork,
    Strategy,
    Mental,
    Fitness,
}

impl DrillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DrillCategory::Forehand => "forehand",
            DrillCategory::Backhand => "backhand",
            DrillCategory::Serve => "serve",
            DrillCategory::Volley => "volley",
            DrillCategory::Return => "return",
            DrillCategory::Overhead => "overhead",
            DrillCategory::DropShot => "drop-shot",
            DrillCategory::Lob => "lob",
            DrillCategory::Footwork => "footwork",
            DrillCategory::Strategy => "strategy",
            DrillCategory::Mental => "mental",
            DrillCategory::Fitness => "fitness",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A training drill in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    pub id: String,
    pub name: String,
    pub category: DrillCategory,
    pub difficulty: Difficulty,
    /// Minutes
    pub duration: u32,
    pub description: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub court_setup: String,
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Training gear and accessories (balls, machines, cones...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub affiliate_link: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EquipmentCategory {
    #[serde(rename = "Tennis Balls")]
    TennisBalls,
    #[serde(rename = "Ball Machines")]
    BallMachines,
    #[serde(rename = "Training Equipment")]
    TrainingEquipment,
    Accessories,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_racket_level_serde_uses_display_labels() {
        let json = serde_json::to_string(&RacketLevel::BeginnerIntermediate).unwrap();
        assert_eq!(json, "\"Beginner-Intermediate\"");
        assert_eq!(RacketLevel::BeginnerIntermediate.to_string(), "Beginner-Intermediate");
    }

    #[test]
    fn test_string_type_serde() {
        let parsed: StringType = serde_json::from_str("\"Synthetic Gut\"").unwrap();
        assert_eq!(parsed, StringType::SyntheticGut);
        assert!(parsed.is_soft());
        assert!(StringType::Hybrid.is_control());
        assert!(!StringType::NaturalGut.is_soft());
    }

    #[test]
    fn test_drill_deserializes_with_optional_fields_missing() {
        let drill: Drill = serde_json::from_str(
            r#"{
                "id": "drop-touch",
                "name": "Drop Shot Touch",
                "category": "drop-shot",
                "difficulty": "intermediate",
                "duration": 15,
                "description": "Feel for short balls"
            }"#,
        )
        .unwrap();
        assert_eq!(drill.category, DrillCategory::DropShot);
        assert!(drill.instructions.is_empty());
        assert_eq!(drill.video_url, None);
    }
}
