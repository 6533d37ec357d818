use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

/// Parses a tag out of a human-readable quiz option label
///
/// Implementations never fail: labels they don't recognise map to an
/// `Unknown` tag so scoring degrades instead of erroring.
pub trait FromLabel: Sized {
    fn from_label(label: &str) -> Self;
}

/// A quiz answer: the machine tag plus the label the user actually picked
///
/// Serializes as the bare label, so the wire format is the option text the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer<T> {
    pub value: T,
    pub label: String,
}

impl<T: FromLabel> Answer<T> {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: T::from_label(&label),
            label,
        }
    }
}

impl<T> Answer<T> {
    /// The part of the label before `" - "`, e.g. "Beginner" for
    /// "Beginner - I'm new to tennis"
    pub fn headline(&self) -> &str {
        headline(&self.label)
    }
}

impl<T: FromLabel> Default for Answer<T> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<T: FromLabel> From<&str> for Answer<T> {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl<T> Serialize for Answer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

impl<'de, T: FromLabel> Deserialize<'de> for Answer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::new(label))
    }
}

impl<T> Display for Answer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Text before the first `" - "` separator, trimmed
pub fn headline(label: &str) -> &str {
    label.split(" - ").next().unwrap_or_default().trim()
}

/// Text after the first `" - "` separator (the whole label if there is none)
pub fn detail(label: &str) -> &str {
    match label.split_once(" - ") {
        Some((_, rest)) => rest.trim(),
        None => label.trim(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    CompleteBeginner,
    Beginner,
    Intermediate,
    Advanced,
    Unknown,
}

impl FromLabel for SkillLevel {
    fn from_label(label: &str) -> Self {
        let head = headline(label).to_lowercase();
        if head.contains("complete beginner") {
            SkillLevel::CompleteBeginner
        } else if head.contains("beginner") {
            SkillLevel::Beginner
        } else if head.contains("intermediate") {
            SkillLevel::Intermediate
        } else if head.contains("advanced") {
            SkillLevel::Advanced
        } else {
            SkillLevel::Unknown
        }
    }
}

impl SkillLevel {
    /// Complete beginners count as beginners for equipment purposes
    pub fn is_beginner(self) -> bool {
        matches!(self, SkillLevel::CompleteBeginner | SkillLevel::Beginner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearsPlaying {
    NeverPlayed,
    LessThanOneYear,
    OneToThreeYears,
    ThreeToFiveYears,
    FiveToTenYears,
    TenPlusYears,
    Unknown,
}

impl FromLabel for YearsPlaying {
    fn from_label(label: &str) -> Self {
        let head = headline(label).to_lowercase();
        if head.contains("never") {
            YearsPlaying::NeverPlayed
        } else if head.contains("less than 1") {
            YearsPlaying::LessThanOneYear
        } else if head.starts_with("1-3") {
            YearsPlaying::OneToThreeYears
        } else if head.starts_with("3-5") {
            YearsPlaying::ThreeToFiveYears
        } else if head.starts_with("5-10") || head.starts_with("5+") {
            YearsPlaying::FiveToTenYears
        } else if head.starts_with("10+") {
            YearsPlaying::TenPlusYears
        } else {
            YearsPlaying::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayingStyle {
    AggressiveBaseliner,
    AllCourt,
    ServeVolley,
    Defensive,
    Unknown,
}

impl FromLabel for PlayingStyle {
    fn from_label(label: &str) -> Self {
        let head = headline(label).to_lowercase();
        if head.contains("aggressive") {
            PlayingStyle::AggressiveBaseliner
        } else if head.contains("all-court") || head.contains("all court") {
            PlayingStyle::AllCourt
        } else if head.contains("serve-volley") || head.contains("serve and volley") {
            PlayingStyle::ServeVolley
        } else if head.contains("defensive") {
            PlayingStyle::Defensive
        } else {
            PlayingStyle::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmCondition {
    NoIssues,
    Occasional,
    Chronic,
    Unknown,
}

impl FromLabel for ArmCondition {
    fn from_label(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        if lower.starts_with("no") {
            ArmCondition::NoIssues
        } else if lower.contains("occasional") {
            ArmCondition::Occasional
        } else if lower.starts_with("yes") {
            ArmCondition::Chronic
        } else {
            ArmCondition::Unknown
        }
    }
}

impl ArmCondition {
    pub fn has_discomfort(self) -> bool {
        matches!(self, ArmCondition::Occasional | ArmCondition::Chronic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Under100,
    From100To200,
    From200To300,
    Over300,
    Unknown,
}

impl FromLabel for Budget {
    fn from_label(label: &str) -> Self {
        match headline(label) {
            "$50-100" => Budget::Under100,
            "$100-200" => Budget::From100To200,
            "$200-300" => Budget::From200To300,
            "$300+" => Budget::Over300,
            _ => Budget::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryGoal {
    Power,
    Control,
    Comfort,
    Spin,
    AllAround,
    Unknown,
}

impl FromLabel for PrimaryGoal {
    fn from_label(label: &str) -> Self {
        let head = headline(label).to_lowercase();
        if head.starts_with("power") {
            PrimaryGoal::Power
        } else if head.starts_with("control") {
            PrimaryGoal::Control
        } else if head.starts_with("comfort") {
            PrimaryGoal::Comfort
        } else if head.starts_with("spin") {
            PrimaryGoal::Spin
        } else if head.starts_with("all-around") || head.starts_with("all around") {
            PrimaryGoal::AllAround
        } else {
            PrimaryGoal::Unknown
        }
    }
}

/// Daily training time bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingHours {
    UnderOneHour,
    OneToOneAndHalf,
    OneAndHalfToTwo,
    TwoToThree,
    ThreePlus,
    Unknown,
}

impl FromLabel for TrainingHours {
    // The bracket labels contain their own dashes ("30 minutes - 1 hour"),
    // so match on the whole label rather than the headline.
    fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("1.5-2 hour") {
            TrainingHours::OneAndHalfToTwo
        } else if lower.contains("1-1.5 hour") {
            TrainingHours::OneToOneAndHalf
        } else if lower.contains("2-3 hour") {
            TrainingHours::TwoToThree
        } else if lower.contains("3+ hour") {
            TrainingHours::ThreePlus
        } else if lower.contains("less than 1 hour") || lower.contains("30 minutes") {
            TrainingHours::UnderOneHour
        } else {
            TrainingHours::Unknown
        }
    }
}

impl TrainingHours {
    /// Bracket midpoint in hours
    pub fn hours_per_day(self) -> f64 {
        match self {
            TrainingHours::UnderOneHour => 0.75,
            TrainingHours::OneToOneAndHalf => 1.25,
            TrainingHours::OneAndHalfToTwo => 1.75,
            TrainingHours::TwoToThree => 2.5,
            TrainingHours::ThreePlus => 3.5,
            TrainingHours::Unknown => 1.25,
        }
    }
}

/// Everything the user told us in the equipment & training quiz
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAnswer {
    pub skill_level: Answer<SkillLevel>,
    pub years_playing: Answer<YearsPlaying>,
    pub height: String,
    pub build: String,
    pub playing_style: Answer<PlayingStyle>,
    pub arm_injuries: Answer<ArmCondition>,
    pub budget: Answer<Budget>,
    pub primary_goals: Answer<PrimaryGoal>,
    /// Weekday names, e.g. `["Monday", "Wednesday"]`
    pub training_days: Vec<String>,
    pub training_hours: Answer<TrainingHours>,
    pub weakest_shots: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub current_racket: Option<String>,
    pub current_racket_feedback: Option<String>,
}
