pub mod catalog;
pub mod plan;
pub mod quiz;
pub mod user_plan;

pub use catalog::{
    Difficulty, Drill, DrillCategory, Equipment, EquipmentCategory, Racket, RacketLevel,
    StringRecommendation, StringType,
};
pub use plan::{
    Intensity, RacketPick, RacketTier, RecommendationResult, StringPick, TrainingDay,
    TrainingWeek,
};
pub use quiz::{
    detail, headline, Answer, ArmCondition, Budget, FromLabel, PlayingStyle, PrimaryGoal,
    QuizAnswer, SkillLevel, TrainingHours, YearsPlaying,
};
pub use user_plan::{PlanUpdate, UserPlan};
