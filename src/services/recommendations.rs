use crate::{
    models::{
        ArmCondition, Budget, Equipment, EquipmentCategory, PlayingStyle, PrimaryGoal, QuizAnswer,
        Racket, RacketLevel, RacketPick, RacketTier, SkillLevel, StringPick, StringRecommendation,
        StringType, YearsPlaying,
    },
    services::{
        catalog::Catalog,
        ranking::{self, EmptyCandidates, Scored, Shortlist, SHORTLIST_LEN},
    },
};

/// Rackets stiffer than this are dropped for players reporting arm discomfort
pub const ARM_FRIENDLY_MAX_STIFFNESS: u32 = 65;

const SKILL_MATCH_BONUS: f64 = 5.0;
const STYLE_WEIGHT_BONUS: f64 = 3.0;
const GOAL_HEAD_SIZE_BONUS: f64 = 2.0;
const BUDGET_PROXIMITY_WEIGHT: f64 = 5.0;

const STRING_SKILL_BONUS: f64 = 5.0;
const STRING_GOAL_BONUS: f64 = 3.0;

const EQUIPMENT_PICKS: usize = 5;

/// Equipment half of a recommendation result
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentPicks {
    pub rackets: Vec<RacketPick>,
    pub strings: Vec<StringPick>,
    pub equipment: Vec<Equipment>,
    pub explanation: String,
}

/// Picks rackets, strings and accessories for a quiz submission
///
/// Never fails on odd answers: unrecognised values simply stop filtering or
/// scoring. The only error is a catalog with no rackets or strings at all.
pub fn generate_recommendations(
    answers: &QuizAnswer,
    catalog: &Catalog,
) -> Result<EquipmentPicks, EmptyCandidates> {
    let rackets = recommend_rackets(answers, catalog.rackets())?;
    let strings = recommend_strings(answers, catalog.strings())?;
    let explanation = generate_explanation(answers, &rackets.top().item);

    let rackets = rackets
        .into_vec()
        .into_iter()
        .enumerate()
        .map(|(rank, scored)| RacketPick {
            racket: scored.item,
            score: scored.score,
            category: RacketTier::for_rank(rank),
        })
        .collect();

    let strings = strings
        .into_vec()
        .into_iter()
        .map(|scored| StringPick {
            string: scored.item,
            score: scored.score,
        })
        .collect();

    Ok(EquipmentPicks {
        rackets,
        strings,
        equipment: recommend_equipment(answers, catalog.equipment()),
        explanation,
    })
}

/// Top rackets, falling back to the cheapest ones when filters leave nothing
pub fn recommend_rackets(
    answers: &QuizAnswer,
    rackets: &[Racket],
) -> Result<Shortlist<Racket>, EmptyCandidates> {
    rank_rackets(answers, rackets).or_else(|empty| {
        tracing::info!(reason = %empty, "No rackets matched criteria, using fallback recommendations");
        ranking::cheapest(rackets, |r| r.price, SHORTLIST_LEN, "racket")
    })
}

/// Top strings, falling back to the cheapest ones when filters leave nothing
pub fn recommend_strings(
    answers: &QuizAnswer,
    strings: &[StringRecommendation],
) -> Result<Shortlist<StringRecommendation>, EmptyCandidates> {
    rank_strings(answers, strings).or_else(|empty| {
        tracing::info!(reason = %empty, "No strings matched criteria, using fallback recommendations");
        ranking::cheapest(strings, |s| s.price, SHORTLIST_LEN, "string")
    })
}

/// Price band and proximity curve for a budget bracket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBand {
    pub min: f64,
    pub max: f64,
    peak: f64,
    half_width: f64,
}

impl BudgetBand {
    /// Unknown brackets have no band: nothing is filtered and nothing scores
    pub fn for_budget(budget: Budget) -> Option<Self> {
        let (min, max, peak, half_width) = match budget {
            Budget::Under100 => (40.0, 120.0, 75.0, 45.0),
            Budget::From100To200 => (90.0, 220.0, 150.0, 70.0),
            Budget::From200To300 => (180.0, 320.0, 250.0, 70.0),
            Budget::Over300 => (280.0, f64::INFINITY, 330.0, 80.0),
            Budget::Unknown => return None,
        };
        Some(Self {
            min,
            max,
            peak,
            half_width,
        })
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Triangular score peaking at the bracket's sweet spot
    pub fn proximity(&self, price: f64) -> f64 {
        let falloff = 1.0 - (price - self.peak).abs() / self.half_width;
        BUDGET_PROXIMITY_WEIGHT * falloff.max(0.0)
    }
}

/// Racket levels a player may be offered, `None` meaning any
fn allowed_levels(skill: SkillLevel) -> Option<&'static [RacketLevel]> {
    match skill {
        SkillLevel::CompleteBeginner | SkillLevel::Beginner => Some(&[
            RacketLevel::Beginner,
            RacketLevel::BeginnerIntermediate,
        ]),
        SkillLevel::Intermediate => Some(&[
            RacketLevel::BeginnerIntermediate,
            RacketLevel::Intermediate,
            RacketLevel::IntermediateAdvanced,
        ]),
        SkillLevel::Advanced => Some(&[RacketLevel::IntermediateAdvanced, RacketLevel::Advanced]),
        SkillLevel::Unknown => None,
    }
}

fn exact_level(skill: SkillLevel) -> Option<RacketLevel> {
    match skill {
        SkillLevel::CompleteBeginner | SkillLevel::Beginner => Some(RacketLevel::Beginner),
        SkillLevel::Intermediate => Some(RacketLevel::Intermediate),
        SkillLevel::Advanced => Some(RacketLevel::Advanced),
        SkillLevel::Unknown => None,
    }
}

/// Leading ounce figures of the weight label each style favours
fn preferred_weights(style: PlayingStyle) -> &'static [&'static str] {
    match style {
        PlayingStyle::AggressiveBaseliner => &["11", "12"],
        PlayingStyle::Defensive => &["9", "10"],
        PlayingStyle::AllCourt => &["10"],
        PlayingStyle::ServeVolley => &["11"],
        PlayingStyle::Unknown => &[],
    }
}

fn preferred_head_sizes(goal: PrimaryGoal) -> &'static [&'static str] {
    match goal {
        PrimaryGoal::Power => &["100", "102", "104", "105", "108", "110", "115"],
        PrimaryGoal::Control => &["95", "97", "98"],
        PrimaryGoal::Spin => &["98", "100"],
        PrimaryGoal::Comfort => &["100", "102", "104", "108"],
        PrimaryGoal::AllAround => &["98", "100"],
        PrimaryGoal::Unknown => &[],
    }
}

fn rank_rackets(
    answers: &QuizAnswer,
    rackets: &[Racket],
) -> Result<Shortlist<Racket>, EmptyCandidates> {
    let band = BudgetBand::for_budget(answers.budget.value);
    let allowed = allowed_levels(answers.skill_level.value);
    let discomfort = answers.arm_injuries.value.has_discomfort();

    let candidates: Vec<Scored<Racket>> = rackets
        .iter()
        .filter(|r| band.map_or(true, |b| b.contains(r.price)))
        .filter(|r| allowed.map_or(true, |levels| levels.contains(&r.level)))
        .filter(|r| !discomfort || r.stiffness <= ARM_FRIENDLY_MAX_STIFFNESS)
        .map(|r| Scored::new(r.clone(), score_racket(answers, r, band)))
        .collect();

    tracing::debug!(candidates = candidates.len(), "Rackets after filtering");

    Shortlist::rank(candidates, SHORTLIST_LEN, "racket")
}

fn score_racket(answers: &QuizAnswer, racket: &Racket, band: Option<BudgetBand>) -> f64 {
    let mut score = band.map_or(0.0, |b| b.proximity(racket.price));

    if exact_level(answers.skill_level.value) == Some(racket.level) {
        score += SKILL_MATCH_BONUS;
    }

    let weight = racket.weight.trim_start();
    if preferred_weights(answers.playing_style.value)
        .iter()
        .any(|class| weight.starts_with(class))
    {
        score += STYLE_WEIGHT_BONUS;
    }

    let head_size = racket.head_size.trim_start();
    if preferred_head_sizes(answers.primary_goals.value)
        .iter()
        .any(|size| head_size.starts_with(size))
    {
        score += GOAL_HEAD_SIZE_BONUS;
    }

    score
}

fn rank_strings(
    answers: &QuizAnswer,
    strings: &[StringRecommendation],
) -> Result<Shortlist<StringRecommendation>, EmptyCandidates> {
    let skill = answers.skill_level.value;
    let goal = answers.primary_goals.value;
    let discomfort = answers.arm_injuries.value.has_discomfort();

    let candidates: Vec<Scored<StringRecommendation>> = strings
        .iter()
        .filter(|s| match skill {
            _ if skill.is_beginner() => s.string_type.is_soft(),
            SkillLevel::Advanced => s.string_type.is_control(),
            _ => true,
        })
        .filter(|s| match goal {
            PrimaryGoal::Power => s.string_type.is_soft(),
            PrimaryGoal::Control => s.string_type.is_control(),
            _ => true,
        })
        .filter(|s| !discomfort || s.string_type.is_soft())
        .map(|s| Scored::new(s.clone(), score_string(skill, goal, s.string_type)))
        .collect();

    tracing::debug!(candidates = candidates.len(), "Strings after filtering");

    Shortlist::rank(candidates, SHORTLIST_LEN, "string")
}

fn score_string(skill: SkillLevel, goal: PrimaryGoal, string_type: StringType) -> f64 {
    let mut score = 0.0;

    let skill_match = (skill.is_beginner() && string_type == StringType::SyntheticGut)
        || (skill == SkillLevel::Advanced && string_type == StringType::Polyester);
    if skill_match {
        score += STRING_SKILL_BONUS;
    }

    let goal_match = (goal == PrimaryGoal::Power && string_type == StringType::Multifilament)
        || (goal == PrimaryGoal::Control && string_type == StringType::Polyester);
    if goal_match {
        score += STRING_GOAL_BONUS;
    }

    score
}

/// Up to five accessories in a skill-dependent category order
///
/// Players with arm discomfort see vibration dampeners and resistance
/// bands first.
pub fn recommend_equipment(answers: &QuizAnswer, equipment: &[Equipment]) -> Vec<Equipment> {
    use EquipmentCategory::*;

    let order: [EquipmentCategory; 4] = match answers.skill_level.value {
        SkillLevel::CompleteBeginner | SkillLevel::Beginner => {
            [TrainingEquipment, TennisBalls, Accessories, BallMachines]
        }
        SkillLevel::Advanced => [BallMachines, TennisBalls, TrainingEquipment, Accessories],
        SkillLevel::Intermediate | SkillLevel::Unknown => {
            [TennisBalls, TrainingEquipment, Accessories, BallMachines]
        }
    };
    let discomfort = answers.arm_injuries.value.has_discomfort();

    let mut picks: Vec<&Equipment> = equipment.iter().collect();
    picks.sort_by_key(|item| {
        let relief = discomfort && is_arm_relief(item);
        let position = order
            .iter()
            .position(|c| *c == item.category)
            .unwrap_or(order.len());
        (!relief, position)
    });

    picks.into_iter().take(EQUIPMENT_PICKS).cloned().collect()
}

fn is_arm_relief(item: &Equipment) -> bool {
    let name = item.name.to_lowercase();
    name.contains("dampener") || name.contains("resistance")
}

/// Plain-language reasoning shown above the picks
pub fn generate_explanation(answers: &QuizAnswer, top_racket: &Racket) -> String {
    let skill = match answers.skill_level.headline() {
        "" => "tennis".to_string(),
        head => head.to_lowercase(),
    };

    let experience = match answers.years_playing.value {
        YearsPlaying::NeverPlayed => " who is brand new to the game".to_string(),
        YearsPlaying::LessThanOneYear => " with less than a year of experience".to_string(),
        YearsPlaying::Unknown => String::new(),
        _ => format!(" with {} of experience", answers.years_playing.headline()),
    };

    let mut explanation = format!("Based on your profile as a {} player{}, ", skill, experience);

    explanation.push_str(match answers.playing_style.value {
        PlayingStyle::AggressiveBaseliner => {
            "we've selected rackets that provide excellent power and stability for aggressive baseline play. "
        }
        PlayingStyle::ServeVolley => {
            "we've chosen rackets with good maneuverability and control for serve-and-volley tactics. "
        }
        PlayingStyle::Defensive => {
            "we've selected rackets that offer good control and forgiveness for defensive play. "
        }
        PlayingStyle::AllCourt => "we've chosen versatile rackets that work well for all-court play. ",
        PlayingStyle::Unknown => {
            "we've selected rackets that provide a good balance of power and control. "
        }
    });

    if answers.arm_injuries.value.has_discomfort() {
        explanation.push_str(
            "Since you mentioned arm concerns, we've kept to flexible frames and soft strings that are easier on the arm. ",
        );
    } else if answers.arm_injuries.value == ArmCondition::Unknown {
        tracing::debug!("Arm condition not recognised, no arm-friendly filtering applied");
    }

    explanation.push_str(match answers.primary_goals.value {
        PrimaryGoal::Power => {
            "For power seekers, we've recommended strings that maximize energy return and rackets with good power potential. "
        }
        PrimaryGoal::Control => {
            "For control players, we've selected strings and rackets that provide excellent precision and feel. "
        }
        PrimaryGoal::Comfort => {
            "For comfort priority, we've chosen options that minimize vibration and provide a smooth feel. "
        }
        PrimaryGoal::Spin => {
            "For spin players, we've recommended strings and rackets that maximize spin potential. "
        }
        PrimaryGoal::AllAround => {
            "For all-around players, we've selected versatile options that balance power, control, and comfort. "
        }
        PrimaryGoal::Unknown => "",
    });

    explanation.push_str(&format!(
        "The {} is our top recommendation because it offers the best balance of features for your playing style and skill level.",
        top_racket.name
    ));

    explanation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;
    use crate::services::catalog::fixtures;

    fn answers(skill: &str, budget: &str, arm: &str, goal: &str, style: &str) -> QuizAnswer {
        QuizAnswer {
            skill_level: Answer::new(skill),
            years_playing: Answer::new("1-3 years"),
            playing_style: Answer::new(style),
            arm_injuries: Answer::new(arm),
            budget: Answer::new(budget),
            primary_goals: Answer::new(goal),
            ..Default::default()
        }
    }

    fn beginner_answers() -> QuizAnswer {
        answers(
            "Beginner - I'm new to tennis",
            "$100-200 - Mid-range quality",
            "No - My arms and shoulders feel fine",
            "Control - I want precise shot placement",
            "Defensive - I focus on consistency",
        )
    }

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_budget_band_tolerance() {
        let band = BudgetBand::for_budget(Budget::From100To200).unwrap();
        assert!(band.contains(90.0));
        assert!(band.contains(220.0));
        assert!(!band.contains(89.99));
        assert!(!band.contains(221.0));
        assert!(BudgetBand::for_budget(Budget::Unknown).is_none());
    }

    #[test]
    fn test_budget_proximity_peaks_at_sweet_spot() {
        let band = BudgetBand::for_budget(Budget::From100To200).unwrap();
        assert_eq!(band.proximity(150.0), 5.0);
        assert!(band.proximity(120.0) < 5.0);
        assert!(band.proximity(120.0) > band.proximity(100.0));
        assert_eq!(band.proximity(400.0), 0.0);
    }

    #[test]
    fn test_beginner_rackets_respect_skill_and_budget() {
        let picks = generate_recommendations(&beginner_answers(), &catalog()).unwrap();

        assert_eq!(picks.rackets.len(), 3);
        for pick in &picks.rackets {
            assert!(matches!(
                pick.racket.level,
                RacketLevel::Beginner | RacketLevel::BeginnerIntermediate
            ));
            assert!(pick.racket.price >= 90.0 && pick.racket.price <= 220.0);
        }
    }

    #[test]
    fn test_racket_tags_follow_descending_score() {
        let picks = generate_recommendations(&beginner_answers(), &catalog()).unwrap();

        let tags: Vec<RacketTier> = picks.rackets.iter().map(|p| p.category).collect();
        assert_eq!(tags, vec![RacketTier::Best, RacketTier::Better, RacketTier::Good]);
        assert!(picks.rackets[0].score >= picks.rackets[1].score);
        assert!(picks.rackets[1].score >= picks.rackets[2].score);
    }

    #[test]
    fn test_arm_discomfort_caps_stiffness() {
        let answers = answers(
            "Advanced - I play competitively",
            "$200-300 - Premium performance",
            "Yes - I experience occasional discomfort",
            "Power - I want to hit harder shots",
            "Aggressive baseliner - I like to hit hard",
        );
        let picks = generate_recommendations(&answers, &catalog()).unwrap();

        assert_eq!(picks.rackets.len(), 3);
        for pick in &picks.rackets {
            assert!(pick.racket.stiffness <= ARM_FRIENDLY_MAX_STIFFNESS);
            assert!(matches!(
                pick.racket.level,
                RacketLevel::IntermediateAdvanced | RacketLevel::Advanced
            ));
        }
        // Advanced players only get control strings, which arm discomfort rules out.
        let string_scores: Vec<f64> = picks.strings.iter().map(|s| s.score).collect();
        assert_eq!(string_scores, vec![10.0, 9.0, 8.0]);
    }

    #[test]
    fn test_every_known_profile_gets_three_filtered_rackets() {
        let skills = ["Beginner", "Intermediate", "Advanced", "Complete Beginner"];
        let budgets = ["$50-100", "$100-200", "$200-300", "$300+"];
        let arms = ["No - fine", "Yes - occasional discomfort"];
        let catalog = catalog();

        for skill in skills {
            for budget in budgets {
                for arm in arms {
                    let answers = answers(skill, budget, arm, "", "");
                    let shortlist = rank_rackets(&answers, catalog.rackets())
                        .unwrap_or_else(|_| panic!("no rackets for {skill} {budget} {arm}"));
                    assert_eq!(shortlist.iter().count(), 3, "{skill} {budget} {arm}");
                }
            }
        }
    }

    #[test]
    fn test_racket_fallback_uses_cheapest() {
        let rackets = vec![
            fixtures::racket("pricey", RacketLevel::Advanced, 320.0, 70),
            fixtures::racket("mid", RacketLevel::Advanced, 210.0, 70),
            fixtures::racket("cheap", RacketLevel::Advanced, 95.0, 70),
            fixtures::racket("cheapest", RacketLevel::Advanced, 60.0, 70),
        ];
        let answers = answers("Beginner", "$50-100", "No", "", "");

        assert!(rank_rackets(&answers, &rackets).is_err());

        let shortlist = recommend_rackets(&answers, &rackets).unwrap();
        let picks: Vec<(String, f64)> = shortlist
            .into_vec()
            .into_iter()
            .map(|s| (s.item.id, s.score))
            .collect();
        assert_eq!(
            picks,
            vec![
                ("cheapest".to_string(), 10.0),
                ("cheap".to_string(), 9.0),
                ("mid".to_string(), 8.0),
            ]
        );
    }

    #[test]
    fn test_unknown_answers_pass_everything_through() {
        let catalog = catalog();
        let answers = QuizAnswer::default();

        let shortlist = rank_rackets(&answers, catalog.rackets()).unwrap();
        assert_eq!(shortlist.iter().count(), 3);
        assert!(shortlist.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_skill_match_and_style_bonus() {
        let mut racket = fixtures::racket("r", RacketLevel::Beginner, 500.0, 60);
        racket.weight = "9.9 oz (281g)".to_string();
        let answers = answers("Beginner", "", "No", "", "Defensive");

        let score = score_racket(&answers, &racket, None);
        assert_eq!(score, SKILL_MATCH_BONUS + STYLE_WEIGHT_BONUS);
    }

    #[test]
    fn test_goal_head_size_bonus() {
        let mut racket = fixtures::racket("r", RacketLevel::Advanced, 500.0, 60);
        racket.head_size = "97 sq in".to_string();
        let answers = answers("Intermediate", "", "No", "Control - precision", "");

        assert_eq!(score_racket(&answers, &racket, None), GOAL_HEAD_SIZE_BONUS);
    }

    #[test]
    fn test_beginner_control_strings_fall_back_to_cheapest() {
        let catalog = catalog();
        let answers = beginner_answers();

        assert!(rank_strings(&answers, catalog.strings()).is_err());

        let strings = recommend_strings(&answers, catalog.strings()).unwrap();
        let prices: Vec<f64> = strings.iter().map(|s| s.item.price).collect();
        assert_eq!(prices, vec![7.99, 8.99, 14.99]);
    }

    #[test]
    fn test_advanced_control_strings_prefer_polyester() {
        let catalog = catalog();
        let answers = answers("Advanced", "$200-300", "No", "Control", "");

        let strings = recommend_strings(&answers, catalog.strings()).unwrap();
        assert_eq!(strings.top().item.string_type, StringType::Polyester);
        assert_eq!(strings.top().score, STRING_SKILL_BONUS + STRING_GOAL_BONUS);
        assert!(strings.iter().all(|s| s.item.string_type.is_control()));
    }

    #[test]
    fn test_power_strings_prefer_multifilament() {
        let strings = vec![
            fixtures::string("gut", StringType::SyntheticGut, 8.0),
            fixtures::string("poly", StringType::Polyester, 15.0),
            fixtures::string("multi", StringType::Multifilament, 20.0),
        ];
        let answers = answers("Intermediate", "", "No", "Power", "");

        let shortlist = recommend_strings(&answers, &strings).unwrap();
        let names: Vec<&str> = shortlist.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["multi", "gut"]);
    }

    #[test]
    fn test_equipment_prioritises_arm_relief() {
        let catalog = catalog();
        let answers = answers("Intermediate", "", "Yes - I have ongoing issues", "", "");

        let picks = recommend_equipment(&answers, catalog.equipment());
        assert_eq!(picks.len(), 5);
        assert!(is_arm_relief(&picks[0]));
        assert!(is_arm_relief(&picks[1]));
    }

    #[test]
    fn test_equipment_order_for_advanced() {
        let equipment = vec![
            fixtures::equipment("balls", EquipmentCategory::TennisBalls),
            fixtures::equipment("grip", EquipmentCategory::Accessories),
            fixtures::equipment("machine", EquipmentCategory::BallMachines),
        ];
        let answers = answers("Advanced", "", "No", "", "");

        let ids: Vec<String> = recommend_equipment(&answers, &equipment)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["machine", "balls", "grip"]);
    }

    #[test]
    fn test_explanation_mentions_profile_and_top_racket() {
        let mut answers = beginner_answers();
        answers.arm_injuries = Answer::new("Yes - I experience occasional discomfort");
        let racket = fixtures::racket("r", RacketLevel::Beginner, 120.0, 60);

        let explanation = generate_explanation(&answers, &racket);
        assert!(explanation.starts_with(
            "Based on your profile as a beginner player with 1-3 years of experience, "
        ));
        assert!(explanation.contains("defensive play"));
        assert!(explanation.contains("arm concerns"));
        assert!(explanation.contains("For control players"));
        assert!(explanation.ends_with(&format!(
            "The {} is our top recommendation because it offers the best balance of features for your playing style and skill level.",
            racket.name
        )));
    }

    #[test]
    fn test_recommendations_are_deterministic() {
        let catalog = catalog();
        let first = generate_recommendations(&beginner_answers(), &catalog).unwrap();
        let second = generate_recommendations(&beginner_answers(), &catalog).unwrap();
        assert_eq!(first, second);
    }
}
