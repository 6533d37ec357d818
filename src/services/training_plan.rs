use chrono::Weekday;

use crate::{
    models::{
        detail, headline, Difficulty, Drill, DrillCategory, Intensity, PlayingStyle, QuizAnswer,
        SkillLevel, TrainingDay, TrainingWeek, YearsPlaying,
    },
    services::{catalog::Catalog, ranking::Scored},
};

pub const PLAN_WEEKS: u32 = 4;

const MIN_DAY_MINUTES: f64 = 30.0;
const MAX_DAY_MINUTES: f64 = 180.0;

/// Fraction of the daily target below which a top-up pass runs
const TOP_UP_THRESHOLD: f64 = 0.8;

const WEAK_SHOT_BONUS: f64 = 10.0;
const IMPROVEMENT_AREA_BONUS: f64 = 6.0;
const EXPERIENCE_BONUS: f64 = 3.0;
const STYLE_BONUS: f64 = 2.0;

const DAY_FOCUSES: [&str; 7] = [
    "Technical Foundation",
    "Power Development",
    "Control & Accuracy",
    "Footwork & Movement",
    "Strategy & Tactics",
    "Mental Game",
    "Recovery & Light Practice",
];

/// Focus keywords that restrict the drill pool to one category
const FOCUS_KEYWORDS: [(&str, DrillCategory); 7] = [
    ("Forehand", DrillCategory::Forehand),
    ("Backhand", DrillCategory::Backhand),
    ("Serve", DrillCategory::Serve),
    ("Volley", DrillCategory::Volley),
    ("Return", DrillCategory::Return),
    ("Footwork", DrillCategory::Footwork),
    ("Strategy", DrillCategory::Strategy),
];

/// Coarse experience bracket driving drill difficulty and session length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    CompleteBeginner,
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillTier {
    /// Derived from both the skill answer and years played. The beginner
    /// checks win over the advanced one; intermediate is what's left.
    pub fn from_answers(answers: &QuizAnswer) -> Self {
        let skill = answers.skill_level.value;
        let years = answers.years_playing.value;

        if skill == SkillLevel::CompleteBeginner || years == YearsPlaying::NeverPlayed {
            SkillTier::CompleteBeginner
        } else if skill == SkillLevel::Beginner || years == YearsPlaying::LessThanOneYear {
            SkillTier::Beginner
        } else if skill == SkillLevel::Advanced
            || matches!(years, YearsPlaying::FiveToTenYears | YearsPlaying::TenPlusYears)
        {
            SkillTier::Advanced
        } else {
            SkillTier::Intermediate
        }
    }

    fn time_multiplier(self) -> f64 {
        match self {
            SkillTier::CompleteBeginner => 1.3,
            SkillTier::Beginner => 1.1,
            SkillTier::Intermediate => 1.0,
            SkillTier::Advanced => 0.9,
        }
    }

    fn allows(self, drill: &Drill) -> bool {
        match self {
            SkillTier::CompleteBeginner => drill.difficulty == Difficulty::Beginner,
            SkillTier::Beginner => drill.difficulty != Difficulty::Advanced,
            SkillTier::Intermediate => {
                !(drill.difficulty == Difficulty::Beginner
                    && drill.name.to_lowercase().contains("basic"))
            }
            SkillTier::Advanced => drill.difficulty != Difficulty::Beginner,
        }
    }

    fn difficulty_bonus(self, difficulty: Difficulty) -> f64 {
        use Difficulty::*;
        match (self, difficulty) {
            (SkillTier::CompleteBeginner, Beginner) => 4.0,
            (SkillTier::Beginner, Beginner) => 4.0,
            (SkillTier::Beginner, Intermediate) => 2.0,
            (SkillTier::Intermediate, Intermediate) => 4.0,
            (SkillTier::Intermediate, Advanced) => 2.0,
            (SkillTier::Advanced, Advanced) => 4.0,
            (SkillTier::Advanced, Intermediate) => 2.0,
            _ => 0.0,
        }
    }

    fn experience_bonus(self, difficulty: Difficulty) -> f64 {
        match (self, difficulty) {
            (SkillTier::Advanced, Difficulty::Advanced)
            | (SkillTier::Intermediate, Difficulty::Intermediate) => EXPERIENCE_BONUS,
            _ => 0.0,
        }
    }

    fn weekly_labels(self) -> (&'static [&'static str; 4], &'static [&'static str; 4]) {
        match self {
            SkillTier::CompleteBeginner => (&COMPLETE_BEGINNER_FOCUS, &COMPLETE_BEGINNER_PROGRESSION),
            SkillTier::Beginner => (&BEGINNER_FOCUS, &BEGINNER_PROGRESSION),
            SkillTier::Intermediate | SkillTier::Advanced => (&DEVELOPED_FOCUS, &DEVELOPED_PROGRESSION),
        }
    }
}

const COMPLETE_BEGINNER_FOCUS: [&str; 4] = [
    "First Steps - Learn the grip, ready position and how to track the ball",
    "Making Contact - Rally gently and find the sweet spot",
    "Basic Strokes - Groundstrokes and a simple serve",
    "Playing Points - Put the basics together in easy games",
];

const COMPLETE_BEGINNER_PROGRESSION: [&str; 4] = [
    "Week 1: Get comfortable on court and with the racket",
    "Week 2: Build consistent contact and short rallies",
    "Week 3: Add the serve and longer rallies",
    "Week 4: Play relaxed points and review what you have learned",
];

const BEGINNER_FOCUS: [&str; 4] = [
    "Building Foundation - Focus on basic technique and consistency",
    "Consistency - Longer rallies with fewer errors",
    "Shot Variety - Introduce direction, depth and the net game",
    "Match Basics - Serve, return and simple point patterns",
];

const BEGINNER_PROGRESSION: [&str; 4] = [
    "Week 1: Establish fundamentals and build confidence",
    "Week 2: Increase repetitions and rally length",
    "Week 3: Add direction and depth targets to drills",
    "Week 4: Apply your strokes in practice points",
];

const DEVELOPED_FOCUS: [&str; 4] = [
    "Building Foundation - Sharpen technique and consistency",
    "Developing Skills - Work on power, control, and shot variety",
    "Advanced Techniques - Master complex shots and strategies",
    "Integration & Match Play - Combine all skills in competitive situations",
];

const DEVELOPED_PROGRESSION: [&str; 4] = [
    "Week 1: Establish fundamentals and build confidence",
    "Week 2: Increase intensity and add complexity to drills",
    "Week 3: Peak training with maximum challenge and volume",
    "Week 4: Consolidate gains and prepare for next training cycle",
];

/// Builds a four-week plan from the drill catalog
///
/// One `TrainingDay` per selected weekday per week, each holding at least
/// one drill as long as the catalog has any drills at all.
pub fn generate_training_plan(answers: &QuizAnswer, catalog: &Catalog) -> Vec<TrainingWeek> {
    let weekdays = training_days(&answers.training_days);
    let hours_per_day = answers.training_hours.value.hours_per_day();
    let tier = SkillTier::from_answers(answers);
    let target = target_minutes(hours_per_day, tier);
    let (focus_labels, progression_labels) = tier.weekly_labels();

    tracing::debug!(
        days = weekdays.len(),
        hours_per_day,
        target_minutes = target,
        tier = ?tier,
        "Generating training plan"
    );

    (1..=PLAN_WEEKS)
        .map(|week| {
            let days: Vec<TrainingDay> = weekdays
                .iter()
                .enumerate()
                .map(|(index, day)| {
                    let focus = day_focus(index, week);
                    let intensity = day_intensity(week, weekdays.len());
                    let drills = select_drills(answers, catalog.drills(), focus, tier, target);
                    TrainingDay {
                        day: day.clone(),
                        focus: focus.to_string(),
                        total_duration: drills.iter().map(|d| d.duration).sum(),
                        drills,
                        intensity,
                        notes: day_notes(focus, intensity, answers),
                    }
                })
                .collect();

            let minutes: u32 = days.iter().map(|d| d.total_duration).sum();
            let index = (week - 1) as usize;

            TrainingWeek {
                week_number: week,
                days,
                weekly_focus: focus_labels[index].to_string(),
                total_hours: (minutes as f64 / 6.0).round() / 10.0,
                progression: progression_labels[index].to_string(),
            }
        })
        .collect()
}

/// Selected weekdays ordered Monday to Sunday without duplicates.
/// Names that aren't weekdays follow in the order given.
pub fn training_days(selected: &[String]) -> Vec<String> {
    let mut known: Vec<(Weekday, String)> = Vec::new();
    let mut other: Vec<String> = Vec::new();

    for name in selected {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match name.parse::<Weekday>() {
            Ok(weekday) => {
                if !known.iter().any(|(w, _)| *w == weekday) {
                    known.push((weekday, name.to_string()));
                }
            }
            Err(_) => {
                if !other.iter().any(|o| o == name) {
                    other.push(name.to_string());
                }
            }
        }
    }

    known.sort_by_key(|(weekday, _)| weekday.num_days_from_monday());
    known.into_iter().map(|(_, name)| name).chain(other).collect()
}

/// Daily drill minutes for a tier, clamped to 30..=180
pub fn target_minutes(hours_per_day: f64, tier: SkillTier) -> u32 {
    (hours_per_day * 60.0 * tier.time_multiplier())
        .clamp(MIN_DAY_MINUTES, MAX_DAY_MINUTES)
        .floor() as u32
}

/// Rotates through the focus cycle, shifting two places each week
pub fn day_focus(day_index: usize, week: u32) -> &'static str {
    let offset = (week.saturating_sub(1) as usize) * 2;
    DAY_FOCUSES[(day_index + offset) % DAY_FOCUSES.len()]
}

/// Low, medium, high, medium over the four weeks. Daily schedules stay
/// low and one or two days a week stay medium.
pub fn day_intensity(week: u32, days_per_week: usize) -> Intensity {
    if days_per_week >= 7 {
        return Intensity::Low;
    }
    if days_per_week <= 2 {
        return Intensity::Medium;
    }
    match week {
        1 => Intensity::Low,
        3 => Intensity::High,
        _ => Intensity::Medium,
    }
}

fn focus_allows(focus: &str, drill: &Drill) -> bool {
    FOCUS_KEYWORDS
        .iter()
        .filter(|(keyword, _)| focus.contains(keyword))
        .all(|(_, category)| drill.category == *category)
}

/// True when a quiz entry like "Serve - low percentage" points at `drill`
fn entry_matches(entry: &str, drill: &Drill) -> bool {
    let name = drill.name.to_lowercase();
    let description = drill.description.to_lowercase();
    let category = drill.category.as_str().replace('-', " ");
    let usable = |text: &str| !text.is_empty() && text != "none";

    let key = headline(entry).to_lowercase();
    if usable(&key)
        && (key.contains(&category) || name.contains(&key) || description.contains(&key))
    {
        return true;
    }

    let detail = detail(entry).to_lowercase();
    usable(&detail) && (name.contains(&detail) || description.contains(&detail))
}

fn score_drill(answers: &QuizAnswer, tier: SkillTier, drill: &Drill) -> f64 {
    let mut score = 0.0;

    if answers.weakest_shots.iter().any(|s| entry_matches(s, drill)) {
        score += WEAK_SHOT_BONUS;
    }
    if answers.improvement_areas.iter().any(|a| entry_matches(a, drill)) {
        score += IMPROVEMENT_AREA_BONUS;
    }

    score += tier.difficulty_bonus(drill.difficulty);
    score += tier.experience_bonus(drill.difficulty);

    let style_match = match answers.playing_style.value {
        PlayingStyle::AggressiveBaseliner => {
            matches!(drill.category, DrillCategory::Serve | DrillCategory::Forehand)
        }
        PlayingStyle::Defensive => drill.category == DrillCategory::Footwork,
        PlayingStyle::ServeVolley => {
            matches!(drill.category, DrillCategory::Serve | DrillCategory::Volley)
        }
        PlayingStyle::AllCourt | PlayingStyle::Unknown => false,
    };
    if style_match {
        score += STYLE_BONUS;
    }

    score
}

/// Greedy fill by score up to `target` minutes, topped up with the
/// shortest leftovers when it falls short of 80%
fn select_drills(
    answers: &QuizAnswer,
    drills: &[Drill],
    focus: &str,
    tier: SkillTier,
    target: u32,
) -> Vec<Drill> {
    let mut pool: Vec<Scored<&Drill>> = drills
        .iter()
        .filter(|d| focus_allows(focus, d) && tier.allows(d))
        .map(|d| Scored::new(d, score_drill(answers, tier, d)))
        .collect();
    pool.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut selected: Vec<&Drill> = Vec::new();
    let mut leftovers: Vec<&Drill> = Vec::new();
    let mut total = 0;

    for candidate in pool {
        if total + candidate.item.duration <= target {
            total += candidate.item.duration;
            selected.push(candidate.item);
        } else {
            leftovers.push(candidate.item);
        }
    }

    let threshold = target as f64 * TOP_UP_THRESHOLD;
    if (total as f64) < threshold {
        leftovers.sort_by_key(|d| d.duration);
        for drill in leftovers {
            if total as f64 >= threshold {
                break;
            }
            total += drill.duration;
            selected.push(drill);
        }
    }

    if selected.is_empty() {
        return fallback_drill(drills, focus, tier).into_iter().cloned().collect();
    }

    selected.into_iter().cloned().collect()
}

/// Shortest drill for the day's category and tier, widening to any drill
/// for the tier and then to the whole catalog
fn fallback_drill<'a>(drills: &'a [Drill], focus: &str, tier: SkillTier) -> Option<&'a Drill> {
    let picked = shortest(drills, |d| focus_allows(focus, d) && tier.allows(d))
        .or_else(|| shortest(drills, |d| tier.allows(d)))
        .or_else(|| shortest(drills, |_| true));

    if let Some(drill) = picked {
        tracing::debug!(focus, drill = %drill.id, "No drills fit the day, using fallback drill");
    }
    picked
}

fn shortest<'a>(drills: &'a [Drill], keep: impl Fn(&Drill) -> bool) -> Option<&'a Drill> {
    drills.iter().filter(|d| keep(*d)).min_by_key(|d| d.duration)
}

fn day_notes(focus: &str, intensity: Intensity, answers: &QuizAnswer) -> String {
    let mut notes = format!("Focus: {}. Intensity: {}.", focus, intensity.as_str());

    if intensity == Intensity::High {
        notes.push_str(" Make sure to warm up properly and stay hydrated.");
    }
    if answers.arm_injuries.value.has_discomfort() {
        notes.push_str(" Pay attention to any arm discomfort and stop if needed.");
    }
    if focus.contains("Technical") {
        notes.push_str(" Focus on proper form over speed.");
    }
    if focus.contains("Power") {
        notes.push_str(" Use proper technique to generate power safely.");
    }

    notes
}
