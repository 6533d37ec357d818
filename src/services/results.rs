use crate::{
    models::{detail, QuizAnswer, RecommendationResult},
    services::{
        catalog::Catalog,
        ranking::EmptyCandidates,
        recommendations::generate_recommendations,
        training_plan::{generate_training_plan, training_days, PLAN_WEEKS},
    },
};

/// Equipment picks and the training plan for one quiz submission
pub fn generate_result(
    answers: &QuizAnswer,
    catalog: &Catalog,
) -> Result<RecommendationResult, EmptyCandidates> {
    let picks = generate_recommendations(answers, catalog)?;
    let training_plan = generate_training_plan(answers, catalog);

    tracing::info!(
        skill_level = %answers.skill_level,
        rackets = picks.rackets.len(),
        strings = picks.strings.len(),
        weeks = training_plan.len(),
        "Generated recommendations"
    );

    Ok(RecommendationResult {
        rackets: picks.rackets,
        strings: picks.strings,
        equipment: picks.equipment,
        training_plan,
        explanation: picks.explanation,
        skill_level: answers.skill_level.label.clone(),
        playing_style: answers.playing_style.label.clone(),
        training_summary: training_summary(answers),
    })
}

/// One-paragraph overview of the plan's schedule and priorities
pub fn training_summary(answers: &QuizAnswer) -> String {
    let days = training_days(&answers.training_days).len();
    let weekly_hours = days as f64 * answers.training_hours.value.hours_per_day();

    let mut summary = format!(
        "Your personalized training plan includes {} training {} per week, totaling {} hours. ",
        days,
        if days == 1 { "day" } else { "days" },
        format_hours(weekly_hours)
    );

    let weakest = cleaned(&answers.weakest_shots);
    if !weakest.is_empty() {
        summary.push_str(&format!(
            "We've prioritized drills to improve your {}. ",
            weakest.join(", ")
        ));
    }

    let areas = cleaned(&answers.improvement_areas);
    if !areas.is_empty() {
        summary.push_str(&format!(
            "The plan focuses on developing your {}. ",
            areas.join(", ")
        ));
    }

    summary.push_str(&format!(
        "The {}-week progressive program starts with fundamentals and builds to advanced techniques, ensuring steady improvement while preventing injury.",
        PLAN_WEEKS
    ));

    summary
}

fn cleaned(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| detail(e).to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Whole numbers without a decimal point, otherwise up to two decimals
fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn answers() -> QuizAnswer {
        QuizAnswer {
            skill_level: Answer::new("Beginner - I'm new to tennis"),
            playing_style: Answer::new("Defensive - I focus on consistency"),
            budget: Answer::new("$100-200 - Mid-range quality"),
            arm_injuries: Answer::new("No - My arms and shoulders feel fine"),
            primary_goals: Answer::new("Control - I want precise shot placement"),
            training_days: vec!["Monday".to_string(), "Wednesday".to_string()],
            training_hours: Answer::new("1-1.5 hours per day"),
            weakest_shots: vec!["Serve - Low Percentage".to_string()],
            improvement_areas: vec!["Footwork".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_result_combines_both_halves() {
        let catalog = Catalog::builtin().unwrap();
        let result = generate_result(&answers(), &catalog).unwrap();

        assert_eq!(result.rackets.len(), 3);
        assert_eq!(result.strings.len(), 3);
        assert_eq!(result.training_plan.len(), 4);
        assert_eq!(result.skill_level, "Beginner - I'm new to tennis");
        assert_eq!(result.playing_style, "Defensive - I focus on consistency");
        assert!(result.explanation.contains(&result.rackets[0].racket.name));
    }

    #[test]
    fn test_summary_template() {
        let summary = training_summary(&answers());
        assert!(summary.starts_with(
            "Your personalized training plan includes 2 training days per week, totaling 2.5 hours. "
        ));
        assert!(summary.contains("We've prioritized drills to improve your low percentage. "));
        assert!(summary.contains("The plan focuses on developing your footwork. "));
        assert!(summary.ends_with("preventing injury."));
    }

    #[test]
    fn test_summary_without_priorities() {
        let summary = training_summary(&QuizAnswer::default());
        assert!(summary.starts_with("Your personalized training plan includes 0 training days"));
        assert!(!summary.contains("prioritized"));
        assert!(!summary.contains("focuses on"));
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(6.0), "6");
        assert_eq!(format_hours(2.5), "2.5");
        assert_eq!(format_hours(3.0 * 1.75), "5.25");
    }
}
