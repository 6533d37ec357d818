use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{QuizAnswer, RecommendationResult},
    services::generate_result,
};

use super::AppState;

/// Runs the quiz answers through the recommendation engine without storing anything
pub async fn recommend(
    State(state): State<AppState>,
    Json(answers): Json<QuizAnswer>,
) -> AppResult<Json<RecommendationResult>> {
    let result = generate_result(&answers, &state.catalog)?;
    Ok(Json(result))
}
