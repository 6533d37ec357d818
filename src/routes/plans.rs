use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    db::NewPlan,
    error::{AppError, AppResult},
    models::{PlanUpdate, QuizAnswer, UserPlan},
    services::generate_result,
};

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub answers: QuizAnswer,
    pub name: Option<String>,
}

/// Generates recommendations for the answers and stores them as the user's newest plan
pub async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<CreatePlanRequest>,
) -> AppResult<(StatusCode, Json<UserPlan>)> {
    let user_id = request.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::InvalidInput("userId is required".to_string()));
    }

    let result = generate_result(&request.answers, &state.catalog)?;
    let plan = NewPlan::new(
        user_id,
        &request.answers,
        result,
        request.name,
        Utc::now().date_naive(),
    );

    let saved = state.plans.save(plan).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> AppResult<Json<UserPlan>> {
    Ok(Json(state.plans.get(&plan_id).await?))
}

pub async fn update_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    Json(update): Json<PlanUpdate>,
) -> AppResult<Json<UserPlan>> {
    Ok(Json(state.plans.update(&plan_id, update).await?))
}

pub async fn delete_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> AppResult<StatusCode> {
    state.plans.delete(&plan_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_user_plans(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<UserPlan>>> {
    Ok(Json(state.plans.list_for_user(&user_id).await?))
}

pub async fn latest_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserPlan>> {
    Ok(Json(state.plans.latest(&user_id).await?))
}

pub async fn previous_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserPlan>> {
    Ok(Json(state.plans.previous(&user_id).await?))
}
