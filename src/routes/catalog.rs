use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{Drill, Equipment, Racket, StringRecommendation},
};

use super::AppState;

pub async fn list_rackets(State(state): State<AppState>) -> Json<Vec<Racket>> {
    Json(state.catalog.rackets().to_vec())
}

pub async fn list_strings(State(state): State<AppState>) -> Json<Vec<StringRecommendation>> {
    Json(state.catalog.strings().to_vec())
}

pub async fn list_drills(State(state): State<AppState>) -> Json<Vec<Drill>> {
    Json(state.catalog.drills().to_vec())
}

pub async fn list_equipment(State(state): State<AppState>) -> Json<Vec<Equipment>> {
    Json(state.catalog.equipment().to_vec())
}

pub async fn get_racket(
    State(state): State<AppState>,
    Path(racket_id): Path<String>,
) -> AppResult<Json<Racket>> {
    state
        .catalog
        .racket(&racket_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Racket {} not found", racket_id)))
}

pub async fn get_drill(
    State(state): State<AppState>,
    Path(drill_id): Path<String>,
) -> AppResult<Json<Drill>> {
    state
        .catalog
        .drill(&drill_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Drill {} not found", drill_id)))
}
