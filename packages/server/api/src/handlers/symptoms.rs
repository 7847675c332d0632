use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/symptomNames", get(symptom_names))
        .route("/coOccurringSymptoms", post(co_occurring_symptoms))
}

#[derive(Debug, Default, Deserialize)]
pub struct SymptomNamesQuery {
    pub prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SymptomsRequest {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<String>,
}

pub async fn symptom_names(
    State(state): State<AppState>,
    Query(params): Query<SymptomNamesQuery>,
) -> Json<SymptomsResponse> {
    let symptoms = state.service.symptom_names(params.prefix.as_deref());
    Json(SymptomsResponse { symptoms })
}

/// Symptoms that occur together with every selected symptom in some disorder.
/// An empty selection narrows nothing and returns every symptom.
pub async fn co_occurring_symptoms(
    State(state): State<AppState>,
    Json(request): Json<SymptomsRequest>,
) -> Json<SymptomsResponse> {
    let symptoms = state.service.co_occurring(&request.symptoms);
    Json(SymptomsResponse { symptoms })
}
