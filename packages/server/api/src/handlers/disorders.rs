use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use differential::application::RankedDisorder;
use serde::{Deserialize, Serialize};

pub fn router() -> Router<AppState> {
    Router::new().route("/disorderCandidates", post(disorder_candidates))
}

#[derive(Debug, Deserialize)]
pub struct CandidatesRequest {
    pub symptoms: Vec<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub disorders: Vec<RankedDisorder>,
}

pub async fn disorder_candidates(
    State(state): State<AppState>,
    Json(request): Json<CandidatesRequest>,
) -> Result<Json<CandidatesResponse>, ServiceError> {
    if request.symptoms.is_empty() {
        return Err(ServiceError::BadRequest("At least one symptom is required".to_string()));
    }

    let disorders = state
        .service
        .rank(&request.symptoms, request.limit)
        .map_err(|e| {
            tracing::error!(symptoms = ?request.symptoms, "Ranking failed: {}", e);
            ServiceError::InferenceError(e.to_string())
        })?;

    Ok(Json(CandidatesResponse { disorders }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support;
    use crate::state::AppState;
    use axum::{http::StatusCode, response::IntoResponse};
    use differential::application::DiagnosisService;
    use differential::domain::{Catalog, RankingOptions};

    fn request(symptoms: &[&str], limit: Option<usize>) -> Json<CandidatesRequest> {
        Json(CandidatesRequest {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            limit,
        })
    }

    #[tokio::test]
    async fn test_candidates_are_ranked() {
        let state = State(test_support::state());
        let Json(response) = disorder_candidates(state, request(&["Seizure", "Ataxia"], None))
            .await
            .unwrap();

        assert_eq!(response.disorders.len(), 2);
        assert!(response
            .disorders
            .windows(2)
            .all(|pair| pair[0].p_high >= pair[1].p_high));
        let total: f64 = response.disorders.iter().map(|d| d.relative_weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_candidates_body_shape() {
        let state = State(test_support::state());
        let Json(response) = disorder_candidates(state, request(&["short stature"], None))
            .await
            .unwrap();

        let body = serde_json::to_value(&response).unwrap();
        let first = &body["disorders"][0];
        assert_eq!(first["name"], "Achondroplasia");
        assert_eq!(first["id"], 3);
        assert_eq!(first["type"], "Disease");
        assert!(first["expertLink"].as_str().unwrap().ends_with("Expert=3"));
        assert!(first["pLow"].is_number());
        assert!(first["pHigh"].is_number());
        assert_eq!(first["matchedSymptoms"][0], "Short stature");
    }

    #[tokio::test]
    async fn test_limit() {
        let state = State(test_support::state());
        let Json(response) = disorder_candidates(state, request(&["seizure"], Some(1)))
            .await
            .unwrap();
        assert_eq!(response.disorders.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_symptoms_yield_empty_list() {
        let state = State(test_support::state());
        let Json(response) = disorder_candidates(state, request(&["Polydactyly"], None))
            .await
            .unwrap();
        assert!(response.disorders.is_empty());
    }

    #[tokio::test]
    async fn test_empty_symptoms_is_bad_request() {
        let err = disorder_candidates(State(test_support::state()), request(&[], None))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_inference_error_is_internal() {
        let catalog = Catalog::new(vec![test_support::disorder(
            1,
            "Alpha",
            &[("Ataxia", 0.0, 0.29)],
        )]);
        let options = RankingOptions {
            skip_zero_conditional_bounds: false,
            ..RankingOptions::default()
        };
        let service = DiagnosisService::from_catalog(catalog)
            .unwrap()
            .with_options(options);

        let err = disorder_candidates(State(AppState::new(service)), request(&["ataxia"], None))
            .await
            .unwrap_err();
        match &err {
            ServiceError::InferenceError(msg) => assert!(msg.contains("Joint probability is zero")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
