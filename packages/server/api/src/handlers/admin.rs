use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use differential::application::CatalogSummary;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/reload", post(reload_catalog))
        .route("/admin/summary", get(catalog_summary))
}

/// Re-read the configured catalog file and swap it in. In-flight queries
/// finish on the context they started with.
pub async fn reload_catalog(
    State(state): State<AppState>,
) -> Result<Json<CatalogSummary>, ServiceError> {
    let service = state.service.clone();
    let summary = tokio::task::spawn_blocking(move || service.reload())
        .await
        .map_err(|e| {
            tracing::error!("Reload task failed: {}", e);
            ServiceError::InternalError("Reload task failed".to_string())
        })?
        .map_err(|e| {
            tracing::error!("Catalog reload failed: {:#}", e);
            ServiceError::InternalError(format!("{e:#}"))
        })?;

    Ok(Json(summary))
}

pub async fn catalog_summary(State(state): State<AppState>) -> Json<CatalogSummary> {
    Json(state.service.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support;
    use differential::application::DiagnosisService;
    use differential::domain::Catalog;
    use differential::infrastructure::CatalogLoader;
    use std::io::Write;

    #[tokio::test]
    async fn test_reload_without_file_fails() {
        let err = reload_catalog(State(test_support::state())).await.unwrap_err();
        assert!(matches!(err, ServiceError::InternalError(_)));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(CatalogLoader::to_json(&test_support::catalog()).unwrap().as_bytes())
            .unwrap();
        let state = AppState::new(DiagnosisService::load(file.path()).unwrap());

        let Json(before) = catalog_summary(State(state.clone())).await;
        assert_eq!(before.disorders, 3);

        let smaller = Catalog::new(vec![test_support::disorder(
            7,
            "Only",
            &[("Seizure", 0.5, 0.5)],
        )]);
        std::fs::write(file.path(), CatalogLoader::to_json(&smaller).unwrap()).unwrap();

        let Json(after) = reload_catalog(State(state.clone())).await.unwrap();
        assert_eq!(after.disorders, 1);
        assert_eq!(state.service.symptom_names(None), vec!["Seizure"]);
    }
}
