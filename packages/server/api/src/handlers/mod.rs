use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub mod admin;
pub mod disorders;
pub mod symptoms;

#[derive(Debug)]
pub enum ServiceError {
    BadRequest(String),
    InferenceError(String),
    InternalError(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::BadRequest(e) => (StatusCode::BAD_REQUEST, e),
            ServiceError::InferenceError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
            ServiceError::InternalError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::state::AppState;
    use differential::application::DiagnosisService;
    use differential::domain::{Catalog, Disorder, Interval, Symptom};

    pub fn disorder(id: u64, name: &str, symptoms: &[(&str, f64, f64)]) -> Disorder {
        let symptoms = symptoms
            .iter()
            .enumerate()
            .map(|(i, (n, lo, hi))| {
                Symptom::new(i as u64, *n, "Frequent", Interval::new(*lo, *hi)).unwrap()
            })
            .collect();
        Disorder::new(
            id,
            name,
            format!("http://www.orpha.net/consor/cgi-bin/OC_Exp.php?lng=en&Expert={id}"),
            "Disease",
            symptoms,
        )
    }

    pub fn catalog() -> Catalog {
        Catalog::new(vec![
            disorder(
                1,
                "Dravet syndrome",
                &[("Seizure", 0.8, 0.99), ("Ataxia", 0.3, 0.79)],
            ),
            disorder(
                2,
                "Rett syndrome",
                &[("Seizure", 0.3, 0.79), ("Spasticity", 0.3, 0.79)],
            ),
            disorder(3, "Achondroplasia", &[("Short stature", 1.0, 1.0)]),
        ])
    }

    pub fn state() -> AppState {
        AppState::new(DiagnosisService::from_catalog(catalog()).unwrap())
    }
}
