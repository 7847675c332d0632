use differential::application::DiagnosisService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DiagnosisService>,
}

impl AppState {
    pub fn new(service: DiagnosisService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
