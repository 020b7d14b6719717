use std::sync::Arc;

use crate::verification::VerificationService;

#[derive(Clone)]
pub struct AppState {
    pub verification: Arc<VerificationService>,
}

impl AppState {
    pub fn new(verification: VerificationService) -> Self {
        Self {
            verification: Arc::new(verification),
        }
    }
}
