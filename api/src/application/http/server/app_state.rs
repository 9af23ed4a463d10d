use std::sync::Arc;

use salus_core::application::SalusService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<SalusService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SalusService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
