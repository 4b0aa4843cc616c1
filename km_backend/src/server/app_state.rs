use crate::runner::ollama::OllamaRunner;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub runner: Arc<OllamaRunner>,
}

impl AppState {
    pub fn new(runner: Arc<OllamaRunner>) -> Self {
        AppState { runner }
    }
}
