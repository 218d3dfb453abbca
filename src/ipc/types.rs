use std::path::PathBuf;

use serde::Deserialize;

use crate::controller::ReportController;
use crate::source::DirSource;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub source: Option<DirSource>,
    pub reports: ReportController,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            workspace: None,
            source: None,
            reports: ReportController::new(),
        }
    }
}
