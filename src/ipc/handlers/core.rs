use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::handlers::reports::{run_load, snapshot_json};
use crate::ipc::types::{AppState, Request};
use crate::source::{DirSource, DATA_DIR};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string())
        }),
    )
}

fn workspace_select(state: &mut AppState, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let path = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| HandlerErr::new("bad_params", "missing params.path"))?;
    if !path.is_dir() {
        return Err(HandlerErr::new("not_found", "workspace directory not found")
            .with_details(json!({ "path": path.to_string_lossy() })));
    }
    if !path.join(DATA_DIR).is_dir() {
        // Loads will fail and surface as a report error; still accept the path.
        info!(path = %path.display(), "workspace has no data directory");
    }

    state.source = Some(DirSource::new(&path));
    state.workspace = Some(path.clone());
    info!(path = %path.display(), "workspace selected");

    // Opening a workspace loads the selected report, like the first render.
    let ticket = state.reports.reload();
    run_load(state, &ticket);

    Ok(json!({
        "workspacePath": path.to_string_lossy(),
        "report": snapshot_json(state),
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "workspace.select" => Some(match workspace_select(state, req) {
            Ok(v) => ok(&req.id, v),
            Err(e) => e.response(&req.id),
        }),
        _ => None,
    }
}
