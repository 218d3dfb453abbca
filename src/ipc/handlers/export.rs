use crate::export;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

fn handle_export_view(state: &mut AppState, req: &Request) -> serde_json::Value {
    let out_path = match req.params.get("outPath").and_then(|v| v.as_str()) {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => return err(&req.id, "bad_params", "missing outPath", None),
    };
    if state.source.is_none() {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    }

    let out = PathBuf::from(&out_path);
    let summary = match export::export_view(&state.reports, &out) {
        Ok(v) => v,
        Err(e) => {
            warn!(path = %out_path, error = %e, "view export failed");
            return err(
                &req.id,
                "export_failed",
                e.to_string(),
                Some(json!({ "path": out_path })),
            );
        }
    };
    info!(path = %out_path, rows = summary.row_count, "view exported");

    ok(
        &req.id,
        json!({
            "path": out_path,
            "format": summary.format,
            "entryCount": summary.entry_count,
            "rowCount": summary.row_count,
            "recordsSha256": summary.records_sha256,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reports.exportView" => Some(handle_export_view(state, req)),
        _ => None,
    }
}
