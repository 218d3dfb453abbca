use crate::controller::LoadStatus;
use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::handlers::reports::{required_str, snapshot_json};
use crate::ipc::types::{AppState, Request};
use crate::table;
use serde_json::json;
use tracing::debug;

fn view_json(state: &AppState) -> serde_json::Value {
    json!({
        "report": snapshot_json(state),
        "table": state.reports.view(),
    })
}

/// Headers of the loaded report; fails unless the report is ready.
fn ready_headers(state: &AppState) -> Result<Vec<String>, HandlerErr> {
    if state.reports.status() != LoadStatus::Ready {
        return Err(HandlerErr::new("not_ready", "report data is not loaded")
            .with_details(json!({ "status": state.reports.status() })));
    }
    Ok(table::headers(state.reports.records()))
}

fn set_filter(state: &mut AppState, req: &Request) -> Result<(), HandlerErr> {
    let column = required_str(req, "column")?;
    let value = req
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    let headers = ready_headers(state)?;
    let meta = state.reports.selected().meta();
    if !table::filterable_headers(&headers, meta).iter().any(|h| h == column) {
        return Err(HandlerErr::new("unknown_column", "column is not filterable")
            .with_details(json!({ "column": column })));
    }
    if let Some(f) = meta.custom_filter(column) {
        if !value.is_empty() && !f.options.iter().any(|o| *o == value) {
            return Err(HandlerErr::new("bad_params", "value is not one of the filter options")
                .with_details(json!({ "column": column, "options": f.options })));
        }
    }
    debug!(column, value, "filter changed");
    state.reports.table_mut().set_filter(column, value);
    Ok(())
}

fn clear_filters(state: &mut AppState) -> Result<(), HandlerErr> {
    ready_headers(state)?;
    state.reports.table_mut().clear_filters();
    Ok(())
}

fn sort(state: &mut AppState, req: &Request) -> Result<(), HandlerErr> {
    let column = required_str(req, "column")?;
    let headers = ready_headers(state)?;
    if !headers.iter().any(|h| h == column) {
        return Err(HandlerErr::new("unknown_column", "column not in report")
            .with_details(json!({ "column": column })));
    }
    state.reports.table_mut().request_sort(column);
    debug!(sort = ?state.reports.table().sort(), "sort changed");
    Ok(())
}

fn page(state: &mut AppState, req: &Request) -> Result<(), HandlerErr> {
    ready_headers(state)?;
    let total = state.reports.total_pages();
    if let Some(n) = req.params.get("page") {
        let n = n
            .as_u64()
            .ok_or_else(|| HandlerErr::new("bad_params", "page must be a positive integer"))?;
        state.reports.table_mut().goto_page(n as usize, total);
        return Ok(());
    }
    match required_str(req, "action")? {
        "prev" => state.reports.table_mut().prev_page(),
        "next" => state.reports.table_mut().next_page(total),
        other => {
            return Err(HandlerErr::new("bad_params", "action must be one of: prev, next")
                .with_details(json!({ "action": other })))
        }
    }
    Ok(())
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "table.view" => Ok(()),
        "table.setFilter" => set_filter(state, req),
        "table.clearFilters" => clear_filters(state),
        "table.sort" => sort(state, req),
        "table.page" => page(state, req),
        _ => return None,
    };
    Some(match result {
        Ok(()) => ok(&req.id, view_json(state)),
        Err(e) => e.response(&req.id),
    })
}
