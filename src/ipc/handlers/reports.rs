use crate::controller::LoadTicket;
use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::nav;
use crate::registry::ReportCategory;
use serde_json::json;
use tracing::debug;

pub(crate) fn required_str<'a>(req: &'a Request, key: &str) -> Result<&'a str, HandlerErr> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| HandlerErr::new("bad_params", format!("missing {}", key)))
}

pub(crate) fn require_workspace(state: &AppState) -> Result<(), HandlerErr> {
    if state.source.is_none() {
        return Err(HandlerErr::new("no_workspace", "select a workspace first"));
    }
    Ok(())
}

pub(crate) fn snapshot_json(state: &AppState) -> serde_json::Value {
    serde_json::to_value(state.reports.snapshot()).unwrap_or_else(|_| json!({}))
}

/// Runs the load for `ticket` against the workspace source. The result is
/// dropped by the controller when a newer ticket has been issued meanwhile.
pub(crate) fn run_load(state: &mut AppState, ticket: &LoadTicket) -> bool {
    let Some(source) = state.source.as_ref() else {
        return false;
    };
    let applied = state.reports.load_from(source, ticket);
    debug!(ticket = %ticket.id(), applied, "load finished");
    applied
}

fn parse_category(req: &Request) -> Result<ReportCategory, HandlerErr> {
    let raw = required_str(req, "category")?;
    ReportCategory::parse(raw).ok_or_else(|| {
        HandlerErr::new("bad_params", "unknown report category").with_details(json!({
            "category": raw,
            "allowed": ReportCategory::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        }))
    })
}

fn reports_list(state: &mut AppState) -> serde_json::Value {
    json!({
        "brand": nav::BRAND,
        "brandShort": nav::BRAND_SHORT,
        "entries": nav::entries(state.reports.selected()),
    })
}

fn reports_select(state: &mut AppState, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let category = parse_category(req)?;
    require_workspace(state)?;
    let ticket = state.reports.select(category);
    run_load(state, &ticket);
    Ok(snapshot_json(state))
}

fn reports_reload(state: &mut AppState) -> Result<serde_json::Value, HandlerErr> {
    require_workspace(state)?;
    let ticket = state.reports.reload();
    run_load(state, &ticket);
    Ok(snapshot_json(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "reports.list" => Ok(reports_list(state)),
        "reports.select" => reports_select(state, req),
        "reports.reload" => reports_reload(state),
        "reports.state" => Ok(snapshot_json(state)),
        _ => return None,
    };
    Some(match result {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}
