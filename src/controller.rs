use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::registry::ReportCategory;
use crate::source::{DataSource, Dataset, LoadError, Record};
use crate::table::{self, TableState, TableView};

pub const LOAD_FAILED_MESSAGE: &str = "Falha ao carregar os dados do relatório.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Identifies one issued load. Only the most recent ticket is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    id: Uuid,
    category: ReportCategory,
}

impl LoadTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn category(&self) -> ReportCategory {
        self.category
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub category: ReportCategory,
    pub title: &'static str,
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub row_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
}

#[derive(Debug)]
pub struct ReportController {
    selected: ReportCategory,
    status: LoadStatus,
    pending: Option<LoadTicket>,
    records: Vec<Record>,
    dataset_sha256: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
    error: Option<String>,
    table: TableState,
}

impl Default for ReportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportController {
    pub fn new() -> Self {
        Self {
            selected: ReportCategory::Students,
            status: LoadStatus::Idle,
            pending: None,
            records: Vec::new(),
            dataset_sha256: None,
            loaded_at: None,
            error: None,
            table: TableState::default(),
        }
    }

    pub fn selected(&self) -> ReportCategory {
        self.selected
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableState {
        &mut self.table
    }

    /// Switches category, drops the previous data and table state, and issues
    /// a ticket for the load that follows.
    pub fn select(&mut self, category: ReportCategory) -> LoadTicket {
        let ticket = LoadTicket {
            id: Uuid::new_v4(),
            category,
        };
        if let Some(prev) = &self.pending {
            debug!(
                superseded = %prev.id,
                category = prev.category.as_str(),
                "load superseded before completion"
            );
        }
        info!(category = category.as_str(), ticket = %ticket.id, "loading report");
        self.selected = category;
        self.status = LoadStatus::Loading;
        self.pending = Some(ticket.clone());
        self.records.clear();
        self.dataset_sha256 = None;
        self.loaded_at = None;
        self.error = None;
        self.table.reset();
        ticket
    }

    pub fn reload(&mut self) -> LoadTicket {
        self.select(self.selected)
    }

    /// Applies a load result. Returns false when the ticket is no longer the
    /// latest one and the result was discarded.
    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<Dataset, LoadError>) -> bool {
        if self.pending.as_ref() != Some(ticket) {
            debug!(
                ticket = %ticket.id,
                category = ticket.category.as_str(),
                "discarding stale report load"
            );
            return false;
        }
        self.pending = None;
        match result {
            Ok(ds) => {
                info!(
                    category = ticket.category.as_str(),
                    rows = ds.records.len(),
                    "report loaded"
                );
                self.records = ds.records;
                self.dataset_sha256 = Some(ds.sha256);
                self.loaded_at = Some(Utc::now());
                self.status = LoadStatus::Ready;
                self.error = None;
            }
            Err(e) => {
                warn!(category = ticket.category.as_str(), error = %e, "report load failed");
                self.records.clear();
                self.status = LoadStatus::Error;
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.table.reset();
        true
    }

    pub fn load_from<S: DataSource + ?Sized>(&mut self, source: &S, ticket: &LoadTicket) -> bool {
        let result = source.load(ticket.category);
        self.finish_load(ticket, result)
    }

    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot {
            category: self.selected,
            title: self.selected.meta().title,
            status: self.status,
            error: self.error.clone(),
            row_count: self.records.len(),
            dataset_sha256: self.dataset_sha256.clone(),
            loaded_at: self.loaded_at.map(|t| t.to_rfc3339()),
        }
    }

    pub fn view(&self) -> Option<TableView> {
        (self.status == LoadStatus::Ready)
            .then(|| table::render_view(self.selected.meta(), &self.records, &self.table))
    }

    /// Filtered and sorted rows of the loaded report.
    pub fn visible_rows(&self) -> Vec<&Record> {
        table::visible_rows(self.selected.meta(), &self.records, &self.table)
    }

    pub fn total_pages(&self) -> usize {
        table::total_pages(self.visible_rows().len())
    }
}
