use anyhow::{anyhow, Context};
use chrono::Utc;
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::controller::{LoadStatus, ReportController};
use crate::source::{cell_text, hex_sha256};
use crate::table::{self, format_cell};

const MANIFEST_ENTRY: &str = "manifest.json";
const RECORDS_ENTRY: &str = "records.json";
const VIEW_ENTRY: &str = "view.json";
pub const EXPORT_FORMAT_V1: &str = "schooldesk-view-v1";

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub format: String,
    pub entry_count: usize,
    pub row_count: usize,
    pub records_sha256: String,
}

/// Writes the filtered and sorted rows of the loaded report (all pages) as a
/// zip bundle: raw records, display-formatted view, and a manifest.
pub fn export_view(controller: &ReportController, out_path: &Path) -> anyhow::Result<ExportSummary> {
    if controller.status() != LoadStatus::Ready {
        return Err(anyhow!("report is not loaded"));
    }
    let category = controller.selected();
    let meta = category.meta();
    let rows = controller.visible_rows();
    let headers = table::headers(controller.records());

    let records_bytes =
        serde_json::to_vec_pretty(&rows).context("failed to serialize records")?;
    let records_sha256 = hex_sha256(&records_bytes);

    let formatted: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            headers
                .iter()
                .map(|h| format_cell(cell_text(r, h).as_deref()))
                .collect()
        })
        .collect();
    let view = json!({
        "title": meta.title,
        "headerNote": meta.header_note,
        "headers": headers,
        "rows": formatted,
    });

    let state = controller.table();
    let manifest = json!({
        "format": EXPORT_FORMAT_V1,
        "version": 1,
        "appVersion": env!("CARGO_PKG_VERSION"),
        "exportedAt": Utc::now().to_rfc3339(),
        "category": category.as_str(),
        "title": meta.title,
        "filters": state.filters(),
        "sort": state.sort(),
        "rowCount": rows.len(),
        "recordsSha256": records_sha256,
        "datasetSha256": controller.snapshot().dataset_sha256,
    });

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.to_string_lossy()))?;
    }
    let out_file = File::create(out_path).with_context(|| {
        format!(
            "failed to create output file {}",
            out_path.to_string_lossy()
        )
    })?;
    let mut zip = ZipWriter::new(out_file);
    let opts = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(MANIFEST_ENTRY, opts)
        .context("failed to start manifest entry")?;
    zip.write_all(
        serde_json::to_string_pretty(&manifest)
            .context("failed to serialize manifest")?
            .as_bytes(),
    )
    .context("failed to write manifest entry")?;

    zip.start_file(RECORDS_ENTRY, opts)
        .context("failed to start records entry")?;
    zip.write_all(&records_bytes)
        .context("failed to write records entry")?;

    zip.start_file(VIEW_ENTRY, opts)
        .context("failed to start view entry")?;
    zip.write_all(
        serde_json::to_string_pretty(&view)
            .context("failed to serialize view")?
            .as_bytes(),
    )
    .context("failed to write view entry")?;

    zip.finish().context("failed to finalize zip bundle")?;

    Ok(ExportSummary {
        format: EXPORT_FORMAT_V1.to_string(),
        entry_count: 3,
        row_count: rows.len(),
        records_sha256,
    })
}
