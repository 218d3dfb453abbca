use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::registry::{month_number, CustomFilter, FilterKind, ReportMeta};
use crate::source::{cell_text, Record};

pub const PAGE_SIZE: usize = 50;

/// Select filters on this column pick a month out of `YYYY-MM-DD` values.
pub const DATE_COLUMN: &str = "Data";

pub const NO_DATA_MESSAGE: &str = "Nenhum dado disponível para este relatório.";
pub const NO_RESULTS_MESSAGE: &str = "Nenhum resultado encontrado com os filtros aplicados.";
pub const CLEAR_FILTERS_LABEL: &str = "Limpar Filtros";
pub const ALL_OPTION_LABEL: &str = "Todos";
pub const PREV_LABEL: &str = "Anterior";
pub const NEXT_LABEL: &str = "Próxima";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub column: String,
    pub direction: SortDirection,
}

/// Per-report interaction state. Recreated on every category switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    filters: BTreeMap<String, String>,
    sort: Option<SortConfig>,
    page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
        }
    }
}

impl TableState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter(&self, column: &str) -> &str {
        self.filters.get(column).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.values().any(|v| !v.is_empty())
    }

    pub fn set_filter(&mut self, column: &str, value: &str) {
        if value.is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column.to_string(), value.to_string());
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    /// Same column while ascending flips to descending; anything else sorts
    /// ascending on `column`.
    pub fn request_sort(&mut self, column: &str) {
        let direction = match &self.sort {
            Some(s) if s.column == column && s.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig {
            column: column.to_string(),
            direction,
        });
        self.page = 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn goto_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}

pub fn headers(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|r| r.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn filterable_headers(headers: &[String], meta: &ReportMeta) -> Vec<String> {
    headers
        .iter()
        .filter(|h| !meta.is_filter_excluded(h))
        .cloned()
        .collect()
}

/// `YYYY-MM-DD` split into its three segments.
pub fn split_iso_date(value: &str) -> Option<(&str, &str, &str)> {
    let b = value.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    let digits = |r: std::ops::Range<usize>| b[r].iter().all(|c| c.is_ascii_digit());
    if !(digits(0..4) && digits(5..7) && digits(8..10)) {
        return None;
    }
    Some((&value[0..4], &value[5..7], &value[8..10]))
}

pub fn format_cell(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(v) => match split_iso_date(v) {
            Some((year, month, day)) => format!("{}/{}/{}", day, month, year),
            None => v.to_string(),
        },
    }
}

pub fn matches_filter(meta: &ReportMeta, record: &Record, column: &str, value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let cell = cell_text(record, column);
    match meta.custom_filter(column) {
        Some(CustomFilter {
            kind: FilterKind::Select,
            ..
        }) => {
            if column == DATE_COLUMN {
                if let Some(month) = month_number(value) {
                    return cell
                        .as_deref()
                        .and_then(split_iso_date)
                        .map(|(_, m, _)| m == month)
                        .unwrap_or(false);
                }
            }
            cell.as_deref() == Some(value)
        }
        None => cell
            .map(|c| c.to_lowercase().contains(&value.to_lowercase()))
            .unwrap_or(false),
    }
}

pub fn apply_filters<'a>(
    meta: &ReportMeta,
    records: &'a [Record],
    filters: &BTreeMap<String, String>,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| {
            filters
                .iter()
                .all(|(column, value)| matches_filter(meta, r, column, value))
        })
        .collect()
}

fn parse_finite(value: &str) -> Option<f64> {
    let t = value.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Missing values go last in either direction.
pub fn compare_values(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => (a, b),
    };
    let ord = match (parse_finite(a), parse_finite(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => collate(a, b),
    };
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

pub fn sort_records(rows: &mut [&Record], sort: &SortConfig) {
    rows.sort_by(|a, b| {
        compare_values(
            cell_text(a, &sort.column).as_deref(),
            cell_text(b, &sort.column).as_deref(),
            sort.direction,
        )
    });
}

/// Locale-style comparison: base letters first, then accents, then case
/// (lowercase first). Digit runs compare by numeric value.
pub fn collate(a: &str, b: &str) -> Ordering {
    natural_cmp(&fold_base(a), &fold_base(b))
        .then_with(|| natural_cmp(&a.to_lowercase(), &b.to_lowercase()))
        .then_with(|| invert_case(a).cmp(&invert_case(b)))
}

fn fold_base(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn invert_case(s: &str) -> String {
    s.chars()
        .flat_map(|c| {
            if c.is_lowercase() {
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                c.to_lowercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

fn chunks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_digit: Option<bool> = None;
    for (idx, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if prev_digit.is_some_and(|p| p != digit) {
            out.push(&s[start..idx]);
            start = idx;
        }
        prev_digit = Some(digit);
    }
    if start < s.len() {
        out.push(&s[start..]);
    }
    out
}

fn is_digit_run(chunk: &str) -> bool {
    chunk.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ca = chunks(a);
    let cb = chunks(b);
    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = if is_digit_run(x) && is_digit_run(y) {
            let xs = x.trim_start_matches('0');
            let ys = y.trim_start_matches('0');
            xs.len().cmp(&ys.len()).then_with(|| xs.cmp(ys))
        } else {
            x.cmp(y)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ca.len().cmp(&cb.len())
}

/// Filtered then sorted rows, in display order.
pub fn visible_rows<'a>(meta: &ReportMeta, records: &'a [Record], state: &TableState) -> Vec<&'a Record> {
    let mut rows = apply_filters(meta, records, state.filters());
    if let Some(sort) = state.sort() {
        sort_records(&mut rows, sort);
    }
    rows
}

pub fn total_pages(row_count: usize) -> usize {
    row_count.div_ceil(PAGE_SIZE)
}

pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(rows.len());
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterControl {
    Select {
        column: String,
        label: String,
        value: String,
        options: Vec<SelectOption>,
    },
    Text {
        column: String,
        label: String,
        value: String,
        placeholder: String,
    },
}

impl FilterControl {
    pub fn column(&self) -> &str {
        match self {
            FilterControl::Select { column, .. } | FilterControl::Text { column, .. } => column,
        }
    }
}

pub fn filter_controls(meta: &ReportMeta, headers: &[String], state: &TableState) -> Vec<FilterControl> {
    filterable_headers(headers, meta)
        .into_iter()
        .map(|column| {
            let value = state.filter(&column).to_string();
            match meta.custom_filter(&column) {
                Some(f) => {
                    let mut options = vec![SelectOption {
                        value: String::new(),
                        label: ALL_OPTION_LABEL.to_string(),
                    }];
                    options.extend(f.options.iter().map(|o| SelectOption {
                        value: o.to_string(),
                        label: o.to_string(),
                    }));
                    FilterControl::Select {
                        label: f
                            .label
                            .map(str::to_string)
                            .unwrap_or_else(|| column.clone()),
                        column,
                        value,
                        options,
                    }
                }
                None => FilterControl::Text {
                    label: column.clone(),
                    placeholder: format!("Filtrar por {}...", column),
                    column,
                    value,
                },
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_note: Option<String>,
    pub no_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub headers: Vec<HeaderView>,
    pub filters: Vec<FilterControl>,
    pub has_active_filters: bool,
    pub clear_filters_label: String,
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub show_pager: bool,
    pub can_prev: bool,
    pub can_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_label: Option<String>,
    pub prev_label: String,
    pub next_label: String,
}

pub fn render_view(meta: &ReportMeta, records: &[Record], state: &TableState) -> TableView {
    let mut view = TableView {
        title: meta.title.to_string(),
        header_note: meta.header_note.map(|s| s.to_string()),
        no_data: records.is_empty(),
        placeholder: None,
        headers: Vec::new(),
        filters: Vec::new(),
        has_active_filters: state.has_active_filters(),
        clear_filters_label: CLEAR_FILTERS_LABEL.to_string(),
        rows: Vec::new(),
        empty_message: None,
        page: 1,
        total_pages: 0,
        total_rows: 0,
        show_pager: false,
        can_prev: false,
        can_next: false,
        page_label: None,
        prev_label: PREV_LABEL.to_string(),
        next_label: NEXT_LABEL.to_string(),
    };
    if records.is_empty() {
        view.placeholder = Some(NO_DATA_MESSAGE.to_string());
        return view;
    }

    let columns = headers(records);
    let rows = visible_rows(meta, records, state);
    let total = total_pages(rows.len());
    let page = state.page().clamp(1, total.max(1));

    view.headers = columns
        .iter()
        .map(|c| HeaderView {
            column: c.clone(),
            sort: state
                .sort()
                .filter(|s| &s.column == c)
                .map(|s| s.direction),
        })
        .collect();
    view.filters = filter_controls(meta, &columns, state);
    view.rows = page_slice(&rows, page)
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| format_cell(cell_text(r, c).as_deref()))
                .collect()
        })
        .collect();
    if rows.is_empty() {
        view.empty_message = Some(NO_RESULTS_MESSAGE.to_string());
    }
    view.page = page;
    view.total_pages = total;
    view.total_rows = rows.len();
    view.show_pager = total > 1;
    if view.show_pager {
        view.can_prev = page > 1;
        view.can_next = page < total;
        view.page_label = Some(format!("Página {} de {}", page, total));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ReportCategory;
    use serde_json::json;

    fn rec(v: serde_json::Value) -> Record {
        v.as_object().expect("record object").clone()
    }

    fn entries(n: usize, absences: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                rec(json!({
                    "Data": format!("2024-03-{:02}", i % 28 + 1),
                    "Dia da semana": "Segunda-feira",
                    "Entrada": "07:00",
                    "Saída": "12:00",
                    "Nome do estudante": format!("Estudante {}", i),
                    "Turma": if i % 2 == 0 { "7A" } else { "8B" },
                    "Falta/presença": if i < absences { "falta" } else { "presença" },
                }))
            })
            .collect()
    }

    #[test]
    fn iso_dates_render_day_first() {
        assert_eq!(format_cell(Some("2024-03-15")), "15/03/2024");
        assert_eq!(format_cell(Some("abc")), "abc");
        assert_eq!(format_cell(Some("2024-3-15")), "2024-3-15");
        assert_eq!(format_cell(Some(" 2024-03-15")), " 2024-03-15");
        assert_eq!(format_cell(None), "");
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let meta = ReportCategory::Students.meta();
        let records = vec![
            rec(json!({"Nome": "Ana Souza", "Turma": "7A"})),
            rec(json!({"Nome": "JOANA Lima", "Turma": "7B"})),
            rec(json!({"Nome": "Bruno", "Turma": "8A"})),
            rec(json!({"Nome": null, "Turma": "8B"})),
        ];
        let mut filters = BTreeMap::new();
        filters.insert("Nome".to_string(), "aNa".to_string());
        let kept = apply_filters(meta, &records, &filters);
        let names: Vec<String> = kept
            .iter()
            .filter_map(|r| cell_text(r, "Nome"))
            .collect();
        assert_eq!(names, vec!["Ana Souza", "JOANA Lima"]);
        for r in &records {
            let retained = kept.iter().any(|k| std::ptr::eq(*k, r));
            let contains = cell_text(r, "Nome")
                .map(|n| n.to_lowercase().contains("ana"))
                .unwrap_or(false);
            assert_eq!(retained, contains);
        }
    }

    #[test]
    fn select_filter_requires_exact_match() {
        let meta = ReportCategory::StudentEntries.meta();
        let records = entries(10, 3);
        let mut filters = BTreeMap::new();
        filters.insert("Falta/presença".to_string(), "falta".to_string());
        let kept = apply_filters(meta, &records, &filters);
        assert_eq!(kept.len(), 3);
        assert!(kept
            .iter()
            .all(|r| cell_text(r, "Falta/presença").as_deref() == Some("falta")));

        filters.insert("Falta/presença".to_string(), "Falta".to_string());
        assert!(apply_filters(meta, &records, &filters).is_empty());
    }

    #[test]
    fn month_selector_on_date_column_matches_month_segment() {
        let meta = ReportCategory::PastoralCare.meta();
        let records = vec![
            rec(json!({"Data": "2024-03-02", "Estudante": "Ana"})),
            rec(json!({"Data": "2024-04-03", "Estudante": "Bia"})),
            rec(json!({"Data": "2023-03-30", "Estudante": "Caio"})),
            rec(json!({"Data": "03/03/2024", "Estudante": "Davi"})),
        ];
        assert!(matches_filter(meta, &records[0], "Data", "Março"));
        assert!(!matches_filter(meta, &records[1], "Data", "Março"));
        assert!(matches_filter(meta, &records[2], "Data", "Março"));
        assert!(!matches_filter(meta, &records[3], "Data", "Março"));
        // Not a month name: plain equality.
        assert!(matches_filter(meta, &records[1], "Data", "2024-04-03"));
    }

    #[test]
    fn month_selector_on_text_column_is_plain_equality() {
        let meta = ReportCategory::AcademicPerformance.meta();
        let r = rec(json!({"Aluno": "Ana", "Mês": "Março"}));
        assert!(matches_filter(meta, &r, "Mês", "Março"));
        assert!(!matches_filter(meta, &r, "Mês", "Abril"));
    }

    #[test]
    fn numeric_values_sort_numerically_and_text_naturally() {
        assert_eq!(compare_values(Some("2"), Some("10"), SortDirection::Ascending), Ordering::Less);
        assert_eq!(compare_values(Some("2.5"), Some("-1"), SortDirection::Ascending), Ordering::Greater);
        assert_eq!(collate("Turma 2", "Turma 10"), Ordering::Less);
        assert_eq!(collate("ana", "Bruno"), Ordering::Less);
        assert_eq!(collate("Ágata", "Bruno"), Ordering::Less);
        assert_eq!(collate("e", "é"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("x", "x"), Ordering::Equal);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let records = vec![
            rec(json!({"Nota": "7"})),
            rec(json!({"Nota": null})),
            rec(json!({"Nota": "10"})),
            rec(json!({})),
            rec(json!({"Nota": "2"})),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut rows: Vec<&Record> = records.iter().collect();
            sort_records(
                &mut rows,
                &SortConfig {
                    column: "Nota".to_string(),
                    direction,
                },
            );
            let tail: Vec<Option<String>> = rows[3..].iter().map(|r| cell_text(r, "Nota")).collect();
            assert_eq!(tail, vec![None, None]);
        }
    }

    #[test]
    fn descending_reverses_ascending_for_defined_values() {
        let records: Vec<Record> = ["b", "10", "a", "2", "Ç", "c"]
            .iter()
            .map(|v| rec(json!({ "K": v })))
            .collect();
        let order = |direction| {
            let mut rows: Vec<&Record> = records.iter().collect();
            sort_records(
                &mut rows,
                &SortConfig {
                    column: "K".to_string(),
                    direction,
                },
            );
            rows.iter()
                .filter_map(|r| cell_text(r, "K"))
                .collect::<Vec<_>>()
        };
        let asc = order(SortDirection::Ascending);
        let mut desc = order(SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc, vec!["2", "10", "a", "b", "c", "Ç"]);
    }

    #[test]
    fn request_sort_toggles_and_resets_page() {
        let mut state = TableState::default();
        state.goto_page(3, 5);
        state.request_sort("Nome");
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Ascending));
        assert_eq!(state.page(), 1);
        state.request_sort("Nome");
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Descending));
        state.request_sort("Nome");
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Ascending));
        state.request_sort("Nome");
        state.request_sort("Turma");
        assert_eq!(
            state.sort(),
            Some(&SortConfig {
                column: "Turma".to_string(),
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn pages_concatenate_back_to_visible_rows() {
        for n in [0usize, 1, 49, 50, 51, 120, 150] {
            let rows: Vec<usize> = (0..n).collect();
            let total = total_pages(n);
            assert_eq!(total, (n + PAGE_SIZE - 1) / PAGE_SIZE);
            let mut joined = Vec::new();
            for page in 1..=total {
                joined.extend_from_slice(page_slice(&rows, page));
            }
            assert_eq!(joined, rows);
            if total > 0 {
                let last = page_slice(&rows, total).len();
                let expected = if n % PAGE_SIZE == 0 { PAGE_SIZE } else { n % PAGE_SIZE };
                assert_eq!(last, expected);
            }
        }
    }

    #[test]
    fn page_navigation_clamps_to_bounds() {
        let mut state = TableState::default();
        state.prev_page();
        assert_eq!(state.page(), 1);
        state.next_page(2);
        state.next_page(2);
        assert_eq!(state.page(), 2);
        state.next_page(0);
        assert_eq!(state.page(), 1);
        state.goto_page(9, 3);
        assert_eq!(state.page(), 3);
        state.set_filter("Nome", "a");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn empty_dataset_renders_placeholder_not_table() {
        let view = render_view(ReportCategory::Students.meta(), &[], &TableState::default());
        assert!(view.no_data);
        assert_eq!(view.placeholder.as_deref(), Some(NO_DATA_MESSAGE));
        assert!(view.headers.is_empty());
        assert!(view.rows.is_empty());
        assert!(!view.show_pager);
    }

    #[test]
    fn absence_filter_fits_on_one_page() {
        let meta = ReportCategory::StudentEntries.meta();
        let records = entries(120, 30);
        let mut state = TableState::default();
        let view = render_view(meta, &records, &state);
        assert_eq!(view.total_pages, 3);
        assert!(view.show_pager);
        assert_eq!(view.page_label.as_deref(), Some("Página 1 de 3"));

        state.set_filter("Falta/presença", "falta");
        let view = render_view(meta, &records, &state);
        assert_eq!(view.rows.len(), 30);
        assert_eq!(view.total_pages, 1);
        assert!(!view.show_pager);
        assert!(view.page_label.is_none());
        assert!(view.has_active_filters);
    }

    #[test]
    fn view_lists_controls_for_filterable_columns_only() {
        let meta = ReportCategory::StudentEntries.meta();
        let records = entries(3, 1);
        let view = render_view(meta, &records, &TableState::default());
        let columns: Vec<&str> = view.filters.iter().map(|f| f.column()).collect();
        assert_eq!(columns, vec!["Dia da semana", "Nome do estudante", "Turma", "Falta/presença"]);
        match &view.filters[3] {
            FilterControl::Select { options, .. } => {
                let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, vec!["", "presença", "falta"]);
                assert_eq!(options[0].label, ALL_OPTION_LABEL);
            }
            other => panic!("expected select control, got {:?}", other),
        }
        match &view.filters[0] {
            FilterControl::Text { placeholder, .. } => {
                assert_eq!(placeholder, "Filtrar por Dia da semana...");
            }
            other => panic!("expected text control, got {:?}", other),
        }
        assert_eq!(view.headers.len(), 7);
        assert_eq!(view.rows[0][0], "01/03/2024");
    }

    #[test]
    fn no_match_shows_empty_message_inside_table() {
        let meta = ReportCategory::Students.meta();
        let records = vec![rec(json!({"Nome": "Ana", "Turma": "7A", "Responsável Legal": "Rita"}))];
        let mut state = TableState::default();
        state.set_filter("Nome", "zzz");
        let view = render_view(meta, &records, &state);
        assert!(!view.no_data);
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(NO_RESULTS_MESSAGE));
        assert_eq!(view.headers.len(), 3);
    }
}
