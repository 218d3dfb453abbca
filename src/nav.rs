use serde::Serialize;

use crate::registry::ReportCategory;

pub const BRAND: &str = "Gestão Escolar";
pub const BRAND_SHORT: &str = "GE";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub category: ReportCategory,
    pub title: &'static str,
    pub short_title: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

pub fn entries(selected: ReportCategory) -> Vec<NavEntry> {
    ReportCategory::ALL
        .iter()
        .map(|&category| {
            let meta = category.meta();
            NavEntry {
                category,
                title: meta.title,
                short_title: meta.short_title(),
                icon: meta.icon,
                active: category == selected,
            }
        })
        .collect()
}
