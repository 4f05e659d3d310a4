use storage::CatalogEntry;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItemVm {
    pub id: String,
    pub label: String,
    pub modified_str: Option<String>,
}

impl From<&CatalogEntry> for CatalogItemVm {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.as_str().to_owned(),
            label: entry.label.clone(),
            modified_str: entry.modified_at.map(format_datetime),
        }
    }
}

#[must_use]
pub fn map_catalog_items(entries: &[CatalogEntry]) -> Vec<CatalogItemVm> {
    entries.iter().map(CatalogItemVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use quiz_core::model::QuizId;

    #[test]
    fn maps_entries_in_order() {
        let modified = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let entries = vec![
            CatalogEntry::new(QuizId::new("alpha").unwrap(), Some(modified)),
            CatalogEntry::new(QuizId::new("beta").unwrap(), None),
        ];

        let items = map_catalog_items(&entries);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "alpha");
        assert_eq!(items[0].modified_str.as_deref(), Some("2024-01-02 03:04 UTC"));
        assert_eq!(items[1].label, "beta");
        assert_eq!(items[1].modified_str, None);
    }
}
