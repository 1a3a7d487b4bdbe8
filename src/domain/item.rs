//! Gallery item model and the pure operations over item sequences.
//!
//! A [`GalleryItem`] is one row of the remote `gallery` table. Items are grouped
//! by folder; the folder list and the filtered view are always derived from the
//! item sequence, never stored independently of it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One image in the gallery.
///
/// The wire format uses the column names of the backing table, so `folder`
/// travels as `carpeta`:
///
/// ```json
/// { "id": 3, "carpeta": "Naturaleza", "url": "https://example.com/3.jpg" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Stable, unique row identifier.
    pub id: i64,

    /// Folder tag grouping the item.
    #[serde(rename = "carpeta")]
    pub folder: String,

    /// Location of the full-size image.
    pub url: String,
}

impl GalleryItem {
    /// Creates a new item.
    ///
    /// # Examples
    ///
    /// ```
    /// use galeria::GalleryItem;
    ///
    /// let item = GalleryItem::new(1, "Ciudad", "https://example.com/1.jpg");
    /// assert_eq!(item.folder, "Ciudad");
    /// ```
    pub fn new(id: i64, folder: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            folder: folder.into(),
            url: url.into(),
        }
    }
}

/// Returns the sorted, de-duplicated folder names present in `items`.
///
/// # Examples
///
/// ```
/// use galeria::domain::{derive_folders, GalleryItem};
///
/// let items = vec![
///     GalleryItem::new(1, "B", "u1"),
///     GalleryItem::new(2, "A", "u2"),
///     GalleryItem::new(3, "B", "u3"),
/// ];
/// assert_eq!(derive_folders(&items), vec!["A", "B"]);
/// ```
#[must_use]
pub fn derive_folders(items: &[GalleryItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.folder.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Returns the items visible under `active_folder`, preserving order.
///
/// `None` keeps every item.
#[must_use]
pub fn filter_items(items: &[GalleryItem], active_folder: Option<&str>) -> Vec<GalleryItem> {
    match active_folder {
        None => items.to_vec(),
        Some(folder) => items
            .iter()
            .filter(|item| item.folder == folder)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<GalleryItem> {
        vec![
            GalleryItem::new(1, "A", "https://img/1"),
            GalleryItem::new(2, "B", "https://img/2"),
            GalleryItem::new(3, "A", "https://img/3"),
            GalleryItem::new(4, "C", "https://img/4"),
            GalleryItem::new(5, "B", "https://img/5"),
        ]
    }

    #[test]
    fn no_filter_keeps_every_item() {
        let items = sample();
        assert_eq!(filter_items(&items, None), items);
    }

    #[test]
    fn folder_filter_keeps_order_and_only_matches() {
        let items = sample();
        let filtered = filter_items(&items, Some("B"));
        let ids: Vec<i64> = filtered.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 5]);
        assert!(filtered.iter().all(|i| i.folder == "B"));
    }

    #[test]
    fn unknown_folder_yields_nothing() {
        assert!(filter_items(&sample(), Some("Z")).is_empty());
    }

    #[test]
    fn folders_are_sorted_and_unique() {
        let items = sample();
        let folders = derive_folders(&items);
        assert_eq!(folders, vec!["A", "B", "C"]);
        assert!(folders.len() <= items.len());
        assert!(folders.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn folders_of_empty_sequence_are_empty() {
        assert!(derive_folders(&[]).is_empty());
    }

    #[test]
    fn wire_format_uses_carpeta() {
        let item = GalleryItem::new(7, "Ciudad", "https://img/7");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["carpeta"], "Ciudad");
        assert!(json.get("folder").is_none());

        let parsed: GalleryItem =
            serde_json::from_str(r#"{"id":7,"carpeta":"Ciudad","url":"https://img/7"}"#).unwrap();
        assert_eq!(parsed, item);
    }
}
