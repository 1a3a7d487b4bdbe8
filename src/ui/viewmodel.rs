//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncation, windowing and
//! selection marking happen before rendering.
//!
//! # Example
//!
//! ```rust
//! use galeria::ui::viewmodel::LightboxInfo;
//!
//! let info = LightboxInfo {
//!     id: 7,
//!     folder: "Ciudad".to_string(),
//!     url: "https://cdn.example.com/7.jpg".to_string(),
//!     caption: "7.jpg".to_string(),
//!     position: 2,
//!     total: 5,
//! };
//! assert_eq!(info.counter(), "2 / 5");
//! ```

use crate::app::ViewMode;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Folder entries, `All` first. Empty when the terminal is too narrow.
    pub sidebar: Vec<SidebarEntry>,

    /// Tiles in the visible window.
    pub body: GalleryBody,

    /// Full-screen viewer, when open.
    pub lightbox: Option<LightboxInfo>,

    /// Replaces the body when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, e.g. `" Galeria | Ciudad (12) "`.
    pub title: String,

    /// Right-aligned status, e.g. view mode and theme.
    pub status: String,
}

/// One line of the folder sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Folder name, or `All` for the unfiltered entry.
    pub label: String,

    /// Number of items in the folder.
    pub count: usize,

    /// Whether this entry is the active filter.
    pub is_active: bool,
}

/// Gallery body layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryBody {
    /// Density used to lay out the tiles.
    pub mode: ViewMode,

    /// Tiles per row.
    pub columns: usize,

    /// Tiles in row-major order.
    pub tiles: Vec<GalleryTile>,
}

/// Display information for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTile {
    /// Row identifier.
    pub id: i64,

    /// Folder the image belongs to.
    pub folder: String,

    /// Short name derived from the URL.
    pub caption: String,

    /// Full image URL.
    pub url: String,

    /// Whether the gallery cursor is on this tile.
    pub is_selected: bool,
}

/// Lightbox display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxInfo {
    /// Row identifier.
    pub id: i64,

    /// Folder of the image.
    pub folder: String,

    /// Full image URL.
    pub url: String,

    /// Short name derived from the URL.
    pub caption: String,

    /// One-based position in the filtered sequence.
    pub position: usize,

    /// Length of the filtered sequence.
    pub total: usize,
}

impl LightboxInfo {
    /// Position counter, e.g. `"3 / 10"`.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }

    /// Metadata line shown under the image.
    #[must_use]
    pub fn details(&self) -> String {
        format!("ID: {} | Folder: {}", self.id, self.folder)
    }
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message, e.g. `"No images found"`.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Derives a short caption from an image URL.
///
/// Takes the last path segment without query string or fragment, falling back
/// to the whole URL when there is no usable segment.
///
/// # Example
///
/// ```rust
/// use galeria::ui::viewmodel::caption_for;
///
/// assert_eq!(caption_for("https://cdn.example.com/a/sunset.jpg?w=400"), "sunset.jpg");
/// ```
#[must_use]
pub fn caption_for(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
        .unwrap_or(url)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_uses_last_path_segment() {
        assert_eq!(caption_for("https://x.io/img/1.png"), "1.png");
        assert_eq!(caption_for("https://x.io/img/dir/"), "dir");
        assert_eq!(caption_for("https://x.io/p.webp#frag"), "p.webp");
    }

    #[test]
    fn caption_falls_back_to_url() {
        assert_eq!(caption_for("https://"), "https://");
        assert_eq!(caption_for(""), "");
    }

    #[test]
    fn lightbox_details_name_id_and_folder() {
        let info = LightboxInfo {
            id: 3,
            folder: "A".to_string(),
            url: "u".to_string(),
            caption: "u".to_string(),
            position: 1,
            total: 2,
        };
        assert_eq!(info.details(), "ID: 3 | Folder: A");
        assert_eq!(info.counter(), "1 / 2");
    }
}
