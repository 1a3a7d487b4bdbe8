//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with methods for filtering, lightbox and cursor navigation, theme
//! switching and view model generation. It is the single source of truth for
//! the gallery UI.
//!
//! # State Components
//!
//! - **Items**: rows from the last completed load, in server order
//! - **Folders**: sorted distinct folder names, derived from the items
//! - **Filtered Items**: the items in the active folder
//! - **Cursor**: highlighted tile within the filtered items
//! - **Selected Index**: open lightbox position within the filtered items
//! - **Settings**: the explicit user settings, currently the theme
//! - **Requests**: bookkeeping for the bounded gallery fetch
//!
//! # Consistency
//!
//! `folders` and `filtered_items` are never assigned directly. Every mutation of
//! `items` or `active_folder` goes through [`AppState::apply_filter`], which also
//! re-derives the lightbox selection and clamps the cursor.
//!
//! # Example
//!
//! ```rust
//! use galeria::app::AppState;
//! use galeria::domain::{GalleryItem, Settings};
//!
//! let items = vec![
//!     GalleryItem::new(1, "A", "https://img/1.jpg"),
//!     GalleryItem::new(2, "B", "https://img/2.jpg"),
//!     GalleryItem::new(3, "A", "https://img/3.jpg"),
//! ];
//! let mut state = AppState::new(items, Settings::default());
//! state.select_folder(Some("A".to_string()));
//! assert_eq!(state.filtered_items.len(), 2);
//! ```

use super::modes::ViewMode;
use super::navigation::{advance, retreat};
use crate::domain::{derive_folders, filter_items, GalleryItem, Settings, ThemePreference};
use crate::service::{LoadFailure, LoadOutcome, RequestId, RequestTracker};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    caption_for, EmptyState, FooterInfo, GalleryBody, GalleryTile, HeaderInfo, LightboxInfo,
    SidebarEntry, UIViewModel,
};
use std::time::Instant;

/// Endpoint used when the plugin configuration names none.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api/gallery";

/// Rows taken by the blank top line, header, two borders and footer.
const CHROME_ROWS: usize = 6;

/// Columns taken by the folder sidebar and its separator.
const SIDEBAR_WIDTH: usize = 26;

/// Narrowest terminal that still shows the sidebar.
const MIN_COLS_FOR_SIDEBAR: usize = 64;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Rows from the last completed load, in server order.
    pub items: Vec<GalleryItem>,

    /// Sorted distinct folders across `items`.
    pub folders: Vec<String>,

    /// Items in the active folder, recomputed by [`AppState::apply_filter`].
    pub filtered_items: Vec<GalleryItem>,

    /// Active folder filter, `None` shows every item.
    pub active_folder: Option<String>,

    /// Whether a load is in flight.
    pub loading: bool,

    /// Gallery body density.
    pub view_mode: ViewMode,

    /// Lightbox position within `filtered_items`, `None` when closed.
    pub selected_index: Option<usize>,

    /// Highlighted tile within `filtered_items`.
    pub cursor: usize,

    /// Explicit user settings.
    pub settings: Settings,

    /// Palette matching `settings.theme`.
    pub theme: Theme,

    /// Set once the user toggles the theme; a stored preference loaded
    /// afterwards is older than the toggle and is ignored.
    pub theme_overridden: bool,

    /// Cause of the last failed load, cleared by a successful one.
    pub last_failure: Option<LoadFailure>,

    /// Pending request bookkeeping.
    pub requests: RequestTracker,

    /// Gallery endpoint.
    pub api_url: String,
}

impl AppState {
    /// Creates a new application state with initial items and settings.
    ///
    /// # Parameters
    ///
    /// * `items` - Initial rows (typically empty until the first load completes)
    /// * `settings` - User settings; the palette is derived from `settings.theme`
    ///
    /// # Example
    ///
    /// ```rust
    /// use galeria::app::AppState;
    /// use galeria::domain::Settings;
    ///
    /// let state = AppState::new(vec![], Settings::default());
    /// assert_eq!(state.selected_index, None);
    /// assert!(!state.loading);
    /// ```
    #[must_use]
    pub fn new(items: Vec<GalleryItem>, settings: Settings) -> Self {
        let mut state = Self {
            items,
            folders: vec![],
            filtered_items: vec![],
            active_folder: None,
            loading: false,
            view_mode: ViewMode::default(),
            selected_index: None,
            cursor: 0,
            settings,
            theme: Theme::for_preference(settings.theme),
            theme_overridden: false,
            last_failure: None,
            requests: RequestTracker::default(),
            api_url: DEFAULT_API_URL.to_string(),
        };
        state.folders = derive_folders(&state.items);
        state.apply_filter();
        state
    }

    /// Replaces the item set wholesale.
    ///
    /// Recomputes the folder list. An active folder that no longer exists is
    /// dropped so the user is not left on an empty filter.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        self.items = items;
        self.folders = derive_folders(&self.items);

        if let Some(folder) = &self.active_folder {
            if !self.folders.contains(folder) {
                tracing::debug!(folder = %folder, "active folder vanished, showing all");
                self.active_folder = None;
            }
        }

        self.apply_filter();
    }

    /// Recomputes `filtered_items` from `items` and `active_folder`.
    ///
    /// An open lightbox stays on the same item (matched by id) when it survives
    /// the new filter, otherwise it closes. The cursor is clamped into range.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!("apply_filter",
            total_items = self.items.len(),
            active_folder = ?self.active_folder
        ).entered();

        let viewed_id = self.current_image().map(|item| item.id);

        self.filtered_items = filter_items(&self.items, self.active_folder.as_deref());

        self.selected_index = viewed_id.and_then(|id| {
            self.filtered_items.iter().position(|item| item.id == id)
        });

        if self.filtered_items.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.filtered_items.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_items.len(),
            lightbox_open = self.selected_index.is_some(),
            "filter applied"
        );
    }

    /// Sets the folder filter. `None` shows every folder.
    ///
    /// Unknown folder names are ignored. Returns `true` when the filter was
    /// applied; the cursor then moves back to the first tile.
    pub fn select_folder(&mut self, folder: Option<String>) -> bool {
        if let Some(name) = &folder {
            if !self.folders.contains(name) {
                tracing::debug!(folder = %name, "ignoring unknown folder");
                return false;
            }
        }

        self.active_folder = folder;
        self.cursor = 0;
        self.apply_filter();
        true
    }

    /// Cycles the filter forward: `All`, then each folder, then `All` again.
    pub fn next_folder(&mut self) {
        let next = match self.active_folder_position() {
            None => self.folders.first().cloned(),
            Some(index) => self.folders.get(index + 1).cloned(),
        };
        self.select_folder(next);
    }

    /// Cycles the filter backward: `All`, then the last folder, down to `All`.
    pub fn prev_folder(&mut self) {
        let prev = match self.active_folder_position() {
            None => self.folders.last().cloned(),
            Some(0) => None,
            Some(index) => self.folders.get(index - 1).cloned(),
        };
        self.select_folder(prev);
    }

    fn active_folder_position(&self) -> Option<usize> {
        let active = self.active_folder.as_ref()?;
        self.folders.iter().position(|folder| folder == active)
    }

    /// Opens the lightbox at `index` within the filtered items.
    ///
    /// Out-of-range indices are ignored. Returns whether the lightbox opened.
    pub fn open_lightbox(&mut self, index: usize) -> bool {
        if index >= self.filtered_items.len() {
            tracing::debug!(index, len = self.filtered_items.len(), "lightbox index out of range");
            return false;
        }
        self.selected_index = Some(index);
        self.cursor = index;
        true
    }

    /// Closes the lightbox.
    pub fn close_lightbox(&mut self) {
        self.selected_index = None;
    }

    /// Shows the next image, wrapping to the first.
    pub fn next_image(&mut self) {
        self.selected_index = advance(self.selected_index, self.filtered_items.len());
        self.sync_cursor_to_lightbox();
    }

    /// Shows the previous image, wrapping to the last.
    pub fn prev_image(&mut self) {
        self.selected_index = retreat(self.selected_index, self.filtered_items.len());
        self.sync_cursor_to_lightbox();
    }

    fn sync_cursor_to_lightbox(&mut self) {
        if let Some(index) = self.selected_index {
            self.cursor = index;
        }
    }

    /// Image shown in the lightbox, if open.
    #[must_use]
    pub fn current_image(&self) -> Option<&GalleryItem> {
        self.selected_index.and_then(|index| self.filtered_items.get(index))
    }

    /// Whether the lightbox is open.
    #[must_use]
    pub const fn is_lightbox_open(&self) -> bool {
        self.selected_index.is_some()
    }

    /// Moves the gallery cursor forward, wrapping to the first tile.
    pub fn move_cursor_next(&mut self) {
        if let Some(next) = advance(Some(self.cursor), self.filtered_items.len()) {
            self.cursor = next;
        }
    }

    /// Moves the gallery cursor backward, wrapping to the last tile.
    pub fn move_cursor_prev(&mut self) {
        if let Some(prev) = retreat(Some(self.cursor), self.filtered_items.len()) {
            self.cursor = prev;
        }
    }

    /// Item under the gallery cursor.
    #[must_use]
    pub fn cursor_item(&self) -> Option<&GalleryItem> {
        self.filtered_items.get(self.cursor)
    }

    /// Switches the gallery body density.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Switches the color scheme and its palette.
    pub fn apply_theme(&mut self, theme: ThemePreference) {
        self.settings.theme = theme;
        self.theme = Theme::for_preference(theme);
    }

    /// Flips the color scheme and returns the new preference.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        let theme = self.settings.theme.toggled();
        self.apply_theme(theme);
        self.theme_overridden = true;
        theme
    }

    /// Marks a load as started at `now` and returns its request id.
    pub fn begin_load(&mut self, now: Instant) -> RequestId {
        self.loading = true;
        self.requests.begin(now)
    }

    /// Applies the outcome of a load.
    ///
    /// A failed load empties the gallery and records the cause.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        self.loading = false;
        self.last_failure = outcome.failure().cloned();
        self.set_items(outcome.into_items());
    }

    /// Number of items in `folder`.
    #[must_use]
    pub fn folder_count(&self, folder: &str) -> usize {
        self.items.iter().filter(|item| item.folder == folder).count()
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Derive the tile grid (columns per row, visible tile rows) from the
    ///    view mode and the space left after the chrome and sidebar
    /// 2. Center the window on the cursor's row
    /// 3. Pull the window back near the end so the screen stays filled
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let show_sidebar = cols >= MIN_COLS_FOR_SIDEBAR;
        let body_cols = if show_sidebar { cols - SIDEBAR_WIDTH } else { cols };

        UIViewModel {
            header: self.compute_header(),
            sidebar: if show_sidebar { self.compute_sidebar() } else { vec![] },
            body: self.compute_body(rows, body_cols),
            lightbox: self.compute_lightbox(),
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    /// Tiles per row for the current mode in a body `body_cols` wide.
    #[must_use]
    pub fn columns_for(&self, body_cols: usize) -> usize {
        self.view_mode
            .tile_width()
            .map_or(1, |width| (body_cols / width).max(1))
    }

    /// Half-open range of `filtered_items` visible in the body.
    #[must_use]
    pub fn visible_range(&self, rows: usize, body_cols: usize) -> (usize, usize) {
        let len = self.filtered_items.len();
        if len == 0 {
            return (0, 0);
        }

        let columns = self.columns_for(body_cols);
        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let visible_rows = (available_rows / self.view_mode.tile_height()).max(1);
        let total_rows = len.div_ceil(columns);
        let cursor_row = self.cursor / columns;

        let mut start_row = cursor_row.saturating_sub(visible_rows / 2);
        if start_row + visible_rows > total_rows {
            start_row = total_rows.saturating_sub(visible_rows);
        }

        let start = start_row * columns;
        let end = ((start_row + visible_rows) * columns).min(len);
        (start, end)
    }

    fn compute_body(&self, rows: usize, body_cols: usize) -> GalleryBody {
        let (start, end) = self.visible_range(rows, body_cols);

        let tiles = self.filtered_items[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| GalleryTile {
                id: item.id,
                folder: item.folder.clone(),
                caption: caption_for(&item.url),
                url: item.url.clone(),
                is_selected: start + relative_idx == self.cursor,
            })
            .collect();

        GalleryBody {
            mode: self.view_mode,
            columns: self.columns_for(body_cols),
            tiles,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let folder = self.active_folder.as_deref().unwrap_or("All");
        HeaderInfo {
            title: format!(" Galeria | {folder} ({}) ", self.filtered_items.len()),
            status: format!(" {} | {} ", self.view_mode.label(), self.settings.theme),
        }
    }

    fn compute_sidebar(&self) -> Vec<SidebarEntry> {
        let all = SidebarEntry {
            label: "All".to_string(),
            count: self.items.len(),
            is_active: self.active_folder.is_none(),
        };

        std::iter::once(all)
            .chain(self.folders.iter().map(|folder| SidebarEntry {
                label: folder.clone(),
                count: self.folder_count(folder),
                is_active: self.active_folder.as_ref() == Some(folder),
            }))
            .collect()
    }

    fn compute_lightbox(&self) -> Option<LightboxInfo> {
        let index = self.selected_index?;
        let item = self.filtered_items.get(index)?;
        Some(LightboxInfo {
            id: item.id,
            folder: item.folder.clone(),
            url: item.url.clone(),
            caption: caption_for(&item.url),
            position: index + 1,
            total: self.filtered_items.len(),
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered_items.is_empty() {
            return None;
        }

        if self.loading {
            return Some(EmptyState {
                message: "Loading gallery".to_string(),
                subtitle: format!("Fetching {}", self.api_url),
            });
        }

        let subtitle = match (&self.last_failure, &self.active_folder) {
            (Some(failure), _) => format!("Last load failed: {failure}. Press 'r' to retry"),
            (None, Some(folder)) => format!("Folder '{folder}' has no images"),
            (None, None) => "The gallery is empty. Press 'r' to reload".to_string(),
        };

        Some(EmptyState {
            message: "No images found".to_string(),
            subtitle,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.is_lightbox_open() {
            "ESC: close  h/Left: previous  l/Right: next  t: theme"
        } else {
            "j/k: move  Enter: open  Tab/[/]: folder  a: all  1/2/3 or v: view  t: theme  r: reload  q: quit"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
