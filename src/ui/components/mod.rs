//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with filter summary and status
//! - [`footer`]: Keybinding hints
//! - [`sidebar`]: Folder list with counts
//! - [`gallery`]: Tiles in grid, miniature or list density
//! - [`lightbox`]: Full-screen single-image viewer
//! - [`empty`]: Loading and no-results messages
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Sidebar │ Gallery body or empty state]
//! [Border]
//! [Footer]
//! ```

pub mod empty;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod lightbox;
pub mod sidebar;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use gallery::render_gallery;
use header::render_header;
use lightbox::render_lightbox;
use sidebar::render_sidebar;

/// Columns reserved for the sidebar, its rule and one column of gap.
pub const SIDEBAR_COLUMNS: usize = 26;

/// Rectangle of the pane, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First row.
    pub top: usize,
    /// First column.
    pub left: usize,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

/// Renders a horizontal rule and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders the gallery screen: chrome, sidebar and body.
pub fn render_gallery_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.saturating_sub(1);
    let content_height = footer_row.saturating_sub(1).saturating_sub(current_row);

    let body = if vm.sidebar.is_empty() {
        Region { top: current_row, left: 1, width: cols, height: content_height }
    } else {
        render_sidebar(
            Region { top: current_row, left: 1, width: SIDEBAR_COLUMNS - 1, height: content_height },
            &vm.sidebar,
            theme,
        );
        Region {
            top: current_row,
            left: SIDEBAR_COLUMNS + 1,
            width: cols.saturating_sub(SIDEBAR_COLUMNS),
            height: content_height,
        }
    };

    match &vm.empty_state {
        Some(empty) => render_empty_state(body, empty, theme),
        None => render_gallery(body, &vm.body, theme),
    }

    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the lightbox over the pane, keeping the footer hints.
pub fn render_lightbox_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(info) = &vm.lightbox {
        render_lightbox(info, theme, rows.saturating_sub(2), cols);
    }
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
