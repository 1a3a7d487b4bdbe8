//! Empty state component renderer.

use super::Region;
use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state centered in `region`.
///
/// The message uses `empty_state_fg`; the subtitle is dimmed. Shown while the
/// first load is in flight, after a failed load, and for an empty folder.
pub fn render_empty_state(region: Region, empty: &EmptyState, theme: &Theme) {
    let row = region.top + region.height.saturating_sub(2) / 2;

    position_cursor(row, region.left);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", center(&empty.message, region.width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, region.left);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", center(&empty.subtitle, region.width));
    print!("{}", Theme::reset());
}
