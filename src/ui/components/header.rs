//! Header component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar: title on the left, status on the right.
///
/// The line is padded to the full terminal width so the optional header
/// background spans the whole row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let status = truncate(&header.status, cols / 2);
    let status_len = status.chars().count();
    let title = truncate(&header.title, cols.saturating_sub(status_len));
    let title_len = title.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}{title}", Theme::bold());
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(cols.saturating_sub(title_len + status_len)));
    print!("{status}");
    print!("{}", Theme::reset());
    row + 1
}
