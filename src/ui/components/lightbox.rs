//! Full-screen lightbox renderer.
//!
//! The terminal cannot show the picture itself, so the lightbox draws a framed
//! placeholder with the file name, then the URL, the item metadata and the
//! position counter.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LightboxInfo;

/// Renders the lightbox over the whole pane.
pub fn render_lightbox(info: &LightboxInfo, theme: &Theme, rows: usize, cols: usize) {
    let backdrop = theme.colors.lightbox_bg.as_deref().map(Theme::bg).unwrap_or_default();

    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{backdrop}{}{}", " ".repeat(cols), Theme::reset());
    }

    let frame_width = (cols * 2 / 3).max(12).min(cols);
    let frame_height = rows.saturating_sub(10).clamp(3, 15);
    let left = (cols - frame_width) / 2 + 1;
    let top = 3;
    let inner = frame_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.tile_border);

    position_cursor(top, left);
    print!("{backdrop}{border}┌{}┐{}", "─".repeat(inner), Theme::reset());
    for line in 1..frame_height.saturating_sub(1) {
        position_cursor(top + line, left);
        let content = if line == frame_height / 2 { info.caption.as_str() } else { "" };
        print!("{backdrop}{border}│{}", Theme::fg(&theme.colors.text_normal));
        print!("{}{border}│{}", center(content, inner), Theme::reset());
    }
    position_cursor(top + frame_height.saturating_sub(1), left);
    print!("{backdrop}{border}└{}┘{}", "─".repeat(inner), Theme::reset());

    let mut row = top + frame_height + 1;
    for (text, style) in [
        (info.url.clone(), Theme::fg(&theme.colors.text_dim)),
        (info.details(), Theme::fg(&theme.colors.text_normal)),
        (info.counter(), format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent))),
    ] {
        position_cursor(row, 1);
        print!("{backdrop}{style}{}{}", center(&text, cols), Theme::reset());
        row += 1;
    }
}
