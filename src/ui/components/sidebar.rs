//! Folder sidebar renderer.
//!
//! One line per folder with its item count; the active filter is marked with
//! `>` and the accent color. A vertical rule separates the sidebar from the body.

use super::Region;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarEntry;

/// Renders `entries` into `region`, the rightmost column holding the rule.
pub fn render_sidebar(region: Region, entries: &[SidebarEntry], theme: &Theme) {
    let text_width = region.width.saturating_sub(1);

    for line in 0..region.height {
        position_cursor(region.top + line, region.left);

        match entries.get(line) {
            Some(entry) => {
                let marker = if entry.is_active { '>' } else { ' ' };
                let count = entry.count.to_string();
                let label_width = text_width.saturating_sub(count.len() + 3);
                let text = format!("{marker} {} {count}", fit(&entry.label, label_width));

                if entry.is_active {
                    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.sidebar_active_fg));
                } else {
                    print!("{}", Theme::fg(&theme.colors.text_normal));
                }
                print!("{}", fit(&text, text_width));
            }
            None => print!("{}", " ".repeat(text_width)),
        }

        print!("{}", Theme::reset());
        print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());
    }
}
