//! Gallery body renderer for the three view densities.
//!
//! Tiles arrive from the view model already windowed and in row-major order;
//! this module only places them.

use super::Region;
use crate::app::ViewMode;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GalleryBody, GalleryTile};

/// Renders every tile of `body` inside `region`.
pub fn render_gallery(region: Region, body: &GalleryBody, theme: &Theme) {
    let columns = body.columns.max(1);
    let tile_width = body.mode.tile_width().unwrap_or(region.width);
    let tile_height = body.mode.tile_height();

    for (index, tile) in body.tiles.iter().enumerate() {
        let top = region.top + (index / columns) * tile_height;
        let left = region.left + (index % columns) * tile_width;
        if top + tile_height > region.top + region.height + 1 {
            break;
        }

        match body.mode {
            ViewMode::Grid => render_grid_tile(top, left, tile_width - 2, tile, theme),
            ViewMode::Miniature => render_miniature_tile(top, left, tile_width - 1, tile, theme),
            ViewMode::List => render_list_row(top, left, region.width, tile, theme),
        }
    }
}

fn tile_style(tile: &GalleryTile, theme: &Theme) -> String {
    if tile.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}

/// Framed four-line tile: id and folder, then the file name.
fn render_grid_tile(top: usize, left: usize, width: usize, tile: &GalleryTile, theme: &Theme) {
    let inner = width.saturating_sub(2);
    let frame = if tile.is_selected {
        Theme::fg(&theme.colors.selection_bg)
    } else {
        Theme::fg(&theme.colors.tile_border)
    };

    position_cursor(top, left);
    print!("{frame}┌{}┐{}", "─".repeat(inner), Theme::reset());

    let lines = [format!("#{} {}", tile.id, tile.folder), tile.caption.clone()];
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{frame}│{}", Theme::reset());
        print!("{}{}{}", tile_style(tile, theme), fit(line, inner), Theme::reset());
        print!("{frame}│{}", Theme::reset());
    }

    position_cursor(top + 3, left);
    print!("{frame}└{}┘{}", "─".repeat(inner), Theme::reset());
}

/// Unframed two-line tile: id, then the file name.
fn render_miniature_tile(top: usize, left: usize, width: usize, tile: &GalleryTile, theme: &Theme) {
    position_cursor(top, left);
    print!("{}{}{}", Theme::bold(), tile_style(tile, theme), fit(&format!("#{}", tile.id), width));
    print!("{}", Theme::reset());

    position_cursor(top + 1, left);
    print!("{}{}{}", tile_style(tile, theme), fit(&tile.caption, width), Theme::reset());
}

/// Single row: id, folder and full URL.
fn render_list_row(top: usize, left: usize, width: usize, tile: &GalleryTile, theme: &Theme) {
    let text = format!("{:>6}  {}  {}", format!("#{}", tile.id), fit(&tile.folder, 16), tile.url);

    position_cursor(top, left);
    print!("{}{}{}", tile_style(tile, theme), fit(&text, width), Theme::reset());
}
