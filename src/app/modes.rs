//! Gallery view density modes.
//!
//! The gallery body can be laid out at three densities:
//! - **Grid**: large tiles with id, folder and file name
//! - **Miniature**: compact tiles with id and file name
//! - **List**: one row per image with every field
//!
//! # Example
//!
//! ```rust
//! use galeria::app::ViewMode;
//!
//! let mode = ViewMode::Grid;
//! assert_eq!(mode.next(), ViewMode::Miniature);
//! ```

/// Layout density of the gallery body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Large tiles, the default.
    #[default]
    Grid,

    /// Small tiles, more per row.
    Miniature,

    /// Single-column rows.
    List,
}

impl ViewMode {
    /// Every mode in cycling order.
    pub const ALL: [Self; 3] = [Self::Grid, Self::Miniature, Self::List];

    /// Returns the following mode, wrapping from `List` back to `Grid`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Grid => Self::Miniature,
            Self::Miniature => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Short label shown in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Miniature => "miniature",
            Self::List => "list",
        }
    }

    /// Width in columns of one tile, including its right gutter.
    ///
    /// `None` means a tile spans the whole body.
    #[must_use]
    pub const fn tile_width(self) -> Option<usize> {
        match self {
            Self::Grid => Some(26),
            Self::Miniature => Some(16),
            Self::List => None,
        }
    }

    /// Height in rows of one tile, including its bottom gutter.
    #[must_use]
    pub const fn tile_height(self) -> usize {
        match self {
            Self::Grid => 5,
            Self::Miniature => 3,
            Self::List => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_visits_every_mode_and_returns() {
        let mut mode = ViewMode::default();
        let mut seen = Vec::new();
        for _ in 0..ViewMode::ALL.len() {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(seen, ViewMode::ALL);
        assert_eq!(mode, ViewMode::Grid);
    }

    #[test]
    fn denser_modes_use_smaller_tiles() {
        assert!(ViewMode::Miniature.tile_height() < ViewMode::Grid.tile_height());
        assert!(ViewMode::Miniature.tile_width() < ViewMode::Grid.tile_width());
        assert_eq!(ViewMode::List.tile_width(), None);
    }
}
