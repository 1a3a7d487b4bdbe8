//! Top-level rendering coordinator.
//!
//! The renderer is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the gallery or lightbox screen
//!
//! # Example
//!
//! ```rust
//! use galeria::app::AppState;
//! use galeria::domain::Settings;
//! use galeria::ui::render;
//!
//! let state = AppState::new(vec![], Settings::default());
//! render(&state, 24, 80);
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane on every
/// render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// An open lightbox takes the whole pane; otherwise the gallery screen is drawn.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if vm.lightbox.is_some() {
        components::render_lightbox_screen(vm, theme, rows, cols);
    } else {
        components::render_gallery_screen(vm, theme, rows, cols);
    }
}
