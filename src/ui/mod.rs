//! User interface rendering layer with component-based architecture.
//!
//! Turns application state into ANSI-styled output through small rendering
//! components, with palettes switchable at runtime.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and text fitting
//! - [`theme`]: Palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, GalleryBody, GalleryTile, HeaderInfo, LightboxInfo, SidebarEntry,
    UIViewModel,
};
