//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the
//! domain/service/worker layers.
//!
//! # Architecture
//!
//! ```text
//! Key / Web / Timer → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                  ↑                                 ↓
//!                                  └─────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Gallery view density
//! - [`navigation`]: Wrap-around index arithmetic
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use galeria::app::{handle_event, AppState, Event};
//! use galeria::domain::Settings;
//!
//! let mut state = AppState::new(vec![], Settings::default());
//! let (_render, _actions) = handle_event(&mut state, &Event::CursorNext)?;
//! # Ok::<(), galeria::GalleryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::ViewMode;
pub use state::{AppState, DEFAULT_API_URL};
