//! # Presentation Layer
//!
//! User interface logic for the CLI, organized as Model-View-ViewModel so the
//! browser state in `postview_runtime` never depends on how it is drawn.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (Controller)     (Converter)       (Contract)        (View)      (Console/JSON/TUI)
//! ```
//!
//! ### `view_models/`
//! Pure data containers that implement `Serialize`. No calculation logic.
//! "If I output this struct as JSON, is it clean and machine-readable?"
//!
//! ### `presenters/`
//! Pure functions from domain state (`Post`, `PostBrowser`) to view models.
//! The TUI screen is a function of browser state and nothing else.
//!
//! ### `renderers/`
//! Drivers that paint view models: `console.rs` for plain text and JSON,
//! `tui.rs` for the interactive browser and its event loop.
//!
//! ### `views/`
//! Ratatui widgets that map one view model each onto the terminal buffer.
//!
//! ### `formatters/`
//! Small string helpers shared by the above.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
