// Public fallible APIs in this crate share one concrete error contract (`ShelfError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod client;
pub(crate) mod config;
pub mod cycler;
pub mod error;
pub mod highlight;
pub mod models;
pub mod paginate;
pub mod pipeline;
pub mod session;
pub mod view;
pub mod window;

pub use client::PortalClient;
pub use error::{Result, ShelfError};
pub use view::FileListView;
pub use window::{DateWindow, NamedFilter};
