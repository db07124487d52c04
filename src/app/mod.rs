//! Application layer.
//!
//! - `document` - the text buffer adapter and dirty tracking
//! - `state` - the coordinator every message is dispatched to
//! - `recent_files`, `autosave`, `settings` - small persisted pieces
//! - `text_ops`, `search` - pure text helpers used by the dialogs

pub mod autosave;
pub mod buffer_utils;
pub mod document;
pub mod error;
pub mod file_filters;
pub mod messages;
pub mod platform;
pub mod recent_files;
pub mod search;
pub mod settings;
pub mod state;
pub mod status;
pub mod text_ops;

pub use document::Document;
pub use error::{AppError, Result};
pub use messages::Message;
pub use recent_files::RecentFiles;
pub use settings::{AppSettings, ThemeMode};
