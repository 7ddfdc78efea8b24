//! # casefile_core - Case File Site Engine
//!
//! `casefile_core` holds everything the Case File site does, independent of
//! how it is displayed: panel navigation, the timeline and quote editors, the
//! tip form, and their persistence in a key-value store. The GUI and the CLI
//! are thin shells over [`app::CaseFile`].
//!
//! ## Design Philosophy
//!
//! - **Injected storage**: all state goes through [`store::KeyValueStore`], so
//!   tests run against [`store::MemoryStore`]
//! - **Full snapshots**: every mutation rewrites its whole key
//! - **Pure rendering**: stored fragments turn into display text via [`render`]
//!
//! ## Quick Start
//!
//! ```rust
//! use casefile_core::store::MemoryStore;
//! use casefile_core::timeline::Timeline;
//!
//! let mut store = MemoryStore::new();
//! let mut timeline = Timeline::default();
//! timeline.append(&mut store, Some("Witness interviewed")).unwrap();
//!
//! let mut reloaded = Timeline::default();
//! reloaded.restore(&store).unwrap();
//! assert_eq!(reloaded.entries(), timeline.entries());
//! ```
//!
//! ## Modules
//!
//! - [`app`] - Site state and the actions front ends dispatch
//! - [`navigation`] - Panel switching
//! - [`list_editor`] - Append/persist/restore list shared by timeline and quotes
//! - [`timeline`] - Dated events and the `timeline.json` export
//! - [`quotes`] - Quote list
//! - [`tips`] - Tip form and stored tip records
//! - [`escape`] / [`render`] - Markup escaping and display text
//! - [`store`] - Key-value store trait and in-memory store
//! - [`file_io`] - File-backed store with atomic saves and locking (native)
//! - [`config`] - Settings file (native)
//! - [`errors`] - Structured error types

pub mod app;
pub mod dates;
pub mod errors;
pub mod escape;
pub mod list_editor;
pub mod navigation;
pub mod quotes;
pub mod render;
pub mod store;
pub mod timeline;
pub mod tips;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;

// Re-export commonly used types at crate root for convenience
pub use app::{Action, CaseFile, Effect};
pub use errors::{CaseError, CaseResult};
pub use store::{KeyValueStore, MemoryStore};

#[cfg(not(target_arch = "wasm32"))]
pub use file_io::FileStore;
