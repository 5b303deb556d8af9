//! Kennel desktop runtime: content catalog, routing, window management and the Leptos shell.

pub mod components;
pub mod content;
mod effect_executor;
pub mod host;
pub mod location;
pub mod model;
pub mod reducer;
pub mod router;
pub mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use content::{ContentCatalog, ContentError, ContentKind, ContentNode, FileView};
pub use location::TreeLocation;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, LaunchOrigin, ReducerError, RuntimeEffect};
pub use router::{hash_to_path, path_to_hash, WindowRegistry};
