//! Desktop window manager runtime: reducer, app registry, host effects, and shell UI.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
