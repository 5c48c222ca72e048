//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Bridge bindings route to a `wasm32` implementation or to a native fallback that reports the
//! operation as unsupported.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod external_url;

pub use adapters::{build_host_services, host_capabilities, selected_host_strategy};
pub use external_url::WebExternalUrlService;
