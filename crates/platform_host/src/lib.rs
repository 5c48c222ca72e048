//! Typed host-domain contracts shared across the runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;

pub use external_url::{
    open_external_url_with, validate_external_url, ExternalUrlError, ExternalUrlFuture,
    ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
    ALLOWED_EXTERNAL_SCHEMES,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
