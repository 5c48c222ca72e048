//! Host-bundle and capability models shared by the runtime and the browser adapters.

use std::rc::Rc;

use crate::{ExternalUrlService, NoopExternalUrlService};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native build with no-op adapters (tests and non-wasm tooling).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot exposed to runtime wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// External URL opening availability.
    pub external_urls: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture.
    pub const fn browser() -> Self {
        Self {
            external_urls: CapabilityStatus::Available,
        }
    }

    /// Stub capability posture.
    pub const fn stub() -> Self {
        Self {
            external_urls: CapabilityStatus::Unavailable,
        }
    }
}

/// Host service bundle injected into the desktop runtime by the entry layer.
#[derive(Clone)]
pub struct HostServices {
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle whose services accept and discard every request.
    pub fn noop() -> Self {
        Self {
            external_urls: Rc::new(NoopExternalUrlService),
            capabilities: HostCapabilities::stub(),
            host_strategy: HostStrategy::Stub,
        }
    }
}
