use std::rc::Rc;

use platform_host::{
    HostCapabilities, HostServices, HostStrategy, NoopExternalUrlService,
};

use crate::WebExternalUrlService;

/// Returns the host strategy chosen by crate features.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the capability posture of the selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Stub => HostCapabilities::stub(),
    }
}

/// Assembles the host service bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    let strategy = selected_host_strategy();
    match strategy {
        HostStrategy::Browser => HostServices {
            external_urls: Rc::new(WebExternalUrlService),
            capabilities: host_capabilities(),
            host_strategy: strategy,
        },
        HostStrategy::Stub => HostServices {
            external_urls: Rc::new(NoopExternalUrlService),
            capabilities: host_capabilities(),
            host_strategy: strategy,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundle_reports_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(services.capabilities, host_capabilities());
    }
}
