//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{
    open_external_url_with, ExternalUrlService, HostCapabilities, HostServices, HostStrategy,
};

use crate::{
    model::{WindowRect, DOCK_HEIGHT_PX, MENU_BAR_HEIGHT_PX},
    reducer::RuntimeEffect,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    capabilities: HostCapabilities,
    host_strategy: HostStrategy,
}

impl DesktopHostContext {
    /// Wraps the host services assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self {
            external_urls: services.external_urls,
            capabilities: services.capabilities,
            host_strategy: services.host_strategy,
        }
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns the selected host strategy.
    pub fn host_strategy(&self) -> HostStrategy {
        self.host_strategy
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::OpenExternalUrl(url) => self.open_external_url(url),
        }
    }

    fn open_external_url(&self, url: String) {
        if !self.capabilities.external_urls.is_available() {
            logging::warn!(
                "external urls are unavailable on the {} host; dropping `{url}`",
                self.host_strategy.as_str()
            );
            return;
        }
        let service = self.external_url_service();
        spawn_local(async move {
            if let Err(err) = open_external_url_with(service.as_ref(), &url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        });
    }

    /// Returns the area between the menu bar and the dock, used as the maximize target.
    pub fn desktop_viewport_rect(&self) -> WindowRect {
        let (width, height) = viewport_size();
        WindowRect {
            x: 0,
            y: MENU_BAR_HEIGHT_PX,
            w: width.max(320),
            h: (height - MENU_BAR_HEIGHT_PX - DOCK_HEIGHT_PX).max(220),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_size() -> (i32, i32) {
    let Some(window) = web_sys::window() else {
        return (1024, 768);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i32)
        .unwrap_or(1024);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i32)
        .unwrap_or(768);
    (width, height)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_size() -> (i32, i32) {
    (1024, 768)
}
