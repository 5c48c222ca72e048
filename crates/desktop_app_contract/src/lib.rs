//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! Apps never reach into the runtime directly. Each mounted app receives an [`AppServices`]
//! bundle whose services turn calls into [`AppCommand`] values sent through a runtime callback.
//! Opening another app is one such command: [`LauncherService::open_app`] builds an
//! [`AppOpenRequest`] and hands it to the shell without waiting for an answer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::str::FromStr;

use leptos::{Callable, Callback, ReadSignal, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Closed set of applications the desktop knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    /// Résumé browser with tabbed sections.
    #[serde(rename = "portfolio.finder")]
    Finder,
    /// Mail composer addressed to the portfolio owner.
    #[serde(rename = "portfolio.mail")]
    Mail,
    /// Blog reader.
    #[serde(rename = "portfolio.blog")]
    Blog,
    /// Browser-like viewer for external pages.
    #[serde(rename = "portfolio.browser")]
    Browser,
}

impl AppId {
    /// Every known app, in launcher order.
    pub const ALL: [AppId; 4] = [Self::Finder, Self::Mail, Self::Blog, Self::Browser];

    /// Returns the stable dotted token for this app.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "portfolio.finder",
            Self::Mail => "portfolio.mail",
            Self::Blog => "portfolio.blog",
            Self::Browser => "portfolio.browser",
        }
    }

    /// Returns the default window title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Finder => "Finder",
            Self::Mail => "Mail",
            Self::Blog => "Blog",
            Self::Browser => "Safari",
        }
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an app identifier token cannot be resolved.
pub enum AppIdError {
    /// The token is empty or whitespace.
    #[error("application id is empty")]
    Empty,
    /// The token does not follow the `segment.segment` policy.
    #[error("invalid application id `{0}`; expected namespaced dotted segments")]
    Malformed(String),
    /// The token is well formed but names no known app.
    #[error("unknown application id `{0}`")]
    Unknown(String),
}

impl FromStr for AppId {
    type Err = AppIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppIdError::Empty);
        }
        if !is_valid_application_id(raw) {
            return Err(AppIdError::Malformed(raw.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.as_str() == raw)
            .ok_or_else(|| AppIdError::Unknown(raw.to_string()))
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Typed view of the launch payload understood by the browser viewer.
pub struct OpenAppPayload {
    /// URL to preload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_url: Option<String>,
}

impl OpenAppPayload {
    /// Reads the typed payload out of raw launch params, ignoring unknown shapes.
    pub fn from_launch_params(params: &Value) -> Self {
        serde_json::from_value(params.clone()).unwrap_or_default()
    }

    /// Serializes the payload into launch params.
    pub fn into_value(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request for the shell to mount or focus an application.
pub struct AppOpenRequest {
    /// Target application.
    pub app_id: AppId,
    /// Opaque contextual data, forwarded to the app as launch params.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl AppOpenRequest {
    /// Creates a request. The payload is carried through unmodified.
    pub fn new(app_id: AppId, payload: Option<Value>) -> Self {
        Self { app_id, payload }
    }

    /// Creates a request that opens the browser viewer at `url`.
    pub fn browse(url: impl Into<String>) -> Self {
        Self::new(
            AppId::Browser,
            Some(
                OpenAppPayload {
                    initial_url: Some(url.into()),
                }
                .into_value(),
            ),
        )
    }

    /// Returns launch params for the mounted app (`null` when no payload was supplied).
    pub fn launch_params(&self) -> Value {
        self.payload.clone().unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Transport commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Mount or focus another application.
    OpenApp(AppOpenRequest),
    /// Request opening a URL through the host boundary.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
    /// Request a title update for the current window.
    SetWindowTitle {
        /// New title text.
        title: String,
    },
}

#[derive(Clone, Copy)]
/// Window-scoped service for shell window integration.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Requests a title change for the current window.
    pub fn set_title(&self, title: impl Into<String>) {
        self.sender.call(AppCommand::SetWindowTitle {
            title: title.into(),
        });
    }
}

#[derive(Clone, Copy)]
/// App-launch service. Requests are fire-and-forget: no result is reported back.
pub struct LauncherService {
    sender: Callback<AppCommand>,
}

impl LauncherService {
    /// Asks the shell to open `app_id` with an optional payload.
    pub fn open_app(&self, app_id: AppId, payload: Option<Value>) {
        self.sender
            .call(AppCommand::OpenApp(AppOpenRequest::new(app_id, payload)));
    }

    /// Asks the shell to open the browser viewer at `url`.
    pub fn browse(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::OpenApp(AppOpenRequest::browse(url)));
    }
}

#[derive(Clone, Copy)]
/// Service for leaving the desktop through the host's link handler.
pub struct LinkService {
    sender: Callback<AppCommand>,
}

impl LinkService {
    /// Requests that the host open `url` in a new browsing context.
    pub fn open_external(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::OpenExternalUrl { url: url.into() });
    }
}

#[derive(Clone, Copy)]
/// Read-only view of shell appearance.
pub struct ThemeService {
    /// Whether the desktop renders in dark mode.
    pub dark_mode: ReadSignal<bool>,
}

#[derive(Clone, Copy)]
/// Injected app services bundle.
pub struct AppServices {
    /// Window integration service.
    pub window: WindowService,
    /// App-launch service.
    pub launcher: LauncherService,
    /// External link service.
    pub links: LinkService,
    /// Appearance service.
    pub theme: ThemeService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(sender: Callback<AppCommand>, dark_mode: ReadSignal<bool>) -> Self {
        Self {
            window: WindowService { sender },
            launcher: LauncherService { sender },
            links: LinkService { sender },
            theme: ThemeService { dark_mode },
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// App being mounted.
    pub app_id: AppId,
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Launch params supplied at window-open time.
    pub launch_params: Value,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn recording_services() -> (AppServices, Rc<RefCell<Vec<AppCommand>>>) {
        let _ = leptos::create_runtime();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sent);
        let sender = Callback::new(move |command: AppCommand| sink.borrow_mut().push(command));
        let (dark_mode, _) = leptos::create_signal(false);
        (AppServices::new(sender, dark_mode), sent)
    }

    #[test]
    fn app_id_tokens_round_trip_and_reject_unknown_ids() {
        for app_id in AppId::ALL {
            assert_eq!(app_id.as_str().parse::<AppId>(), Ok(app_id));
        }
        assert_eq!("".parse::<AppId>(), Err(AppIdError::Empty));
        assert_eq!(
            "finder".parse::<AppId>(),
            Err(AppIdError::Malformed("finder".to_string()))
        );
        assert_eq!(
            "Portfolio.finder".parse::<AppId>(),
            Err(AppIdError::Malformed("Portfolio.finder".to_string()))
        );
        assert_eq!(
            "portfolio.terminal".parse::<AppId>(),
            Err(AppIdError::Unknown("portfolio.terminal".to_string()))
        );
    }

    #[test]
    fn open_request_carries_payload_unmodified() {
        let payload = json!({ "initialUrl": "https://example.com", "extra": [1, 2] });
        let request = AppOpenRequest::new(AppId::Browser, Some(payload.clone()));
        assert_eq!(request.app_id, AppId::Browser);
        assert_eq!(request.payload, Some(payload));
    }

    #[test]
    fn browse_request_serializes_with_initial_url() {
        let request = AppOpenRequest::browse("https://example.com");
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({
                "appId": "portfolio.browser",
                "payload": { "initialUrl": "https://example.com" }
            })
        );
        assert_eq!(
            OpenAppPayload::from_launch_params(&request.launch_params()).initial_url,
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn request_without_payload_mounts_with_null_params() {
        let request = AppOpenRequest::new(AppId::Mail, None);
        assert_eq!(request.launch_params(), Value::Null);
        assert_eq!(
            OpenAppPayload::from_launch_params(&Value::Null),
            OpenAppPayload::default()
        );
    }

    #[test]
    fn launcher_forwards_requests_through_sender() {
        let (services, sent) = recording_services();
        services
            .launcher
            .open_app(AppId::Browser, Some(json!({ "initialUrl": "https://example.com" })));
        services.launcher.open_app(AppId::Mail, None);
        services.links.open_external("https://github.com");
        services.window.set_title("Safari - example.com");

        assert_eq!(
            sent.borrow().clone(),
            vec![
                AppCommand::OpenApp(AppOpenRequest {
                    app_id: AppId::Browser,
                    payload: Some(json!({ "initialUrl": "https://example.com" })),
                }),
                AppCommand::OpenApp(AppOpenRequest {
                    app_id: AppId::Mail,
                    payload: None,
                }),
                AppCommand::OpenExternalUrl {
                    url: "https://github.com".to_string()
                },
                AppCommand::SetWindowTitle {
                    title: "Safari - example.com".to_string()
                },
            ]
        );
    }
}
