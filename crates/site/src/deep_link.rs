//! Query-string deep links that choose which app the desktop opens at boot.
//!
//! `?open=<app token>` opens an app by its dotted id, `?post=<id>` opens the blog at a post, and
//! `?tab=<tab>` selects a Finder tab. With no recognizable link the desktop opens Finder.

use desktop_app_contract::AppId;
use leptos::logging;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
/// App and launch params to open once the desktop is mounted.
pub struct BootRequest {
    /// App to activate.
    pub app_id: AppId,
    /// Launch params forwarded to the app.
    pub launch_params: Value,
}

impl Default for BootRequest {
    fn default() -> Self {
        Self {
            app_id: AppId::Finder,
            launch_params: Value::Null,
        }
    }
}

/// Resolves query parameters into a [`BootRequest`]. Unknown tokens are logged and ignored.
pub fn boot_request(open: Option<&str>, post: Option<&str>, tab: Option<&str>) -> BootRequest {
    if let Some(raw) = post {
        match raw.trim().parse::<u32>() {
            Ok(post_id) => {
                return BootRequest {
                    app_id: AppId::Blog,
                    launch_params: json!({ "post_id": post_id }),
                }
            }
            Err(err) => logging::warn!("ignoring deep link post `{raw}`: {err}"),
        }
    }

    let app_id = match open.map(str::parse::<AppId>) {
        Some(Ok(app_id)) => app_id,
        Some(Err(err)) => {
            logging::warn!("ignoring deep link app: {err}");
            AppId::Finder
        }
        None => AppId::Finder,
    };
    let launch_params = match (app_id, tab) {
        (AppId::Finder, Some(tab)) => json!({ "tab": tab }),
        _ => Value::Null,
    };
    BootRequest {
        app_id,
        launch_params,
    }
}
