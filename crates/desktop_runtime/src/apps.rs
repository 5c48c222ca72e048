//! Built-in app registry: dock metadata, window defaults, and mount functions.

use desktop_app_contract::{AppId, AppModule};
use serde_json::Value;

use crate::model::{OpenWindowRequest, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub dock_label: &'static str,
    pub show_on_desktop: bool,
    /// Activation focuses the existing window instead of opening another one.
    pub single_instance: bool,
    pub default_rect: Option<WindowRect>,
}

const APP_REGISTRY: [AppDescriptor; 4] = [
    AppDescriptor {
        app_id: AppId::Finder,
        dock_label: "Finder",
        show_on_desktop: true,
        single_instance: true,
        default_rect: Some(WindowRect {
            x: 80,
            y: 56,
            w: 900,
            h: 600,
        }),
    },
    AppDescriptor {
        app_id: AppId::Mail,
        dock_label: "Mail",
        show_on_desktop: false,
        single_instance: true,
        default_rect: Some(WindowRect {
            x: 180,
            y: 96,
            w: 720,
            h: 520,
        }),
    },
    AppDescriptor {
        app_id: AppId::Blog,
        dock_label: "DevLog",
        show_on_desktop: true,
        single_instance: true,
        default_rect: None,
    },
    AppDescriptor {
        app_id: AppId::Browser,
        dock_label: "Safari",
        show_on_desktop: false,
        single_instance: false,
        default_rect: Some(WindowRect {
            x: 140,
            y: 72,
            w: 960,
            h: 640,
        }),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    match app_id {
        AppId::Finder => &APP_REGISTRY[0],
        AppId::Mail => &APP_REGISTRY[1],
        AppId::Blog => &APP_REGISTRY[2],
        AppId::Browser => &APP_REGISTRY[3],
    }
}

pub fn default_open_request(app_id: AppId, launch_params: Value) -> OpenWindowRequest {
    let mut req = OpenWindowRequest::new(app_id).with_launch_params(launch_params);
    req.rect = app_descriptor(app_id).default_rect;
    req
}

/// Returns the mount module for `app_id`.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Finder => AppModule::new(desktop_app_finder::mount),
        AppId::Mail => AppModule::new(desktop_app_mail::mount),
        AppId::Blog => AppModule::new(desktop_app_blog::mount),
        AppId::Browser => AppModule::new(desktop_app_browser::mount),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn every_app_has_a_descriptor_that_names_it() {
        for app_id in AppId::ALL {
            assert_eq!(app_descriptor(app_id).app_id, app_id);
        }
        assert_eq!(app_registry().len(), AppId::ALL.len());
    }

    #[test]
    fn only_the_browser_allows_multiple_windows() {
        let multi: Vec<_> = app_registry()
            .iter()
            .filter(|entry| !entry.single_instance)
            .map(|entry| entry.app_id)
            .collect();
        assert_eq!(multi, vec![AppId::Browser]);
    }

    #[test]
    fn default_request_carries_launch_params_and_geometry() {
        let req = default_open_request(AppId::Finder, json!({ "tab": "skills" }));
        assert_eq!(req.launch_params, json!({ "tab": "skills" }));
        assert_eq!(req.rect, app_descriptor(AppId::Finder).default_rect);
        assert_eq!(default_open_request(AppId::Blog, Value::Null).rect, None);
    }
}
