//! Desktop shell UI composition: wallpaper, menu bar, desktop icons, windows, and dock.

mod dock;
mod menu_bar;
mod window;

use std::time::Duration;

use desktop_app_contract::AppId;
use leptos::*;
use portfolio_content::portfolio;

use self::{dock::Dock, menu_bar::MenuBar, window::DesktopWindow};

use crate::{
    apps,
    model::{DesktopState, PointerPosition, WindowId, WindowRecord},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn app_glyph(app_id: AppId) -> &'static str {
    match app_id {
        AppId::Finder => "🗂",
        AppId::Mail => "✉",
        AppId::Blog => "📝",
        AppId::Browser => "🧭",
    }
}

fn wallpaper_style(state: &DesktopState) -> String {
    portfolio()
        .wallpaper(state.wallpaper_index)
        .map(|url| format!("background-image:url('{url}');"))
        .unwrap_or_default()
}

#[component]
/// Renders the full desktop shell UI.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class=move || if runtime.dark_mode.get() { "desktop-shell dark" } else { "desktop-shell" }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-wallpaper"
                aria-hidden="true"
                style=move || state.with(wallpaper_style)
            />
            <MenuBar />

            <div class="desktop-icons">
                <For each=apps::desktop_icon_apps key=|app| app.app_id let:app>
                    <button
                        type="button"
                        class="desktop-icon"
                        on:dblclick=move |_| runtime.activate_app(app.app_id)
                    >
                        <span class="desktop-icon-glyph" aria-hidden="true">
                            {app_glyph(app.app_id)}
                        </span>
                        <span class="desktop-icon-label">{app.dock_label}</span>
                    </button>
                </For>
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|s| s.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <Dock />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
