use super::*;
use desktop_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_style(win: &WindowRecord) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
    )
}

fn window_class(win: &WindowRecord) -> String {
    let mut class = String::from("desktop-window");
    if win.is_focused {
        class.push_str(" focused");
    }
    if win.minimized {
        class.push_str(" minimized");
    }
    if win.maximized {
        class.push_str(" maximized");
    }
    class
}

// The window frame tracks the record reactively while the app body is mounted exactly once, so
// moving or retitling a window keeps the app's local state.
#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || runtime.state.with(|s| s.window(window_id).cloned()));

    let focus = move |_| {
        let should_focus = window
            .get_untracked()
            .map(|w| !w.is_focused || w.minimized)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let toggle_maximize = move || {
        if let Some(win) = window.get_untracked() {
            if win.maximized {
                runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
            } else {
                runtime.dispatch_action(DesktopAction::MaximizeWindow {
                    window_id,
                    viewport: runtime.host.with_value(|host| host.desktop_viewport_rect()),
                });
            }
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || (ev.pointer_type() != "mouse" && !ev.is_primary()) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let title = move || window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());

    view! {
        <section
            class=move || window.with(|w| w.as_ref().map(window_class).unwrap_or_default())
            style=move || window.with(|w| w.as_ref().map(window_style).unwrap_or_default())
            on:pointerdown=focus
            role="dialog"
            aria-label=title
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="traffic-lights">
                    <button
                        class="traffic-light close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    />
                    <button
                        class="traffic-light minimize"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        }
                    />
                    <button
                        class="traffic-light maximize"
                        aria-label=move || {
                            if window.with(|w| w.as_ref().is_some_and(|w| w.maximized)) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    />
                </div>
                <div class="titlebar-title">{title}</div>
            </header>
            <div class="window-body">
                <WindowBody window_id=window_id />
            </div>
        </section>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let contents = runtime
        .state
        .with_untracked(|s| s.window(window_id).cloned())
        .map(|w| {
            apps::app_module(w.app_id).mount(AppMountContext {
                app_id: w.app_id,
                window_id: w.id.0,
                launch_params: w.launch_params,
                services: runtime.app_services(w.id),
            })
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppId;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::model::WindowRect;

    fn record() -> WindowRecord {
        WindowRecord {
            id: WindowId(3),
            app_id: AppId::Blog,
            title: "Blog".to_string(),
            rect: WindowRect {
                x: 10,
                y: 20,
                w: 300,
                h: 200,
            },
            restore_rect: None,
            z_index: 4,
            is_focused: true,
            minimized: false,
            maximized: true,
            launch_params: Value::Null,
        }
    }

    #[test]
    fn frame_style_and_class_reflect_the_record() {
        let win = record();
        assert_eq!(
            window_style(&win),
            "left:10px;top:20px;width:300px;height:200px;z-index:4;"
        );
        assert_eq!(window_class(&win), "desktop-window focused maximized");
    }
}
