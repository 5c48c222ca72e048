use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DockItem {
    app_id: AppId,
    label: &'static str,
    running: bool,
    focused: bool,
}

fn dock_items(state: &DesktopState) -> Vec<DockItem> {
    let focused_app = state.focused_app();
    apps::app_registry()
        .iter()
        .map(|entry| DockItem {
            app_id: entry.app_id,
            label: entry.dock_label,
            running: state.is_running(entry.app_id),
            focused: focused_app == Some(entry.app_id),
        })
        .collect()
}

fn dock_item_class(item: DockItem) -> &'static str {
    match (item.running, item.focused) {
        (_, true) => "dock-item running focused",
        (true, false) => "dock-item running",
        (false, false) => "dock-item",
    }
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let items = Signal::derive(move || runtime.state.with(dock_items));

    view! {
        <nav class="dock" aria-label="Dock">
            <For each=move || items.get() key=|item| *item let:item>
                <button
                    type="button"
                    class=dock_item_class(item)
                    title=item.label
                    aria-label=item.label
                    on:click=move |_| runtime.activate_app(item.app_id)
                >
                    <span class="dock-icon" aria-hidden="true">{app_glyph(item.app_id)}</span>
                    <span class="dock-indicator" aria-hidden="true" />
                </button>
            </For>
        </nav>
    }
}
