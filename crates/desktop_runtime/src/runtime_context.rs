//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI composition
//! stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppId, AppServices};
use leptos::*;
use platform_host::HostServices;
use serde_json::Value;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Dark-mode flag mirrored out of [`DesktopState`] for app theme services.
    pub dark_mode: RwSignal<bool>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Builds the service bundle handed to the app mounted in `window_id`.
    pub fn app_services(&self, window_id: WindowId) -> AppServices {
        let runtime = *self;
        let sender = Callback::new(move |command: AppCommand| {
            runtime.dispatch_action(DesktopAction::HandleAppCommand { window_id, command });
        });
        AppServices::new(sender, self.dark_mode.read_only())
    }

    /// Brings `app_id` forward: focuses or unminimizes its preferred window, or opens a new one.
    pub fn activate_app(&self, app_id: AppId) {
        let desktop = self.state.get_untracked();
        if let Some(window) = desktop
            .preferred_window_for_app(app_id)
            .and_then(|window_id| desktop.window(window_id))
        {
            if window.minimized {
                self.dispatch_action(DesktopAction::RestoreWindow {
                    window_id: window.id,
                });
            } else if !window.is_focused {
                self.dispatch_action(DesktopAction::FocusWindow {
                    window_id: window.id,
                });
            }
            return;
        }
        self.dispatch_action(DesktopAction::ActivateApp {
            app_id,
            launch_params: Value::Null,
        });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let dark_mode = create_rw_signal(false);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop.dark_mode != previous_desktop.dark_mode {
                    dark_mode.set(desktop.dark_mode);
                }
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dark_mode,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    logging::log!(
        "desktop runtime ready on {} host",
        host.with_value(|host| host.host_strategy().as_str())
    );

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
