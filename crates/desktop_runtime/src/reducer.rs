//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AppCommand, AppId};
use serde_json::Value;
use thiserror::Error;

use crate::{
    apps,
    model::{
        DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition, WindowId,
        WindowRecord, WindowRect,
    },
};

const MIN_WINDOW_WIDTH: i32 = 320;
const MIN_WINDOW_HEIGHT: i32 = 220;
const CASCADE_STEP: i32 = 24;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, focusing its existing window when the app is single-instance.
    ActivateApp {
        /// App to activate.
        app_id: AppId,
        /// Launch params for a newly opened window.
        launch_params: Value,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window to the provided viewport.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
        /// Viewport rectangle to maximize into.
        viewport: WindowRect,
    },
    /// Restore a minimized or maximized window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Flip between light and dark appearance.
    ToggleDarkMode,
    /// Advance to the next content wallpaper.
    NextWallpaper,
    /// Apply a command sent by the app mounted in `window_id`.
    HandleAppCommand {
        /// Window whose app sent the command.
        window_id: WindowId,
        /// App command payload.
        command: AppCommand,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Open an external URL (for app actions that leave the shell).
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not present.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateApp {
            app_id,
            launch_params,
        } => {
            activate_app(state, app_id, launch_params)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound);
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window_internal(state, window_id)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            window.minimized = true;
            window.is_focused = false;
        }
        DesktopAction::MaximizeWindow {
            window_id,
            viewport,
        } => {
            let window = find_window_mut(state, window_id)?;
            if !window.maximized {
                window.restore_rect = Some(window.rect);
            }
            window.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            window.maximized = true;
            window.minimized = false;
            focus_window_internal(state, window_id)?;
        }
        DesktopAction::RestoreWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            if window.maximized {
                if let Some(restore_rect) = window.restore_rect.take() {
                    window.rect = restore_rect;
                }
                window.maximized = false;
            }
            window.minimized = false;
            focus_window_internal(state, window_id)?;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let rect_start = find_window_mut(state, window_id)?.rect;
            focus_window_internal(state, window_id)?;
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                if !window.maximized {
                    window.rect = session.rect_start.offset(dx, dy);
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
        }
        DesktopAction::NextWallpaper => {
            state.wallpaper_index = state.wallpaper_index.wrapping_add(1);
        }
        DesktopAction::HandleAppCommand { window_id, command } => {
            if state.window(window_id).is_none() {
                return Err(ReducerError::WindowNotFound);
            }
            match command {
                AppCommand::OpenApp(request) => {
                    let launch_params = request.launch_params();
                    activate_app(state, request.app_id, launch_params)?;
                }
                AppCommand::OpenExternalUrl { url } => {
                    effects.push(RuntimeEffect::OpenExternalUrl(url));
                }
                AppCommand::SetWindowTitle { title } => {
                    let window = find_window_mut(state, window_id)?;
                    let title = title.trim();
                    window.title = if title.is_empty() {
                        window.app_id.title().to_string()
                    } else {
                        title.to_string()
                    };
                }
            }
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

fn open_window(state: &mut DesktopState, req: OpenWindowRequest) -> Result<WindowId, ReducerError> {
    let window_id = next_window_id(state);
    let default_offset = ((window_id.0 as i32) - 1) % 8 * CASCADE_STEP;
    let rect = req
        .rect
        .unwrap_or_default()
        .offset(default_offset, default_offset)
        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    state.windows.push(WindowRecord {
        id: window_id,
        app_id: req.app_id,
        title: req.app_id.title().to_string(),
        rect,
        restore_rect: None,
        z_index: 0,
        is_focused: false,
        minimized: false,
        maximized: false,
        launch_params: req.launch_params,
    });
    focus_window_internal(state, window_id)?;
    Ok(window_id)
}

/// Single-instance apps are focused (and unminimized) when already open; their launch params are
/// not re-delivered to the mounted view.
fn activate_app(
    state: &mut DesktopState,
    app_id: AppId,
    launch_params: Value,
) -> Result<WindowId, ReducerError> {
    if apps::app_descriptor(app_id).single_instance {
        if let Some(window_id) = state.preferred_window_for_app(app_id) {
            focus_window_internal(state, window_id)?;
            return Ok(window_id);
        }
    }
    open_window(state, apps::default_open_request(app_id, launch_params))
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

fn focus_window_internal(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<(), ReducerError> {
    let index = state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)?;
    let already_focused_top = index + 1 == state.windows.len()
        && state
            .windows
            .get(index)
            .map(|w| w.is_focused && !w.minimized)
            .unwrap_or(false);
    if already_focused_top {
        return Ok(());
    }
    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    window.minimized = false;
    state.windows.push(window);
    normalize_window_stack(state);
    Ok(())
}

fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.minimized {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(last_non_minimized) = state.windows.iter_mut().rev().find(|w| !w.minimized) {
            last_non_minimized.is_focused = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppOpenRequest;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn activate(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        app_id: AppId,
    ) -> WindowId {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::ActivateApp {
                app_id,
                launch_params: Value::Null,
            },
        )
        .expect("activate app");
        state.focused_window_id().expect("focused window")
    }

    fn command(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        window_id: WindowId,
        command: AppCommand,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::HandleAppCommand { window_id, command },
        )
        .expect("app command")
    }

    #[test]
    fn open_window_focuses_new_window_and_updates_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = activate(&mut state, &mut interaction, AppId::Finder);
        let second = activate(&mut state, &mut interaction, AppId::Blog);

        assert_eq!(state.focused_window_id(), Some(second));
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.windows[0].id, first);
        assert_eq!(state.windows[1].id, second);
        assert_eq!(state.windows[1].z_index, 2);
        assert_eq!(state.windows[1].title, "Blog");
    }

    #[test]
    fn apps_without_a_registered_rect_open_at_the_default_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let blog = activate(&mut state, &mut interaction, AppId::Blog);

        assert_eq!(apps::app_descriptor(AppId::Blog).default_rect, None);
        assert_eq!(
            state.window(blog).expect("blog").rect,
            WindowRect::default()
        );

        let finder = activate(&mut state, &mut interaction, AppId::Finder);
        let finder_rect = apps::app_descriptor(AppId::Finder)
            .default_rect
            .expect("finder rect");
        assert_eq!(
            state.window(finder).expect("finder").rect,
            finder_rect.offset(CASCADE_STEP, CASCADE_STEP)
        );
    }

    #[test]
    fn open_app_command_opens_browser_with_payload_as_launch_params() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = activate(&mut state, &mut interaction, AppId::Finder);

        let effects = command(
            &mut state,
            &mut interaction,
            finder,
            AppCommand::OpenApp(AppOpenRequest::new(
                AppId::Browser,
                Some(json!({ "initialUrl": "https://example.com" })),
            )),
        );

        assert!(effects.is_empty());
        let browser = state.windows.last().expect("browser window");
        assert_eq!(browser.app_id, AppId::Browser);
        assert!(browser.is_focused);
        assert_eq!(
            browser.launch_params,
            json!({ "initialUrl": "https://example.com" })
        );
    }

    #[test]
    fn open_app_without_payload_launches_with_null_params() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = activate(&mut state, &mut interaction, AppId::Finder);

        command(
            &mut state,
            &mut interaction,
            finder,
            AppCommand::OpenApp(AppOpenRequest::new(AppId::Mail, None)),
        );

        let mail = state.windows.last().expect("mail window");
        assert_eq!(mail.app_id, AppId::Mail);
        assert_eq!(mail.launch_params, Value::Null);
    }

    #[test]
    fn single_instance_app_is_focused_rather_than_duplicated() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let mail = activate(&mut state, &mut interaction, AppId::Mail);
        let finder = activate(&mut state, &mut interaction, AppId::Finder);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: mail },
        )
        .expect("minimize");

        command(
            &mut state,
            &mut interaction,
            finder,
            AppCommand::OpenApp(AppOpenRequest::new(AppId::Mail, Some(json!({ "x": 1 })))),
        );

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(mail));
        let record = state.window(mail).expect("mail window");
        assert!(!record.minimized);
        assert_eq!(record.launch_params, Value::Null);
    }

    #[test]
    fn browser_requests_always_open_a_new_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = activate(&mut state, &mut interaction, AppId::Finder);

        for url in ["https://a.test", "https://b.test"] {
            command(
                &mut state,
                &mut interaction,
                finder,
                AppCommand::OpenApp(AppOpenRequest::browse(url)),
            );
        }

        let browsers: Vec<_> = state
            .windows
            .iter()
            .filter(|w| w.app_id == AppId::Browser)
            .collect();
        assert_eq!(browsers.len(), 2);
        assert_ne!(browsers[0].rect, browsers[1].rect);
    }

    #[test]
    fn external_url_command_emits_effect_without_touching_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = activate(&mut state, &mut interaction, AppId::Finder);
        let before = state.clone();

        let effects = command(
            &mut state,
            &mut interaction,
            finder,
            AppCommand::OpenExternalUrl {
                url: "https://example.com".to_string(),
            },
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://example.com".to_string()
            )]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn set_window_title_updates_only_the_sender() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = activate(&mut state, &mut interaction, AppId::Finder);
        let blog = activate(&mut state, &mut interaction, AppId::Blog);

        command(
            &mut state,
            &mut interaction,
            blog,
            AppCommand::SetWindowTitle {
                title: "Reading".to_string(),
            },
        );
        assert_eq!(state.window(blog).expect("blog").title, "Reading");
        assert_eq!(state.window(finder).expect("finder").title, "Finder");

        command(
            &mut state,
            &mut interaction,
            blog,
            AppCommand::SetWindowTitle {
                title: "   ".to_string(),
            },
        );
        assert_eq!(state.window(blog).expect("blog").title, "Blog");
    }

    #[test]
    fn commands_from_closed_windows_are_rejected() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: WindowId(42),
                command: AppCommand::OpenApp(AppOpenRequest::new(AppId::Mail, None)),
            },
        );

        assert_eq!(result, Err(ReducerError::WindowNotFound));
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_focused_window_focuses_next_visible_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = activate(&mut state, &mut interaction, AppId::Finder);
        let blog = activate(&mut state, &mut interaction, AppId::Blog);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: blog },
        )
        .expect("close");

        assert_eq!(state.focused_window_id(), Some(finder));
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow { window_id: blog },
            ),
            Err(ReducerError::WindowNotFound)
        );
    }

    #[test]
    fn maximize_and_restore_round_trip_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = activate(&mut state, &mut interaction, AppId::Finder);
        let original = state.window(win).expect("window").rect;
        let viewport = WindowRect {
            x: 0,
            y: 28,
            w: 1280,
            h: 700,
        };

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win,
                viewport,
            },
        )
        .expect("maximize");
        assert_eq!(state.window(win).expect("window").rect, viewport);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: win },
        )
        .expect("restore");
        let record = state.window(win).expect("window");
        assert_eq!(record.rect, original);
        assert!(!record.maximized);
    }

    #[test]
    fn moving_window_updates_rect_during_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = activate(&mut state, &mut interaction, AppId::Blog);
        let original = state.window(win).expect("window").rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        )
        .expect("update move");

        let moved = state.window(win).expect("window").rect;
        assert_eq!(moved.x, original.x + 25);
        assert_eq!(moved.y, original.y + 40);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end move");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn appearance_actions_toggle_dark_mode_and_cycle_wallpaper() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleDarkMode)
            .expect("toggle");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::NextWallpaper)
            .expect("next wallpaper");

        assert!(state.dark_mode);
        assert_eq!(state.wallpaper_index, 1);
    }
}
