use desktop_app_contract::AppId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_WINDOW_WIDTH: i32 = 760;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 520;
/// Height reserved for the top menu bar.
pub const MENU_BAR_HEIGHT_PX: i32 = 28;
/// Height reserved for the dock along the bottom edge.
pub const DOCK_HEIGHT_PX: i32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 96,
            y: 64,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
    /// Launch params handed to the app at mount time (`null` when the opener sent no payload).
    pub launch_params: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
    pub dark_mode: bool,
    /// Index into the content wallpaper list; wraps on lookup.
    pub wallpaper_index: usize,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            dark_mode: false,
            wallpaper_index: 0,
        }
    }
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Picks the window the dock should target for `app_id`: focused first, then the topmost
    /// visible one, then any minimized one.
    pub fn preferred_window_for_app(&self, app_id: AppId) -> Option<WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|win| win.app_id == app_id && !win.minimized && win.is_focused)
            .or_else(|| {
                self.windows
                    .iter()
                    .rev()
                    .find(|win| win.app_id == app_id && !win.minimized)
            })
            .or_else(|| self.windows.iter().rev().find(|win| win.app_id == app_id))
            .map(|win| win.id)
    }

    pub fn is_running(&self, app_id: AppId) -> bool {
        self.windows.iter().any(|win| win.app_id == app_id)
    }

    pub fn focused_app(&self) -> Option<AppId> {
        self.windows
            .iter()
            .find(|w| w.is_focused)
            .map(|w| w.app_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: AppId,
    pub rect: Option<WindowRect>,
    pub launch_params: Value,
}

impl OpenWindowRequest {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            rect: None,
            launch_params: Value::Null,
        }
    }

    pub fn with_launch_params(mut self, launch_params: Value) -> Self {
        self.launch_params = launch_params;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
