use super::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    weekday: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

fn format_menu_bar_clock(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS[(snapshot.weekday % 7) as usize];
    let month = MONTHS[(snapshot.month % 12) as usize];
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!(
        "{weekday} {month} {} {hour}:{:02} {suffix}",
        snapshot.day, snapshot.minute
    )
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(15),
    ) {
        on_cleanup(move || interval.clear());
    }

    let active_app_label = move || {
        runtime
            .state
            .with(|s| s.focused_app())
            .map(|app_id| apps::app_descriptor(app_id).dock_label)
            .unwrap_or("Finder")
    };
    let dark_mode = runtime.dark_mode;

    view! {
        <header class="menu-bar" role="menubar">
            <div class="menu-bar-left">
                <span class="menu-bar-logo" aria-hidden="true">"◉"</span>
                <strong class="menu-bar-app">{active_app_label}</strong>
                <button
                    type="button"
                    class="menu-bar-item"
                    on:click=move |_| runtime.activate_app(AppId::Finder)
                >
                    "About"
                </button>
                <button
                    type="button"
                    class="menu-bar-item"
                    on:click=move |_| runtime.activate_app(AppId::Mail)
                >
                    "Contact"
                </button>
            </div>
            <div class="menu-bar-right">
                <button
                    type="button"
                    class="menu-bar-item"
                    aria-label="Next wallpaper"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::NextWallpaper)
                >
                    "Wallpaper"
                </button>
                <button
                    type="button"
                    class="menu-bar-item"
                    aria-pressed=move || dark_mode.get().to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleDarkMode)
                >
                    {move || if dark_mode.get() { "Light" } else { "Dark" }}
                </button>
                <time class="menu-bar-clock">{move || format_menu_bar_clock(clock_now.get())}</time>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_uses_twelve_hour_time_with_padded_minutes() {
        let afternoon = ClockSnapshot {
            weekday: 1,
            month: 9,
            day: 16,
            hour: 14,
            minute: 5,
        };
        assert_eq!(format_menu_bar_clock(afternoon), "Mon Oct 16 2:05 PM");

        let midnight = ClockSnapshot {
            hour: 0,
            minute: 30,
            ..afternoon
        };
        assert_eq!(format_menu_bar_clock(midnight), "Mon Oct 16 12:30 AM");
    }
}
