//! Browser entry crate: routes, meta tags, and the desktop mount.

mod deep_link;
mod web_app;

pub use deep_link::{boot_request, BootRequest};
pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
