//! Browser viewer app: shows a project page inline with an address bar and history.
//!
//! The viewer is launched through `AppOpenRequest::browse`, which stores the target in the
//! `initialUrl` launch param.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod navigation;

use desktop_app_contract::{AppId, AppMountContext, AppServices, OpenAppPayload};
use std::time::Duration;

use leptos::{ev::SubmitEvent, *};
use serde_json::Value;

pub use navigation::{is_embeddable, page_title, resolve_address, BrowserHistory, DEFAULT_SCHEME};

/// Mount entry used by the runtime app registry.
pub fn mount(context: AppMountContext) -> View {
    view! { <BrowserApp launch_params=context.launch_params services=context.services /> }
        .into_view()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InitialPage {
    Blank,
    Inline(String),
    // Non-web schemes such as `mailto:` go to the host instead of the iframe.
    External(String),
}

fn initial_page(launch_params: &Value) -> InitialPage {
    match OpenAppPayload::from_launch_params(launch_params)
        .initial_url
        .and_then(|raw| resolve_address(&raw).ok())
    {
        Some(url) if is_embeddable(&url) => InitialPage::Inline(url.into()),
        Some(url) => InitialPage::External(url.into()),
        None => InitialPage::Blank,
    }
}

#[component]
/// Browser viewer window contents.
pub fn BrowserApp(
    /// Launch params (`{"initialUrl": "<url>"}`).
    launch_params: Value,
    /// Injected runtime services.
    services: AppServices,
) -> impl IntoView {
    let (start, handoff) = match initial_page(&launch_params) {
        InitialPage::Inline(url) => (Some(url), None),
        InitialPage::External(url) => (None, Some(url)),
        InitialPage::Blank => (None, None),
    };
    if let Some(url) = handoff {
        set_timeout(move || services.links.open_external(url), Duration::ZERO);
    }
    let history = create_rw_signal(BrowserHistory::starting_at(start));
    let current = Signal::derive(move || history.with(|h| h.current().map(str::to_string)));
    let address = create_rw_signal(current.get_untracked().unwrap_or_default());
    let error = create_rw_signal(None::<String>);

    create_effect(move |_| {
        let title = current
            .get()
            .and_then(|page| resolve_address(&page).ok())
            .map(|url| page_title(&url))
            .unwrap_or_else(|| AppId::Browser.title().to_string());
        services.window.set_title(title);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match resolve_address(&address.get_untracked()) {
            Ok(url) if is_embeddable(&url) => {
                error.set(None);
                address.set(url.to_string());
                history.update(|h| h.visit(url.to_string()));
            }
            Ok(url) => {
                error.set(None);
                services.links.open_external(url.to_string());
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let step = move |forward: bool| {
        history.update(|h| if forward { h.forward() } else { h.back() });
        address.set(current.get_untracked().unwrap_or_default());
        error.set(None);
    };

    view! {
        <div class="app-browser">
            <form class="browser-toolbar" on:submit=on_submit>
                <button
                    type="button"
                    aria-label="Back"
                    disabled=move || !history.with(|h| h.can_go_back())
                    on:click=move |_| step(false)
                >
                    "‹"
                </button>
                <button
                    type="button"
                    aria-label="Forward"
                    disabled=move || !history.with(|h| h.can_go_forward())
                    on:click=move |_| step(true)
                >
                    "›"
                </button>
                <input
                    type="text"
                    class="browser-address"
                    placeholder="Search or enter website name"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="browser-open-external"
                    disabled=move || current.with(Option::is_none)
                    on:click=move |_| {
                        if let Some(page) = current.get_untracked() {
                            services.links.open_external(page);
                        }
                    }
                >
                    "Open in new tab"
                </button>
            </form>

            {move || error.get().map(|message| view! {
                <div class="browser-error" role="alert">{message}</div>
            })}

            <div class="browser-page">
                {move || match current.get() {
                    Some(page) => view! {
                        <iframe
                            class="browser-frame"
                            src=page
                            title="Page preview"
                            sandbox="allow-scripts allow-same-origin allow-popups allow-forms"
                        />
                    }
                    .into_view(),
                    None => view! {
                        <div class="browser-start-page">
                            <h2>"Favorites"</h2>
                            <p>"Open a project from Finder or type an address above."</p>
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
