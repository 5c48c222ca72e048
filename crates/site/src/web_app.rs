use desktop_runtime::{use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use portfolio_content::portfolio;

use crate::deep_link::boot_request;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let profile = &portfolio().profile;

    view! {
        <Title text=format!("{} | {}", profile.name, profile.role) />
        <Meta name="description" content=profile.objective.clone() />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/blog/:id" view=CanonicalPostRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=platform_host_web::build_host_services()>
            <BootDeepLink />
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn BootDeepLink() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();
    let request = query.with_untracked(|map| {
        boot_request(
            map.get("open").map(String::as_str),
            map.get("post").map(String::as_str),
            map.get("tab").map(String::as_str),
        )
    });
    runtime.dispatch_action(DesktopAction::ActivateApp {
        app_id: request.app_id,
        launch_params: request.launch_params,
    });
}

#[component]
fn CanonicalPostRoute() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || {
        params
            .with(|map| map.get("id").and_then(|id| id.parse::<u32>().ok()))
    };

    view! {
        <section class="canonical-content canonical-post">
            {move || match post_id().and_then(|id| portfolio().post(id)) {
                Some(post) => view! {
                    <article>
                        <h1>{post.title.as_str()}</h1>
                        <p class="canonical-post-meta">
                            {format!("{} · {} · {}", post.date, post.read_time, post.category)}
                        </p>
                        <p>{post.content.as_str()}</p>
                        <A href=format!("/?post={}", post.id)>"Open in Desktop"</A>
                    </article>
                }
                .into_view(),
                None => view! {
                    <article>
                        <h1>"Post not found"</h1>
                        <A href="/">"Back to the desktop"</A>
                    </article>
                }
                .into_view(),
            }}
        </section>
    }
}
