//! Blog desktop app: post list with a detail pane.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod selection;

use desktop_app_contract::AppMountContext;
use leptos::*;
use portfolio_content::{portfolio, BlogPost};
use serde_json::Value;

pub use selection::BlogSelection;

/// Mount entry used by the runtime app registry.
pub fn mount(context: AppMountContext) -> View {
    view! { <BlogApp launch_params=context.launch_params /> }.into_view()
}

fn initial_selection(launch_params: &Value) -> BlogSelection {
    let mut selection = BlogSelection::default();
    if let Some(id) = launch_params
        .get("post_id")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
    {
        selection.select(id);
    }
    selection
}

#[component]
/// Blog window contents.
pub fn BlogApp(
    /// Launch params (optionally `{"post_id": <id>}`).
    launch_params: Value,
) -> impl IntoView {
    let content = portfolio();
    let selection = create_rw_signal(initial_selection(&launch_params));
    let active_post = Signal::derive(move || selection.get().active_post(content));

    view! {
        <div class="app-blog">
            <aside class=move || {
                if active_post.get().is_some() { "blog-list has-active" } else { "blog-list" }
            }>
                <header class="blog-list-header">
                    <h2>"DevLog"</h2>
                    <p>"Thoughts on code & engineering"</p>
                </header>
                <div class="blog-list-items">
                    {content
                        .posts
                        .iter()
                        .map(|post| view! { <PostRow post=post selection=selection /> })
                        .collect_view()}
                </div>
            </aside>

            <section class=move || {
                if active_post.get().is_some() { "blog-detail has-active" } else { "blog-detail" }
            }>
                {move || match active_post.get() {
                    Some(post) => view! { <PostDetail post=post selection=selection /> }.into_view(),
                    None => view! {
                        <div class="blog-placeholder">
                            <p>"Select a post to start reading"</p>
                        </div>
                    }
                    .into_view(),
                }}
            </section>
        </div>
    }
}

#[component]
fn PostRow(post: &'static BlogPost, selection: RwSignal<BlogSelection>) -> impl IntoView {
    let id = post.id;
    let is_selected = Signal::derive(move || selection.get().is_selected(id));
    view! {
        <div
            class=move || if is_selected.get() { "blog-row selected" } else { "blog-row" }
            on:click=move |_| selection.update(|s| s.select(id))
        >
            <div class="blog-row-date">{post.date.as_str()}</div>
            <h3>{post.title.as_str()}</h3>
            <p class="blog-row-preview">{post.preview.as_str()}</p>
            <span class="blog-row-category">{post.category.as_str()}</span>
        </div>
    }
}

#[component]
fn PostDetail(post: &'static BlogPost, selection: RwSignal<BlogSelection>) -> impl IntoView {
    view! {
        <article class="blog-post">
            <button
                type="button"
                class="blog-back"
                on:click=move |_| selection.update(|s| s.clear())
            >
                "‹ Back to posts"
            </button>
            <div class="blog-post-meta">
                <span>{post.date.as_str()}</span>
                <span>{post.read_time.as_str()}</span>
                <span class="blog-post-category">{post.category.as_str()}</span>
            </div>
            <h1>{post.title.as_str()}</h1>
            <p>{post.content.as_str()}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn launch_params_preselect_post() {
        assert_eq!(initial_selection(&json!({ "post_id": 3 })).selected(), Some(3));
        assert_eq!(initial_selection(&json!({ "post_id": "3" })).selected(), None);
        assert_eq!(initial_selection(&Value::Null).selected(), None);
    }
}
