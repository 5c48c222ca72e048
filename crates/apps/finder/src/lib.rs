//! Finder desktop app: a tabbed résumé browser over the static portfolio content.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod contact;
pub mod state;

use desktop_app_contract::{AppId, AppMountContext, AppServices};
use leptos::*;
use portfolio_content::{portfolio, Portfolio, ProjectReference, ShowcaseProject};
use serde_json::Value;

pub use contact::{ContactDraft, ContactError, DEFAULT_SUBJECT};
pub use state::{FinderTab, FinderViewState};

/// Mount entry used by the runtime app registry.
pub fn mount(context: AppMountContext) -> View {
    view! { <FinderApp launch_params=context.launch_params services=context.services /> }
        .into_view()
}

#[component]
/// Finder window contents.
pub fn FinderApp(
    /// Launch params (optionally `{"tab": "<tab>"}`).
    launch_params: Value,
    /// Injected runtime services.
    services: AppServices,
) -> impl IntoView {
    let content = portfolio();
    let state = create_rw_signal(FinderViewState::from_launch_params(&launch_params));
    let dark_mode = services.theme.dark_mode;
    let active_tab = Signal::derive(move || state.with(|s| s.active_tab()));

    view! {
        <div class=move || {
            if dark_mode.get() { "app-finder finder-dark" } else { "app-finder" }
        }>
            <Show when=move || state.with(|s| s.sidebar_open()) fallback=|| ()>
                <div
                    class="finder-backdrop"
                    on:click=move |_| state.update(|s| s.close_sidebar())
                />
            </Show>

            <aside class=move || {
                if state.with(|s| s.sidebar_open()) {
                    "finder-sidebar open"
                } else {
                    "finder-sidebar"
                }
            }>
                <div class="finder-sidebar-mobile-header">
                    <span>"Menu"</span>
                    <button
                        type="button"
                        aria-label="Close menu"
                        on:click=move |_| state.update(|s| s.close_sidebar())
                    >
                        "×"
                    </button>
                </div>
                <div class="finder-sidebar-section">"Favorites"</div>
                <nav class="finder-nav">
                    {FinderTab::FAVORITES
                        .into_iter()
                        .map(|tab| view! { <NavItem tab=tab state=state /> })
                        .collect_view()}
                </nav>
                <div class="finder-sidebar-section">"Locations"</div>
                <nav class="finder-nav">
                    <NavItem tab=FinderTab::Recents state=state />
                </nav>
            </aside>

            <section class="finder-content">
                <header class="finder-toolbar">
                    <button
                        type="button"
                        class="finder-menu-button"
                        aria-label="Open menu"
                        on:click=move |_| state.update(|s| s.open_sidebar())
                    >
                        "☰"
                    </button>
                    <span class="finder-toolbar-title">{move || active_tab.get().label()}</span>
                    <button
                        type="button"
                        class=move || {
                            if state.with(|s| s.edit_mode()) {
                                "finder-edit-toggle active"
                            } else {
                                "finder-edit-toggle"
                            }
                        }
                        on:click=move |_| state.update(|s| s.toggle_edit_mode())
                    >
                        {move || if state.with(|s| s.edit_mode()) { "Done" } else { "Edit" }}
                    </button>
                </header>

                <div class="finder-panel">
                    {move || match active_tab.get() {
                        FinderTab::Overview => overview_panel(content).into_view(),
                        FinderTab::Experience => experience_panel(content, services).into_view(),
                        FinderTab::Projects => view! {
                            <ProjectsPanel content=content services=services />
                        }
                        .into_view(),
                        FinderTab::Skills => skills_panel(content).into_view(),
                        FinderTab::Education => education_panel(content).into_view(),
                        FinderTab::Contact => view! {
                            <ContactPanel content=content state=state services=services />
                        }
                        .into_view(),
                        FinderTab::Recents => recents_panel(content).into_view(),
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn NavItem(tab: FinderTab, state: RwSignal<FinderViewState>) -> impl IntoView {
    let is_active = Signal::derive(move || state.with(|s| s.active_tab() == tab));
    view! {
        <button
            type="button"
            class=move || if is_active.get() { "finder-nav-item active" } else { "finder-nav-item" }
            title=tab.label()
            on:click=move |_| state.update(|s| s.select_tab(tab))
        >
            <span>{tab.label()}</span>
            <Show when=move || state.with(|s| s.edit_mode()) fallback=|| ()>
                <span class="finder-nav-remove" aria-hidden="true">"−"</span>
            </Show>
        </button>
    }
}

fn tag_list(items: &'static [String]) -> impl IntoView {
    view! {
        <ul class="finder-tags">
            {items.iter().map(|item| view! { <li>{item.as_str()}</li> }).collect_view()}
        </ul>
    }
}

fn overview_panel(content: &'static Portfolio) -> impl IntoView {
    let profile = &content.profile;
    let details = &profile.personal_details;
    view! {
        <article class="finder-overview">
            <img class="finder-avatar" src=profile.avatar.as_str() alt=profile.name.as_str() />
            <h1>{profile.name.as_str()}</h1>
            <p class="finder-role">{profile.role.as_str()}</p>
            <p class="finder-location">{profile.location.as_str()}</p>
            <p class="finder-objective">{profile.objective.as_str()}</p>
            <dl class="finder-details">
                <dt>"Date of Birth"</dt><dd>{details.date_of_birth.as_str()}</dd>
                <dt>"Nationality"</dt><dd>{details.nationality.as_str()}</dd>
            </dl>
            <h3>"Languages"</h3>
            {tag_list(&details.languages)}
            <h3>"Soft Skills"</h3>
            {tag_list(&details.soft_skills)}
            <h3>"Hobbies"</h3>
            {tag_list(&details.hobbies)}
        </article>
    }
}

/// Card class for a project; only cards with a link are clickable.
fn project_card_class(link: Option<&str>) -> &'static str {
    if link.is_some() {
        "finder-project-card linked"
    } else {
        "finder-project-card"
    }
}

fn experience_panel(content: &'static Portfolio, services: AppServices) -> impl IntoView {
    view! {
        <div class="finder-experience">
            {content
                .experience
                .iter()
                .map(|entry| {
                    let key_projects = (!entry.projects.is_empty()).then(|| {
                        view! {
                            <h4>"Key Projects"</h4>
                            <div class="finder-key-projects">
                                {entry
                                    .projects
                                    .iter()
                                    .map(|reference| view! {
                                        <KeyProjectCard reference=reference services=services />
                                    })
                                    .collect_view()}
                            </div>
                        }
                    });
                    let achievements = (!entry.achievements.is_empty()).then(|| {
                        view! {
                            <h4>"Key Achievements"</h4>
                            <ul class="finder-achievements">
                                {entry
                                    .achievements
                                    .iter()
                                    .map(|item| view! { <li>{item.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    });
                    view! {
                        <article class="finder-experience-entry">
                            <h2>{entry.role.as_str()}</h2>
                            <p class="finder-company">
                                {entry.company.as_str()} " · " {entry.location.as_str()}
                            </p>
                            <p class="finder-duration">{entry.duration.as_str()}</p>
                            <ul>
                                {entry
                                    .responsibilities
                                    .iter()
                                    .map(|item| view! { <li>{item.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                            {key_projects}
                            {achievements}
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn KeyProjectCard(reference: &'static ProjectReference, services: AppServices) -> impl IntoView {
    let link = reference.link();
    view! {
        <div
            class=project_card_class(link)
            on:click=move |_| {
                if let Some(url) = link {
                    services.launcher.browse(url);
                }
            }
        >
            <div class="finder-project-header">
                <span class="finder-key-project-name">{reference.name.as_str()}</span>
                {link.map(|_| view! { <span class="finder-project-link-hint" aria-hidden="true">"↗"</span> })}
            </div>
            <p>{reference.description.as_str()}</p>
        </div>
    }
}

#[component]
fn ProjectsPanel(content: &'static Portfolio, services: AppServices) -> impl IntoView {
    view! {
        <div class="finder-projects">
            {content
                .showcase_projects()
                .into_iter()
                .map(|project| view! { <ProjectCard project=project services=services /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: ShowcaseProject<'static>, services: AppServices) -> impl IntoView {
    let url = project.url;
    let open_in_browser = move |_| {
        if let Some(url) = url {
            services.launcher.browse(url);
        }
    };
    let external_link = url.map(|url| {
        view! {
            <button
                type="button"
                class="finder-project-external"
                title="Open External Link"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    services.links.open_external(url);
                }
            >
                "↗"
            </button>
        }
    });

    view! {
        <div
            class=project_card_class(url)
            on:click=open_in_browser
        >
            <div class="finder-project-header">
                <h3>{project.title}</h3>
                {external_link}
            </div>
            <p>{project.description}</p>
            <span class="finder-project-stack">{project.stack}</span>
        </div>
    }
}

fn skills_panel(content: &'static Portfolio) -> impl IntoView {
    view! {
        <div class="finder-skills">
            {content
                .skills
                .iter()
                .map(|category| {
                    view! {
                        <section class="finder-skill-category">
                            <h3>{category.name.as_str()}</h3>
                            {tag_list(&category.items)}
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn education_panel(content: &'static Portfolio) -> impl IntoView {
    view! {
        <div class="finder-education">
            {content
                .education
                .iter()
                .map(|entry| {
                    view! {
                        <article class="finder-education-entry">
                            <h2>{entry.degree.as_str()}</h2>
                            <p>{entry.institution.as_str()} " · " {entry.years.as_str()}</p>
                            <p>{entry.details.as_str()}</p>
                        </article>
                    }
                })
                .collect_view()}
            <h3>"Certifications"</h3>
            <ul class="finder-certifications">
                {content
                    .certifications
                    .iter()
                    .map(|item| view! { <li>{item.as_str()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ContactPanel(
    content: &'static Portfolio,
    state: RwSignal<FinderViewState>,
    services: AppServices,
) -> impl IntoView {
    let contact = &content.profile.contact;
    let email = contact.email.as_str();
    let notice = create_rw_signal::<Option<String>>(None);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match state.with_untracked(|s| s.contact.mailto(email)) {
            Ok(uri) => {
                notice.set(None);
                services.links.open_external(uri);
            }
            Err(err) => notice.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="finder-contact">
            <section class="finder-contact-card">
                <p>"Email: " {email}</p>
                <p>"Phone: " {contact.phone.as_str()}</p>
                <ul class="finder-social">
                    {contact
                        .social
                        .iter()
                        .map(move |link| {
                            let url = link.url.as_str();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        on:click=move |_| services.launcher.browse(url)
                                    >
                                        {link.platform.as_str()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    type="button"
                    class="finder-compose"
                    on:click=move |_| services.launcher.open_app(AppId::Mail, None)
                >
                    "Compose in Mail"
                </button>
            </section>

            <form class="finder-contact-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Your Name"
                    prop:value=move || state.with(|s| s.contact.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.contact.name = value);
                    }
                />
                <input
                    type="text"
                    placeholder=DEFAULT_SUBJECT
                    prop:value=move || state.with(|s| s.contact.subject.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.contact.subject = value);
                    }
                />
                <textarea
                    rows="6"
                    placeholder="How can I help you?"
                    prop:value=move || state.with(|s| s.contact.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.contact.message = value);
                    }
                />
                <Show when=move || notice.with(Option::is_some) fallback=|| ()>
                    <p class="finder-contact-notice" role="alert">
                        {move || notice.get().unwrap_or_default()}
                    </p>
                </Show>
                <button type="submit">"Open Mail Client"</button>
            </form>
        </div>
    }
}

fn recents_panel(content: &'static Portfolio) -> impl IntoView {
    view! {
        <ul class="finder-recents">
            {content
                .recent_files
                .iter()
                .map(|file| {
                    view! {
                        <li class="finder-recent-file">
                            <span class="finder-recent-name">{file.name.as_str()}</span>
                            <span class="finder-recent-meta">
                                {file.kind.to_uppercase()} " • " {file.date.as_str()}
                            </span>
                        </li>
                    }
                })
                .collect_view()}
            <li class="finder-recent-file">
                <span class="finder-recent-name">"Full_Resume.pdf"</span>
                <span class="finder-recent-meta">"PDF • Available on Request"</span>
            </li>
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_linked_projects_get_clickable_cards() {
        assert_eq!(project_card_class(None), "finder-project-card");
        assert_eq!(
            project_card_class(Some("https://blackfxtudio.com")),
            "finder-project-card linked"
        );
    }

    #[test]
    fn every_experience_project_reference_resolves_its_link() {
        for entry in &portfolio().experience {
            for reference in &entry.projects {
                assert_eq!(
                    project_card_class(reference.link()) == "finder-project-card linked",
                    reference.url.as_deref().is_some_and(|url| !url.trim().is_empty()),
                    "{}",
                    reference.name
                );
            }
        }
    }
}
