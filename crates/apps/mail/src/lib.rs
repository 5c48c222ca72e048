//! Mail desktop app: a composer addressed to the portfolio owner with a simulated send.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod composer;

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::{ev::SubmitEvent, logging, *};
use portfolio_content::portfolio;

pub use composer::{MailComposer, MailStatus, SEND_DELAY, SENT_BANNER_DELAY};

const MAILBOXES: [&str; 4] = ["Inbox", "VIP", "Sent", "Drafts"];

/// Mount entry used by the runtime app registry.
pub fn mount(context: AppMountContext) -> View {
    view! { <MailApp services=context.services /> }.into_view()
}

fn send_label(status: &MailStatus) -> &'static str {
    match status {
        MailStatus::Idle | MailStatus::Failed(_) => "Send",
        MailStatus::Sending => "Sending...",
        MailStatus::Sent => "Sent",
    }
}

#[component]
/// Mail window contents.
pub fn MailApp(
    /// Injected runtime services.
    services: AppServices,
) -> impl IntoView {
    let profile = &portfolio().profile;
    let composer = create_rw_signal(MailComposer::default());
    let dark_mode = services.theme.dark_mode;

    let send = move || {
        let started = composer
            .try_update(|composer| composer.begin_send())
            .unwrap_or(false);
        if !started {
            return;
        }
        logging::log!("mail: sending simulated message");
        set_timeout(
            move || {
                composer.update(|composer| composer.complete_send());
                logging::log!("mail: simulated message sent");
                set_timeout(
                    move || composer.update(|composer| composer.acknowledge()),
                    SENT_BANNER_DELAY,
                );
            },
            SEND_DELAY,
        );
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        send();
    };

    view! {
        <div class=move || if dark_mode.get() { "app-mail mail-dark" } else { "app-mail" }>
            <aside class="mail-sidebar">
                <div class="mail-sidebar-section">"Mailboxes"</div>
                <ul class="mail-mailboxes">
                    {MAILBOXES
                        .into_iter()
                        .enumerate()
                        .map(|(idx, name)| {
                            view! {
                                <li class={if idx == 0 { "mail-mailbox active" } else { "mail-mailbox" }}>
                                    {name}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="mail-sidebar-footer">"Updated Just Now"</div>
            </aside>

            <section class="mail-compose">
                <header class="mail-toolbar">
                    <button
                        type="button"
                        class=move || {
                            if composer.with(|c| *c.status() == MailStatus::Sent) {
                                "mail-send sent"
                            } else {
                                "mail-send"
                            }
                        }
                        disabled=move || {
                            composer.with(|c| matches!(c.status(), MailStatus::Sending | MailStatus::Sent))
                        }
                        on:click=move |_| send()
                    >
                        {move || composer.with(|c| send_label(c.status()))}
                    </button>
                </header>

                <form class="mail-form" on:submit=on_submit>
                    <div class="mail-field">
                        <span class="mail-field-label">"To:"</span>
                        <span class="mail-recipient">
                            <strong>{profile.name.as_str()}</strong>
                            <span class="mail-recipient-address">
                                {format!("<{}>", profile.contact.email)}
                            </span>
                        </span>
                    </div>
                    <div class="mail-field">
                        <span class="mail-field-label">"Cc:"</span>
                        <input type="text" class="mail-input" />
                    </div>
                    <div class="mail-field">
                        <span class="mail-field-label">"Subject:"</span>
                        <input
                            type="text"
                            class="mail-input"
                            placeholder="Project Inquiry..."
                            prop:value=move || composer.with(|c| c.subject.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                composer.update(|c| c.subject = value);
                            }
                        />
                    </div>
                    <textarea
                        class="mail-body"
                        placeholder="Write your message here..."
                        prop:value=move || composer.with(|c| c.body.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            composer.update(|c| c.body = value);
                        }
                    />
                </form>

                {move || match composer.with(|c| c.status().clone()) {
                    MailStatus::Sent => view! {
                        <div class="mail-toast" role="status">"Message sent successfully!"</div>
                    }
                    .into_view(),
                    MailStatus::Failed(reason) => view! {
                        <div class="mail-toast error" role="alert">{format!("Send failed: {reason}")}</div>
                    }
                    .into_view(),
                    MailStatus::Idle | MailStatus::Sending => ().into_view(),
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn send_button_label_tracks_status() {
        assert_eq!(send_label(&MailStatus::Idle), "Send");
        assert_eq!(send_label(&MailStatus::Sending), "Sending...");
        assert_eq!(send_label(&MailStatus::Sent), "Sent");
        assert_eq!(send_label(&MailStatus::Failed("x".to_string())), "Send");
    }
}
