use leptos::prelude::*;

use chirp::loader::ModuleExports;

use super::super::loaders::page;
use super::super::shell::{ToastLevel, Toasts};
use super::super::theme::Theme;
use super::super::Renderable;

pub(crate) fn exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|_params| view! { <SettingsPage /> }.into_any()))
}

/// Account settings. Everything here is session state; the demo has no
/// account backend to persist to.
#[component]
fn SettingsPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let theme = expect_context::<RwSignal<Theme>>();

    let (display_name, set_display_name) = signal("Alice Moreau".to_string());
    let (email, set_email) = signal("alice@example.com".to_string());
    let (notify_new, set_notify_new) = signal(true);
    let (notify_digest, set_notify_digest) = signal(false);

    let save = move |_| {
        toasts.push(ToastLevel::Success, "Settings saved");
    };

    view! {
        <div class="settings">
            <h1 class="page-title">"Settings"</h1>

            <section class="panel">
                <h2>"Profile"</h2>
                <label class="field">
                    <span>"Display name"</span>
                    <input
                        type="text"
                        prop:value=move || display_name.get()
                        on:input=move |ev| set_display_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
            </section>

            <section class="panel">
                <h2>"Notifications"</h2>
                <label class="field inline">
                    <input
                        type="checkbox"
                        prop:checked=move || notify_new.get()
                        on:change=move |ev| set_notify_new.set(event_target_checked(&ev))
                    />
                    <span>"Email me when new feedback arrives"</span>
                </label>
                <label class="field inline">
                    <input
                        type="checkbox"
                        prop:checked=move || notify_digest.get()
                        on:change=move |ev| set_notify_digest.set(event_target_checked(&ev))
                    />
                    <span>"Weekly digest"</span>
                </label>
            </section>

            <section class="panel">
                <h2>"Appearance"</h2>
                <label class="field">
                    <span>"Theme"</span>
                    <select
                        prop:value=move || theme.get().label().to_string()
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            if v == Theme::Dark.label() {
                                theme.set(Theme::Dark);
                            } else if v == Theme::Light.label() {
                                theme.set(Theme::Light);
                            }
                        }
                    >
                        <option value=Theme::Dark.label()>"Dark"</option>
                        <option value=Theme::Light.label()>"Light"</option>
                    </select>
                </label>
            </section>

            <button class="btn primary" on:click=save>"Save settings"</button>
        </div>
    }
}
