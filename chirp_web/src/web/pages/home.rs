//! Landing page: hero, product demo blurb, features, how-it-works and the
//! early-access form, the one surface that talks to a real backend.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use chirp::loader::ModuleExports;
use chirp::router::RouteKey;

use super::super::early_access::register_for_early_access;
use super::super::loaders::page;
use super::super::prefetch_link::PrefetchLink;
use super::super::shell::{Footer, Navbar, ToastLevel, Toasts};
use super::super::Renderable;

pub(crate) fn exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|_params| view! { <HomePage /> }.into_any()))
}

struct Feature {
    title: &'static str,
    blurb: &'static str,
    icon: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Pin feedback to elements",
        blurb: "Reporters click the exact button, image or paragraph they mean. \
                You get the CSS selector, page path and browser with every note.",
        icon: "📌",
    },
    Feature {
        title: "One-line install",
        blurb: "A single script tag with your project key. No SDK, no build step, \
                works on any stack.",
        icon: "⚡",
    },
    Feature {
        title: "Triage built in",
        blurb: "Bugs, design notes and feature requests land pre-classified with \
                priority and status you can update inline.",
        icon: "🗂️",
    },
    Feature {
        title: "Local-first testing",
        blurb: "Point a project at localhost and collect feedback from your own \
                dev builds before anything ships.",
        icon: "🧪",
    },
];

const STEPS: &[(&str, &str)] = &[
    ("Create a project", "Register your site and get a project key."),
    ("Drop in the widget", "Paste the snippet before </body>. That's the install."),
    ("Collect feedback", "Visitors leave notes pinned to real elements."),
    ("Triage in the dashboard", "Filter, prioritize and resolve in one place."),
];

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Navbar />

            <section class="hero">
                <h1 class="hero-title">"Feedback, exactly where it happens."</h1>
                <p class="hero-sub">
                    "Chirp is a tiny widget your users click to leave notes pinned to the "
                    "exact element they mean — and a dashboard where your team triages them."
                </p>
                <div class="hero-actions">
                    <PrefetchLink
                        href="/dashboard"
                        prefetch=RouteKey::DashboardLayout
                        class={"btn primary".to_string()}
                    >
                        "Open the demo dashboard"
                    </PrefetchLink>
                    <PrefetchLink
                        href="/docs"
                        prefetch=RouteKey::DocsLayout
                        class={"btn ghost".to_string()}
                    >
                        "Read the docs"
                    </PrefetchLink>
                </div>
            </section>

            <section class="demo-preview">
                <div class="demo-frame">
                    <div class="demo-pin" style="top: 38%; left: 62%;">"💬"</div>
                    <div class="demo-note">
                        <div class="demo-note-kind">"bug · high"</div>
                        "Checkout button is misaligned on mobile"
                        <div class="demo-note-meta">"button.checkout-btn · /checkout"</div>
                    </div>
                </div>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-icon">{f.icon}</div>
                                <h3 class="feature-title">{f.title}</h3>
                                <p class="feature-blurb">{f.blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="how-it-works">
                <h2>"How it works"</h2>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <li class="step">
                                    <div class="step-title">{*title}</div>
                                    <div class="step-blurb">{*blurb}</div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <EarlyAccessSection />

            <Footer />
        </div>
    }
}

#[component]
fn EarlyAccessSection() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (registered, set_registered) = signal(false);

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);

        let name = name.get_untracked();
        let email = email.get_untracked();
        spawn_local(async move {
            let response = register_for_early_access(&name, &email).await;
            set_submitting.set(false);

            if response.success {
                set_registered.set(true);
                let message = response
                    .message
                    .unwrap_or_else(|| "You're on the list — we'll be in touch.".to_string());
                toasts.push(ToastLevel::Success, message);
                if let Some(warning) = response.warning {
                    toasts.push(ToastLevel::Info, warning);
                }
            } else {
                let mut message = response
                    .error
                    .unwrap_or_else(|| "Registration failed".to_string());
                if let Some(secs) = response.retry_after {
                    message = format!("{message} (try again in {secs}s)");
                }
                set_form_error.set(Some(message));
            }
        });
    };

    view! {
        <section id="early-access" class="early-access">
            <h2>"Get early access"</h2>
            <p class="subtle">"We're onboarding teams in small batches."</p>

            <Show
                when=move || !registered.get()
                fallback=|| {
                    view! {
                        <div class="early-access-done">
                            "🎉 Thanks — your spot is reserved."
                        </div>
                    }
                }
            >
                <div class="early-access-form">
                    <input
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button class="btn primary" disabled=move || submitting.get() on:click=submit>
                        {move || if submitting.get() { "Sending…" } else { "Request access" }}
                    </button>
                </div>
                <Show when=move || form_error.get().is_some()>
                    <div class="form-error">{move || form_error.get().unwrap_or_default()}</div>
                </Show>
            </Show>
        </section>
    }
}
