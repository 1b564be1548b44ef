use leptos::prelude::*;

use chirp::loader::ModuleExports;
use chirp::router::RouteKey;

use super::super::loaders::page;
use super::super::prefetch_link::PrefetchLink;
use super::super::router::Navigator;
use super::super::Renderable;

pub(crate) fn not_found_exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|_params| view! { <NotFoundPage /> }.into_any()))
}

pub(crate) fn server_error_exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|_params| {
        view! { <ServerErrorScreen message="Something went wrong.".to_string() /> }.into_any()
    }))
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <div class="error-code">"404"</div>
            <h1>"This page flew away."</h1>
            <p class="subtle">"The address doesn't match anything we know about."</p>
            <PrefetchLink href="/" prefetch=RouteKey::Home class={"btn primary".to_string()}>
                "Back to home"
            </PrefetchLink>
        </div>
    }
}

/// Generic failure screen for a route whose module failed to load. The
/// retry re-renders the route; a load that already failed is memoized for
/// the session, so recovering from a real outage takes a hard reload.
#[component]
pub(crate) fn ServerErrorScreen(message: String) -> impl IntoView {
    let nav = expect_context::<Navigator>();

    view! {
        <div class="error-page">
            <div class="error-code">"500"</div>
            <h1>"Something went wrong."</h1>
            <p class="subtle">{message}</p>
            <div class="error-actions">
                <button class="btn primary" on:click=move |_| nav.refresh()>
                    "Try again"
                </button>
                <PrefetchLink href="/" prefetch=RouteKey::Home class={"btn ghost".to_string()}>
                    "Back to home"
                </PrefetchLink>
            </div>
        </div>
    }
}
