//! A navigational anchor with hover-intent prefetch.
//!
//! The optional `prefetch` key starts the target module's load the moment
//! the pointer enters the link, so by click time the cache is usually warm.
//! The annotation is purely a timing optimization: the cache memoizes, so
//! repeated hovers are reads, and leaving it off only delays the load until
//! navigation.

use leptos::prelude::*;

use chirp::router::RouteKey;

use super::router::Navigator;
use super::CacheHandle;

#[component]
pub(crate) fn PrefetchLink(
    #[prop(into)] href: String,
    #[prop(optional, strip_option)] prefetch: Option<RouteKey>,
    #[prop(default = Signal::derive(String::new), into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let cache = expect_context::<CacheHandle>();
    let nav = expect_context::<Navigator>();
    let target = href.clone();

    view! {
        <a
            href=href
            class=move || class.get()
            on:mouseenter=move |_| {
                if let Some(key) = prefetch {
                    cache.with_value(|c| c.prefetch(key));
                }
            }
            on:click=move |ev| {
                // Let the browser have modified clicks (new tab etc.).
                if ev.default_prevented()
                    || ev.button() != 0
                    || ev.ctrl_key()
                    || ev.meta_key()
                    || ev.shift_key()
                    || ev.alt_key()
                {
                    return;
                }
                ev.prevent_default();
                nav.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
