//! Browser glue for the core route matcher.
//!
//! One signal holds the current path. Link clicks and `popstate` write it;
//! an effect re-matches on every change, asks the cache to resolve the
//! matched module chain, and flips the host between pending, mounted and
//! failed views. A load started for an abandoned navigation keeps running
//! and stays memoized for the next visit; its outcome just never clobbers
//! the newer route's state.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use chirp::router::{match_path, RouteMatch};

use super::pages::errors::ServerErrorScreen;
use super::shell::GlobalProgressBar;
use super::CacheHandle;

/// Read side of the current path, for active-link styling.
#[derive(Clone, Copy)]
pub(crate) struct CurrentPath(pub ReadSignal<String>);

#[derive(Clone, Copy)]
pub(crate) struct Navigator {
    path: ReadSignal<String>,
    set_path: WriteSignal<String>,
}

impl Navigator {
    pub(crate) fn new(path: ReadSignal<String>, set_path: WriteSignal<String>) -> Self {
        Self { path, set_path }
    }

    /// Client-side navigation: push a history entry and re-match.
    pub(crate) fn navigate(&self, to: &str) {
        push_history(to);
        self.set_path.set(to.to_string());
        scroll_to_top();
    }

    /// Re-runs matching and resolution for the current path without adding
    /// a history entry. Memoized loads are reused, so a settled failure
    /// stays a failure until the page is hard-reloaded.
    pub(crate) fn refresh(&self) {
        self.set_path.set(self.path.get_untracked());
    }
}

#[derive(Clone, PartialEq)]
enum RouteState {
    Loading,
    Ready,
    Failed(String),
}

#[component]
pub(crate) fn RouterHost(path: ReadSignal<String>) -> impl IntoView {
    let cache = expect_context::<CacheHandle>();

    let (matched, set_matched) = signal(match_path(&path.get_untracked()));
    let (state, set_state) = signal(RouteState::Loading);

    Effect::new(move |_| {
        let p = path.get();
        let m = match_path(&p);
        set_document_title(m.title);
        set_matched.set(m.clone());

        let loads: Vec<_> = cache.with_value(|c| m.chain.iter().map(|&k| c.resolve(k)).collect());

        // Revisited routes mount synchronously from the memoized entries;
        // only genuinely pending chains show the progress indicator.
        if loads.iter().all(|load| load.peek().is_some()) {
            set_state.set(settled_state(&m, cache));
            return;
        }

        set_state.set(RouteState::Loading);
        spawn_local(async move {
            let mut failure = None;
            for load in loads {
                if let Err(e) = load.await {
                    failure = Some(e.to_string());
                    break;
                }
            }
            // Stale completion: the user already navigated elsewhere.
            if path.get_untracked() != p {
                return;
            }
            set_state.set(match failure {
                Some(message) => RouteState::Failed(message),
                None => RouteState::Ready,
            });
        });
    });

    view! {
        {move || match state.get() {
            RouteState::Loading => view! { <GlobalProgressBar /> }.into_any(),
            RouteState::Failed(message) => {
                view! { <ServerErrorScreen message=message /> }.into_any()
            }
            RouteState::Ready => mount_chain(cache, &matched.get()),
        }}
    }
}

fn settled_state(m: &RouteMatch, cache: CacheHandle) -> RouteState {
    for &key in &m.chain {
        if let Some(Err(e)) = cache.with_value(|c| c.peek(key)) {
            return RouteState::Failed(e.to_string());
        }
    }
    RouteState::Ready
}

/// Composes the resolved chain inner-to-outer: the page renders first, then
/// each layout wraps it through its outlet.
fn mount_chain(cache: CacheHandle, m: &RouteMatch) -> AnyView {
    let mut view: Option<AnyView> = None;
    for &key in m.chain.iter().rev() {
        match cache.with_value(|c| c.peek(key)) {
            Some(Ok(module)) => {
                view = Some((module.renderable)(&m.params, view.take()));
            }
            Some(Err(e)) => {
                return view! { <ServerErrorScreen message=e.to_string() /> }.into_any();
            }
            None => return view! { <GlobalProgressBar /> }.into_any(),
        }
    }
    view.unwrap_or_else(|| ().into_any())
}

pub(crate) fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub(crate) fn listen_popstate(set_path: WriteSignal<String>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::wrap(Box::new(move || {
        set_path.set(current_path());
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref());
    cb.forget();
}

fn push_history(to: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(to));
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}
