use std::rc::Rc;

use leptos::prelude::*;

use chirp::cache::RouteModuleCache;
use chirp::router::RouteParams;
use chirp::store::{FeedbackStore, ProjectStore};

mod early_access;
mod layouts;
mod loaders;
mod markdown;
mod pages;
mod prefetch_link;
mod router;
mod shell;
mod storage;
mod theme;

use router::{current_path, RouterHost};
use shell::{CommandPalette, ToastStack, Toasts};

/// The normalized, mountable shape of every lazily-loaded module: a view
/// factory taking the matched route's params and, for layouts, the child
/// view to place in the outlet.
pub(crate) type Renderable = Rc<dyn Fn(&RouteParams, Option<AnyView>) -> AnyView>;

pub(crate) type RouteCache = RouteModuleCache<Renderable>;

/// Arena handle so the (`!Send`) cache can travel through context while the
/// signals around it stay plain.
pub(crate) type CacheHandle = StoredValue<Rc<RouteCache>, LocalStorage>;

/// Mock stores are seeded deterministically so the demo dashboard looks the
/// same on every visit.
const STORE_SEED: u64 = 2026;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let cache: CacheHandle = StoredValue::new_local(Rc::new(RouteModuleCache::new(
        loaders::loader_table(),
        |fut| wasm_bindgen_futures::spawn_local(fut),
    )));
    provide_context(cache);

    let projects = RwSignal::new(ProjectStore::with_mock_data(STORE_SEED));
    let feedbacks = RwSignal::new(FeedbackStore::with_mock_data());
    provide_context(projects);
    provide_context(feedbacks);

    let toasts = Toasts::new();
    provide_context(toasts);

    let theme = RwSignal::new(theme::initial_theme());
    provide_context(theme);
    Effect::new(move |_| {
        let t = theme.get();
        theme::apply_theme_to_document(t);
        theme::persist_theme(t);
    });

    let (path, set_path) = signal(current_path());
    provide_context(router::CurrentPath(path));
    provide_context(router::Navigator::new(path, set_path));
    router::listen_popstate(set_path);

    let palette_open = RwSignal::new(false);
    provide_context(shell::PaletteOpen(palette_open));

    view! {
        <RouterHost path=path />
        <CommandPalette />
        <ToastStack toasts=toasts />
    }
}
