//! The route-key → module loader table.
//!
//! Each entry stands in for a code-split chunk: an async constructor that
//! yields the module's exports, adapted through `lazy_default`/`lazy_named`
//! depending on how the module exposes its renderable. Layouts are named
//! exports, pages default exports, matching the shapes the adapters erase.

use std::rc::Rc;

use leptos::prelude::*;

use chirp::loader::{lazy_default, lazy_named, ImportFn, LoaderTable, ModuleExports};
use chirp::router::{RouteKey, RouteParams};

use super::{layouts, pages, Renderable};

pub(crate) fn loader_table() -> LoaderTable<Renderable> {
    LoaderTable::build(|key| match key {
        RouteKey::Home => lazy_default(import(pages::home::exports)),
        RouteKey::DashboardLayout => {
            lazy_named(import(layouts::dashboard_exports), "DashboardLayout")
        }
        RouteKey::ProjectDetailLayout => {
            lazy_named(import(layouts::project_detail_exports), "ProjectDetailLayout")
        }
        RouteKey::Overview => lazy_default(import(pages::overview::exports)),
        RouteKey::Projects => lazy_default(import(pages::projects::exports)),
        RouteKey::ProjectFeedbacks => lazy_default(import(pages::project_feedbacks::exports)),
        RouteKey::ProjectSettings => lazy_default(import(pages::project_settings::exports)),
        RouteKey::Settings => lazy_default(import(pages::settings::exports)),
        RouteKey::Subscription => lazy_default(import(pages::subscription::exports)),
        RouteKey::DocsLayout => lazy_named(import(layouts::docs_exports), "DocsLayout"),
        RouteKey::DocsOverview => lazy_default(import(pages::docs::overview_exports)),
        RouteKey::DocsImplementation => lazy_default(import(pages::docs::implementation_exports)),
        RouteKey::NotFound => lazy_default(import(pages::errors::not_found_exports)),
        RouteKey::ServerError => lazy_default(import(pages::errors::server_error_exports)),
    })
}

fn import(exports: fn() -> ModuleExports<Renderable>) -> ImportFn<Renderable> {
    Box::new(move || Box::pin(async move { Ok(exports()) }))
}

/// Wraps a parameterless-outlet view factory as a page renderable.
pub(crate) fn page(render: impl Fn(&RouteParams) -> AnyView + 'static) -> Renderable {
    let render = Rc::new(render);
    Rc::new(move |params, _outlet| render(params))
}

/// Wraps a view factory that places a child view in its outlet.
pub(crate) fn layout(render: impl Fn(&RouteParams, AnyView) -> AnyView + 'static) -> Renderable {
    Rc::new(move |params, outlet| render(params, outlet.unwrap_or_else(|| ().into_any())))
}
