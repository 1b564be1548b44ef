//! Docs pages. Content ships with the bundle as Markdown and renders at
//! mount; the lazy boundary is the module itself, like every other route.

use leptos::prelude::*;

use chirp::loader::ModuleExports;

use super::super::loaders::page;
use super::super::markdown::render_markdown;
use super::super::Renderable;

const OVERVIEW_MD: &str = include_str!("../../../content/overview.md");
const IMPLEMENTATION_MD: &str = include_str!("../../../content/implementation.md");

pub(crate) fn overview_exports() -> ModuleExports<Renderable> {
    ModuleExports::new()
        .with_default(page(|_params| view! { <DocPage source=OVERVIEW_MD /> }.into_any()))
}

pub(crate) fn implementation_exports() -> ModuleExports<Renderable> {
    ModuleExports::new()
        .with_default(page(|_params| view! { <DocPage source=IMPLEMENTATION_MD /> }.into_any()))
}

#[component]
fn DocPage(source: &'static str) -> impl IntoView {
    view! { <article class="doc-article" inner_html=render_markdown(source)></article> }
}
