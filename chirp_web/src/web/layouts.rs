//! The three shell layouts. Each is exported as a named entry, loaded
//! through `lazy_named`, and places its matched child route in the outlet.

use leptos::prelude::*;

use chirp::loader::ModuleExports;
use chirp::router::RouteKey;
use chirp::store::ProjectStore;

use super::loaders::layout;
use super::prefetch_link::PrefetchLink;
use super::router::CurrentPath;
use super::shell::{Footer, Navbar, PaletteOpen, ThemeToggle};
use super::storage;
use super::theme::Theme;
use super::Renderable;

pub(crate) fn dashboard_exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_named(
        "DashboardLayout",
        layout(|_params, outlet| view! { <DashboardLayout outlet=outlet /> }.into_any()),
    )
}

pub(crate) fn project_detail_exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_named(
        "ProjectDetailLayout",
        layout(|params, outlet| {
            let project_id = params.get("project_id").unwrap_or_default().to_string();
            view! { <ProjectDetailLayout project_id=project_id outlet=outlet /> }.into_any()
        }),
    )
}

pub(crate) fn docs_exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_named(
        "DocsLayout",
        layout(|_params, outlet| view! { <DocsLayout outlet=outlet /> }.into_any()),
    )
}

/// Active-link class for a sidebar entry. `exact` pins the dashboard index
/// so it does not light up for every nested page.
fn nav_class(path: ReadSignal<String>, href: &'static str, exact: bool) -> Signal<String> {
    Signal::derive(move || {
        let p = path.get();
        let p = p.trim_end_matches('/');
        let p = if p.is_empty() { "/" } else { p };
        let active = if exact { p == href } else { p.starts_with(href) };
        if active {
            "sidebar-item active".to_string()
        } else {
            "sidebar-item".to_string()
        }
    })
}

#[component]
fn DashboardLayout(outlet: AnyView) -> impl IntoView {
    let path = expect_context::<CurrentPath>().0;
    let theme = expect_context::<RwSignal<Theme>>();
    let PaletteOpen(palette_open) = expect_context::<PaletteOpen>();

    let (collapsed, set_collapsed) = signal(
        storage::load_persisted_settings()
            .map(|s| s.sidebar_collapsed)
            .unwrap_or(false),
    );
    let toggle_sidebar = move |_| {
        let next = !collapsed.get_untracked();
        set_collapsed.set(next);
        let mut settings = storage::load_persisted_settings().unwrap_or_default();
        settings.sidebar_collapsed = next;
        storage::save_persisted_settings(&settings);
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="dashboard-header-left">
                    <button class="icon-btn sidebar-toggle" title="Menu" on:click=toggle_sidebar>
                        "☰"
                    </button>
                    <PrefetchLink href="/" prefetch=RouteKey::Home class={"brand".to_string()}>
                        "Chirp"
                    </PrefetchLink>
                </div>
                <div class="dashboard-header-right">
                    <button
                        class="btn sm ghost"
                        title="Command palette (Ctrl+K)"
                        on:click=move |_| palette_open.set(true)
                    >
                        "⌘K"
                    </button>
                    <ThemeToggle theme=theme />
                </div>
            </header>

            <aside class=move || {
                if collapsed.get() { "sidebar collapsed" } else { "sidebar" }
            }>
                <nav class="sidebar-section">
                    <PrefetchLink
                        href="/dashboard"
                        prefetch=RouteKey::Overview
                        class=nav_class(path, "/dashboard", true)
                    >
                        "Overview"
                    </PrefetchLink>
                    <PrefetchLink
                        href="/dashboard/projects"
                        prefetch=RouteKey::Projects
                        class=nav_class(path, "/dashboard/projects", false)
                    >
                        "Projects"
                    </PrefetchLink>
                    <PrefetchLink
                        href="/dashboard/subscription"
                        prefetch=RouteKey::Subscription
                        class=nav_class(path, "/dashboard/subscription", false)
                    >
                        "Subscription"
                    </PrefetchLink>
                    <PrefetchLink
                        href="/dashboard/settings"
                        prefetch=RouteKey::Settings
                        class=nav_class(path, "/dashboard/settings", false)
                    >
                        "Settings"
                    </PrefetchLink>
                </nav>
            </aside>

            <main class="dashboard-main">{outlet}</main>
        </div>
    }
}

#[component]
fn ProjectDetailLayout(project_id: String, outlet: AnyView) -> impl IntoView {
    let path = expect_context::<CurrentPath>().0;
    let projects = expect_context::<RwSignal<ProjectStore>>();

    let id = project_id.clone();
    let title = Signal::derive(move || {
        projects.with(|s| {
            s.get(&id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown project".to_string())
        })
    });
    let id = project_id.clone();
    let url = Signal::derive(move || {
        projects.with(|s| s.get(&id).map(|p| p.url.clone()).unwrap_or_default())
    });

    let feedbacks_href = format!("/dashboard/projects/{project_id}");
    let settings_href = format!("/dashboard/projects/{project_id}/settings");

    let tab_class = |active: Signal<bool>| {
        Signal::derive(move || {
            if active.get() {
                "tab active".to_string()
            } else {
                "tab".to_string()
            }
        })
    };
    let feedbacks_active = {
        let href = feedbacks_href.clone();
        Signal::derive(move || path.get().trim_end_matches('/') == href)
    };
    let settings_active = {
        let href = settings_href.clone();
        Signal::derive(move || path.get().trim_end_matches('/') == href)
    };

    view! {
        <section class="project-detail">
            <div class="project-detail-header">
                <PrefetchLink
                    href="/dashboard/projects"
                    prefetch=RouteKey::Projects
                    class={"back-link".to_string()}
                >
                    "← Projects"
                </PrefetchLink>
                <h1 class="project-title">{move || title.get()}</h1>
                <span class="subtle">{move || url.get()}</span>
            </div>

            <nav class="tabs">
                <PrefetchLink
                    href=feedbacks_href
                    prefetch=RouteKey::ProjectFeedbacks
                    class=tab_class(feedbacks_active)
                >
                    "Feedbacks"
                </PrefetchLink>
                <PrefetchLink
                    href=settings_href
                    prefetch=RouteKey::ProjectSettings
                    class=tab_class(settings_active)
                >
                    "Settings"
                </PrefetchLink>
            </nav>

            <div class="project-detail-body">{outlet}</div>
        </section>
    }
}

#[component]
fn DocsLayout(outlet: AnyView) -> impl IntoView {
    let path = expect_context::<CurrentPath>().0;

    let doc_class = |active: Signal<bool>| {
        Signal::derive(move || {
            if active.get() {
                "docs-nav-item active".to_string()
            } else {
                "docs-nav-item".to_string()
            }
        })
    };
    let overview_active = Signal::derive(move || {
        let p = path.get();
        let p = p.trim_end_matches('/');
        p == "/docs" || p == "/docs/overview"
    });
    let implementation_active =
        Signal::derive(move || path.get().trim_end_matches('/') == "/docs/implementation");

    view! {
        <div class="docs">
            <Navbar />
            <div class="docs-body">
                <aside class="docs-sidebar">
                    <div class="docs-sidebar-title">"Documentation"</div>
                    <PrefetchLink
                        href="/docs/overview"
                        prefetch=RouteKey::DocsOverview
                        class=doc_class(overview_active)
                    >
                        "Overview"
                    </PrefetchLink>
                    <PrefetchLink
                        href="/docs/implementation"
                        prefetch=RouteKey::DocsImplementation
                        class=doc_class(implementation_active)
                    >
                        "Implementation"
                    </PrefetchLink>
                </aside>
                <main class="docs-content">{outlet}</main>
            </div>
            <Footer />
        </div>
    }
}
