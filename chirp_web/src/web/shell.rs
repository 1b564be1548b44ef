use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use chirp::router::RouteKey;

use super::prefetch_link::PrefetchLink;
use super::router::Navigator;
use super::theme::Theme;
use super::CacheHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Toast {
    pub(crate) id: u32,
    pub(crate) message: String,
    pub(crate) level: ToastLevel,
}

#[derive(Clone, Copy)]
pub(crate) struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub(crate) fn new() -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub(crate) fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.list.update(|list| {
            list.push(Toast {
                id,
                message: message.into(),
                level,
            });
            // Keep the stack short; oldest goes first.
            if list.len() > 5 {
                list.remove(0);
            }
        });
    }

    pub(crate) fn dismiss(&self, id: u32) {
        self.list.update(|list| list.retain(|t| t.id != id));
    }
}

#[component]
pub(crate) fn ToastStack(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            <For
                each=move || toasts.list.get()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.level {
                        ToastLevel::Info => "toast info",
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                    };
                    view! {
                        <div class=class>
                            <div style="flex: 1; white-space: pre-wrap;">{t.message}</div>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Thin indeterminate bar pinned to the top of the viewport while a route's
/// modules resolve.
#[component]
pub(crate) fn GlobalProgressBar() -> impl IntoView {
    view! {
        <div class="route-progress" role="progressbar" aria-label="Loading page">
            <div class="route-progress-bar"></div>
        </div>
    }
}

/// Marketing-side navbar: brand, section links, theme toggle. The dashboard
/// has its own header in the dashboard layout.
#[component]
pub(crate) fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <header class="navbar">
            <div class="navbar-left">
                <PrefetchLink href="/" prefetch=RouteKey::Home class={"brand".to_string()}>
                    <img class="brand-icon" src="chirp-icon.svg" alt="" aria-hidden="true" />
                    "Chirp"
                </PrefetchLink>
            </div>
            <nav class="navbar-links">
                <PrefetchLink href="/docs" prefetch=RouteKey::DocsLayout class={"nav-link".to_string()}>
                    "Docs"
                </PrefetchLink>
                <PrefetchLink
                    href="/dashboard"
                    prefetch=RouteKey::DashboardLayout
                    class={"nav-link".to_string()}
                >
                    "Dashboard"
                </PrefetchLink>
                <a class="nav-link" href="#early-access">"Early access"</a>
            </nav>
            <div class="navbar-right">
                <ThemeToggle theme=theme />
            </div>
        </header>
    }
}

#[component]
pub(crate) fn ThemeToggle(theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <button
            class="btn sm ghost"
            title=move || format!("Theme: {}", theme.get().label())
            on:click=move |_| theme.set(theme.get().toggle())
        >
            {move || theme.get().icon()}
            " "
            {move || theme.get().label()}
        </button>
    }
}

#[component]
pub(crate) fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-brand">"Chirp"</div>
            <div class="footer-blurb">
                "Visual feedback for the web, pinned to the exact element it is about."
            </div>
            <nav class="footer-links">
                <PrefetchLink href="/docs" prefetch=RouteKey::DocsLayout class={"footer-link".to_string()}>
                    "Documentation"
                </PrefetchLink>
                <PrefetchLink
                    href="/dashboard"
                    prefetch=RouteKey::DashboardLayout
                    class={"footer-link".to_string()}
                >
                    "Dashboard"
                </PrefetchLink>
            </nav>
        </footer>
    }
}

/// Whether the command palette overlay is open (the keyboard-first search
/// surface over the site's navigation targets).
#[derive(Clone, Copy)]
pub(crate) struct PaletteOpen(pub RwSignal<bool>);

struct PaletteEntry {
    label: &'static str,
    hint: &'static str,
    href: &'static str,
    prefetch: RouteKey,
}

const PALETTE_ENTRIES: &[PaletteEntry] = &[
    PaletteEntry {
        label: "Home",
        hint: "Landing page",
        href: "/",
        prefetch: RouteKey::Home,
    },
    PaletteEntry {
        label: "Documentation",
        hint: "Docs home",
        href: "/docs",
        prefetch: RouteKey::DocsLayout,
    },
    PaletteEntry {
        label: "Implementation guide",
        hint: "Add the widget to your site",
        href: "/docs/implementation",
        prefetch: RouteKey::DocsImplementation,
    },
    PaletteEntry {
        label: "Overview",
        hint: "Dashboard",
        href: "/dashboard",
        prefetch: RouteKey::DashboardLayout,
    },
    PaletteEntry {
        label: "Projects",
        hint: "Dashboard",
        href: "/dashboard/projects",
        prefetch: RouteKey::Projects,
    },
    PaletteEntry {
        label: "Subscription",
        hint: "Dashboard",
        href: "/dashboard/subscription",
        prefetch: RouteKey::Subscription,
    },
    PaletteEntry {
        label: "Settings",
        hint: "Dashboard",
        href: "/dashboard/settings",
        prefetch: RouteKey::Settings,
    },
];

#[component]
pub(crate) fn CommandPalette() -> impl IntoView {
    let PaletteOpen(open) = expect_context::<PaletteOpen>();
    let nav = expect_context::<Navigator>();
    let cache = expect_context::<CacheHandle>();
    let (query, set_query) = signal(String::new());

    listen_palette_shortcut(open);

    let go = move |href: &str| {
        open.set(false);
        set_query.set(String::new());
        nav.navigate(href);
    };

    view! {
        <Show when=move || open.get()>
            <div class="palette-overlay" on:click=move |_| open.set(false)>
                <div class="palette" on:click=move |ev| ev.stop_propagation()>
                    <input
                        class="palette-input"
                        type="text"
                        placeholder="Jump to…"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <div class="palette-results">
                        {move || {
                            let q = query.get().trim().to_lowercase();
                            PALETTE_ENTRIES
                                .iter()
                                .filter(|e| {
                                    q.is_empty()
                                        || e.label.to_lowercase().contains(&q)
                                        || e.hint.to_lowercase().contains(&q)
                                })
                                .map(|e| {
                                    let href = e.href;
                                    let key = e.prefetch;
                                    view! {
                                        <button
                                            class="palette-item"
                                            on:mouseenter=move |_| {
                                                cache.with_value(|c| c.prefetch(key));
                                            }
                                            on:click=move |_| go(href)
                                        >
                                            <span class="palette-label">{e.label}</span>
                                            <span class="palette-hint">{e.hint}</span>
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Ctrl/Cmd-K opens, Escape closes. Registered once for the app's lifetime.
fn listen_palette_shortcut(open: RwSignal<bool>) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let cb = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if (ev.ctrl_key() || ev.meta_key()) && key.eq_ignore_ascii_case("k") {
            ev.prevent_default();
            open.set(!open.get_untracked());
        } else if key == "Escape" {
            open.set(false);
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
    let _ = doc.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
    cb.forget();
}
