use leptos::prelude::*;

use chirp::loader::ModuleExports;
use chirp::router::RouteKey;
use chirp::store::{FeedbackStore, NewProject, ProjectStore, Tier};

use super::super::loaders::page;
use super::super::prefetch_link::PrefetchLink;
use super::super::shell::{ToastLevel, Toasts};
use super::super::Renderable;

pub(crate) fn exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|_params| view! { <ProjectsPage /> }.into_any()))
}

#[component]
fn ProjectsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let feedbacks = expect_context::<RwSignal<FeedbackStore>>();
    let (modal_open, set_modal_open) = signal(false);

    view! {
        <div class="projects">
            <div class="page-header">
                <h1 class="page-title">"Projects"</h1>
                <button class="btn primary" on:click=move |_| set_modal_open.set(true)>
                    "+ Add project"
                </button>
            </div>

            <div class="project-grid">
                {move || {
                    projects.with(|ps| {
                        ps.projects()
                            .iter()
                            .map(|p| {
                                let href = format!("/dashboard/projects/{}", p.id);
                                let count = feedbacks.with(|fs| fs.count_for(&p.id));
                                view! {
                                    <PrefetchLink
                                        href=href
                                        prefetch=RouteKey::ProjectDetailLayout
                                        class={"project-card".to_string()}
                                    >
                                        <div class="project-card-head">
                                            <span class="project-name">{p.name.clone()}</span>
                                            <span class=format!("status-dot {}", p.status.label())>
                                            </span>
                                        </div>
                                        <div class="subtle">{p.url.clone()}</div>
                                        <div class="project-card-foot">
                                            <span class="badge tier">{p.tier.label()}</span>
                                            <span class="subtle">
                                                {format!("{count} feedback")}
                                            </span>
                                            <span class="subtle">
                                                {format!("active {}", p.last_active)}
                                            </span>
                                        </div>
                                    </PrefetchLink>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>

            <Show when=move || modal_open.get()>
                <AddProjectModal on_close=move || set_modal_open.set(false) />
            </Show>
        </div>
    }
}

#[component]
fn AddProjectModal(on_close: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let toasts = expect_context::<Toasts>();

    let (name, set_name) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (dev_name, set_dev_name) = signal(String::new());
    let (tier, set_tier) = signal(Tier::Free);
    let (is_local, set_is_local) = signal(false);
    let (local_port, set_local_port) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let create = move |_| {
        let name = name.get_untracked().trim().to_string();
        let url = url.get_untracked().trim().to_string();
        if name.is_empty() || url.is_empty() {
            set_error.set(Some("Name and URL are required".to_string()));
            return;
        }
        let local = is_local.get_untracked();
        let port = local_port.get_untracked().trim().to_string();
        let new = NewProject {
            name: name.clone(),
            url,
            local_port: if local && !port.is_empty() { Some(port) } else { None },
            dev_name: dev_name.get_untracked().trim().to_string(),
            tier: tier.get_untracked(),
            is_local: local,
        };
        projects.update(|s| {
            let _ = s.add(new);
        });
        toasts.push(ToastLevel::Success, format!("Project \"{name}\" created"));
        on_close();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add project"</h2>

                <label class="field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        placeholder="My storefront"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span>"URL"</span>
                    <input
                        type="text"
                        placeholder="https://shop.example.com"
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span>"Developer"</span>
                    <input
                        type="text"
                        placeholder="Who owns this project?"
                        prop:value=move || dev_name.get()
                        on:input=move |ev| set_dev_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span>"Plan"</span>
                    <select
                        prop:value=move || tier.get().label().to_string()
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            if v == Tier::Free.label() {
                                set_tier.set(Tier::Free);
                            } else if v == Tier::Pro.label() {
                                set_tier.set(Tier::Pro);
                            } else if v == Tier::Premium.label() {
                                set_tier.set(Tier::Premium);
                            }
                        }
                    >
                        <option value=Tier::Free.label()>"Free"</option>
                        <option value=Tier::Pro.label()>"Pro"</option>
                        <option value=Tier::Premium.label()>"Premium"</option>
                    </select>
                </label>

                <label class="field inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_local.get()
                        on:change=move |ev| set_is_local.set(event_target_checked(&ev))
                    />
                    <span>"Local development project"</span>
                </label>

                <Show when=move || is_local.get()>
                    <label class="field">
                        <span>"Local port"</span>
                        <input
                            type="text"
                            placeholder="5173"
                            prop:value=move || local_port.get()
                            on:input=move |ev| set_local_port.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <div class="modal-actions">
                    <button class="btn ghost" on:click=move |_| on_close()>"Cancel"</button>
                    <button class="btn primary" on:click=create>"Create project"</button>
                </div>
            </div>
        </div>
    }
}
