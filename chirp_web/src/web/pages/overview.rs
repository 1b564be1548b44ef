use leptos::prelude::*;

use chirp::loader::ModuleExports;
use chirp::router::RouteKey;
use chirp::store::{FeedbackStatus, FeedbackStore, ProjectStatus, ProjectStore};

use super::super::loaders::page;
use super::super::prefetch_link::PrefetchLink;
use super::super::Renderable;

pub(crate) fn exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|_params| view! { <OverviewPage /> }.into_any()))
}

#[component]
fn OverviewPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let feedbacks = expect_context::<RwSignal<FeedbackStore>>();

    view! {
        <div class="overview">
            <h1 class="page-title">"Overview"</h1>

            <section class="stat-grid">
                <Stat
                    label="Projects"
                    value=move || projects.with(|s| s.len().to_string())
                />
                <Stat
                    label="Active projects"
                    value=move || {
                        projects.with(|s| {
                            s.projects()
                                .iter()
                                .filter(|p| p.status == ProjectStatus::Active)
                                .count()
                                .to_string()
                        })
                    }
                />
                <Stat
                    label="Open feedback"
                    value=move || {
                        feedbacks.with(|s| {
                            (s.count_with_status(FeedbackStatus::New)
                                + s.count_with_status(FeedbackStatus::InProgress))
                                .to_string()
                        })
                    }
                />
                <Stat
                    label="Resolved"
                    value=move || {
                        feedbacks.with(|s| s.count_with_status(FeedbackStatus::Resolved).to_string())
                    }
                />
            </section>

            <section class="recent">
                <h2>"Recent feedback"</h2>
                <div class="recent-list">
                    {move || {
                        feedbacks.with(|fs| {
                            projects.with(|ps| {
                                fs.all()
                                    .iter()
                                    .rev()
                                    .take(5)
                                    .map(|f| {
                                        let project = ps
                                            .get(&f.project_id)
                                            .map(|p| p.name.clone())
                                            .unwrap_or_else(|| "(deleted project)".to_string());
                                        let href = format!("/dashboard/projects/{}", f.project_id);
                                        view! {
                                            <PrefetchLink
                                                href=href
                                                prefetch=RouteKey::ProjectFeedbacks
                                                class={"recent-item".to_string()}
                                            >
                                                <span class=format!("badge {}", f.kind.label())>
                                                    {f.kind.label()}
                                                </span>
                                                <span class="recent-content">{f.content.clone()}</span>
                                                <span class="subtle">{project}</span>
                                            </PrefetchLink>
                                        }
                                    })
                                    .collect_view()
                            })
                        })
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: impl Fn() -> String + Send + 'static) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-label">{label}</div>
            <div class="stat-value">{value}</div>
        </div>
    }
}
