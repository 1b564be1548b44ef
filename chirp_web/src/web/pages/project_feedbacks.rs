use leptos::prelude::*;

use chirp::loader::ModuleExports;
use chirp::store::{FeedbackStatus, FeedbackStore};

use super::super::loaders::page;
use super::super::Renderable;

pub(crate) fn exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|params| {
        let project_id = params.get("project_id").unwrap_or_default().to_string();
        view! { <ProjectFeedbacksPage project_id=project_id /> }.into_any()
    }))
}

#[component]
fn ProjectFeedbacksPage(project_id: String) -> impl IntoView {
    let feedbacks = expect_context::<RwSignal<FeedbackStore>>();

    let id = project_id.clone();
    let rows = move || feedbacks.with(|s| s.for_project(&id));

    view! {
        <div class="feedback-list">
            <Show
                when={
                    let rows = rows.clone();
                    move || !rows().is_empty()
                }
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            "No feedback yet. Install the widget and notes will land here."
                        </div>
                    }
                }
            >
                <For
                    each=rows.clone()
                    key=|f| f.id.clone()
                    children=move |f| {
                        let fid = f.id.clone();
                        let status = f.status;
                        view! {
                            <div class="feedback-row">
                                <div class="feedback-main">
                                    <span class=format!("badge {}", f.kind.label())>
                                        {f.kind.label()}
                                    </span>
                                    <span class=format!("badge priority {}", f.priority.label())>
                                        {f.priority.label()}
                                    </span>
                                    <span class="feedback-content">{f.content.clone()}</span>
                                </div>
                                <div class="feedback-meta">
                                    <code class="selector">{f.element.clone()}</code>
                                    <span class="subtle">{f.path.clone()}</span>
                                    <span class="subtle">{f.reporter.clone()}</span>
                                    <span class="subtle">{f.browser.clone()}</span>
                                </div>
                                <select
                                    class="status-select"
                                    prop:value=status.label()
                                    on:change=move |ev| {
                                        let v = event_target_value(&ev);
                                        let Some(next) = FeedbackStatus::ALL
                                            .iter()
                                            .copied()
                                            .find(|s| s.label() == v)
                                        else {
                                            return;
                                        };
                                        let fid = fid.clone();
                                        feedbacks.update(|s| {
                                            let _ = s.set_status(&fid, next);
                                        });
                                    }
                                >
                                    {FeedbackStatus::ALL
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <option value=s.label()>{s.label()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
