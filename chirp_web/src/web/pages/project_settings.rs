use leptos::prelude::*;

use chirp::loader::ModuleExports;
use chirp::store::ProjectStore;

use super::super::loaders::page;
use super::super::router::Navigator;
use super::super::shell::{ToastLevel, Toasts};
use super::super::Renderable;

pub(crate) fn exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|params| {
        let project_id = params.get("project_id").unwrap_or_default().to_string();
        view! { <ProjectSettingsPage project_id=project_id /> }.into_any()
    }))
}

#[component]
fn ProjectSettingsPage(project_id: String) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectStore>>();
    let toasts = expect_context::<Toasts>();
    let nav = expect_context::<Navigator>();

    let id = project_id.clone();
    let project = Signal::derive(move || projects.with(|s| s.get(&id).cloned()));

    let (name, set_name) = signal(String::new());
    let (url, set_url) = signal(String::new());
    // Seed the form from the store once the project is known.
    Effect::new(move |seeded: Option<bool>| {
        if seeded.unwrap_or(false) {
            return true;
        }
        match project.get() {
            Some(p) => {
                set_name.set(p.name);
                set_url.set(p.url);
                true
            }
            None => false,
        }
    });

    let save = {
        let id = project_id.clone();
        move |_| {
            let id = id.clone();
            let new_name = name.get_untracked().trim().to_string();
            let new_url = url.get_untracked().trim().to_string();
            if new_name.is_empty() || new_url.is_empty() {
                toasts.push(ToastLevel::Error, "Name and URL are required");
                return;
            }
            let updated = projects.try_update(|s| {
                s.update(&id, |p| {
                    p.name = new_name.clone();
                    p.url = new_url.clone();
                })
            });
            if updated.unwrap_or(false) {
                toasts.push(ToastLevel::Success, "Project saved");
            }
        }
    };

    let regenerate = {
        let id = project_id.clone();
        move |_| {
            let id = id.clone();
            let key = projects.try_update(|s| s.regenerate_api_key(&id)).flatten();
            match key {
                Some(_) => toasts.push(ToastLevel::Success, "API key regenerated"),
                None => toasts.push(ToastLevel::Error, "Project no longer exists"),
            }
        }
    };

    let delete = {
        let id = project_id.clone();
        move |_| {
            let id = id.clone();
            let name = project.get_untracked().map(|p| p.name).unwrap_or_default();
            projects.update(|s| {
                let _ = s.delete(&id);
            });
            toasts.push(ToastLevel::Info, format!("Project \"{name}\" deleted"));
            nav.navigate("/dashboard/projects");
        }
    };

    view! {
        <div class="project-settings">
            <Show
                when=move || project.get().is_some()
                fallback=|| view! { <div class="empty-state">"This project no longer exists."</div> }
            >
                <section class="panel">
                    <h2>"General"</h2>
                    <label class="field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"URL"</span>
                        <input
                            type="text"
                            prop:value=move || url.get()
                            on:input=move |ev| set_url.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn primary" on:click=save.clone()>"Save changes"</button>
                </section>

                <section class="panel">
                    <h2>"Widget key"</h2>
                    <p class="subtle">
                        "Paste this key into the widget snippet. Regenerating revokes the old key "
                        "immediately."
                    </p>
                    <code class="api-key">
                        {move || {
                            project.get().map(|p| p.api_key).unwrap_or_default()
                        }}
                    </code>
                    <button class="btn ghost" on:click=regenerate.clone()>"Regenerate key"</button>
                </section>

                <section class="panel danger">
                    <h2>"Danger zone"</h2>
                    <p class="subtle">"Deleting a project removes it from the dashboard."</p>
                    <button class="btn danger" on:click=delete.clone()>"Delete project"</button>
                </section>
            </Show>
        </div>
    }
}
