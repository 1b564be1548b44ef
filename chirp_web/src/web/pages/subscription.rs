use leptos::prelude::*;

use chirp::loader::ModuleExports;
use chirp::store::Tier;

use super::super::loaders::page;
use super::super::shell::{ToastLevel, Toasts};
use super::super::Renderable;

pub(crate) fn exports() -> ModuleExports<Renderable> {
    ModuleExports::new().with_default(page(|_params| view! { <SubscriptionPage /> }.into_any()))
}

struct Plan {
    tier: Tier,
    price: &'static str,
    features: &'static [&'static str],
}

const PLANS: &[Plan] = &[
    Plan {
        tier: Tier::Free,
        price: "$0",
        features: &["1 project", "50 feedback items / month", "Community support"],
    },
    Plan {
        tier: Tier::Pro,
        price: "$19/mo",
        features: &[
            "10 projects",
            "Unlimited feedback",
            "Priority triage fields",
            "Email support",
        ],
    },
    Plan {
        tier: Tier::Premium,
        price: "$49/mo",
        features: &[
            "Unlimited projects",
            "Unlimited feedback",
            "Custom widget branding",
            "Dedicated support",
        ],
    },
];

#[component]
fn SubscriptionPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let (current, set_current) = signal(Tier::Pro);

    view! {
        <div class="subscription">
            <h1 class="page-title">"Subscription"</h1>
            <p class="subtle">"Your workspace plan. Changes apply immediately in this demo."</p>

            <div class="plan-grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let tier = plan.tier;
                        view! {
                            <div class=move || {
                                if current.get() == tier {
                                    "plan-card current"
                                } else {
                                    "plan-card"
                                }
                            }>
                                <div class="plan-name">{tier.label()}</div>
                                <div class="plan-price">{plan.price}</div>
                                <ul class="plan-features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|f| view! { <li>{*f}</li> })
                                        .collect_view()}
                                </ul>
                                <button
                                    class="btn primary"
                                    disabled=move || current.get() == tier
                                    on:click=move |_| {
                                        set_current.set(tier);
                                        toasts.push(
                                            ToastLevel::Success,
                                            format!("Switched to the {} plan", tier.label()),
                                        );
                                    }
                                >
                                    {move || {
                                        if current.get() == tier { "Current plan" } else { "Choose" }
                                    }}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
