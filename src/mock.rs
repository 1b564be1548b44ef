//! Seed data for the mock dashboard.

use crate::store::{
    Feedback, FeedbackKind, FeedbackStatus, Priority, Project, ProjectStatus, Tier,
};

pub fn mock_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "E-commerce Platform".to_string(),
            url: "https://shop.example.com".to_string(),
            local_port: None,
            dev_name: "Alice Moreau".to_string(),
            api_key: "ck_demo1shop0000000000000000".to_string(),
            tier: Tier::Pro,
            created_at: "3 months ago".to_string(),
            is_local: false,
            status: ProjectStatus::Active,
            last_active: "2 min ago".to_string(),
        },
        Project {
            id: "2".to_string(),
            name: "SaaS Dashboard".to_string(),
            url: "https://app.saas.com".to_string(),
            local_port: None,
            dev_name: "Ben Okafor".to_string(),
            api_key: "ck_demo2saas0000000000000000".to_string(),
            tier: Tier::Free,
            created_at: "1 month ago".to_string(),
            is_local: false,
            status: ProjectStatus::Active,
            last_active: "1 hour ago".to_string(),
        },
        Project {
            id: "3".to_string(),
            name: "Portfolio Site".to_string(),
            url: "http://localhost:5173".to_string(),
            local_port: Some("5173".to_string()),
            dev_name: "Alice Moreau".to_string(),
            api_key: "ck_demo3folio000000000000000".to_string(),
            tier: Tier::Free,
            created_at: "2 weeks ago".to_string(),
            is_local: true,
            status: ProjectStatus::Archived,
            last_active: "2 weeks ago".to_string(),
        },
    ]
}

pub fn mock_feedbacks() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "101".to_string(),
            project_id: "1".to_string(),
            kind: FeedbackKind::Bug,
            content: "Checkout button is misaligned on mobile".to_string(),
            element: "button.checkout-btn".to_string(),
            path: "/checkout".to_string(),
            reporter: "alice@example.com".to_string(),
            timestamp: "2025-12-11T10:30:00Z".to_string(),
            status: FeedbackStatus::New,
            priority: Priority::High,
            browser: "Chrome 120".to_string(),
        },
        Feedback {
            id: "102".to_string(),
            project_id: "1".to_string(),
            kind: FeedbackKind::Design,
            content: "The font color is too light here".to_string(),
            element: "p.description".to_string(),
            path: "/product/123".to_string(),
            reporter: "bob@design.com".to_string(),
            timestamp: "2025-12-11T11:15:00Z".to_string(),
            status: FeedbackStatus::InProgress,
            priority: Priority::Medium,
            browser: "Firefox 121".to_string(),
        },
        Feedback {
            id: "103".to_string(),
            project_id: "2".to_string(),
            kind: FeedbackKind::Feature,
            content: "Add dark mode toggle".to_string(),
            element: "nav.top-bar".to_string(),
            path: "/settings".to_string(),
            reporter: "charlie@users.com".to_string(),
            timestamp: "2025-12-10T09:00:00Z".to_string(),
            status: FeedbackStatus::Resolved,
            priority: Priority::Low,
            browser: "Safari 17".to_string(),
        },
        Feedback {
            id: "104".to_string(),
            project_id: "1".to_string(),
            kind: FeedbackKind::Bug,
            content: "Promo code field rejects valid codes".to_string(),
            element: "input#promo-code".to_string(),
            path: "/checkout".to_string(),
            reporter: "dana@example.com".to_string(),
            timestamp: "2025-12-12T08:45:00Z".to_string(),
            status: FeedbackStatus::New,
            priority: Priority::Medium,
            browser: "Edge 120".to_string(),
        },
    ]
}
