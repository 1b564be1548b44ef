//! Route keys and URL matching.
//!
//! Every lazily-loadable UI module has one symbolic [`RouteKey`]. The set is
//! closed at build time: the loader table is constructed over
//! [`RouteKey::ALL`], so a key without a loader cannot exist at runtime.
//!
//! [`match_path`] selects over the registered pattern table. It is total: a
//! path that matches nothing yields the not-found chain instead of an error.

/// Symbolic identifier for a lazily-loadable UI module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Home,
    DashboardLayout,
    ProjectDetailLayout,
    Overview,
    Projects,
    ProjectFeedbacks,
    ProjectSettings,
    Settings,
    Subscription,
    DocsLayout,
    DocsOverview,
    DocsImplementation,
    NotFound,
    ServerError,
}

impl RouteKey {
    pub const ALL: [RouteKey; 14] = [
        RouteKey::Home,
        RouteKey::DashboardLayout,
        RouteKey::ProjectDetailLayout,
        RouteKey::Overview,
        RouteKey::Projects,
        RouteKey::ProjectFeedbacks,
        RouteKey::ProjectSettings,
        RouteKey::Settings,
        RouteKey::Subscription,
        RouteKey::DocsLayout,
        RouteKey::DocsOverview,
        RouteKey::DocsImplementation,
        RouteKey::NotFound,
        RouteKey::ServerError,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::DashboardLayout => "dashboard_layout",
            RouteKey::ProjectDetailLayout => "project_detail_layout",
            RouteKey::Overview => "overview",
            RouteKey::Projects => "projects",
            RouteKey::ProjectFeedbacks => "project_feedbacks",
            RouteKey::ProjectSettings => "project_settings",
            RouteKey::Settings => "settings",
            RouteKey::Subscription => "subscription",
            RouteKey::DocsLayout => "docs_layout",
            RouteKey::DocsOverview => "docs_overview",
            RouteKey::DocsImplementation => "docs_implementation",
            RouteKey::NotFound => "not_found",
            RouteKey::ServerError => "server_error",
        }
    }
}

/// One registered URL pattern.
///
/// `path` is the full pattern with `:name` parameter segments. `chain` lists
/// the modules to mount, layouts outermost-first with the page last; each
/// layout renders the next element into its outlet.
pub struct RouteDef {
    pub path: &'static str,
    pub chain: &'static [RouteKey],
    pub title: &'static str,
}

/// The registered pattern table. Literal patterns precede parameterized
/// ones so `/dashboard/projects` never captures as a project id.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        chain: &[RouteKey::Home],
        title: "Chirp — feedback where it happens",
    },
    RouteDef {
        path: "/dashboard",
        chain: &[RouteKey::DashboardLayout, RouteKey::Overview],
        title: "Overview · Chirp",
    },
    RouteDef {
        path: "/dashboard/projects",
        chain: &[RouteKey::DashboardLayout, RouteKey::Projects],
        title: "Projects · Chirp",
    },
    RouteDef {
        path: "/dashboard/projects/:project_id",
        chain: &[
            RouteKey::DashboardLayout,
            RouteKey::ProjectDetailLayout,
            RouteKey::ProjectFeedbacks,
        ],
        title: "Feedback · Chirp",
    },
    RouteDef {
        path: "/dashboard/projects/:project_id/settings",
        chain: &[
            RouteKey::DashboardLayout,
            RouteKey::ProjectDetailLayout,
            RouteKey::ProjectSettings,
        ],
        title: "Project settings · Chirp",
    },
    RouteDef {
        path: "/dashboard/subscription",
        chain: &[RouteKey::DashboardLayout, RouteKey::Subscription],
        title: "Subscription · Chirp",
    },
    RouteDef {
        path: "/dashboard/settings",
        chain: &[RouteKey::DashboardLayout, RouteKey::Settings],
        title: "Settings · Chirp",
    },
    RouteDef {
        path: "/docs",
        chain: &[RouteKey::DocsLayout, RouteKey::DocsOverview],
        title: "Docs · Chirp",
    },
    RouteDef {
        path: "/docs/overview",
        chain: &[RouteKey::DocsLayout, RouteKey::DocsOverview],
        title: "Docs · Chirp",
    },
    RouteDef {
        path: "/docs/implementation",
        chain: &[RouteKey::DocsLayout, RouteKey::DocsImplementation],
        title: "Implementation guide · Chirp",
    },
];

const NOT_FOUND: RouteDef = RouteDef {
    path: "*",
    chain: &[RouteKey::NotFound],
    title: "Page not found · Chirp",
};

/// Parameters captured from `:name` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(&'static str, String)>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of matching a concrete path against the pattern table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub chain: Vec<RouteKey>,
    pub params: RouteParams,
    pub title: &'static str,
}

/// Matches `path` against the registered patterns, first match wins.
///
/// Query string and fragment are ignored; empty segments (doubled or
/// trailing slashes) are tolerated. Unmatched paths resolve to the
/// not-found chain.
pub fn match_path(path: &str) -> RouteMatch {
    let segments = path_segments(path);

    for def in ROUTES {
        if let Some(params) = match_pattern(def.path, &segments) {
            return RouteMatch {
                chain: def.chain.to_vec(),
                params,
                title: def.title,
            };
        }
    }

    RouteMatch {
        chain: NOT_FOUND.chain.to_vec(),
        params: RouteParams::default(),
        title: NOT_FOUND.title,
    }
}

fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<RouteParams> {
    let pattern_segments: Vec<&'static str> =
        pattern.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = RouteParams::default();
    for (pat, seg) in pattern_segments.iter().zip(segments) {
        match pat.strip_prefix(':') {
            Some(name) => params.values.push((name, (*seg).to_string())),
            None => {
                if pat != seg {
                    return None;
                }
            }
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_matches_home() {
        let m = match_path("/");
        assert_eq!(m.chain, vec![RouteKey::Home]);
        assert!(m.params.is_empty());
    }

    #[test]
    fn dashboard_index_mounts_layout_then_overview() {
        let m = match_path("/dashboard");
        assert_eq!(m.chain, vec![RouteKey::DashboardLayout, RouteKey::Overview]);
    }

    #[test]
    fn project_detail_captures_id() {
        let m = match_path("/dashboard/projects/42");
        assert_eq!(
            m.chain,
            vec![
                RouteKey::DashboardLayout,
                RouteKey::ProjectDetailLayout,
                RouteKey::ProjectFeedbacks,
            ]
        );
        assert_eq!(m.params.get("project_id"), Some("42"));
    }

    #[test]
    fn project_settings_is_nested_under_both_layouts() {
        let m = match_path("/dashboard/projects/abc123/settings");
        assert_eq!(
            m.chain,
            vec![
                RouteKey::DashboardLayout,
                RouteKey::ProjectDetailLayout,
                RouteKey::ProjectSettings,
            ]
        );
        assert_eq!(m.params.get("project_id"), Some("abc123"));
    }

    #[test]
    fn literal_projects_segment_is_not_captured_as_id() {
        let m = match_path("/dashboard/projects");
        assert_eq!(m.chain, vec![RouteKey::DashboardLayout, RouteKey::Projects]);
        assert!(m.params.is_empty());
    }

    #[test]
    fn docs_index_and_overview_share_a_module() {
        assert_eq!(match_path("/docs").chain, match_path("/docs/overview").chain);
    }

    #[test]
    fn unmatched_path_resolves_to_not_found() {
        for path in ["/nope", "/dashboard/unknown", "/docs/missing/deep", "/projects"] {
            let m = match_path(path);
            assert_eq!(m.chain, vec![RouteKey::NotFound], "path {path:?}");
        }
    }

    #[test]
    fn trailing_and_doubled_slashes_are_tolerated() {
        assert_eq!(match_path("/dashboard/").chain, match_path("/dashboard").chain);
        assert_eq!(
            match_path("//dashboard//projects/").chain,
            match_path("/dashboard/projects").chain
        );
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let m = match_path("/dashboard/projects/7?tab=all#top");
        assert_eq!(m.params.get("project_id"), Some("7"));
    }

    #[test]
    fn every_chain_ends_in_a_page() {
        // Layout keys never terminate a chain; the last element is what the
        // innermost outlet mounts.
        for def in ROUTES {
            let last = *def.chain.last().expect("chain is never empty");
            assert!(
                !matches!(
                    last,
                    RouteKey::DashboardLayout
                        | RouteKey::ProjectDetailLayout
                        | RouteKey::DocsLayout
                ),
                "{} ends in a layout",
                def.path
            );
        }
    }
}
