//! Route matching module
//!
//! Routes are plain data evaluated in order, first match wins. The fixed
//! and single-segment script routes are listed before the catch-all, which
//! would otherwise swallow them.
//!
//! Matching runs on the raw request path; only the captured tool name or
//! repository path is percent-decoded afterwards.

use crate::script::RequestKind;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Path pattern of a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Whole path equals the string
    Exact(String),
    /// `{prefix}{segment}{suffix}` where segment is non-empty and has no `/`
    Segment { prefix: String, suffix: String },
    /// `{prefix}{rest}` where rest may be empty or span several segments
    CatchAll { prefix: String },
}

/// What a matched route does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect(String),
    Landing,
    MainSetup,
    NamedToolSetup,
    RepoFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub target: RouteTarget,
}

/// Outcome of matching a request path against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Redirect(String),
    Landing,
    Script(RequestKind),
    /// Capture did not decode to UTF-8; carries the raw capture
    Undecodable(RequestKind),
}

/// Build the route table for a site mounted at `landing_path` with its
/// script endpoints under `api_prefix`.
pub fn default_routes(landing_path: &str, api_prefix: &str) -> Vec<Route> {
    vec![
        Route {
            pattern: RoutePattern::Exact("/".to_string()),
            target: RouteTarget::Redirect(landing_path.to_string()),
        },
        Route {
            pattern: RoutePattern::Exact(landing_path.to_string()),
            target: RouteTarget::Landing,
        },
        Route {
            pattern: RoutePattern::Exact(format!("{api_prefix}/setup.sh")),
            target: RouteTarget::MainSetup,
        },
        Route {
            pattern: RoutePattern::Segment {
                prefix: format!("{api_prefix}/setup-"),
                suffix: ".sh".to_string(),
            },
            target: RouteTarget::NamedToolSetup,
        },
        Route {
            pattern: RoutePattern::CatchAll {
                prefix: format!("{api_prefix}/"),
            },
            target: RouteTarget::RepoFile,
        },
    ]
}

/// Find the first route matching `path` and turn it into a dispatch
pub fn match_route(path: &str, routes: &[Route]) -> Option<Dispatch> {
    routes.iter().find_map(|route| {
        let capture = match_path(&route.pattern, path)?;
        Some(to_dispatch(&route.target, capture))
    })
}

/// Match a single pattern, returning the captured part of the path
///
/// `Exact` captures the empty string.
fn match_path<'p>(pattern: &RoutePattern, path: &'p str) -> Option<&'p str> {
    match pattern {
        RoutePattern::Exact(exact) => (path == exact.as_str()).then_some(""),
        RoutePattern::Segment { prefix, suffix } => {
            let segment = path.strip_prefix(prefix.as_str())?.strip_suffix(suffix.as_str())?;
            (!segment.is_empty() && !segment.contains('/')).then_some(segment)
        }
        RoutePattern::CatchAll { prefix } => path.strip_prefix(prefix.as_str()),
    }
}

fn to_dispatch(target: &RouteTarget, capture: &str) -> Dispatch {
    let script = |make: fn(String) -> RequestKind| match percent_decode_str(capture).decode_utf8() {
        Ok(decoded) => Dispatch::Script(make(Cow::into_owned(decoded))),
        Err(_) => Dispatch::Undecodable(make(capture.to_string())),
    };

    match target {
        RouteTarget::Redirect(location) => Dispatch::Redirect(location.clone()),
        RouteTarget::Landing => Dispatch::Landing,
        RouteTarget::MainSetup => Dispatch::Script(RequestKind::MainSetup),
        RouteTarget::NamedToolSetup => script(RequestKind::NamedToolSetup),
        RouteTarget::RepoFile => script(RequestKind::RepoFile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> Vec<Route> {
        default_routes("/agent-os", "/agent-os/api")
    }

    fn script(path: &str) -> Option<RequestKind> {
        match match_route(path, &routes()) {
            Some(Dispatch::Script(kind)) => Some(kind),
            _ => None,
        }
    }

    #[test]
    fn test_match_path_exact() {
        let pattern = RoutePattern::Exact("/agent-os".to_string());
        assert_eq!(match_path(&pattern, "/agent-os"), Some(""));
        assert_eq!(match_path(&pattern, "/agent-os/"), None);
        assert_eq!(match_path(&pattern, "/agent-os/api"), None);
    }

    #[test]
    fn test_match_path_segment() {
        let pattern = RoutePattern::Segment {
            prefix: "/setup-".to_string(),
            suffix: ".sh".to_string(),
        };
        assert_eq!(match_path(&pattern, "/setup-cursor.sh"), Some("cursor"));
        assert_eq!(match_path(&pattern, "/setup-claude-code.sh"), Some("claude-code"));
        assert_eq!(match_path(&pattern, "/setup-.sh"), None);
        assert_eq!(match_path(&pattern, "/setup-a/b.sh"), None);
        assert_eq!(match_path(&pattern, "/setup-cursor.txt"), None);
    }

    #[test]
    fn test_match_path_catch_all() {
        let pattern = RoutePattern::CatchAll {
            prefix: "/".to_string(),
        };
        assert_eq!(match_path(&pattern, "/README.md"), Some("README.md"));
        assert_eq!(match_path(&pattern, "/a/b/c.txt"), Some("a/b/c.txt"));
        assert_eq!(match_path(&pattern, "/"), Some(""));
        assert_eq!(match_path(&pattern, "no-slash"), None);
    }

    #[test]
    fn test_main_setup_wins_over_catch_all() {
        assert_eq!(script("/agent-os/api/setup.sh"), Some(RequestKind::MainSetup));
    }

    #[test]
    fn test_tool_setup_wins_over_catch_all() {
        assert_eq!(
            script("/agent-os/api/setup-github-copilot.sh"),
            Some(RequestKind::NamedToolSetup("github-copilot".to_string()))
        );
    }

    #[test]
    fn test_catch_all_takes_the_rest() {
        assert_eq!(
            script("/agent-os/api/instructions/core/plan.md"),
            Some(RequestKind::RepoFile("instructions/core/plan.md".to_string()))
        );
        // Nested setup scripts are repository files, not tool setups
        assert_eq!(
            script("/agent-os/api/setups/setup-x.sh"),
            Some(RequestKind::RepoFile("setups/setup-x.sh".to_string()))
        );
        assert_eq!(
            script("/agent-os/api/setup-.sh"),
            Some(RequestKind::RepoFile("setup-.sh".to_string()))
        );
        assert_eq!(
            script("/agent-os/api/"),
            Some(RequestKind::RepoFile(String::new()))
        );
    }

    #[test]
    fn test_captures_are_percent_decoded() {
        assert_eq!(
            script("/agent-os/api/docs/my%20file.md"),
            Some(RequestKind::RepoFile("docs/my file.md".to_string()))
        );
        assert_eq!(
            script("/agent-os/api/caf%C3%A9.txt"),
            Some(RequestKind::RepoFile("caf\u{e9}.txt".to_string()))
        );
        assert_eq!(
            script("/agent-os/api/setup-it%27s.sh"),
            Some(RequestKind::NamedToolSetup("it's".to_string()))
        );
        // Stray `%` without two hex digits is kept literally
        assert_eq!(
            script("/agent-os/api/100%.txt"),
            Some(RequestKind::RepoFile("100%.txt".to_string()))
        );
    }

    #[test]
    fn test_invalid_utf8_capture_is_undecodable() {
        assert_eq!(
            match_route("/agent-os/api/bad%FF.txt", &routes()),
            Some(Dispatch::Undecodable(RequestKind::RepoFile(
                "bad%FF.txt".to_string()
            )))
        );
        assert_eq!(
            match_route("/agent-os/api/setup-%C3.sh", &routes()),
            Some(Dispatch::Undecodable(RequestKind::NamedToolSetup(
                "%C3".to_string()
            )))
        );
    }

    #[test]
    fn test_root_and_landing() {
        assert_eq!(
            match_route("/", &routes()),
            Some(Dispatch::Redirect("/agent-os".to_string()))
        );
        assert_eq!(match_route("/agent-os", &routes()), Some(Dispatch::Landing));
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(match_route("/other", &routes()), None);
        assert_eq!(match_route("/agent-os/api", &routes()), None);
        assert_eq!(match_route("/agent-os/docs", &routes()), None);
    }

    #[test]
    fn test_empty_prefix_serves_from_site_root() {
        let routes = default_routes("/agent-os", "");
        assert_eq!(
            match_route("/setup.sh", &routes),
            Some(Dispatch::Script(RequestKind::MainSetup))
        );
        assert_eq!(
            match_route("/setup-foo.sh", &routes),
            Some(Dispatch::Script(RequestKind::NamedToolSetup("foo".to_string())))
        );
        assert_eq!(
            match_route("/README.md", &routes),
            Some(Dispatch::Script(RequestKind::RepoFile("README.md".to_string())))
        );
        // Root and landing are still listed ahead of the catch-all
        assert_eq!(
            match_route("/", &routes),
            Some(Dispatch::Redirect("/agent-os".to_string()))
        );
        assert_eq!(match_route("/agent-os", &routes), Some(Dispatch::Landing));
    }

    #[test]
    fn test_match_route_order() {
        // Same patterns, catch-all first: it captures everything
        let mut reversed = routes();
        reversed.reverse();
        assert_eq!(
            match_route("/agent-os/api/setup.sh", &reversed),
            Some(Dispatch::Script(RequestKind::RepoFile("setup.sh".to_string())))
        );
    }
}
