//! Client-side router: resolves hash-style locations against the route table
//! and keeps the navigation history.
//!
//! Resolution order is static (including nested) matches in declaration
//! order first, catch-all routes last. There are no guards or redirects.

pub mod history;
pub mod table;

use history::HashHistory;
use table::{RoutePattern, RouteRecord, ViewKind};

/// The outcome of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized path, always starting with `/`.
    pub path: String,
    /// Path plus the query string, if one was given.
    pub full_path: String,
    pub name: Option<&'static str>,
    /// View chain from the outermost layout to the leaf page.
    pub matched: Vec<ViewKind>,
    /// Segments captured by a catch-all route.
    pub catch_all: Vec<String>,
}

impl ResolvedRoute {
    pub fn leaf(&self) -> Option<ViewKind> {
        self.matched.last().copied()
    }

    pub fn is_not_found(&self) -> bool {
        self.leaf() == Some(ViewKind::NotFound)
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact(Vec<String>),
    CatchAll,
}

#[derive(Debug, Clone)]
struct Candidate {
    matcher: Matcher,
    name: Option<&'static str>,
    chain: Vec<ViewKind>,
}

pub struct Router {
    candidates: Vec<Candidate>,
    history: HashHistory,
    current: ResolvedRoute,
}

/// Split a location like `#/a//b/?q=1` into its path segments and query.
fn normalize(location: &str) -> (Vec<String>, Option<String>) {
    let location = location.trim();
    let location = location.strip_prefix('#').unwrap_or(location);
    let (path, query) = match location.split_once('?') {
        Some((path, query)) if !query.is_empty() => (path, Some(query.to_string())),
        Some((path, _)) => (path, None),
        None => (location, None),
    };
    let segments = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (segments, query)
}

fn join_segments(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

fn flatten(
    records: &[RouteRecord],
    prefix: &[String],
    chain: &[ViewKind],
    name: Option<&'static str>,
    out: &mut Vec<Candidate>,
) {
    for record in records {
        let mut record_chain = chain.to_vec();
        record_chain.push(record.view);
        let record_name = record.name.or(name);

        match &record.path {
            RoutePattern::Static(path) => {
                let (own, _) = normalize(path);
                let mut segments = prefix.to_vec();
                segments.extend(own);
                if record.children.is_empty() {
                    out.push(Candidate {
                        matcher: Matcher::Exact(segments),
                        name: record_name,
                        chain: record_chain,
                    });
                } else {
                    flatten(&record.children, &segments, &record_chain, record_name, out);
                }
            }
            RoutePattern::CatchAll { .. } => out.push(Candidate {
                matcher: Matcher::CatchAll,
                name: record_name,
                chain: record_chain,
            }),
        }
    }
}

impl Router {
    pub fn new(routes: Vec<RouteRecord>, initial: &str) -> Self {
        let mut candidates = Vec::new();
        flatten(&routes, &[], &[], None, &mut candidates);
        // Stable sort keeps declaration order among equals.
        candidates.sort_by_key(|c| matches!(c.matcher, Matcher::CatchAll));

        let mut router = Self {
            candidates,
            history: HashHistory::new(String::new()),
            current: ResolvedRoute {
                path: "/".into(),
                full_path: "/".into(),
                name: None,
                matched: Vec::new(),
                catch_all: Vec::new(),
            },
        };
        let resolved = router.resolve(initial);
        router.history.replace(resolved.full_path.clone());
        router.current = resolved;
        router
    }

    pub fn with_default_routes(initial: &str) -> Self {
        Self::new(table::default_routes(), initial)
    }

    pub fn resolve(&self, location: &str) -> ResolvedRoute {
        let (segments, query) = normalize(location);
        let path = join_segments(&segments);
        let full_path = match &query {
            Some(q) => format!("{}?{}", path, q),
            None => path.clone(),
        };

        for candidate in &self.candidates {
            let catch_all = match &candidate.matcher {
                Matcher::Exact(expected) if *expected == segments => Vec::new(),
                Matcher::Exact(_) => continue,
                Matcher::CatchAll => segments.clone(),
            };
            return ResolvedRoute {
                path,
                full_path,
                name: candidate.name,
                matched: candidate.chain.clone(),
                catch_all,
            };
        }

        ResolvedRoute {
            path,
            full_path,
            name: None,
            matched: Vec::new(),
            catch_all: Vec::new(),
        }
    }

    pub fn current(&self) -> &ResolvedRoute {
        &self.current
    }

    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    /// Navigate to `location`. Returns false when it is already current.
    pub fn push(&mut self, location: &str) -> bool {
        let resolved = self.resolve(location);
        if !self.history.push(resolved.full_path.clone()) {
            return false;
        }
        tracing::info!(
            path = %resolved.full_path,
            not_found = resolved.is_not_found(),
            "navigate"
        );
        self.current = resolved;
        true
    }

    pub fn back(&mut self) -> bool {
        let Some(location) = self.history.back().map(str::to_string) else {
            return false;
        };
        self.current = self.resolve(&location);
        tracing::info!(path = %location, "navigate back");
        true
    }

    pub fn forward(&mut self) -> bool {
        let Some(location) = self.history.forward().map(str::to_string) else {
            return false;
        };
        self.current = self.resolve(&location);
        tracing::info!(path = %location, "navigate forward");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_index() {
        let router = Router::with_default_routes("/");
        let route = router.resolve("/");
        assert_eq!(route.matched, vec![ViewKind::DefaultLayout, ViewKind::IndexPage]);
        assert_eq!(route.name, Some("Index"));
        assert!(route.catch_all.is_empty());
        assert!(!route.is_not_found());
    }

    #[test]
    fn test_unknown_path_resolves_to_not_found() {
        let router = Router::with_default_routes("/");
        let route = router.resolve("/nonexistent/path");
        assert_eq!(route.matched, vec![ViewKind::NotFound]);
        assert_eq!(route.catch_all, vec!["nonexistent", "path"]);
        assert!(route.is_not_found());
    }

    #[test]
    fn test_normalization() {
        let router = Router::with_default_routes("/");
        assert_eq!(router.resolve("").leaf(), Some(ViewKind::IndexPage));
        assert_eq!(router.resolve("#/").leaf(), Some(ViewKind::IndexPage));
        assert_eq!(router.resolve("//").leaf(), Some(ViewKind::IndexPage));

        let route = router.resolve("#docs//intro/?lang=en");
        assert_eq!(route.path, "/docs/intro");
        assert_eq!(route.full_path, "/docs/intro?lang=en");
        assert_eq!(route.catch_all, vec!["docs", "intro"]);
    }

    #[test]
    fn test_query_ignored_for_matching() {
        let router = Router::with_default_routes("/");
        let route = router.resolve("/?tab=1");
        assert_eq!(route.leaf(), Some(ViewKind::IndexPage));
        assert_eq!(route.full_path, "/?tab=1");
    }

    #[test]
    fn test_static_wins_over_earlier_catch_all() {
        let routes = vec![
            RouteRecord::new(RoutePattern::CatchAll { param: "rest" }, ViewKind::NotFound),
            RouteRecord::new(RoutePattern::Static("/".into()), ViewKind::IndexPage),
        ];
        let router = Router::new(routes, "/");
        assert_eq!(router.resolve("/").leaf(), Some(ViewKind::IndexPage));
        assert_eq!(router.resolve("/x").leaf(), Some(ViewKind::NotFound));
    }

    #[test]
    fn test_initial_location() {
        let router = Router::with_default_routes("/missing");
        assert!(router.current().is_not_found());
        assert_eq!(router.history().current(), "/missing");
    }

    #[test]
    fn test_push_back_forward() {
        let mut router = Router::with_default_routes("/");
        assert!(router.push("/nope"));
        assert!(router.current().is_not_found());
        assert!(!router.push("#/nope"));

        assert!(router.back());
        assert_eq!(router.current().leaf(), Some(ViewKind::IndexPage));
        assert!(!router.back());

        assert!(router.forward());
        assert_eq!(router.current().path, "/nope");
        assert!(!router.forward());
    }
}
