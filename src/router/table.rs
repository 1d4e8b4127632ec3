//! Route records and the application's route table.

/// Views a route can render. Parents render around their matched child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    DefaultLayout,
    IndexPage,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Literal path relative to the parent. `""` matches the parent itself.
    Static(String),
    /// Matches any remaining path; segments are captured under `param`.
    CatchAll { param: &'static str },
}

#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub path: RoutePattern,
    pub name: Option<&'static str>,
    pub view: ViewKind,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: RoutePattern, view: ViewKind) -> Self {
        Self {
            path,
            name: None,
            view,
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn child(mut self, child: RouteRecord) -> Self {
        self.children.push(child);
        self
    }
}

/// `/` with its nested index page, then the catch-all error page.
pub fn default_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new(RoutePattern::Static("/".into()), ViewKind::DefaultLayout)
            .named("Index")
            .child(RouteRecord::new(
                RoutePattern::Static(String::new()),
                ViewKind::IndexPage,
            )),
        RouteRecord::new(
            RoutePattern::CatchAll { param: "catchAll" },
            ViewKind::NotFound,
        ),
    ]
}
