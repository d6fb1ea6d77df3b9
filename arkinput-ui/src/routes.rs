//! Route Table
//!
//! The static path-to-view table the router is built from. The table is
//! plain data so it can be validated and resolved without a browser.

use thiserror::Error;

/// Root path, always a redirect
pub const ROOT_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const RECORDS_PATH: &str = "/records";
pub const SETTINGS_PATH: &str = "/settings";

/// The views the router can render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Dashboard,
    Records,
    Settings,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Dashboard, ViewKind::Records, ViewKind::Settings];

    /// Stable marker name, used for `data-view` attributes
    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "dashboard",
            ViewKind::Records => "records",
            ViewKind::Settings => "settings",
        }
    }

    /// Human readable label for navigation
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "Dashboard",
            ViewKind::Records => "Records",
            ViewKind::Settings => "Settings",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ViewKind::Dashboard => DASHBOARD_PATH,
            ViewKind::Records => RECORDS_PATH,
            ViewKind::Settings => SETTINGS_PATH,
        }
    }
}

/// What a route does when its path matches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewKind),
    Redirect(&'static str),
}

/// A single route table entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub const fn view(path: &'static str, view: ViewKind) -> Self {
        Self {
            path,
            target: RouteTarget::View(view),
        }
    }

    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            target: RouteTarget::Redirect(to),
        }
    }
}

/// Application routes, in declaration order
pub static ROUTES: [RouteEntry; 4] = [
    RouteEntry::redirect(ROOT_PATH, DASHBOARD_PATH),
    RouteEntry::view(DASHBOARD_PATH, ViewKind::Dashboard),
    RouteEntry::view(RECORDS_PATH, ViewKind::Records),
    RouteEntry::view(SETTINGS_PATH, ViewKind::Settings),
];

/// Outcome of matching a single path against the table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(ViewKind),
    Redirect {
        from: &'static str,
        to: &'static str,
    },
    NotFound,
}

/// Where navigation ends up once redirects are followed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub path: String,
    pub view: Option<ViewKind>,
}

/// Route table invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route path {0:?} must start with '/'")]
    InvalidPath(&'static str),

    #[error("route path {0:?} is declared more than once")]
    DuplicatePath(&'static str),

    #[error("route table has no redirect for \"/\"")]
    MissingRootRedirect,

    #[error("redirect {from:?} -> {to:?} does not point at a view route")]
    DanglingRedirect {
        from: &'static str,
        to: &'static str,
    },
}

/// Read-only view over a static route table
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    pub const fn new(entries: &'static [RouteEntry]) -> Self {
        Self { entries }
    }

    /// The table the application is mounted with
    pub const fn standard() -> Self {
        Self::new(&ROUTES)
    }

    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View-bearing entries as `(path, view)` pairs
    pub fn views(&self) -> impl Iterator<Item = (&'static str, ViewKind)> {
        self.entries.iter().filter_map(|e| match e.target {
            RouteTarget::View(view) => Some((e.path, view)),
            RouteTarget::Redirect(_) => None,
        })
    }

    /// Redirect entries as `(from, to)` pairs
    pub fn redirects(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.entries.iter().filter_map(|e| match e.target {
            RouteTarget::Redirect(to) => Some((e.path, to)),
            RouteTarget::View(_) => None,
        })
    }

    pub fn redirect_target(&self, path: &str) -> Option<&'static str> {
        self.redirects()
            .find(|(from, _)| *from == path)
            .map(|(_, to)| to)
    }

    pub fn view_path(&self, view: ViewKind) -> Option<&'static str> {
        self.views().find(|(_, v)| *v == view).map(|(path, _)| path)
    }

    /// Match one path without following redirects.
    ///
    /// Query strings, fragments and a single trailing slash are ignored.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize(path);
        match self.entries.iter().find(|e| e.path == path) {
            Some(entry) => match entry.target {
                RouteTarget::Redirect(to) => Resolution::Redirect {
                    from: entry.path,
                    to,
                },
                RouteTarget::View(view) => Resolution::Render(view),
            },
            None => Resolution::NotFound,
        }
    }

    /// Follow redirects from `path` to the location the browser ends up on.
    ///
    /// Gives up after as many hops as the table has entries, which only
    /// happens for tables that fail [`RouteTable::validate`].
    pub fn settle(&self, path: &str) -> Settled {
        let mut current = normalize(path).to_string();
        for _ in 0..=self.entries.len() {
            match self.resolve(&current) {
                Resolution::Redirect { to, .. } => current = to.to_string(),
                Resolution::Render(view) => {
                    return Settled {
                        path: current,
                        view: Some(view),
                    }
                }
                Resolution::NotFound => break,
            }
        }
        Settled {
            path: current,
            view: None,
        }
    }

    /// Check the table invariants
    pub fn validate(&self) -> Result<(), RouteTableError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(entry.path));
            }
            if self.entries[..i].iter().any(|e| e.path == entry.path) {
                return Err(RouteTableError::DuplicatePath(entry.path));
            }
        }

        if self.redirect_target(ROOT_PATH).is_none() {
            return Err(RouteTableError::MissingRootRedirect);
        }

        for (from, to) in self.redirects() {
            let lands_on_view = to != from && self.views().any(|(path, _)| path == to);
            if !lands_on_view {
                return Err(RouteTableError::DanglingRedirect { from, to });
            }
        }

        Ok(())
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        return ROOT_PATH;
    }
    if path.len() > 1 {
        if let Some(trimmed) = path.strip_suffix('/') {
            return trimmed;
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_shape() {
        let table = RouteTable::standard();
        assert_eq!(table.len(), 4);
        assert_eq!(table.redirects().count(), 1);

        let view_paths: Vec<_> = table.views().map(|(path, _)| path).collect();
        assert_eq!(view_paths, vec!["/dashboard", "/records", "/settings"]);
    }

    #[test]
    fn test_standard_table_is_valid() {
        assert_eq!(RouteTable::standard().validate(), Ok(()));
    }

    #[test]
    fn test_every_view_has_a_route() {
        let table = RouteTable::standard();
        for view in ViewKind::ALL {
            assert_eq!(table.view_path(view), Some(view.path()));
        }
    }

    #[test]
    fn test_resolve_declared_paths() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/dashboard"), Resolution::Render(ViewKind::Dashboard));
        assert_eq!(table.resolve("/records"), Resolution::Render(ViewKind::Records));
        assert_eq!(table.resolve("/settings"), Resolution::Render(ViewKind::Settings));
        assert_eq!(
            table.resolve("/"),
            Resolution::Redirect {
                from: "/",
                to: "/dashboard"
            }
        );
    }

    #[test]
    fn test_root_settles_on_dashboard() {
        let settled = RouteTable::standard().settle("/");
        assert_eq!(settled.path, "/dashboard");
        assert_eq!(settled.view, Some(ViewKind::Dashboard));
    }

    #[test]
    fn test_unknown_path_matches_nothing() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/nonexistent"), Resolution::NotFound);
        assert_eq!(table.resolve("/records/42"), Resolution::NotFound);

        let settled = table.settle("/nonexistent");
        assert_eq!(settled.path, "/nonexistent");
        assert_eq!(settled.view, None);
    }

    #[test]
    fn test_resolve_ignores_query_fragment_and_trailing_slash() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/records/"), Resolution::Render(ViewKind::Records));
        assert_eq!(table.resolve("/records?app=code"), Resolution::Render(ViewKind::Records));
        assert_eq!(table.resolve("/settings#about"), Resolution::Render(ViewKind::Settings));
        assert_eq!(table.settle("").view, Some(ViewKind::Dashboard));
    }

    #[test]
    fn test_validate_rejects_missing_root_redirect() {
        static TABLE: [RouteEntry; 1] = [RouteEntry::view("/dashboard", ViewKind::Dashboard)];
        assert_eq!(
            RouteTable::new(&TABLE).validate(),
            Err(RouteTableError::MissingRootRedirect)
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_paths() {
        static TABLE: [RouteEntry; 3] = [
            RouteEntry::redirect("/", "/dashboard"),
            RouteEntry::view("/dashboard", ViewKind::Dashboard),
            RouteEntry::view("/dashboard", ViewKind::Records),
        ];
        assert_eq!(
            RouteTable::new(&TABLE).validate(),
            Err(RouteTableError::DuplicatePath("/dashboard"))
        );
    }

    #[test]
    fn test_validate_rejects_dangling_and_looping_redirects() {
        static DANGLING: [RouteEntry; 2] = [
            RouteEntry::redirect("/", "/home"),
            RouteEntry::view("/dashboard", ViewKind::Dashboard),
        ];
        assert_eq!(
            RouteTable::new(&DANGLING).validate(),
            Err(RouteTableError::DanglingRedirect {
                from: "/",
                to: "/home"
            })
        );

        static LOOP: [RouteEntry; 2] = [
            RouteEntry::redirect("/", "/"),
            RouteEntry::view("/dashboard", ViewKind::Dashboard),
        ];
        assert!(RouteTable::new(&LOOP).validate().is_err());
        assert_eq!(RouteTable::new(&LOOP).settle("/").view, None);
    }

    #[test]
    fn test_validate_rejects_relative_paths() {
        static TABLE: [RouteEntry; 2] = [
            RouteEntry::redirect("/", "/dashboard"),
            RouteEntry::view("dashboard", ViewKind::Dashboard),
        ];
        assert_eq!(
            RouteTable::new(&TABLE).validate(),
            Err(RouteTableError::InvalidPath("dashboard"))
        );
    }
}
