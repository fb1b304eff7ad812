//! Static route table and view selection.
//!
//! DESIGN
//! ======
//! The table is an explicit, statically declared list of (pattern, page)
//! pairs built once and never mutated. Resolution is first-match by
//! specificity: exact patterns beat the wildcard no matter where the
//! wildcard sits in the table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path pattern of a route entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches exactly one path string.
    Exact(&'static str),
    /// Matches any path. Lowest priority.
    Wildcard,
}

/// Identifier of the page a route entry selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    NotFound,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub pattern: Pattern,
    pub page: Page,
}

/// The application route table. Exactly one wildcard entry, placed last.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: Pattern::Exact("/"),
        page: Page::Home,
    },
    RouteEntry {
        pattern: Pattern::Exact("/login"),
        page: Page::Login,
    },
    RouteEntry {
        pattern: Pattern::Wildcard,
        page: Page::NotFound,
    },
];

/// Select the page for `path`: first exact match wins, then the wildcard.
///
/// Total over any input path as long as the table carries a wildcard entry;
/// a table without one falls back to [`Page::NotFound`].
pub fn resolve(table: &[RouteEntry], path: &str) -> Page {
    table
        .iter()
        .find(|entry| matches!(entry.pattern, Pattern::Exact(p) if p == path))
        .or_else(|| {
            table
                .iter()
                .find(|entry| entry.pattern == Pattern::Wildcard)
        })
        .map_or(Page::NotFound, |entry| entry.page)
}
