use super::*;

// =============================================================
// Route table shape
// =============================================================

#[test]
fn route_table_has_single_trailing_wildcard() {
    let wildcards: Vec<usize> = ROUTES
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.pattern == Pattern::Wildcard)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(wildcards, vec![ROUTES.len() - 1]);
}

#[test]
fn route_table_exact_paths_are_distinct() {
    let paths: Vec<&str> = ROUTES
        .iter()
        .filter_map(|entry| match entry.pattern {
            Pattern::Exact(p) => Some(p),
            Pattern::Wildcard => None,
        })
        .collect();
    for (i, a) in paths.iter().enumerate() {
        for b in paths.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_root_selects_home() {
    assert_eq!(resolve(ROUTES, "/"), Page::Home);
}

#[test]
fn resolve_login_selects_login() {
    assert_eq!(resolve(ROUTES, "/login"), Page::Login);
}

#[test]
fn resolve_unknown_paths_select_not_found() {
    for path in ["/foo/bar", "/home", "/loginx", "/LOGIN", "/login/", ""] {
        assert_eq!(resolve(ROUTES, path), Page::NotFound, "path: {path}");
    }
}

#[test]
fn resolve_exact_beats_wildcard_regardless_of_order() {
    let table = [
        RouteEntry {
            pattern: Pattern::Wildcard,
            page: Page::NotFound,
        },
        RouteEntry {
            pattern: Pattern::Exact("/"),
            page: Page::Home,
        },
    ];
    assert_eq!(resolve(&table, "/"), Page::Home);
}

#[test]
fn resolve_without_wildcard_falls_back_to_not_found() {
    let table = [RouteEntry {
        pattern: Pattern::Exact("/"),
        page: Page::Home,
    }];
    assert_eq!(resolve(&table, "/missing"), Page::NotFound);
}
