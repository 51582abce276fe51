// SPDX-License-Identifier: MPL-2.0
//! Route table: URL paths the storefront exposes and the page behind each.

use std::fmt;

/// Pages reachable through the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Dashboard,
    CreateProduct,
    Orders,
    Register,
    Login,
    Support,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Dashboard,
        Route::CreateProduct,
        Route::Orders,
        Route::Register,
        Route::Login,
        Route::Support,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::CreateProduct => "/products/create",
            Route::Orders => "/orders",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Support => "/support",
        }
    }

    /// Resolves a path, ignoring a trailing slash, query and fragment.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim();
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// i18n key of the page heading.
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Home => "page-home-title",
            Route::Dashboard => "page-dashboard-title",
            Route::CreateProduct => "page-create-product-title",
            Route::Orders => "page-orders-title",
            Route::Register => "page-register-title",
            Route::Login => "page-login-title",
            Route::Support => "page-support-title",
        }
    }
}

/// What the main area shows: a known page, or the path nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Page(Route),
    NotFound(String),
}

impl Location {
    pub fn parse(path: &str) -> Self {
        Route::from_path(path).map_or_else(|| Location::NotFound(path.to_string()), Location::Page)
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Location::Page(route) => Some(*route),
            Location::NotFound(_) => None,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::Page(Route::default())
    }
}

impl From<Route> for Location {
    fn from(route: Route) -> Self {
        Location::Page(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_resolves_from_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(Route::from_path("/orders/"), Some(Route::Orders));
        assert_eq!(Route::from_path("/login?next=/orders"), Some(Route::Login));
        assert_eq!(Route::from_path("/support#faq"), Some(Route::Support));
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(Route::from_path("/products"), None);
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path("dashboard"), None);
    }

    #[test]
    fn location_keeps_unmatched_path() {
        assert_eq!(Location::parse("/dashboard"), Location::Page(Route::Dashboard));
        assert_eq!(
            Location::parse("/nowhere"),
            Location::NotFound("/nowhere".to_string())
        );
        assert_eq!(Location::parse("/nowhere").route(), None);
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Route::ALL.len());
    }
}
