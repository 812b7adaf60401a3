//! Static route table and path matching.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is the single source of truth for which paths exist and which
//! of them sit behind the auth gate. `app` mounts one `leptos_router` route
//! per entry; `guard` resolves navigation targets against it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::str::FromStr;

/// Path every unauthenticated visitor is sent to.
pub const LOGIN_PATH: &str = "/login";
/// Path signed-in users land on when they hit the login screen.
pub const HOME_PATH: &str = "/";

/// Identifier of a named route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Friends,
    Groups,
    GroupDetail,
    History,
    Profile,
    Login,
}

impl RouteName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Friends => "friends",
            Self::Groups => "groups",
            Self::GroupDetail => "group-detail",
            Self::History => "history",
            Self::Profile => "profile",
            Self::Login => "login",
        }
    }

    /// Table entry for this name.
    pub fn route(self) -> &'static RouteDef {
        let index = match self {
            Self::Home => 0,
            Self::Friends => 1,
            Self::Groups => 2,
            Self::GroupDetail => 3,
            Self::History => 4,
            Self::Profile => 5,
            Self::Login => 6,
        };
        &ROUTES[index]
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ROUTES
            .iter()
            .map(|def| def.name)
            .find(|name| name.as_str() == raw)
            .ok_or_else(|| RouteError::UnknownRoute(raw.to_owned()))
    }
}

/// One row of the route table.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Path pattern; segments starting with `:` are parameters.
    pub path: &'static str,
    pub name: RouteName,
    pub requires_auth: bool,
}

pub static ROUTES: [RouteDef; 7] = [
    RouteDef { path: "/", name: RouteName::Home, requires_auth: true },
    RouteDef { path: "/friends", name: RouteName::Friends, requires_auth: true },
    RouteDef { path: "/groups", name: RouteName::Groups, requires_auth: true },
    RouteDef { path: "/groups/:id", name: RouteName::GroupDetail, requires_auth: true },
    RouteDef { path: "/history", name: RouteName::History, requires_auth: true },
    RouteDef { path: "/profile", name: RouteName::Profile, requires_auth: true },
    RouteDef { path: "/login", name: RouteName::Login, requires_auth: false },
];

/// Errors from building a concrete path out of a route name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("route {route} requires param `{param}`")]
    MissingParam { route: &'static str, param: &'static str },
}

/// A path resolved against the table, with captured params.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDef,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Drop the query string and fragment.
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Strip query/fragment and a single trailing slash. The root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let path = strip_query(path);
    if path.is_empty() || path == HOME_PATH {
        return HOME_PATH;
    }
    path.strip_suffix('/').unwrap_or(path)
}

/// Match `path` against the table. `None` means the router's fallback view.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = normalize_path(path);
    ROUTES
        .iter()
        .find_map(|def| match_pattern(def.path, path).map(|params| RouteMatch { route: def, params }))
}

/// Path relative to the router base, or `None` if `path` lies outside it.
///
/// `base` is empty or `/segment[/segment]` without a trailing slash.
pub fn strip_base<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() || rest.starts_with(['?', '#']) {
        return Some(HOME_PATH);
    }
    rest.starts_with('/').then_some(rest)
}

/// Prefix an app path with the router base for use in a plain `href`.
pub fn with_base(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Whether navigating to `path` requires a signed-in user.
pub fn requires_auth(path: &str) -> bool {
    resolve(path).is_some_and(|m| m.route.requires_auth)
}

/// Build a concrete path for a named route.
///
/// # Errors
///
/// Returns `RouteError::MissingParam` when the pattern has a parameter that
/// `params` does not supply (or supplies empty).
pub fn href(name: RouteName, params: &[(&str, &str)]) -> Result<String, RouteError> {
    let def = name.route();
    if def.path == HOME_PATH {
        return Ok(HOME_PATH.to_owned());
    }
    let mut out = String::with_capacity(def.path.len());
    for segment in segments(def.path) {
        out.push('/');
        match segment.strip_prefix(':') {
            Some(param) => {
                let value = params
                    .iter()
                    .find(|(key, _)| *key == param)
                    .map(|(_, value)| *value)
                    .filter(|value| !value.is_empty())
                    .ok_or(RouteError::MissingParam { route: name.as_str(), param })?;
                out.push_str(value);
            }
            None => out.push_str(segment),
        }
    }
    Ok(out)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    if !path.starts_with('/') {
        return None;
    }
    let mut want = segments(pattern);
    let mut have = path.split('/').skip(1).filter(|_| path != HOME_PATH);
    let mut params = Vec::new();
    loop {
        match (want.next(), have.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(param) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.push((param, actual.to_owned()));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}
