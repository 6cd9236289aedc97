//! Site routes and the manager-only guard.
//!
//! Routes are plain values: the crate decides *where* the user should go and the
//! view layer performs the navigation. [`Route::path`] and [`Route::parse`] convert
//! between routes and URL paths so the view layer can keep using strings.
//!
//! # Example
//!
//! ```
//! use artistly::app::Route;
//!
//! let login = Route::login_from(&Route::Dashboard);
//! assert_eq!(login.path(), "/login?from=%2Fdashboard");
//! assert_eq!(Route::parse(&login.path()), login);
//! assert_eq!(Route::parse("/nope"), Route::NotFound);
//! ```

use std::borrow::Cow;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Artists,
    Onboard,
    /// Login page, remembering the path the user was bounced from.
    Login { from: Option<String> },
    Dashboard,
    NotFound,
}

impl Route {
    /// Login route that returns to `route` after a successful login.
    #[must_use]
    pub fn login_from(route: &Self) -> Self {
        Self::Login {
            from: Some(route.path()),
        }
    }

    /// `true` for routes that need a manager session.
    #[must_use]
    pub const fn requires_manager(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Artists => "/artists".to_string(),
            Self::Onboard => "/onboard".to_string(),
            Self::Login { from: None } => "/login".to_string(),
            Self::Login { from: Some(from) } => format!("/login?from={}", urlencoding::encode(from)),
            Self::Dashboard => "/dashboard".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Reads a URL path (with optional query string) back into a route.
    ///
    /// Unknown paths become [`Route::NotFound`]. Query parameters other than the
    /// login page's `from` are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let (base, query) = path.split_once('?').unwrap_or((path, ""));
        let base = if base.len() > 1 { base.trim_end_matches('/') } else { base };

        match base {
            "/" | "" => Self::Home,
            "/artists" => Self::Artists,
            "/onboard" => Self::Onboard,
            "/dashboard" => Self::Dashboard,
            "/login" => Self::Login {
                from: query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("from="))
                    .map(decode_from),
            },
            _ => Self::NotFound,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

// Escapes that do not decode to UTF-8 are kept verbatim.
fn decode_from(value: &str) -> String {
    urlencoding::decode(value).map_or_else(|_| value.to_string(), Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Artists,
            Route::Onboard,
            Route::Login { from: None },
            Route::Dashboard,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn login_query_is_decoded() {
        assert_eq!(
            Route::parse("/login?type=manager&from=%2Fdashboard"),
            Route::Login { from: Some("/dashboard".to_string()) }
        );
        assert_eq!(Route::parse("/login?type=manager"), Route::Login { from: None });
    }

    #[test]
    fn malformed_escape_is_kept() {
        let from = |path: &str| match Route::parse(path) {
            Route::Login { from } => from,
            other => panic!("expected login route, got {other:?}"),
        };
        assert_eq!(from("/login?from=100%"), Some("100%".to_string()));
        assert_eq!(from("/login?from=%zz"), Some("%zz".to_string()));
        assert_eq!(from("/login?from=a%20b"), Some("a b".to_string()));
        assert_eq!(from("/login?from=%E0%A4%A"), Some("%E0%A4%A".to_string()));
    }

    #[test]
    fn non_ascii_paths_round_trip() {
        let route = Route::Login { from: Some("/artists?q=ठीक है".to_string()) };
        assert_eq!(
            route.path(),
            "/login?from=%2Fartists%3Fq%3D%E0%A4%A0%E0%A5%80%E0%A4%95%20%E0%A4%B9%E0%A5%88"
        );
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::parse("/artists/"), Route::Artists);
    }

    #[test]
    fn only_dashboard_is_protected() {
        assert!(Route::Dashboard.requires_manager());
        assert!(!Route::Artists.requires_manager());
        assert!(!Route::Login { from: None }.requires_manager());
    }
}
