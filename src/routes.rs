use std::fmt;
use std::str::FromStr;

/// Screens reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Companies,
    CompanyNew,
    CompanyEdit(i64),
    Documents,
    DocumentNew,
    DocumentEdit(i64),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("no screen for path: {0}")]
pub struct UnknownRoute(pub String);

impl Route {
    /// Resource id carried by the route, if any
    pub fn id(&self) -> Option<i64> {
        match self {
            Route::CompanyEdit(id) | Route::DocumentEdit(id) => Some(*id),
            _ => None,
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path
            .split('?')
            .next()
            .unwrap_or("")
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let unknown = || UnknownRoute(path.to_string());
        // Ids follow the form screens: zero or non-numeric ids do not name a resource
        let parse_id = |raw: &str| raw.parse::<i64>().ok().filter(|id| *id > 0);

        match segments.as_slice() {
            ["companies"] => Ok(Route::Companies),
            ["companies", "new"] => Ok(Route::CompanyNew),
            ["companies", id, "edit"] => parse_id(*id).map(Route::CompanyEdit).ok_or_else(unknown),
            ["documents"] => Ok(Route::Documents),
            ["documents", "new"] => Ok(Route::DocumentNew),
            ["documents", id, "edit"] => parse_id(*id).map(Route::DocumentEdit).ok_or_else(unknown),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Companies => write!(f, "/companies"),
            Route::CompanyNew => write!(f, "/companies/new"),
            Route::CompanyEdit(id) => write!(f, "/companies/{}/edit", id),
            Route::Documents => write!(f, "/documents"),
            Route::DocumentNew => write!(f, "/documents/new"),
            Route::DocumentEdit(id) => write!(f, "/documents/{}/edit", id),
        }
    }
}
