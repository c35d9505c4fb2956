//! Navigation routes shared with the UI router.

use crate::model::record::RecordId;
use std::fmt::{Display, Formatter};

const LIST_ROUTE: &str = "pokemonList";
const DETAIL_ROUTE_PREFIX: &str = "pokemonDetail/";

/// One navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(RecordId),
}

impl Route {
    /// Parses `pokemonList` or `pokemonDetail/{id}`.
    ///
    /// Returns `None` for unknown routes and non-integer ids.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().trim_start_matches('/');
        if value == LIST_ROUTE {
            return Some(Self::List);
        }
        value
            .strip_prefix(DETAIL_ROUTE_PREFIX)
            .and_then(|raw_id| raw_id.parse::<RecordId>().ok())
            .map(Self::Detail)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => f.write_str(LIST_ROUTE),
            Self::Detail(id) => write!(f, "{DETAIL_ROUTE_PREFIX}{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn parses_list_and_detail_routes() {
        assert_eq!(Route::parse("pokemonList"), Some(Route::List));
        assert_eq!(Route::parse("/pokemonDetail/25"), Some(Route::Detail(25)));
        assert_eq!(Route::parse("pokemonDetail/-3"), Some(Route::Detail(-3)));
    }

    #[test]
    fn rejects_unknown_routes_and_bad_ids() {
        assert_eq!(Route::parse("pokemonDetail/pikachu"), None);
        assert_eq!(Route::parse("pokemonDetail/"), None);
        assert_eq!(Route::parse("settings"), None);
    }

    #[test]
    fn display_matches_parse() {
        for route in [Route::List, Route::Detail(151)] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }
}
