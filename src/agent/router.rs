//! Keyword routing of inputs that should be answered by web search.

use strum::{Display, IntoStaticStr};

/// A search-routed query kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Route {
    BitcoinPrice,
    Weather,
}

/// Evaluated in order; the first trigger found wins.
const ROUTES: &[(&str, Route)] = &[
    ("price of bitcoin", Route::BitcoinPrice),
    ("weather in", Route::Weather),
];

impl Route {
    /// The query sent to the search provider for this input.
    pub fn query<'a>(&self, input: &'a str) -> &'a str {
        match self {
            Self::BitcoinPrice => "current price of Bitcoin",
            Self::Weather => input,
        }
    }
}

/// Find the search route for an input, if any. Matching is case-insensitive.
pub fn route(input: &str) -> Option<Route> {
    let lowered = input.to_lowercase();
    ROUTES
        .iter()
        .find(|(trigger, _)| lowered.contains(trigger))
        .map(|(_, route)| *route)
}
