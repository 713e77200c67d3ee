//! Directory of supported bookmakers.

use serde::Serialize;

use super::comparison::ComparisonTable;
use super::id::BookmakerKey;

/// A bookmaker the board knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bookmaker {
    pub key: &'static str,
    pub display_name: &'static str,
    pub website: &'static str,
}

const BOOKMAKERS: [Bookmaker; 6] = [
    Bookmaker {
        key: "sportsbet",
        display_name: "Sportsbet",
        website: "https://www.sportsbet.com.au",
    },
    Bookmaker {
        key: "tab",
        display_name: "TAB",
        website: "https://www.tab.com.au",
    },
    Bookmaker {
        key: "neds",
        display_name: "Neds",
        website: "https://www.neds.com.au",
    },
    Bookmaker {
        key: "ladbrokes_au",
        display_name: "Ladbrokes",
        website: "https://www.ladbrokes.com.au",
    },
    Bookmaker {
        key: "unibet",
        display_name: "Unibet",
        website: "https://www.unibet.com.au",
    },
    Bookmaker {
        key: "betfair",
        display_name: "Betfair",
        website: "https://www.betfair.com.au",
    },
];

/// Look up a bookmaker by key.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static Bookmaker> {
    BOOKMAKERS.iter().find(|b| b.key == key)
}

/// A bookmaker present in a comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveBookmaker {
    pub key: BookmakerKey,
    pub display_name: String,
    /// `None` for bookmakers outside the directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
}

/// Bookmakers that priced at least one outcome in `table`.
///
/// Directory entries come first in directory order, followed by unknown
/// bookmakers in the order the table first lists them.
#[must_use]
pub fn active_in(table: &ComparisonTable) -> Vec<ActiveBookmaker> {
    let present = table.bookmakers();

    let known = BOOKMAKERS
        .iter()
        .filter(|b| present.iter().any(|(k, _)| k.as_str() == b.key))
        .map(|b| ActiveBookmaker {
            key: BookmakerKey::from(b.key),
            display_name: b.display_name.to_string(),
            website: Some(b.website),
        });

    let unknown = present
        .iter()
        .filter(|(k, _)| lookup(k.as_str()).is_none())
        .map(|(k, name)| ActiveBookmaker {
            key: (*k).clone(),
            display_name: (*name).to_string(),
            website: None,
        });

    known.chain(unknown).collect()
}
