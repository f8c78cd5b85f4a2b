//! Country Value Object

use serde::{Deserialize, Serialize};

/// Supported countries for the location field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "United States")]
    UnitedStates,
    Canada,
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    Germany,
    France,
    Spain,
    Italy,
    Netherlands,
    Sweden,
    Norway,
    Denmark,
    Finland,
    Poland,
    Russia,
    China,
    Japan,
    #[serde(rename = "South Korea")]
    SouthKorea,
    Australia,
    #[serde(rename = "New Zealand")]
    NewZealand,
    Brazil,
    Mexico,
    Argentina,
}

impl Country {
    /// All supported countries, in display order.
    pub const ALL: [Country; 22] = [
        Country::UnitedStates,
        Country::Canada,
        Country::UnitedKingdom,
        Country::Germany,
        Country::France,
        Country::Spain,
        Country::Italy,
        Country::Netherlands,
        Country::Sweden,
        Country::Norway,
        Country::Denmark,
        Country::Finland,
        Country::Poland,
        Country::Russia,
        Country::China,
        Country::Japan,
        Country::SouthKorea,
        Country::Australia,
        Country::NewZealand,
        Country::Brazil,
        Country::Mexico,
        Country::Argentina,
    ];

    /// Canonical display name (also the wire and storage form).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::Canada => "Canada",
            Country::UnitedKingdom => "United Kingdom",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Spain => "Spain",
            Country::Italy => "Italy",
            Country::Netherlands => "Netherlands",
            Country::Sweden => "Sweden",
            Country::Norway => "Norway",
            Country::Denmark => "Denmark",
            Country::Finland => "Finland",
            Country::Poland => "Poland",
            Country::Russia => "Russia",
            Country::China => "China",
            Country::Japan => "Japan",
            Country::SouthKorea => "South Korea",
            Country::Australia => "Australia",
            Country::NewZealand => "New Zealand",
            Country::Brazil => "Brazil",
            Country::Mexico => "Mexico",
            Country::Argentina => "Argentina",
        }
    }

    /// Parse the canonical name; `None` for anything outside the set.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
