//! Observatory site definitions and the named-site lookup table.

use qtty::{Degrees, Meter, Quantity};

/// Errors raised when resolving a telescope selector.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("unknown telescope {name:?}; known sites: {known}")]
    UnknownSite { name: String, known: String },
}

/// A fixed ground-based observer location.
#[derive(Debug, Clone, Copy)]
pub struct ObservatorySite {
    /// Selector used on the command line, e.g. `"GBT"`.
    pub name: &'static str,
    /// Human-readable place name used as the calendar LOCATION field.
    pub location: &'static str,
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub elevation: Quantity<Meter>,
}

/// Sites the `-t/--telescope` selector dispatches to.
pub const SITES: &[ObservatorySite] = &[
    ObservatorySite {
        name: "GBT",
        location: "Green Bank, WV",
        latitude: Degrees::new(38.4),
        longitude: Degrees::new(-79.8),
        elevation: Quantity::<Meter>::new(808.0),
    },
    ObservatorySite {
        name: "Parkes",
        location: "Parkes, NSW",
        latitude: Degrees::new(-32.9984),
        longitude: Degrees::new(148.2635),
        elevation: Quantity::<Meter>::new(414.8),
    },
    ObservatorySite {
        name: "Effelsberg",
        location: "Effelsberg, Germany",
        latitude: Degrees::new(50.5248),
        longitude: Degrees::new(6.8836),
        elevation: Quantity::<Meter>::new(319.0),
    },
    ObservatorySite {
        name: "FAST",
        location: "Pingtang, Guizhou",
        latitude: Degrees::new(25.6529),
        longitude: Degrees::new(106.8567),
        elevation: Quantity::<Meter>::new(1110.0),
    },
];

impl ObservatorySite {
    /// Resolve a telescope selector against the site table.
    ///
    /// Matching is case-insensitive. Unknown names list the known sites in
    /// the error so the user can correct the invocation.
    pub fn lookup(name: &str) -> Result<&'static ObservatorySite, SiteError> {
        SITES
            .iter()
            .find(|site| site.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SiteError::UnknownSite {
                name: name.to_string(),
                known: SITES
                    .iter()
                    .map(|site| site.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
