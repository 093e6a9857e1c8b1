//! Travel mode enum shared by the cost model, decision engine and output.
//!
//! An agent that has not travelled yet has no mode; that state is
//! `Option<TravelMode>::None` wherever it can occur.

/// One of the two modes an agent chooses between on every trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelMode {
    /// Scheduled public transit.
    Transit,
    /// On-demand private-for-hire (ride-hail).
    Pfh,
}

impl TravelMode {
    /// Human-readable label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Transit => "transit",
            TravelMode::Pfh     => "pfh",
        }
    }

    /// Label for an optional choice; `"none"` before the first trip.
    pub fn label(choice: Option<TravelMode>) -> &'static str {
        choice.map_or("none", TravelMode::as_str)
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
