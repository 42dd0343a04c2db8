//! Startup warm-up from the static tables.

use tracing::info;

use crate::domain::{AirlineCode, AirportCode};
use crate::fallback::{self, COMMON_AIRLINES, COMMON_AIRPORTS};

use super::NameCache;

impl NameCache {
    /// Fill the cache with static-table names for the given codes.
    ///
    /// Codes already cached are left alone, even if the table now says
    /// something different. Codes missing from the table are skipped.
    /// Never calls a provider. Saves at most once, and only if something
    /// was added. Returns the number of entries added.
    pub fn preload(&mut self, airlines: &[AirlineCode], airports: &[AirportCode]) -> usize {
        let mut added = 0;

        for code in airlines {
            if self.document.airline(code).is_none()
                && let Some(name) = fallback::airline_name(code)
                && self.document.insert_airline(code, name)
            {
                added += 1;
            }
        }

        for code in airports {
            if self.document.airport(code).is_none()
                && let Some(name) = fallback::airport_name(code)
                && self.document.insert_airport(code, name)
            {
                added += 1;
            }
        }

        if added > 0 {
            self.modified = true;
            self.persist();
        }

        info!(added, "preloaded name cache");
        added
    }

    /// Preload the curated lists of commonly seen codes.
    pub fn preload_common(&mut self) -> usize {
        let airlines: Vec<AirlineCode> = COMMON_AIRLINES
            .iter()
            .filter_map(|c| AirlineCode::parse(c).ok())
            .collect();
        let airports: Vec<AirportCode> = COMMON_AIRPORTS
            .iter()
            .filter_map(|c| AirportCode::parse(c).ok())
            .collect();

        self.preload(&airlines, &airports)
    }
}
