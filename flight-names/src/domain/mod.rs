//! Domain types for flight reference data.
//!
//! Codes are validated at construction time, so the cache and resolver
//! can trust that any code they receive is well-formed.

mod airline;
mod airport;

pub use airline::{AirlineCode, InvalidAirlineCode};
pub use airport::{AirportCode, InvalidAirportCode};
