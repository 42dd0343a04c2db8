//! Static reference tables.
//!
//! Well-known carrier and airport names used when the reference-data
//! provider is unavailable or has no record for a code, plus the curated
//! code lists used to warm the cache at startup.

use crate::domain::{AirlineCode, AirportCode};

/// Carrier code → display name.
const AIRLINES: &[(&str, &str)] = &[
    ("LH", "Lufthansa"),
    ("BA", "British Airways"),
    ("AF", "Air France"),
    ("KL", "KLM Royal Dutch Airlines"),
    ("TK", "Turkish Airlines"),
    ("EK", "Emirates"),
    ("QR", "Qatar Airways"),
    ("LY", "El Al Israel Airlines"),
    ("W6", "Wizz Air"),
    ("FR", "Ryanair"),
    ("U2", "easyJet"),
    ("OS", "Austrian Airlines"),
    ("LX", "Swiss International Air Lines"),
    ("SN", "Brussels Airlines"),
    ("AY", "Finnair"),
    ("SK", "Scandinavian Airlines"),
    ("IB", "Iberia"),
    ("VY", "Vueling"),
    ("TP", "TAP Air Portugal"),
    ("UX", "Air Europa"),
    ("DL", "Delta Air Lines"),
    ("AA", "American Airlines"),
    ("UA", "United Airlines"),
    ("AC", "Air Canada"),
    ("VS", "Virgin Atlantic"),
    ("WF", "Widerøe"),
    ("FI", "Icelandair"),
    ("6H", "Israir Airlines"),
    ("UP", "Bahamasair"),
];

/// IATA airport code → display name.
const AIRPORTS: &[(&str, &str)] = &[
    ("TLV", "Ben Gurion Airport, Tel Aviv"),
    ("KEF", "Keflavik International Airport, Reykjavik"),
    ("LHR", "Heathrow Airport, London"),
    ("CDG", "Charles de Gaulle Airport, Paris"),
    ("FRA", "Frankfurt Airport"),
    ("AMS", "Amsterdam Schiphol Airport"),
    ("IST", "Istanbul Airport"),
    ("DXB", "Dubai International Airport"),
    ("DOH", "Hamad International Airport, Doha"),
    ("VIE", "Vienna International Airport"),
    ("ZRH", "Zurich Airport"),
    ("BRU", "Brussels Airport"),
    ("HEL", "Helsinki Airport"),
    ("ARN", "Stockholm Arlanda Airport"),
    ("MAD", "Madrid-Barajas Airport"),
    ("BCN", "Barcelona Airport"),
    ("LIS", "Lisbon Airport"),
    ("JFK", "John F. Kennedy International Airport, New York"),
    ("LAX", "Los Angeles International Airport"),
    ("ORD", "O'Hare International Airport, Chicago"),
];

/// Carriers commonly seen on searches; warmed into the cache at startup.
pub const COMMON_AIRLINES: &[&str] = &[
    "LH", "BA", "AF", "KL", "TK", "EK", "QR", "LY", "W6", "FR", "U2", "OS", "LX", "SN", "AY",
    "SK", "IB", "VY", "TP", "UX", "FI", "6H",
];

/// Airports commonly seen on searches; warmed into the cache at startup.
pub const COMMON_AIRPORTS: &[&str] = &[
    "TLV", "KEF", "LHR", "CDG", "FRA", "AMS", "IST", "DXB", "DOH", "VIE", "ZRH", "BRU", "HEL",
    "ARN", "MAD", "BCN", "LIS", "JFK",
];

/// Look up a carrier in the static table.
pub fn airline_name(code: &AirlineCode) -> Option<&'static str> {
    lookup(AIRLINES, code.as_str())
}

/// Look up an airport in the static table.
pub fn airport_name(code: &AirportCode) -> Option<&'static str> {
    lookup(AIRPORTS, code.as_str())
}

/// Placeholder for a carrier nobody knows about. Never cached.
pub fn unknown_airline(code: &AirlineCode) -> String {
    format!("{} (unrecognized carrier)", code)
}

/// Placeholder for an airport nobody knows about. Never cached.
pub fn unknown_airport(code: &AirportCode) -> String {
    format!("{} Airport", code)
}

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}
