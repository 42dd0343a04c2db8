//! Reference-data records.
//!
//! These map directly to the Amadeus reference-data JSON responses. Amadeus
//! omits fields rather than sending nulls, so most fields are optional.

use serde::{Deserialize, Serialize};

/// Envelope around every reference-data response.
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// One carrier from `GET /v1/reference-data/airlines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineRecord {
    /// 2-character IATA designator.
    pub iata_code: Option<String>,

    /// 3-character ICAO designator.
    pub icao_code: Option<String>,

    /// Marketing name (e.g., "LUFTHANSA").
    pub business_name: Option<String>,

    /// Short name, used when the business name is missing.
    pub common_name: Option<String>,
}

impl AirlineRecord {
    /// Build a record with just a code and business name.
    pub fn new(iata_code: impl Into<String>, business_name: impl Into<String>) -> Self {
        Self {
            iata_code: Some(iata_code.into()),
            business_name: Some(business_name.into()),
            ..Self::default()
        }
    }

    /// Name to show for this carrier, if the record carries one.
    pub fn display_name(&self) -> Option<&str> {
        [&self.business_name, &self.common_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

/// One location from `GET /v1/reference-data/locations`.
///
/// A keyword search can match several locations, so callers must compare
/// `iata_code` against the code they asked about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    /// IATA code of this location.
    #[serde(default)]
    pub iata_code: String,

    /// Location name.
    #[serde(default)]
    pub name: String,

    /// Name including city and country, when provided.
    pub detailed_name: Option<String>,
}

impl AirportRecord {
    /// Build a record with a code and name.
    pub fn new(iata_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            iata_code: iata_code.into(),
            name: name.into(),
            detailed_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_airline_response() {
        let json = r#"{
            "meta": {"count": 1},
            "data": [{
                "type": "airline",
                "iataCode": "LH",
                "icaoCode": "DLH",
                "businessName": "LUFTHANSA",
                "commonName": "LUFTHANSA"
            }]
        }"#;
        let response: DataResponse<AirlineRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].icao_code.as_deref(), Some("DLH"));
        assert_eq!(response.data[0].display_name(), Some("LUFTHANSA"));
    }

    #[test]
    fn parse_location_response() {
        let json = r#"{
            "data": [
                {"subType": "AIRPORT", "iataCode": "TLV", "name": "BEN GURION INTL", "detailedName": "TEL AVIV/IL: BEN GURION INTL"},
                {"subType": "AIRPORT", "iataCode": "SDV", "name": "SDE DOV"}
            ]
        }"#;
        let response: DataResponse<AirportRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].iata_code, "TLV");
        assert_eq!(response.data[1].detailed_name, None);
    }

    #[test]
    fn missing_data_is_empty() {
        let response: DataResponse<AirlineRecord> = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn display_name_falls_back_to_common_name() {
        let record = AirlineRecord {
            business_name: Some("  ".into()),
            common_name: Some("WIDEROE".into()),
            ..AirlineRecord::default()
        };
        assert_eq!(record.display_name(), Some("WIDEROE"));

        assert_eq!(AirlineRecord::default().display_name(), None);
    }
}
