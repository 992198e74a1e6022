//! EPSG coordinate reference system codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// EPSG code of WGS84 geographic coordinates, the service default.
pub const EPSG_WGS84: i32 = 4326;

const OGC_URN_PREFIX: &str = "URN:OGC:DEF:CRS:EPSG:";
const OGC_HTTP_PREFIX: &str = "HTTP://WWW.OPENGIS.NET/DEF/CRS/EPSG/";

/// A positive EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct EpsgCode(i32);

impl EpsgCode {
    /// Wrap a raw code, rejecting zero and negative values.
    pub fn new(code: i32) -> Result<Self, CrsParseError> {
        if code > 0 {
            Ok(Self(code))
        } else {
            Err(CrsParseError::NotPositive(code))
        }
    }

    pub fn wgs84() -> Self {
        Self(EPSG_WGS84)
    }

    pub fn code(&self) -> i32 {
        self.0
    }

    /// Parse a CRS reference as it appears in SOS requests and encodings.
    ///
    /// Accepts formats like:
    /// - "4326"
    /// - "EPSG:4326"
    /// - "urn:ogc:def:crs:EPSG::4326" (also with a version, "EPSG:6.6:4326")
    /// - "http://www.opengis.net/def/crs/EPSG/0/4326"
    pub fn parse(s: &str) -> Result<Self, CrsParseError> {
        let trimmed = s.trim();
        let normalized = trimmed.to_uppercase();

        let digits = if let Some(rest) = normalized.strip_prefix(OGC_URN_PREFIX) {
            rest.rsplit(':').next().unwrap_or_default()
        } else if let Some(rest) = normalized.strip_prefix(OGC_HTTP_PREFIX) {
            rest.rsplit('/').next().unwrap_or_default()
        } else if let Some(rest) = normalized.strip_prefix("EPSG:") {
            rest
        } else {
            normalized.as_str()
        };

        let code: i32 = digits
            .parse()
            .map_err(|_| CrsParseError::Unrecognized(trimmed.to_string()))?;
        Self::new(code)
    }

    /// The OGC URN form, e.g. "urn:ogc:def:crs:EPSG::4326".
    pub fn to_urn(&self) -> String {
        format!("urn:ogc:def:crs:EPSG::{}", self.0)
    }

    /// Check if this is one of the common geographic (lat/lon) CRS.
    pub fn is_geographic(&self) -> bool {
        matches!(self.0, 4326 | 4269 | 4258 | 4979)
    }
}

impl Default for EpsgCode {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl TryFrom<i32> for EpsgCode {
    type Error = CrsParseError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<EpsgCode> for i32 {
    fn from(code: EpsgCode) -> Self {
        code.0
    }
}

impl fmt::Display for EpsgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CrsParseError {
    #[error("Unrecognized CRS reference: {0}")]
    Unrecognized(String),

    #[error("EPSG code must be greater than zero, got {0}")]
    NotPositive(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crs() {
        assert_eq!(EpsgCode::parse("EPSG:4326").unwrap().code(), 4326);
        assert_eq!(EpsgCode::parse("epsg:3857").unwrap().code(), 3857);
        assert_eq!(EpsgCode::parse("31466").unwrap().code(), 31466);
        assert_eq!(
            EpsgCode::parse("urn:ogc:def:crs:EPSG::4258").unwrap().code(),
            4258
        );
        assert_eq!(
            EpsgCode::parse("urn:ogc:def:crs:EPSG:6.6:4326").unwrap().code(),
            4326
        );
        assert_eq!(
            EpsgCode::parse("http://www.opengis.net/def/crs/EPSG/0/25832")
                .unwrap()
                .code(),
            25832
        );
        assert!(EpsgCode::parse("CRS:84").is_err());
        assert!(matches!(
            EpsgCode::parse("EPSG:0"),
            Err(CrsParseError::NotPositive(0))
        ));
    }

    #[test]
    fn test_display_and_urn() {
        let code = EpsgCode::new(4326).unwrap();
        assert_eq!(code.to_string(), "EPSG:4326");
        assert_eq!(code.to_urn(), "urn:ogc:def:crs:EPSG::4326");
        assert!(code.is_geographic());
        assert!(!EpsgCode::new(3857).unwrap().is_geographic());
    }

    #[test]
    fn test_serde_rejects_non_positive() {
        let code: EpsgCode = serde_json::from_str("4326").unwrap();
        assert_eq!(code, EpsgCode::wgs84());
        assert!(serde_json::from_str::<EpsgCode>("-1").is_err());
    }
}
