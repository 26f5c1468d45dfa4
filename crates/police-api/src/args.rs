//! Typed tool arguments and geographic query resolution
//!
//! Argument bags arriving over the protocol are loosely typed JSON objects.
//! Each tool re-expresses its bag as an explicit struct, deserialized once
//! at the dispatch boundary: required fields are plain types (a missing
//! field fails deserialization there), optional fields are `Option`. The
//! recurring "which location was given?" decision is captured by
//! [`GeoQuery`].

use serde::Deserialize;

/// Arguments for street-level crime queries
#[derive(Debug, Default, Deserialize)]
pub struct StreetCrimesArgs {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub poly: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Arguments for street-level outcome queries
#[derive(Debug, Default, Deserialize)]
pub struct OutcomesArgs {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub poly: Option<String>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Arguments for crimes at a specific location
#[derive(Debug, Default, Deserialize)]
pub struct CrimesAtLocationArgs {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Arguments for crimes that could not be mapped to a location
#[derive(Debug, Deserialize)]
pub struct NoLocationArgs {
    pub category: String,
    pub force: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// A lone optional month filter
#[derive(Debug, Default, Deserialize)]
pub struct DateArg {
    #[serde(default)]
    pub date: Option<String>,
}

/// A crime's 64-character persistent identifier
#[derive(Debug, Deserialize)]
pub struct PersistentIdArg {
    pub persistent_id: String,
}

/// A force identifier with an optional month filter
#[derive(Debug, Deserialize)]
pub struct ForceArgs {
    pub force_id: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// A force/neighbourhood identifier pair
#[derive(Debug, Deserialize)]
pub struct NeighbourhoodArgs {
    pub force_id: String,
    pub neighbourhood_id: String,
}

/// A required coordinate pair
#[derive(Debug, Deserialize)]
pub struct LocateArgs {
    pub lat: f64,
    pub lng: f64,
}

/// Arguments for area stop-and-search queries
#[derive(Debug, Default, Deserialize)]
pub struct StopsAreaArgs {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub poly: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Arguments for stop-and-search at a known location
#[derive(Debug, Deserialize)]
pub struct StopsLocationArgs {
    pub location_id: i64,
    #[serde(default)]
    pub date: Option<String>,
}

/// The winning branch of a tool's location-resolution precedence rule
///
/// Resolution is an ordered first-match chain: a location identifier beats
/// a coordinate pair, which beats a polygon. `None` from the resolver
/// means the query is under-specified; the caller must skip the upstream
/// call and return its empty default rather than treat it as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoQuery {
    LocationId(i64),
    Point { lat: f64, lng: f64 },
    Poly(String),
}

impl GeoQuery {
    /// Resolve the full precedence chain: `location_id` -> `lat`+`lng` -> `poly`
    ///
    /// Tools without a `location_id` or `poly` arm pass `None` for that slot.
    /// A coordinate pair only wins when both halves are present.
    pub fn resolve(
        location_id: Option<i64>,
        lat: Option<f64>,
        lng: Option<f64>,
        poly: Option<&str>,
    ) -> Option<Self> {
        if let Some(id) = location_id {
            return Some(Self::LocationId(id));
        }
        if let (Some(lat), Some(lng)) = (lat, lng) {
            return Some(Self::Point { lat, lng });
        }
        match poly {
            Some(p) if !p.is_empty() => Some(Self::Poly(p.to_string())),
            _ => None,
        }
    }

    /// Append the winning branch's query parameters and nothing else
    pub fn push_params(&self, params: &mut Vec<(String, String)>) {
        match self {
            Self::LocationId(id) => {
                params.push(("location_id".to_string(), id.to_string()));
            }
            Self::Point { lat, lng } => {
                params.push(("lat".to_string(), lat.to_string()));
                params.push(("lng".to_string(), lng.to_string()));
            }
            Self::Poly(poly) => {
                params.push(("poly".to_string(), poly.clone()));
            }
        }
    }
}

/// Append `date` verbatim when present and non-empty
///
/// Format is not validated here; the upstream service owns that.
pub fn push_date(params: &mut Vec<(String, String)>, date: Option<&str>) {
    if let Some(date) = date {
        if !date.is_empty() {
            params.push(("date".to_string(), date.to_string()));
        }
    }
}
