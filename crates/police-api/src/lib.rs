//! Client for the UK Police public crime-data API
//!
//! This crate wraps `https://data.police.uk/api` behind a small typed
//! surface: one method per upstream endpoint, each taking an explicit
//! argument struct and returning plain JSON.
//!
//! Two policies shape every operation:
//!
//! - **Location precedence**: tools that accept several ways of naming a
//!   place resolve them in a fixed order (location id, then coordinate
//!   pair, then polygon). An under-specified query makes no upstream call
//!   and yields the tool's empty default.
//! - **Empty defaults**: transport faults are logged and absorbed into a
//!   shape-preserving placeholder (`[]`, `{}`, or `""`) instead of being
//!   surfaced to callers. Agents treat missing data and upstream hiccups
//!   identically.
//!
//! # Example
//!
//! ```ignore
//! use police_api::{PoliceClient, StreetCrimesArgs};
//!
//! let client = PoliceClient::new()?;
//! let crimes = client
//!     .street_level_crimes(&StreetCrimesArgs {
//!         lat: Some(52.629729),
//!         lng: Some(-1.131592),
//!         ..Default::default()
//!     })
//!     .await;
//! ```

pub mod args;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod shape;

pub use args::{
    CrimesAtLocationArgs, DateArg, ForceArgs, GeoQuery, LocateArgs, NeighbourhoodArgs,
    NoLocationArgs, OutcomesArgs, PersistentIdArg, StopsAreaArgs, StopsLocationArgs,
    StreetCrimesArgs,
};
pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PoliceClient};
pub use error::{Error, Result};
pub use shape::{ResponseShape, or_empty};
