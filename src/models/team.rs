//! Team model.
//!
//! A team is a league participant with a unique name and a home venue
//! location. Teams are immutable for the duration of a solve.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A league participant with a home venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team name. Used as the identifier throughout the crate
    /// and as the tie-break key for rivalry home/away splits.
    pub name: String,
    /// Home venue location.
    pub venue: GeoPoint,
}

impl Team {
    /// Creates a team from a name and venue coordinates in degrees.
    pub fn new(name: impl Into<String>, lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            name: name.into(),
            venue: GeoPoint::new(lat_deg, lon_deg),
        }
    }
}
