//! Geographic coordinates and great-circle distances.
//!
//! Venue locations are plain latitude/longitude pairs in degrees.
//! Distances are great-circle miles computed with the haversine
//! formula, cached for every ordered pair of distinct teams in a
//! [`DistanceMatrix`]. Entity counts are small (tens of venues), so
//! the matrix is a dense flat array with no special indexing.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky & Telescope 68(2)

use serde::{Deserialize, Serialize};

/// Mean Earth radius in miles, as used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A venue location: latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat_deg: f64,
    /// Longitude in degrees, positive east.
    pub lon_deg: f64,
}

impl GeoPoint {
    /// Creates a new point from degrees.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Whether both coordinates are finite and within valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat_deg.is_finite()
            && self.lon_deg.is_finite()
            && (-90.0..=90.0).contains(&self.lat_deg)
            && (-180.0..=180.0).contains(&self.lon_deg)
    }
}

/// Great-circle distance between two points in miles.
///
/// Haversine formula with [`EARTH_RADIUS_MILES`]. Symmetric in its
/// arguments. Degenerate inputs (NaN, out-of-range degrees) are a
/// caller error and are rejected by league validation before any
/// distance is computed.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.lat_deg.to_radians(), a.lon_deg.to_radians());
    let (lat2, lon2) = (b.lat_deg.to_radians(), b.lon_deg.to_radians());
    let (dlat, dlon) = (lat2 - lat1, lon2 - lon1);

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Dense pairwise distance table over a fixed set of venues.
///
/// Stores miles for every ordered pair `(i, j)` with `i != j`.
/// The diagonal is undefined and must never be queried; lookups
/// assert `from != to` in debug builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrix {
    len: usize,
    /// Row-major `len * len` table; diagonal entries are unused.
    miles: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances for the given venue list.
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let len = points.len();
        let mut miles = vec![0.0; len * len];
        for (i, &a) in points.iter().enumerate() {
            for (j, &b) in points.iter().enumerate() {
                if i != j {
                    miles[i * len + j] = haversine_miles(a, b);
                }
            }
        }
        Self { len, miles }
    }

    /// Distance in miles from venue `from` to venue `to`.
    #[inline]
    pub fn miles(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from != to, "self-distance is undefined");
        self.miles[from * self.len + to]
    }

    /// Number of venues covered by this matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the matrix covers no venues.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        // 2 * pi * R / 360 ≈ 69.09 miles
        let d = haversine_miles(a, b);
        assert!((d - 69.09).abs() < 0.05, "got {d}");
    }

    #[test]
    fn test_haversine_symmetry() {
        let bos = GeoPoint::new(42.3601, -71.0589);
        let sea = GeoPoint::new(47.6062, -122.3321);
        let ab = haversine_miles(bos, sea);
        let ba = haversine_miles(sea, bos);
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = GeoPoint::new(39.2904, -76.6122);
        assert_eq!(haversine_miles(p, p), 0.0);
    }

    #[test]
    fn test_distance_matrix_symmetric() {
        let points = vec![
            GeoPoint::new(42.3601, -71.0589),
            GeoPoint::new(40.8237, -73.9356),
            GeoPoint::new(34.0522, -118.2437),
        ];
        let m = DistanceMatrix::from_points(&points);
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert!((m.miles(i, j) - m.miles(j, i)).abs() < 1e-9);
                    assert!(m.miles(i, j) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_geo_point_validity() {
        assert!(GeoPoint::new(42.0, -71.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
    }
}
