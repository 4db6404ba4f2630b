//! Geographic types for the attendance heatmap.
//!
//! The portal renders a heatmap of where attendees are coming from. The
//! backend returns raw coordinates; the client buckets them by geohash
//! prefix so nearby attendees collapse into one weighted cell.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Geohash base32 alphabet (no a, i, l, o).
const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCoordinate`] if either component is out
    /// of range or not finite.
    pub fn new(lat: f64, lon: f64) -> DomainResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinate(format!("latitude {lat}")));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinate(format!("longitude {lon}")));
        }
        Ok(Self { lat, lon })
    }
}

/// Encodes a coordinate as a geohash of the given precision (in characters).
///
/// Standard interleaved encoding: even bits narrow the longitude interval,
/// odd bits the latitude interval, five bits per output character.
#[must_use]
pub fn geohash(point: GeoPoint, precision: usize) -> String {
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut hash = String::with_capacity(precision);
    let mut bits = 0_u8;
    let mut bit_count = 0_u8;
    let mut even_bit = true;

    while hash.len() < precision {
        bits <<= 1;
        if even_bit {
            let mid = f64::midpoint(lon_range.0, lon_range.1);
            if point.lon >= mid {
                bits |= 1;
                lon_range.0 = mid;
            } else {
                lon_range.1 = mid;
            }
        } else {
            let mid = f64::midpoint(lat_range.0, lat_range.1);
            if point.lat >= mid {
                bits |= 1;
                lat_range.0 = mid;
            } else {
                lat_range.1 = mid;
            }
        }
        even_bit = !even_bit;
        bit_count += 1;
        if bit_count == 5 {
            hash.push(char::from(BASE32[usize::from(bits)]));
            bits = 0;
            bit_count = 0;
        }
    }

    hash
}

/// One heatmap cell: a geohash prefix and how many attendees fall in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatBucket {
    /// Geohash prefix identifying the cell.
    pub cell: String,
    /// Number of points in the cell.
    pub count: u32,
}

impl HeatBucket {
    /// Buckets points by geohash prefix of the given precision.
    ///
    /// Result is sorted by descending count, then by cell for determinism.
    #[must_use]
    pub fn aggregate(points: &[GeoPoint], precision: usize) -> Vec<Self> {
        let mut cells: HashMap<String, u32> = HashMap::new();
        for point in points {
            *cells.entry(geohash(*point, precision)).or_default() += 1;
        }

        let mut buckets: Vec<Self> = cells
            .into_iter()
            .map(|(cell, count)| Self { cell, count })
            .collect();
        buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.cell.cmp(&b.cell)));
        buckets
    }
}
