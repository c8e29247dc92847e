//! Latitude/longitude geocoding along the cell bit convention.

use crate::error::{self, Error};

/// Lower corner of the geographic domain, `(lon, lat)`.
pub const DOMAIN_MIN: (f64, f64) = (-180.0, -90.0);

/// Upper corner of the geographic domain, `(lon, lat)`.
pub const DOMAIN_MAX: (f64, f64) = (180.0, 90.0);

/// Encode a geographic point as an interleaved integer of `bits` bits.
///
/// Bits are produced most-significant first by interval bisection, one
/// axis per bit: odd bit positions narrow the latitude range, even
/// positions the longitude range. This is the same even/odd convention
/// the cell type uses for its X/Y interleave, so the result is directly
/// usable as a curve position of depth `bits / 2`.
///
/// Points on a bisection boundary fall into the upper half, so the
/// domain edges `lat = 90` and `lon = 180` land in the last cell of
/// their axis.
pub fn encode_point(lat: f64, lon: f64, bits: u32) -> error::Result<u64> {
    if !(DOMAIN_MIN.1..=DOMAIN_MAX.1).contains(&lat) || !(DOMAIN_MIN.0..=DOMAIN_MAX.0).contains(&lon)
    {
        return Err(Error::GeoPoint { lat, lon });
    }
    if bits > 64 {
        return Err(Error::Depth { depth: bits / 2 });
    }

    let mut lat_range = (DOMAIN_MIN.1, DOMAIN_MAX.1);
    let mut lon_range = (DOMAIN_MIN.0, DOMAIN_MAX.0);
    let mut value = 0u64;
    for pos in (0..bits).rev() {
        let (coord, range) = if pos % 2 == 1 {
            (lat, &mut lat_range)
        } else {
            (lon, &mut lon_range)
        };
        let mid = (range.0 + range.1) / 2.0;
        value <<= 1;
        if coord >= mid {
            value |= 1;
            range.0 = mid;
        } else {
            range.1 = mid;
        }
    }
    Ok(value)
}
