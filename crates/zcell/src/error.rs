//! Error types used across the crate.

use thiserror::Error;

use crate::cell::MAX_DEPTH;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by cell construction and point encoding.
///
/// All variants are precondition violations: once a cell exists, every
/// operation on it is total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A raw curve position does not exist on the given depth level.
    #[error("position {position} does not exist on depth level {depth}")]
    Position {
        /// The offending interleaved position.
        position: u64,
        /// The depth it was requested at.
        depth: u32,
    },

    /// A grid coordinate does not exist on the given depth level.
    #[error("coordinate ({x}, {y}) does not exist on depth level {depth}")]
    Coordinate {
        /// The offending column index.
        x: u32,
        /// The offending row index.
        y: u32,
        /// The depth it was requested at.
        depth: u32,
    },

    /// A requested depth exceeds what 64-bit positions can encode.
    #[error("depth {depth} exceeds the supported maximum of {}", MAX_DEPTH)]
    Depth {
        /// The offending depth.
        depth: u32,
    },

    /// A textual cell representation contains something other than bits.
    #[error("invalid bit string {text:?}: expected only '0' and '1'")]
    BitString {
        /// The offending input.
        text: String,
    },

    /// A geographic point lies outside the latitude/longitude domain.
    #[error("point ({lat}, {lon}) is outside the geographic domain")]
    GeoPoint {
        /// Latitude of the offending point.
        lat: f64,
        /// Longitude of the offending point.
        lon: f64,
    },
}
