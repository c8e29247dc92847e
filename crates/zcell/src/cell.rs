//! The Z-order curve cell type and its bit-level algorithms.

use std::{cmp::Ordering, fmt, str::FromStr};

use smallvec::SmallVec;

use crate::{
    direction::Neighbours,
    error::{self, Error},
    geo, ops,
};

/// Deepest supported recursion level: positions hold `2 * depth` bits, so
/// a 64-bit position word caps the depth at 32. Requests beyond the cap
/// are rejected at construction, never truncated.
pub const MAX_DEPTH: u32 = 32;

/// A position on a 2D Z-order curve.
///
/// ```text
/// 0 - 1
///   /
/// 2 - 3
/// ```
///
/// A cell is one of the `4^depth` quadtree cells covering the domain at a
/// given recursion depth, identified by its interleaved (Morton) position
/// along the curve. Cells are immutable; every operation derives a new
/// cell from the position word alone, without decoding back to
/// coordinates unless explicitly asked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZCell {
    /// Interleaved position on the curve; always below `4^depth`.
    position: u64,
    /// Recursion depth of the curve. A curve of depth `d` has `4^d` cells.
    depth: u32,
    /// The last X-axis subdivision was elided: the cell also covers the
    /// neighbouring X cell, doubling its width.
    half_split: bool,
}

/// Axis-aligned box covered by a cell, scaled to caller units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    /// Lower corner, `(x, y)`.
    pub min: (f64, f64),
    /// Upper corner, `(x, y)`.
    pub max: (f64, f64),
}

impl ZCell {
    /// Construct a cell from a raw curve position.
    ///
    /// Fails when `position` does not exist on the requested depth level
    /// or `depth` exceeds [`MAX_DEPTH`].
    pub fn new(position: u64, depth: u32) -> error::Result<Self> {
        Self::with_half_split(position, depth, false)
    }

    /// Construct a cell from a raw curve position, marking it half-split.
    pub fn with_half_split(position: u64, depth: u32, half_split: bool) -> error::Result<Self> {
        if depth > MAX_DEPTH {
            return Err(Error::Depth { depth });
        }
        if position > ops::level_mask(depth) {
            return Err(Error::Position { position, depth });
        }
        Ok(Self {
            position,
            depth,
            half_split,
        })
    }

    /// Construct a cell from grid indices, interleaving their bits.
    ///
    /// `x` and `y` index the `2^depth` columns and rows of the grid.
    pub fn from_xy(x: u32, y: u32, depth: u32) -> error::Result<Self> {
        if depth > MAX_DEPTH {
            return Err(Error::Depth { depth });
        }
        if u64::from(x) >> depth != 0 || u64::from(y) >> depth != 0 {
            return Err(Error::Coordinate { x, y, depth });
        }
        Ok(Self {
            position: ops::interleave(x, y),
            depth,
            half_split: false,
        })
    }

    /// Construct the cell containing a geographic point.
    ///
    /// Delegates to [`geo::encode_point`] for `2 * depth` bits and wraps
    /// the result as a raw position.
    pub fn from_lat_lon(lat: f64, lon: f64, depth: u32) -> error::Result<Self> {
        Self::from_lat_lon_half_split(lat, lon, depth, false)
    }

    /// Construct the cell containing a geographic point, marking it
    /// half-split.
    pub fn from_lat_lon_half_split(
        lat: f64,
        lon: f64,
        depth: u32,
        half_split: bool,
    ) -> error::Result<Self> {
        if depth > MAX_DEPTH {
            return Err(Error::Depth { depth });
        }
        let position = geo::encode_point(lat, lon, depth * 2)?;
        Self::with_half_split(position, depth, half_split)
    }

    /// Interleaved position on the curve.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Recursion depth of the curve this cell lives on.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether the final X-axis split was elided.
    pub fn is_half_split(&self) -> bool {
        self.half_split
    }

    /// De-interleave the position into its `(x, y)` grid indices.
    pub fn to_xy(&self) -> (u32, u32) {
        ops::deinterleave(self.position)
    }

    /// Split the position into its axis components, each bit kept at its
    /// interleaved slot.
    ///
    /// The components are the Moser–de Bruijn sequence values of the X
    /// and Y indices; their sum is the position itself. Neighbour and
    /// addition arithmetic operate on this split.
    pub fn components(&self) -> (u64, u64) {
        (self.position & ops::X_MASK, self.position & ops::Y_MASK)
    }

    /// Covered region in the full geographic extent, longitude along X
    /// and latitude along Y.
    pub fn region(&self) -> Region {
        self.region_in(geo::DOMAIN_MIN, geo::DOMAIN_MAX)
    }

    /// Covered region scaled to the range spanned by `min` and `max`.
    ///
    /// Depth 0 covers the whole range. A half-split cell counts half as
    /// many subdivisions along X, doubling the box width.
    pub fn region_in(&self, min: (f64, f64), max: (f64, f64)) -> Region {
        if self.depth == 0 {
            return Region { min, max };
        }

        let (x, y) = self.to_xy();
        let num_y = (1u64 << self.depth) as f64;
        let num_x = if self.half_split { num_y / 2.0 } else { num_y };

        let range_x = max.0 - min.0;
        let range_y = max.1 - min.1;
        let min_x = min.0 + f64::from(x) * range_x / num_x;
        let min_y = min.1 + f64::from(y) * range_y / num_y;

        Region {
            min: (min_x, min_y),
            max: (min_x + range_x / num_x, min_y + range_y / num_y),
        }
    }

    /// The ancestor cell `levels` higher in the quadtree.
    ///
    /// Total: shifting past the root saturates at depth 0.
    pub fn parent(&self, levels: u32) -> Self {
        let levels = levels.min(self.depth);
        Self {
            position: self.position.checked_shr(2 * levels).unwrap_or(0),
            depth: self.depth - levels,
            half_split: false,
        }
    }

    /// The `4^levels` descendant cells `levels` deeper in the quadtree,
    /// in ascending position order.
    ///
    /// Fails when the descendant depth would exceed [`MAX_DEPTH`].
    pub fn children(&self, levels: u32) -> error::Result<SmallVec<[Self; 4]>> {
        let depth = self.depth.saturating_add(levels);
        if depth > MAX_DEPTH {
            return Err(Error::Depth { depth });
        }

        // u128 spans the base..base+count range even at the depth cap.
        let base = u128::from(self.position) << (2 * levels);
        let count = 1u128 << (2 * levels);
        Ok((base..base + count)
            .map(|position| Self {
                position: position as u64,
                depth,
                half_split: false,
            })
            .collect())
    }

    /// The same-depth neighbours in all four compass directions, wrapping
    /// around the domain boundary.
    ///
    /// Stepping along one axis must carry only through that axis's
    /// interleaved bits: the other axis is saturated to all-ones before
    /// the increment (or masked out before the decrement), the result is
    /// masked back to the stepped axis, and the untouched axis bits are
    /// OR-ed back in. At depth 0 every direction is the cell itself.
    pub fn neighbours(&self) -> Neighbours {
        let mask = ops::level_mask(self.depth);
        let (x_bits, y_bits) = self.components();
        let at = |position: u64| Self {
            position: position & mask,
            depth: self.depth,
            half_split: false,
        };

        Neighbours {
            north: at((y_bits.wrapping_sub(1) & ops::Y_MASK) | x_bits),
            south: at(((self.position | ops::X_MASK).wrapping_add(1) & ops::Y_MASK) | x_bits),
            east: at(((self.position | ops::Y_MASK).wrapping_add(1) & ops::X_MASK) | y_bits),
            west: at((x_bits.wrapping_sub(1) & ops::X_MASK) | y_bits),
        }
    }

    /// Coordinate-wise addition of two cells, modulo the domain size.
    ///
    /// With equal depths the X and Y components are summed independently
    /// using the same carry confinement as [`Self::neighbours`]. A
    /// shallower operand is first promoted to the deeper depth through its
    /// first child, trading precision for alignment; the fixed promotion
    /// direction makes mixed-depth addition non-commutative.
    pub fn add(&self, other: Self) -> Self {
        if self.depth != other.depth {
            let (deeper, shallower) = if self.depth > other.depth {
                (*self, other)
            } else {
                (other, *self)
            };
            let diff = deeper.depth - shallower.depth;
            let promoted = Self {
                position: shallower.position.checked_shl(2 * diff).unwrap_or(0),
                depth: deeper.depth,
                half_split: false,
            };
            return deeper.add(promoted);
        }

        let x_sum = (self.position | ops::Y_MASK).wrapping_add(other.position & ops::X_MASK)
            & ops::X_MASK;
        let y_sum = (self.position | ops::X_MASK).wrapping_add(other.position & ops::Y_MASK)
            & ops::Y_MASK;
        Self {
            position: (x_sum | y_sum) & ops::level_mask(self.depth),
            depth: self.depth,
            half_split: false,
        }
    }

    /// Whether `other` lies within this cell.
    ///
    /// True exactly when this cell is `other` or one of its ancestors; a
    /// deeper cell never contains a shallower one. The doubled width of a
    /// half-split cell is not taken into account: such a cell only
    /// reports descendants of its primary (even-X) half.
    pub fn contains(&self, other: Self) -> bool {
        match self.depth.cmp(&other.depth) {
            Ordering::Greater => false,
            Ordering::Less => *self == other.parent(other.depth - self.depth),
            Ordering::Equal => *self == other,
        }
    }

    /// Order two cells by the area they cover.
    ///
    /// A deeper cell covers less area and compares `Less`, regardless of
    /// position; equal depths compare `Equal` even for distinct cells.
    /// This granularity ordering is deliberately inconsistent with
    /// equality, which is why it is a named method and not a `PartialOrd`
    /// implementation.
    pub fn cmp_area(&self, other: Self) -> Ordering {
        other.depth.cmp(&self.depth)
    }
}

impl fmt::Display for ZCell {
    /// Bit-string form: `2 * depth` bits, most-significant first. A
    /// half-split cell drops the trailing bit that would encode the
    /// elided X split, yielding an odd length.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let skip = u32::from(self.half_split);
        for i in (skip..self.depth * 2).rev() {
            let bit = (self.position >> i) & 1;
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl FromStr for ZCell {
    type Err = Error;

    /// Parse the bit-string form, most-significant bit first.
    ///
    /// An odd number of bits marks a half-split: the elided X split is
    /// re-padded with a `'0'` before decoding, so the depth is the bit
    /// count halved, rounded up. The empty string is the depth-0 cell.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !text.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(Error::BitString {
                text: text.to_string(),
            });
        }

        let half_split = text.len() % 2 != 0;
        let depth = ((text.len() + usize::from(half_split)) / 2) as u32;
        if depth > MAX_DEPTH {
            return Err(Error::Depth { depth });
        }

        let mut position = 0u64;
        for b in text.bytes() {
            position = (position << 1) | u64::from(b == b'1');
        }
        if half_split {
            position <<= 1;
        }

        Self::with_half_split(position, depth, half_split)
    }
}
