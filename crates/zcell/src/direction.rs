//! Compass directions and the neighbour map keyed by them.

use std::{fmt, ops::Index};

use crate::cell::ZCell;

/// The four compass directions a cell has a neighbour in.
///
/// Rows are numbered top-down in curve order, so north is the previous
/// row and south the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous row.
    North,
    /// Toward the next row.
    South,
    /// Toward the next column.
    East,
    /// Toward the previous column.
    West,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// The same-depth neighbours of a cell, one per compass direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbours {
    /// Neighbour toward the previous row.
    pub north: ZCell,
    /// Neighbour toward the next row.
    pub south: ZCell,
    /// Neighbour toward the next column.
    pub east: ZCell,
    /// Neighbour toward the previous column.
    pub west: ZCell,
}

impl Neighbours {
    /// The neighbour in `direction`.
    pub fn get(&self, direction: Direction) -> ZCell {
        self[direction]
    }

    /// Iterate over `(direction, neighbour)` pairs in [`Direction::ALL`]
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, ZCell)> + '_ {
        Direction::ALL.iter().map(|&direction| (direction, self[direction]))
    }
}

impl Index<Direction> for Neighbours {
    type Output = ZCell;

    fn index(&self, direction: Direction) -> &ZCell {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["north", "south", "east", "west"]);
    }
}
