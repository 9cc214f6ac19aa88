//! Compass directions and fixed per-direction storage.
//!
//! Every per-direction container in the workspace is a [`PerDirection`]
//! addressed by [`Direction`], so "exactly four approaches, no more, no
//! less" holds by construction rather than by runtime checks.

use std::fmt;
use std::ops::{Index, IndexMut};

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four approach directions of the intersection.
///
/// The set is fixed for the lifetime of an intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in canonical order: N, S, E, W.
    ///
    /// The order matters: arrival sampling and the green-phase serve
    /// tie-break both walk directions in exactly this order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position in [`ALL`][Self::ALL], for array addressing.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        };
        f.write_str(c)
    }
}

// ── PerDirection ──────────────────────────────────────────────────────────────

/// Fixed storage of one `T` per [`Direction`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerDirection<T>([T; 4]);

impl<T> PerDirection<T> {
    /// Construct from the four values in canonical order.
    pub const fn new(north: T, south: T, east: T, west: T) -> Self {
        PerDirection([north, south, east, west])
    }

    /// Construct by evaluating `f` for each direction, in canonical order.
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        PerDirection(Direction::ALL.map(&mut f))
    }

    /// Iterate `(direction, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().map(move |d| (d, &self.0[d.index()]))
    }

    /// Sum over all four directions.
    pub fn total(&self) -> T
    where
        T: Copy + std::iter::Sum,
    {
        self.0.into_iter().sum()
    }
}

impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;

    #[inline]
    fn index(&self, direction: Direction) -> &T {
        &self.0[direction.index()]
    }
}

impl<T> IndexMut<Direction> for PerDirection<T> {
    #[inline]
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self.0[direction.index()]
    }
}
