//! Facet permutation: the 48-slot cube state and its cycle primitive.
//!
//! Positions are numbered on the unfolded cube net below. Centres never move
//! and are not stored, so each face contributes 8 positions and
//! `position / 8` is the face (Up, Left, Front, Right, Down, Back).
//!
//! ```text
//!                  0  1  2
//!                  3  U  4
//!                  5  6  7
//!
//!  40 41 42    8  9 10   16 17 18   24 25 26
//!  43  B 44   11  L 12   19  F 20   27  R 28
//!  45 46 47   13 14 15   21 22 23   29 30 31
//!
//!                 32 33 34
//!                 35  D 36
//!                 37 38 39
//! ```
//!
//! The back face is drawn as seen from behind, so its left column (40, 43, 45)
//! touches the right face.

use std::ops::Index;

use crate::error::{CubeError, Result};
use crate::notation::Face;

/// Identity of a sticker: the position it occupied in the solved state.
pub type Facet = u8;

/// A fixed physical location on the cube net.
pub type Position = usize;

/// Number of movable facets (6 faces x 8 non-centre stickers).
pub const NUM_FACETS: usize = 48;

/// Number of facets stored per face.
pub const FACETS_PER_FACE: usize = 8;

/// Face order of the position blocks on the net.
pub const NET_FACES: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::D, Face::B];

/// Bitmask with one bit per position.
const ALL_POSITIONS: u64 = (1 << NUM_FACETS) - 1;

/// Sticker colours of the standard scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
    Blue,
    Orange,
    Yellow,
    Green,
}

/// Colour of each face block, in `NET_FACES` order.
pub const FACE_COLORS: [Color; 6] = [
    Color::White,
    Color::Red,
    Color::Blue,
    Color::Orange,
    Color::Yellow,
    Color::Green,
];

/// Returns the face whose block contains `position`.
pub fn face_of(position: Position) -> Result<Face> {
    check_position(position)?;
    Ok(NET_FACES[position / FACETS_PER_FACE])
}

/// Returns the solved-state colour of `position`.
///
/// Since a facet is named after its solved position, this is also the colour
/// of facet `position` wherever it currently sits.
pub fn color(position: Position) -> Result<Color> {
    check_position(position)?;
    Ok(FACE_COLORS[position / FACETS_PER_FACE])
}

fn check_position(position: Position) -> Result<()> {
    if position >= NUM_FACETS {
        return Err(CubeError::InvalidArgument(format!(
            "position {position} is out of range 0..{NUM_FACETS}"
        )));
    }
    Ok(())
}

/// The cube state: which facet occupies each position.
///
/// Always a bijection from positions onto facets `0..48`. The only mutator is
/// [`FacetPermutation::cycle`], which is itself a permutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FacetPermutation {
    facets: [Facet; NUM_FACETS],
}

impl FacetPermutation {
    /// The solved state, `facets[i] == i`.
    pub const SOLVED: Self = Self::solved();

    /// Creates a solved cube.
    pub const fn solved() -> Self {
        let mut facets = [0; NUM_FACETS];
        let mut i = 0;
        while i < NUM_FACETS {
            facets[i] = i as Facet;
            i += 1;
        }
        Self { facets }
    }

    /// Creates a state from raw facet values supplied by a collaborator.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` if the values are not exactly `0..48` in some order.
    pub fn from_facets(facets: [Facet; NUM_FACETS]) -> Result<Self> {
        let mut seen = 0u64;
        for (position, &facet) in facets.iter().enumerate() {
            if facet as usize >= NUM_FACETS {
                return Err(CubeError::InvariantViolation(format!(
                    "facet {facet} at position {position} is out of range 0..{NUM_FACETS}"
                )));
            }
            if seen & (1u64 << facet) != 0 {
                return Err(CubeError::InvariantViolation(format!(
                    "facet {facet} appears more than once (again at position {position})"
                )));
            }
            seen |= 1u64 << facet;
        }
        debug_assert_eq!(seen, ALL_POSITIONS);
        Ok(Self { facets })
    }

    /// Returns the facet values indexed by position.
    #[inline]
    pub fn facets(&self) -> &[Facet; NUM_FACETS] {
        &self.facets
    }

    /// Returns true if every facet is back at its own position.
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Rotates the facets at `positions` one step to the right.
    ///
    /// The facet at `positions[k]` moves to `positions[k + 1]` and the last
    /// one wraps around to `positions[0]`. With two positions this is a swap.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if fewer than two positions are given, or any
    /// position is out of range or repeated. Nothing is moved in that case.
    pub fn cycle(&mut self, positions: &[Position]) -> Result<()> {
        if positions.len() < 2 {
            return Err(CubeError::InvalidArgument(format!(
                "a cycle needs at least 2 positions, got {}",
                positions.len()
            )));
        }

        // validate everything before touching the state
        let mut seen = 0u64;
        for &position in positions {
            check_position(position)?;
            if seen & (1u64 << position) != 0 {
                return Err(CubeError::InvalidArgument(format!(
                    "position {position} appears more than once in cycle {positions:?}"
                )));
            }
            seen |= 1u64 << position;
        }

        let last = self.facets[positions[positions.len() - 1]];
        for k in (1..positions.len()).rev() {
            self.facets[positions[k]] = self.facets[positions[k - 1]];
        }
        self.facets[positions[0]] = last;

        Ok(())
    }
}

impl Default for FacetPermutation {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Index<Position> for FacetPermutation {
    type Output = Facet;

    #[inline]
    fn index(&self, position: Position) -> &Facet {
        &self.facets[position]
    }
}
