//! Edge and corner pieces read out of a facet permutation.
//!
//! Pieces are never stored. They are values derived on demand by reading the
//! facets at the positions of a fixed slot. The first position of every slot
//! is its key (primary) position; the key facets of all slots together form
//! [`EDGE_KEYS`] and [`CORNER_KEYS`].

use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use crate::error::{CubeError, Result};
use crate::facets::{Facet, FacetPermutation, Position};

/// Number of edge slots.
pub const NUM_EDGES: usize = 12;

/// Number of corner slots.
pub const NUM_CORNERS: usize = 8;

/// A named slot holding `N` facets of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<const N: usize> {
    pub name: &'static str,
    pub positions: [Position; N],
}

impl<const N: usize> Slot<N> {
    /// The slot's primary position.
    pub const fn key(&self) -> Position {
        self.positions[0]
    }
}

/// Edge slots as (key position, partner position).
pub const EDGE_SLOTS: [Slot<2>; NUM_EDGES] = [
    Slot { name: "UB", positions: [1, 41] },
    Slot { name: "UL", positions: [3, 9] },
    Slot { name: "UR", positions: [4, 25] },
    Slot { name: "UF", positions: [6, 17] },
    Slot { name: "FL", positions: [19, 12] },
    Slot { name: "FR", positions: [20, 27] },
    Slot { name: "DF", positions: [33, 22] },
    Slot { name: "DL", positions: [35, 14] },
    Slot { name: "DR", positions: [36, 30] },
    Slot { name: "DB", positions: [38, 46] },
    Slot { name: "BR", positions: [43, 28] },
    Slot { name: "BL", positions: [44, 11] },
];

/// Corner slots as the key position followed by the other two clockwise.
pub const CORNER_SLOTS: [Slot<3>; NUM_CORNERS] = [
    Slot { name: "UBL", positions: [0, 8, 42] },
    Slot { name: "UBR", positions: [2, 40, 26] },
    Slot { name: "UFL", positions: [5, 16, 10] },
    Slot { name: "UFR", positions: [7, 24, 18] },
    Slot { name: "DFL", positions: [32, 15, 21] },
    Slot { name: "DFR", positions: [34, 23, 29] },
    Slot { name: "DBL", positions: [37, 47, 13] },
    Slot { name: "DBR", positions: [39, 31, 45] },
];

/// Key positions of the edge slots, in slot order.
pub const EDGE_KEYS: [Position; NUM_EDGES] = {
    let mut keys = [0; NUM_EDGES];
    let mut i = 0;
    while i < NUM_EDGES {
        keys[i] = EDGE_SLOTS[i].key();
        i += 1;
    }
    keys
};

/// Key positions of the corner slots, in slot order.
pub const CORNER_KEYS: [Position; NUM_CORNERS] = {
    let mut keys = [0; NUM_CORNERS];
    let mut i = 0;
    while i < NUM_CORNERS {
        keys[i] = CORNER_SLOTS[i].key();
        i += 1;
    }
    keys
};

/// Returns true if `facet` started on an edge key position.
pub fn is_edge_key(facet: Facet) -> bool {
    EDGE_KEYS.contains(&(facet as Position))
}

/// Returns true if `facet` started on a corner key position.
pub fn is_corner_key(facet: Facet) -> bool {
    CORNER_KEYS.contains(&(facet as Position))
}

/// Behaviour shared by edges and corners for rigidity checks.
pub trait Piece: Copy + Eq + Hash + fmt::Debug {
    /// Reads the piece in every slot of this kind, in slot order.
    fn read_all(cube: &FacetPermutation) -> Vec<Self>;

    /// Every reading the same physical piece can produce in a slot.
    fn orientations(self) -> Vec<Self>;

    /// The facet sitting on the slot's key position.
    fn primary(self) -> Facet;
}

/// Two facets read from an edge slot, key position first.
///
/// Equality is order-sensitive: a flipped edge is a different value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge([Facet; 2]);

impl Edge {
    pub const fn new(first: Facet, second: Facet) -> Self {
        Self([first, second])
    }

    pub const fn facets(&self) -> [Facet; 2] {
        self.0
    }

    /// Flips the edge in place.
    pub fn flip(&mut self) {
        self.0.swap(0, 1);
    }

    /// Returns the edge as it reads after a physical flip.
    pub fn flipped(self) -> Self {
        Self([self.0[1], self.0[0]])
    }
}

impl Index<usize> for Edge {
    type Output = Facet;

    fn index(&self, index: usize) -> &Facet {
        &self.0[index]
    }
}

impl Piece for Edge {
    fn read_all(cube: &FacetPermutation) -> Vec<Self> {
        edges(cube).to_vec()
    }

    fn orientations(self) -> Vec<Self> {
        vec![self, self.flipped()]
    }

    fn primary(self) -> Facet {
        self.0[0]
    }
}

/// Three facets read from a corner slot, key position first, then clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner([Facet; 3]);

impl Corner {
    pub const fn new(first: Facet, second: Facet, third: Facet) -> Self {
        Self([first, second, third])
    }

    pub const fn facets(&self) -> [Facet; 3] {
        self.0
    }

    /// Rotates right by `steps`: `[a, b, c]` rotated once is `[c, a, b]`.
    pub fn rotate(&mut self, steps: usize) {
        self.0.rotate_right(steps % 3);
    }

    pub fn rotated(mut self, steps: usize) -> Self {
        self.rotate(steps);
        self
    }

    /// Reverses the facet order, turning the reading counter-clockwise.
    pub fn mirror(&mut self) {
        self.0.reverse();
    }

    pub fn mirrored(mut self) -> Self {
        self.mirror();
        self
    }

    /// Returns true if `self` is `other` rotated 0, 1 or 2 steps.
    pub fn is_rotation_of(self, other: Corner) -> bool {
        (0..3).any(|steps| other.rotated(steps) == self)
    }

    pub fn is_mirror_of(self, other: Corner) -> bool {
        self.mirrored() == other
    }

    /// Returns true if `self` is a rotation of `other`'s mirror image.
    pub fn is_mirrored_rotation_of(self, other: Corner) -> bool {
        self.mirrored().is_rotation_of(other)
    }

    /// Signed number of steps `self` is rotated away from `other`.
    ///
    /// Returns 0 if they are equal, 1 if `self == other.rotated(1)` and -1 if
    /// `self == other.rotated(2)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `self` is not a rotation of `other`.
    pub fn rotation_step(self, other: Corner) -> Result<i8> {
        if self == other {
            Ok(0)
        } else if self == other.rotated(1) {
            Ok(1)
        } else if self == other.rotated(2) {
            Ok(-1)
        } else {
            Err(CubeError::InvalidArgument(format!(
                "{self:?} is not a rotation of {other:?}"
            )))
        }
    }
}

impl Index<usize> for Corner {
    type Output = Facet;

    fn index(&self, index: usize) -> &Facet {
        &self.0[index]
    }
}

impl Piece for Corner {
    fn read_all(cube: &FacetPermutation) -> Vec<Self> {
        corners(cube).to_vec()
    }

    fn orientations(self) -> Vec<Self> {
        vec![self, self.rotated(1), self.rotated(2)]
    }

    fn primary(self) -> Facet {
        self.0[0]
    }
}

fn read_edge(cube: &FacetPermutation, slot: &Slot<2>) -> Edge {
    let [first, second] = slot.positions;
    Edge::new(cube[first], cube[second])
}

fn read_corner(cube: &FacetPermutation, slot: &Slot<3>) -> Corner {
    let [first, second, third] = slot.positions;
    Corner::new(cube[first], cube[second], cube[third])
}

/// Reads the edge in every edge slot, in `EDGE_SLOTS` order.
pub fn edges(cube: &FacetPermutation) -> [Edge; NUM_EDGES] {
    EDGE_SLOTS.map(|slot| read_edge(cube, &slot))
}

/// Reads the corner in every corner slot, in `CORNER_SLOTS` order.
pub fn corners(cube: &FacetPermutation) -> [Corner; NUM_CORNERS] {
    CORNER_SLOTS.map(|slot| read_corner(cube, &slot))
}

/// Reads the edge in the slot whose key position is `key`.
///
/// # Errors
///
/// `InvalidArgument` if `key` is not an edge key position.
pub fn edge_at(cube: &FacetPermutation, key: Position) -> Result<Edge> {
    EDGE_SLOTS
        .iter()
        .find(|slot| slot.key() == key)
        .map(|slot| read_edge(cube, slot))
        .ok_or_else(|| {
            CubeError::InvalidArgument(format!("{key} is not an edge key position"))
        })
}

/// Reads the corner in the slot whose key position is `key`.
///
/// # Errors
///
/// `InvalidArgument` if `key` is not a corner key position.
pub fn corner_at(cube: &FacetPermutation, key: Position) -> Result<Corner> {
    CORNER_SLOTS
        .iter()
        .find(|slot| slot.key() == key)
        .map(|slot| read_corner(cube, slot))
        .ok_or_else(|| {
            CubeError::InvalidArgument(format!("{key} is not a corner key position"))
        })
}

/// The edges of the solved cube, in slot order.
pub fn solved_edges() -> [Edge; NUM_EDGES] {
    edges(&FacetPermutation::SOLVED)
}

/// The corners of the solved cube, in slot order.
pub fn solved_corners() -> [Corner; NUM_CORNERS] {
    corners(&FacetPermutation::SOLVED)
}
