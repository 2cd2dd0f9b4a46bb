//! Solvability analysis of a facet permutation.
//!
//! The checks separate states a real cube can reach from arbitrary
//! relabelings of its stickers:
//! - every facet appears exactly once
//! - pieces are rigid: facets that started on one edge or corner are still
//!   together in one slot, flipped or twisted but never mirrored
//! - edge flips come in pairs and corner twists cancel modulo 3
//!
//! Permutation parity (edge permutation parity must equal corner permutation
//! parity) is not checked. All predicates holding is therefore necessary for
//! a reachable state, but not sufficient.

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::{CubeError, Result};
use crate::facets::{FacetPermutation, NUM_FACETS};
use crate::pieces::{is_corner_key, is_edge_key, Corner, Edge, Piece};

/// Read-only verdicts over one cube state.
pub struct SolvabilityChecker<'c> {
    cube: &'c FacetPermutation,
}

impl<'c> SolvabilityChecker<'c> {
    pub fn new(cube: &'c FacetPermutation) -> Self {
        Self { cube }
    }

    /// Returns true if the facets, sorted, are exactly `0..48`.
    pub fn has_correct_unique_facets(&self) -> bool {
        let mut sorted = *self.cube.facets();
        sorted.sort_unstable();
        let unique = sorted
            .iter()
            .enumerate()
            .all(|(expected, &facet)| facet as usize == expected);
        if !unique {
            debug!("facet values are not a permutation of 0..{NUM_FACETS}");
        }
        unique
    }

    /// Same check as [`Self::has_correct_unique_facets`], reported as an error.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` if the bijection invariant does not hold.
    pub fn verify_unique_facets(&self) -> Result<()> {
        if self.has_correct_unique_facets() {
            Ok(())
        } else {
            Err(CubeError::InvariantViolation(format!(
                "facets {:?} are not a permutation of 0..{NUM_FACETS}",
                self.cube.facets()
            )))
        }
    }

    /// Returns true if every edge slot holds a solved edge, possibly flipped.
    pub fn has_correct_edges(&self) -> bool {
        let rigid = pieces_are_rigid::<Edge>(self.cube);
        if !rigid {
            debug!("an edge slot holds facets from different edges");
        }
        rigid
    }

    /// Returns true if every corner slot holds a solved corner, possibly
    /// twisted. Mirrored readings fail.
    pub fn has_correct_corners(&self) -> bool {
        let rigid = pieces_are_rigid::<Corner>(self.cube);
        if !rigid {
            debug!("a corner slot holds facets from different corners or a mirrored corner");
        }
        rigid
    }

    /// Returns true if the number of edges with a key facet on their slot's
    /// key position is even.
    pub fn has_orientable_edges(&self) -> bool {
        let oriented = Edge::read_all(self.cube)
            .into_iter()
            .filter(|edge| is_edge_key(edge.primary()))
            .count();
        if oriented % 2 != 0 {
            debug!("{oriented} of 12 edges are oriented, flips do not pair up");
            return false;
        }
        true
    }

    /// Returns true if the corner twists sum to 0 modulo 3.
    ///
    /// A corner contributes +1 when its key facet sits second in the slot
    /// (one clockwise twist) and -1 when it sits third.
    pub fn has_orientable_corners(&self) -> bool {
        let twist = corner_twist(self.cube);
        if twist.rem_euclid(3) != 0 {
            debug!("corner twist sums to {twist}, which is not a multiple of 3");
            return false;
        }
        true
    }
}

/// Sum of the signed corner twists.
pub fn corner_twist(cube: &FacetPermutation) -> i32 {
    Corner::read_all(cube)
        .into_iter()
        .map(|corner| {
            let mut twist = 0;
            if is_corner_key(corner.rotated(2).primary()) {
                twist += 1;
            }
            if is_corner_key(corner.rotated(1).primary()) {
                twist -= 1;
            }
            twist
        })
        .sum()
}

/// Returns true if every slot's reading is some orientation of a solved piece.
fn pieces_are_rigid<P: Piece>(cube: &FacetPermutation) -> bool {
    let solved: FxHashSet<P> = P::read_all(&FacetPermutation::SOLVED)
        .into_iter()
        .collect();

    P::read_all(cube).into_iter().all(|piece| {
        piece
            .orientations()
            .into_iter()
            .any(|orientation| solved.contains(&orientation))
    })
}
