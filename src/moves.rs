//! Face turn geometry and the move engine.
//!
//! A clockwise quarter turn of a face is five disjoint 4-cycles of positions:
//! the face's own edge facets, its own corner facets, and three strips on the
//! neighbouring faces carried along by the turning layer. Each cycle is
//! applied with [`FacetPermutation::cycle`], so the facet at `cycle[k]` moves
//! to `cycle[k + 1]`.

use log::trace;

use crate::error::{CubeError, Result};
use crate::facets::{FacetPermutation, Position};
use crate::notation::{Face, Move};

/// The five 4-cycles of one clockwise quarter turn.
pub type FaceCycles = [[Position; 4]; 5];

/// Quarter turn cycles for every turnable face.
///
/// Row order within an entry:
/// - 0: the face's edge facets
/// - 1: the face's corner facets
/// - 2: side edge facets
/// - 3, 4: side corner facets
pub static MOVE_TABLE: [(Face, FaceCycles); 6] = [
    (
        Face::U,
        [
            [1, 4, 6, 3],
            [0, 2, 7, 5],
            [17, 9, 41, 25],
            [16, 8, 40, 24],
            [18, 10, 42, 26],
        ],
    ),
    (
        Face::D,
        [
            [33, 36, 38, 35],
            [32, 34, 39, 37],
            [22, 30, 46, 14],
            [13, 21, 29, 45],
            [47, 15, 23, 31],
        ],
    ),
    (
        Face::L,
        [
            [9, 12, 14, 11],
            [8, 10, 15, 13],
            [3, 19, 35, 44],
            [0, 16, 32, 47],
            [5, 21, 37, 42],
        ],
    ),
    (
        Face::R,
        [
            [25, 28, 30, 27],
            [24, 26, 31, 29],
            [4, 43, 36, 20],
            [7, 40, 39, 23],
            [2, 45, 34, 18],
        ],
    ),
    (
        Face::F,
        [
            [17, 20, 22, 19],
            [16, 18, 23, 21],
            [6, 27, 33, 12],
            [5, 24, 34, 15],
            [7, 29, 32, 10],
        ],
    ),
    (
        Face::B,
        [
            [41, 44, 46, 43],
            [40, 42, 47, 45],
            [1, 11, 38, 28],
            [2, 8, 37, 31],
            [0, 13, 39, 26],
        ],
    ),
];

/// Looks up the quarter turn cycles for `face`.
///
/// # Errors
///
/// `UnsupportedMove` for the whole-cube rotations X, Y and Z.
pub fn face_cycles(face: Face) -> Result<&'static FaceCycles> {
    MOVE_TABLE
        .iter()
        .find(|(entry, _)| *entry == face)
        .map(|(_, cycles)| cycles)
        .ok_or(CubeError::UnsupportedMove(face))
}

/// Applies `turn` to `cube`.
///
/// The direction is `turn.inverted != reverse`: passing `reverse` undoes the
/// move, so an undone inverted move turns clockwise. A reversed direction
/// walks every cycle backwards; a double turn applies every cycle twice.
///
/// # Errors
///
/// `UnsupportedMove` if the face has no move table entry. The cube is left
/// untouched in that case.
pub fn apply(cube: &mut FacetPermutation, turn: Move, reverse: bool) -> Result<()> {
    let cycles = face_cycles(turn.face)?;
    let counter_clockwise = turn.inverted != reverse;
    let repeats = if turn.double { 2 } else { 1 };

    trace!(
        "applying {} (counter_clockwise: {}, reverse: {})",
        turn,
        counter_clockwise,
        reverse
    );

    for cycle in cycles {
        let mut positions = *cycle;
        if counter_clockwise {
            positions.reverse();
        }
        for _ in 0..repeats {
            cube.cycle(&positions)?;
        }
    }

    Ok(())
}

/// Applies every move in order.
///
/// # Errors
///
/// Stops at the first unsupported move. Moves before it stay applied.
pub fn apply_all<'a>(
    cube: &mut FacetPermutation,
    turns: impl IntoIterator<Item = &'a Move>,
) -> Result<()> {
    for &turn in turns {
        apply(cube, turn, false)?;
    }
    Ok(())
}

impl FacetPermutation {
    /// Applies a single move. Shorthand for [`apply`] without reversal.
    pub fn turn(&mut self, turn: Move) -> Result<()> {
        apply(self, turn, false)
    }
}
