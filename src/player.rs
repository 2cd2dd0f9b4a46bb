//! Step-by-step playback of an algorithm on a cube.

use log::debug;

use crate::error::Result;
use crate::facets::FacetPermutation;
use crate::moves;
use crate::notation::Algorithm;

/// Plays an algorithm against a borrowed cube, one move at a time.
///
/// The cursor counts the moves currently applied and lies in `0..=len`.
pub struct AlgorithmPlayer<'c> {
    algorithm: Algorithm,
    cube: &'c mut FacetPermutation,
    cursor: usize,
}

impl<'c> AlgorithmPlayer<'c> {
    /// Creates a player positioned before the first move.
    pub fn new(algorithm: Algorithm, cube: &'c mut FacetPermutation) -> Self {
        Self {
            algorithm,
            cube,
            cursor: 0,
        }
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    /// The cube as it stands after the moves played so far.
    pub fn cube(&self) -> &FacetPermutation {
        self.cube
    }

    /// Number of moves currently applied.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.algorithm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithm.is_empty()
    }

    /// Returns true strictly between the first and the last move.
    pub fn is_executing(&self) -> bool {
        0 < self.cursor && self.cursor < self.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.len()
    }

    /// Applies the move under the cursor and advances. No-op once finished.
    ///
    /// # Errors
    ///
    /// `UnsupportedMove` for X, Y and Z tokens. The cursor does not advance.
    pub fn step(&mut self) -> Result<()> {
        let Some(&turn) = self.algorithm.moves().get(self.cursor) else {
            return Ok(());
        };
        moves::apply(self.cube, turn, false)?;
        self.cursor += 1;
        debug!("stepped {} ({}/{})", turn, self.cursor, self.len());
        Ok(())
    }

    /// Steps back and undoes the move before the cursor. No-op at the start.
    ///
    /// # Errors
    ///
    /// `UnsupportedMove` for X, Y and Z tokens. The cursor does not move.
    pub fn step_back(&mut self) -> Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        let turn = self.algorithm.moves()[self.cursor - 1];
        moves::apply(self.cube, turn, true)?;
        self.cursor -= 1;
        debug!("undid {} ({}/{})", turn, self.cursor, self.len());
        Ok(())
    }

    /// Calls [`Self::step`] once per move in the algorithm.
    ///
    /// Steps past the end are no-ops, so from a mid-sequence cursor this only
    /// plays the remaining moves. It never rewinds to the start.
    ///
    /// # Errors
    ///
    /// Stops at the first move that fails; earlier moves stay applied.
    pub fn execute(&mut self) -> Result<()> {
        for _ in 0..self.len() {
            self.step()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CubeError;
    use crate::notation::{Face, Move};

    fn player<'c>(notation: &str, cube: &'c mut FacetPermutation) -> AlgorithmPlayer<'c> {
        AlgorithmPlayer::new(notation.parse().unwrap(), cube)
    }

    #[test]
    fn test_cursor_states() {
        let mut cube = FacetPermutation::solved();
        let mut player = player("R U R'", &mut cube);
        assert_eq!(player.cursor(), 0);
        assert!(!player.is_executing());
        assert!(!player.is_finished());

        player.step().unwrap();
        assert!(player.is_executing());

        player.step().unwrap();
        player.step().unwrap();
        assert_eq!(player.cursor(), 3);
        assert!(!player.is_executing());
        assert!(player.is_finished());
    }

    #[test]
    fn test_step_past_either_end_is_noop() {
        let mut cube = FacetPermutation::solved();
        let mut player = player("F", &mut cube);

        player.step_back().unwrap();
        assert_eq!(player.cursor(), 0);
        assert!(player.cube().is_solved());

        player.step().unwrap();
        let after = *player.cube();
        player.step().unwrap();
        assert_eq!(player.cursor(), 1);
        assert_eq!(*player.cube(), after);
    }

    #[test]
    fn test_step_back_restores_each_state() {
        let mut cube = FacetPermutation::solved();
        let mut player = player("R U2 F' L D' B2", &mut cube);

        let mut history = vec![*player.cube()];
        while !player.is_finished() {
            player.step().unwrap();
            history.push(*player.cube());
        }

        while player.cursor() > 0 {
            player.step_back().unwrap();
            assert_eq!(*player.cube(), history[player.cursor()]);
        }
        assert!(player.cube().is_solved());
    }

    #[test]
    fn test_execute_from_middle_plays_only_the_rest() {
        let mut full = FacetPermutation::solved();
        player("R U R' U'", &mut full).execute().unwrap();

        let mut cube = FacetPermutation::solved();
        let mut resumed = player("R U R' U'", &mut cube);
        resumed.step().unwrap();
        resumed.step().unwrap();
        resumed.execute().unwrap();

        assert!(resumed.is_finished());
        assert_eq!(*resumed.cube(), full);
    }

    #[test]
    fn test_empty_algorithm_is_finished() {
        let mut cube = FacetPermutation::solved();
        let mut player = player("", &mut cube);
        assert!(player.is_empty());
        assert!(player.is_finished());
        assert!(!player.is_executing());
        player.execute().unwrap();
        assert!(player.cube().is_solved());
    }

    #[test]
    fn test_rotation_token_stops_the_player() {
        let mut cube = FacetPermutation::solved();
        let mut player = player("R X U", &mut cube);
        player.step().unwrap();
        let after_r = *player.cube();

        assert_eq!(player.step(), Err(CubeError::UnsupportedMove(Face::X)));
        assert_eq!(player.cursor(), 1);
        assert_eq!(*player.cube(), after_r);
        assert_eq!(player.algorithm().moves()[1], Move::new(Face::X));
    }
}
