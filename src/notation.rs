//! Move notation: faces, single move tokens and space-separated algorithms.
//!
//! A token is one face letter optionally followed by `'` (inverted) or `2`
//! (double), e.g. `R`, `U'`, `F2`.

use std::fmt;
use std::str::FromStr;

use crate::error::{CubeError, Result};

/// A face (or whole-cube rotation axis) named by a move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
    X,
    Y,
    Z,
}

impl Face {
    /// The six turnable faces, in move table order.
    pub const TURNABLE: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

    /// Returns the notation letter.
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
            Face::X => 'X',
            Face::Y => 'Y',
            Face::Z => 'Z',
        }
    }

    /// Returns true for whole-cube rotations, which turn no single layer.
    pub const fn is_rotation(self) -> bool {
        matches!(self, Face::X | Face::Y | Face::Z)
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(letter: char) -> Result<Self> {
        match letter {
            'U' => Ok(Face::U),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'B' => Ok(Face::B),
            'X' => Ok(Face::X),
            'Y' => Ok(Face::Y),
            'Z' => Ok(Face::Z),
            other => Err(CubeError::UnknownFace(other)),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A parsed move token.
///
/// `inverted` and `double` are independent flags. Notation can only produce
/// one of them, but a move built by hand may carry both, in which case it
/// behaves as a double turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub inverted: bool,
    pub double: bool,
}

impl Move {
    /// A clockwise quarter turn of `face`.
    pub const fn new(face: Face) -> Self {
        Self {
            face,
            inverted: false,
            double: false,
        }
    }

    /// The counter-clockwise quarter turn of `face`.
    pub const fn inverted(face: Face) -> Self {
        Self {
            face,
            inverted: true,
            double: false,
        }
    }

    /// The half turn of `face`.
    pub const fn double(face: Face) -> Self {
        Self {
            face,
            inverted: false,
            double: true,
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self> {
        let invalid = || CubeError::InvalidNotation(token.to_string());

        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(|letter| Face::try_from(letter).ok())
            .ok_or_else(invalid)?;

        let mut parsed = Move::new(face);
        match chars.next() {
            None => {}
            Some('\'') => parsed.inverted = true,
            Some('2') => parsed.double = true,
            Some(_) => return Err(invalid()),
        }

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(parsed)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // a double turn is the same either way round, so it wins over `'`
        if self.double {
            write!(f, "{}2", self.face)
        } else if self.inverted {
            write!(f, "{}'", self.face)
        } else {
            write!(f, "{}", self.face)
        }
    }
}

/// An ordered list of moves, written as space-separated tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    /// Returns the moves in execution order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl FromStr for Algorithm {
    type Err = CubeError;

    /// Parses whitespace-separated tokens. An empty string is the empty algorithm.
    ///
    /// Fails on the first malformed token; no partial algorithm is returned.
    fn from_str(notation: &str) -> Result<Self> {
        let moves = notation
            .split_whitespace()
            .map(str::parse::<Move>)
            .collect::<Result<Vec<Move>>>()?;
        Ok(Self { moves })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, parsed) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{parsed}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
