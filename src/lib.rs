//! 3x3x3 Twisty Cube State Library
//!
//! Models the cube as a permutation of its 48 movable facets. Provides the
//! face turn engine, a steppable algorithm player, and a solvability checker
//! that tells states reachable by turning apart from arbitrary relabelings.
//!
//! ```
//! use facetcube::{Algorithm, AlgorithmPlayer, FacetPermutation, SolvabilityChecker};
//!
//! let mut cube = FacetPermutation::solved();
//! let algorithm: Algorithm = "R U R' U R U2 R'".parse().unwrap();
//! AlgorithmPlayer::new(algorithm, &mut cube).execute().unwrap();
//!
//! let checker = SolvabilityChecker::new(&cube);
//! assert!(checker.has_correct_edges());
//! assert!(checker.has_orientable_corners());
//! ```

pub mod checker;
pub mod error;
pub mod facets;
pub mod moves;
pub mod notation;
pub mod pieces;
pub mod player;

pub use checker::SolvabilityChecker;
pub use error::{CubeError, Result};
pub use facets::{Color, Facet, FacetPermutation, Position};
pub use notation::{Algorithm, Face, Move};
pub use pieces::{Corner, Edge, Piece};
pub use player::AlgorithmPlayer;
