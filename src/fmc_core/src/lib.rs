//! # `fmc_core`
//!
//! Move notation tooling for fewest-moves solving on the 3x3 cube.
//!
//! [`normalize`] reduces free-form notation, including wide turns, slices,
//! whole-cube rotations and NISS, to a canonical sequence of single-layer face
//! turns in the starting frame. [`FaceletCube`] simulates a scramble on the 54
//! stickers of the cube.
//!
//! ```
//! use fmc_core::{FaceletCube, normalize};
//!
//! assert_eq!(normalize("R U NISS F NISS U'"), "R F'");
//! assert_eq!(normalize("Rw U Rw'"), "L F L'");
//!
//! let cube = FaceletCube::from_scramble("R R R R").unwrap();
//! assert!(cube.is_solved());
//! ```

pub mod facelet_cube;
pub mod moves;
pub mod normalizer;
pub mod orientation;
pub mod standardizer;
pub mod tokenizer;

pub use facelet_cube::{ConstructionError, FaceletCube};
pub use moves::{Amount, Face, Move, MoveError, Rotation, RotationAxis};
pub use normalizer::{invert, normalize};
pub use orientation::Orientation;
pub use tokenizer::{Token, tokenize};
