use std::fmt;

use log::debug;
use thiserror::Error;

use crate::{
    moves::{Face, Move},
    tokenizer::{Token, tokenize},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("The facelet cube can only apply plain face turns, found {0:?}")]
    UnsupportedToken(String),
}

type Sticker = (usize, usize);

/// The sticker 4-cycles of a clockwise turn of each face, indexed by `Face`.
/// The first two cycle the turned face's own corners and edges, the last
/// three cycle the adjacent stickers of the four neighbouring faces. Stickers
/// move from each position to the next one in its cycle.
const CYCLES: [[[Sticker; 4]; 5]; 6] = [
    // U
    [
        [(0, 0), (0, 2), (0, 8), (0, 6)],
        [(0, 1), (0, 5), (0, 7), (0, 3)],
        [(1, 0), (2, 0), (4, 0), (5, 0)],
        [(1, 1), (2, 1), (4, 1), (5, 1)],
        [(1, 2), (2, 2), (4, 2), (5, 2)],
    ],
    // R
    [
        [(1, 0), (1, 2), (1, 8), (1, 6)],
        [(1, 1), (1, 5), (1, 7), (1, 3)],
        [(0, 2), (5, 6), (3, 2), (2, 2)],
        [(0, 5), (5, 3), (3, 5), (2, 5)],
        [(0, 8), (5, 0), (3, 8), (2, 8)],
    ],
    // F
    [
        [(2, 0), (2, 2), (2, 8), (2, 6)],
        [(2, 1), (2, 5), (2, 7), (2, 3)],
        [(0, 6), (1, 0), (3, 2), (4, 8)],
        [(0, 7), (1, 3), (3, 1), (4, 5)],
        [(0, 8), (1, 6), (3, 0), (4, 2)],
    ],
    // D
    [
        [(3, 0), (3, 2), (3, 8), (3, 6)],
        [(3, 1), (3, 5), (3, 7), (3, 3)],
        [(1, 6), (5, 6), (4, 6), (2, 6)],
        [(1, 7), (5, 7), (4, 7), (2, 7)],
        [(1, 8), (5, 8), (4, 8), (2, 8)],
    ],
    // L
    [
        [(4, 0), (4, 2), (4, 8), (4, 6)],
        [(4, 1), (4, 5), (4, 7), (4, 3)],
        [(0, 0), (2, 0), (3, 0), (5, 8)],
        [(0, 3), (2, 3), (3, 3), (5, 5)],
        [(0, 6), (2, 6), (3, 6), (5, 2)],
    ],
    // B
    [
        [(5, 0), (5, 2), (5, 8), (5, 6)],
        [(5, 1), (5, 5), (5, 7), (5, 3)],
        [(0, 0), (4, 6), (3, 8), (1, 2)],
        [(0, 1), (4, 3), (3, 7), (1, 5)],
        [(0, 2), (4, 0), (3, 6), (1, 8)],
    ],
];

/// A 3x3 cube as 54 stickers, six faces of nine in `U R F D L B` order. Each
/// face is read row by row as seen from outside the cube, with B viewed after
/// a `y2`. A sticker's color is the face it started on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    state: [[Face; 9]; 6],
}

impl Default for FaceletCube {
    fn default() -> Self {
        FaceletCube {
            state: Face::ALL.map(|face| [face; 9]),
        }
    }
}

impl FaceletCube {
    /// A solved cube.
    #[must_use]
    pub fn new() -> FaceletCube {
        FaceletCube::default()
    }

    /// A solved cube with `scramble` applied.
    ///
    /// # Errors
    ///
    /// See [`FaceletCube::apply`].
    pub fn from_scramble(scramble: &str) -> Result<FaceletCube, ConstructionError> {
        let mut cube = FaceletCube::new();
        cube.apply(scramble)?;
        Ok(cube)
    }

    /// Applies every turn in `scramble` in order.
    ///
    /// # Errors
    ///
    /// Wide turns, slices, rotations and NISS markers are rejected with
    /// [`ConstructionError::UnsupportedToken`]. Turns before the rejected
    /// token stay applied.
    pub fn apply(&mut self, scramble: &str) -> Result<(), ConstructionError> {
        for token in tokenize(scramble) {
            match token {
                Token::Move(turn) => self.apply_move(turn),
                token => {
                    debug!("Rejecting {token} while applying {scramble:?}");
                    return Err(ConstructionError::UnsupportedToken(token.to_string()));
                }
            }
        }

        Ok(())
    }

    pub fn apply_move(&mut self, turn: Move) {
        for _ in 0..turn.amount.quarter_turns() {
            for cycle in &CYCLES[turn.face as usize] {
                self.cycle(cycle);
            }
        }
    }

    fn cycle(&mut self, &[a, b, c, d]: &[Sticker; 4]) {
        let tmp = self.state[a.0][a.1];
        self.state[a.0][a.1] = self.state[d.0][d.1];
        self.state[d.0][d.1] = self.state[c.0][c.1];
        self.state[c.0][c.1] = self.state[b.0][b.1];
        self.state[b.0][b.1] = tmp;
    }

    #[must_use]
    pub fn state(&self) -> &[[Face; 9]; 6] {
        &self.state
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[Face; 9] {
        &self.state[face as usize]
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == FaceletCube::new()
    }

    /// The cube unfolded onto a 9 by 12 grid: U above F, then L F R B across
    /// the middle band, and D below F. Cells outside the net are `None`.
    #[must_use]
    pub fn net(&self) -> [[Option<Face>; 12]; 9] {
        let mut net = [[None; 12]; 9];

        for (row, cells) in net.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let (face, idx) = match (row / 3, col / 3) {
                    (0, 1) => (Face::U, row * 3 + col - 3),
                    (2, 1) => (Face::D, (row - 6) * 3 + col - 3),
                    (1, 0) => (Face::L, (row - 3) * 3 + col),
                    (1, 1) => (Face::F, (row - 3) * 3 + col - 3),
                    (1, 2) => (Face::R, (row - 3) * 3 + col - 6),
                    (1, 3) => (Face::B, (row - 3) * 3 + col - 9),
                    _ => continue,
                };

                *cell = Some(self.state[face as usize][idx]);
            }
        }

        net
    }
}

impl fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.net() {
            let line = row
                .iter()
                .map(|cell| cell.map_or(' ', Face::as_char))
                .collect::<String>();

            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
