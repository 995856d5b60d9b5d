//! Tracks which way the cube is facing while a sequence with whole-cube
//! rotations is read, so that every face turn can be restated in the frame
//! the sequence started in.
//!
//! Both tables are literal. State 0 is the starting frame and the other 23
//! states are numbered in breadth-first order over single `y`, `x` and `z`
//! rotations.

use log::trace;

use crate::{
    moves::{Face, Move, Rotation},
    standardizer::standardize,
    tokenizer::Token,
};

/// `ADJACENCY[orientation][axis]` is the orientation reached by one clockwise
/// quarter rotation about `axis` (columns `y`, `x`, `z`).
const ADJACENCY: [[u8; 3]; Orientation::COUNT] = [
    [1, 2, 3],
    [4, 5, 6],
    [6, 7, 8],
    [9, 6, 10],
    [11, 12, 13],
    [13, 14, 2],
    [15, 13, 16],
    [16, 17, 18],
    [3, 16, 12],
    [18, 1, 15],
    [14, 15, 19],
    [0, 8, 20],
    [20, 10, 5],
    [21, 20, 7],
    [7, 9, 22],
    [22, 4, 21],
    [10, 21, 23],
    [23, 0, 9],
    [8, 23, 4],
    [5, 22, 0],
    [17, 3, 14],
    [19, 11, 17],
    [2, 18, 11],
    [12, 19, 1],
];

/// `FACE_REMAP[family][orientation]` is the starting-frame face sitting where
/// the U, R or F face is in that orientation.
const FACE_REMAP: [[Face; Orientation::COUNT]; 3] = {
    use Face::{B, D, F, L, R, U};

    [
        // U
        [
            U, U, F, L, U, R, F, D, L, L, D, U, //
            B, R, D, F, D, B, L, R, B, R, F, B,
        ],
        // R
        [
            R, B, R, U, L, B, U, R, F, B, L, F, //
            L, U, B, L, F, R, D, D, U, F, D, D,
        ],
        // F
        [
            F, R, D, F, B, D, R, B, D, U, F, L, //
            D, B, L, U, R, U, B, F, L, U, L, R,
        ],
    ]
};

/// One of the 24 ways a cube can sit in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation(u8);

impl Orientation {
    pub const COUNT: usize = 24;
    pub const IDENTITY: Orientation = Orientation(0);

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Orientation> {
        (0..Orientation::COUNT as u8).map(Orientation)
    }

    /// Applies `rotation` as that many single quarter steps.
    #[must_use]
    pub fn rotate(self, rotation: Rotation) -> Orientation {
        let mut orientation = self;

        for _ in 0..rotation.amount.quarter_turns() {
            orientation = Orientation(ADJACENCY[orientation.index()][rotation.axis as usize]);
        }

        orientation
    }

    /// The starting-frame face that a turn of `face` in this orientation
    /// actually turns. D, L and B go through their partner's entry and are
    /// flipped back.
    #[must_use]
    pub fn remap(self, face: Face) -> Face {
        let remapped = FACE_REMAP[face.family()][self.index()];

        if face.is_back_half() {
            remapped.opposite()
        } else {
            remapped
        }
    }

    #[must_use]
    pub fn remap_move(self, turn: Move) -> Move {
        Move::new(self.remap(turn.face), turn.amount)
    }
}

/// Consumes every rotation and restates the face turns in the starting frame.
/// The tokens are standardized first, so wide and slice turns may appear;
/// inversion markers have no meaning here and are dropped.
pub fn resolve(tokens: impl IntoIterator<Item = Token>) -> Vec<Move> {
    let mut orientation = Orientation::IDENTITY;
    let mut moves = Vec::new();

    for token in standardize(tokens) {
        match token {
            Token::Move(turn) => moves.push(orientation.remap_move(turn)),
            Token::Rotation(rotation) => {
                orientation = orientation.rotate(rotation);
                trace!("Rotated by {rotation} into orientation {}", orientation.index());
            }
            Token::Niss => trace!("Dropping an inversion marker"),
            Token::Wide(_) | Token::Slice(_) => {
                unreachable!("standardized tokens have no wide or slice turns")
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::moves::{Amount, RotationAxis};

    fn rotation(text: &str) -> Rotation {
        text.parse().unwrap()
    }

    fn after(rotations: &str) -> Orientation {
        rotations
            .split_whitespace()
            .map(rotation)
            .fold(Orientation::IDENTITY, Orientation::rotate)
    }

    #[test]
    fn tables_enumerate_every_orientation() {
        let mut seen = HashSet::new();
        let mut frontier = vec![Orientation::IDENTITY];

        while let Some(orientation) = frontier.pop() {
            if seen.insert(orientation) {
                for axis in [RotationAxis::Y, RotationAxis::X, RotationAxis::Z] {
                    frontier.push(orientation.rotate(Rotation::new(axis, Amount::Clockwise)));
                }
            }
        }

        assert_eq!(seen.len(), Orientation::COUNT);
        assert_eq!(Orientation::all().count(), Orientation::COUNT);
    }

    #[test]
    fn four_quarter_rotations_are_the_identity() {
        for orientation in Orientation::all() {
            for axis in ["x", "y", "z"] {
                let quarter = rotation(axis);
                let full = (0..4).fold(orientation, |o, _| o.rotate(quarter));
                assert_eq!(full, orientation);

                let half = rotation(&format!("{axis}2"));
                assert_eq!(
                    orientation.rotate(half),
                    orientation.rotate(quarter).rotate(quarter)
                );

                let prime = rotation(&format!("{axis}'"));
                assert_eq!(orientation.rotate(quarter).rotate(prime), orientation);
            }
        }
    }

    #[test]
    fn rotations_relate_like_cube_rotations() {
        assert_eq!(after("x y x'"), after("z"));
        assert_eq!(after("x z x'"), after("y'"));
        assert_eq!(after("x2 y2"), after("z2"));
        assert_ne!(after("x y"), after("y x"));
    }

    #[test]
    fn remap_is_a_rotation_of_the_faces() {
        for face in Face::ALL {
            assert_eq!(Orientation::IDENTITY.remap(face), face);
        }

        for orientation in Orientation::all() {
            let faces = Face::ALL.map(|face| orientation.remap(face));
            let distinct = faces.iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), 6);

            for face in Face::ALL {
                assert_eq!(orientation.remap(face.opposite()), orientation.remap(face).opposite());
            }
        }

        assert_eq!(after("x").remap(Face::U), Face::F);
        assert_eq!(after("x").remap(Face::B), Face::U);
        assert_eq!(after("y").remap(Face::R), Face::B);
        assert_eq!(after("y").remap(Face::L), Face::F);
        assert_eq!(after("z").remap(Face::R), Face::U);
        assert_eq!(after("z'").remap(Face::U), Face::R);
    }

    #[test]
    fn resolve_consumes_rotations() {
        let tokens = crate::tokenizer::tokenize("x U y R Rw U NISS");
        let moves = resolve(tokens)
            .into_iter()
            .map(|turn| turn.to_string())
            .collect::<Vec<_>>();

        // x: U is F. x y: R is U. Rw is L x in the x y frame, where L is D.
        assert_eq!(moves, ["F", "U", "D", "R"]);
    }

    #[test]
    fn resolve_agrees_with_standardized_input() {
        let text = "Rw [u]' x Fw2 NISS [d] Bw' L y2 Dw";
        let tokens = crate::tokenizer::tokenize(text);

        assert_eq!(resolve(tokens.clone()), resolve(standardize(tokens)));
        // Rw is L x, so the next R is read in the x frame
        assert_eq!(
            resolve(crate::tokenizer::tokenize("Rw R")),
            resolve(crate::tokenizer::tokenize("L x R"))
        );
    }
}
