//! Rewrites wide and slice turns into a single-layer turn plus a whole-cube
//! rotation. `Rw` turns the same cubies as `L` followed by `x`, and the
//! rotation is what changes the frame for the moves after it.

use crate::{
    moves::{Move, Rotation},
    tokenizer::Token,
};

/// Splits a two-layer turn of `turn.face` into the opposite face's turn and
/// the rotation about their shared axis. Back-half faces rotate the frame in
/// the opposite sense.
#[must_use]
pub fn expand(turn: Move) -> (Move, Rotation) {
    let amount = if turn.face.is_back_half() {
        turn.amount.inverse()
    } else {
        turn.amount
    };

    (
        Move::new(turn.face.opposite(), turn.amount),
        Rotation::new(turn.face.rotation_axis(), amount),
    )
}

/// Replaces every wide and slice token with its expansion; every other token
/// passes through.
pub fn standardize(tokens: impl IntoIterator<Item = Token>) -> Vec<Token> {
    let mut standardized = Vec::new();

    for token in tokens {
        match token {
            Token::Wide(turn) | Token::Slice(turn) => {
                let (turn, rotation) = expand(turn);
                standardized.push(Token::Move(turn));
                standardized.push(Token::Rotation(rotation));
            }
            token => standardized.push(token),
        }
    }

    standardized
}
