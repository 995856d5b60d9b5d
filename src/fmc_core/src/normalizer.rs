//! Reduces arbitrary notation to a canonical sequence of face turns.
//!
//! The pipeline is: tokenize, split off the NISS (inverse) half, reverse and
//! invert it onto the end of the normal half, expand wide and slice turns,
//! resolve rotations, then cancel and merge.

use itertools::Itertools;
use log::debug;

use crate::{
    moves::Move,
    orientation::resolve,
    standardizer::standardize,
    tokenizer::{Token, tokenize},
};

/// Normalizes `text` and renders the canonical sequence with single spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    render(&normalize_tokens(tokenize(text)))
}

/// The notational inverse of `text`: its canonical form reversed, with every
/// turn inverted.
#[must_use]
pub fn invert(text: &str) -> String {
    render(&invert_moves(&normalize_tokens(tokenize(text))))
}

#[must_use]
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|turn| turn.inverse()).collect()
}

#[must_use]
pub fn render(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

pub fn normalize_tokens(tokens: impl IntoIterator<Item = Token>) -> Vec<Move> {
    let (normal, inverse) = partition(tokens);

    debug!(
        "Normalizing {} normal and {} inverse tokens",
        normal.len(),
        inverse.len()
    );

    let mut combined = standardize(normal);
    combined.extend(
        standardize(inverse.into_iter().rev())
            .into_iter()
            .map(Token::inverse),
    );

    let moves = resolve(combined);
    let canonical = cancel(moves.iter().copied());

    debug!(
        "Cancelled {} resolved moves down to {}",
        moves.len(),
        canonical.len()
    );

    canonical
}

/// Splits tokens on each NISS marker; the markers themselves are dropped.
fn partition(tokens: impl IntoIterator<Item = Token>) -> (Vec<Token>, Vec<Token>) {
    let mut normal = Vec::new();
    let mut inverse = Vec::new();
    let mut inverted = false;

    for token in tokens {
        match token {
            Token::Niss => inverted = !inverted,
            token if inverted => inverse.push(token),
            token => normal.push(token),
        }
    }

    (normal, inverse)
}

/// Merges turns of the same face, including across one intervening turn of
/// the opposite face, which commutes with both. The look-back stops at two
/// entries.
pub fn cancel(moves: impl IntoIterator<Item = Move>) -> Vec<Move> {
    let mut result: Vec<Move> = Vec::new();

    for turn in moves {
        let len = result.len();

        let target = match result.last() {
            Some(last) if last.face == turn.face => Some(len - 1),
            Some(last)
                if len >= 2
                    && last.face.family() == turn.face.family()
                    && result[len - 2].face == turn.face =>
            {
                Some(len - 2)
            }
            _ => None,
        };

        match target {
            Some(idx) => match result[idx].amount.compose(turn.amount) {
                Some(amount) => result[idx].amount = amount,
                None => {
                    result.remove(idx);
                }
            },
            None => result.push(turn),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(text: &str) -> Vec<Move> {
        text.split_whitespace()
            .map(|turn| turn.parse().unwrap())
            .collect()
    }

    #[test]
    fn cancel_merges_adjacent_turns() {
        assert_eq!(render(&cancel(moves("R R"))), "R2");
        assert_eq!(render(&cancel(moves("R R'"))), "");
        assert_eq!(render(&cancel(moves("R2 R"))), "R'");
        assert_eq!(render(&cancel(moves("U R R' U"))), "U2");
    }

    #[test]
    fn cancel_looks_through_the_opposite_face() {
        assert_eq!(render(&cancel(moves("R L R'"))), "L");
        assert_eq!(render(&cancel(moves("R L R"))), "R2 L");
        assert_eq!(render(&cancel(moves("U D2 U' D2"))), "");
        // Only two entries back
        assert_eq!(render(&cancel(moves("R U L R"))), "R U L R");
        // Not across a non-commuting face
        assert_eq!(render(&cancel(moves("R U R'"))), "R U R'");
    }

    #[test]
    fn partition_toggles_on_niss() {
        let (normal, inverse) = partition(tokenize("R NISS U F NISS D NISS B"));
        assert_eq!(render(&resolve(normal)), "R D");
        assert_eq!(render(&resolve(inverse)), "U F B");
    }

    #[test]
    fn inverse_half_is_reversed_and_inverted() {
        assert_eq!(normalize("R NISS U NISS"), "R U'");
        assert_eq!(normalize("NISS R U"), "U' R'");
        assert_eq!(normalize("NISS R U2 F'"), "F U2 R'");
    }

    #[test]
    fn invert_reverses_the_canonical_form() {
        assert_eq!(invert("R U F'"), "F U' R'");
        assert_eq!(invert("R R"), "R2");
        assert_eq!(invert(""), "");
        assert_eq!(invert_moves(&moves("L2 D")), moves("D' L2"));
    }
}
