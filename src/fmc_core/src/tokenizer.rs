use std::fmt;

use log::trace;
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use crate::moves::{Amount, Face, Move, Rotation, RotationAxis};

#[derive(Parser)]
#[grammar = "./notation.pest"]
struct NotationParser;

/// A recognised piece of move notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `R`, `U2`, `F'`
    Move(Move),
    /// `Rw`, `2Rw'`; two outer layers of the named face
    Wide(Move),
    /// `[r]`, `[u]2`; stored with the upper-case face letter
    Slice(Move),
    /// `x`, `y2`, `z'`
    Rotation(Rotation),
    /// Toggles whether the following tokens belong to the inverse scramble
    Niss,
}

impl Token {
    /// Whether this token turns layers of the cube, which is what a move count
    /// counts.
    #[must_use]
    pub fn is_turn(&self) -> bool {
        matches!(self, Token::Move(_) | Token::Wide(_) | Token::Slice(_))
    }

    #[must_use]
    pub fn inverse(self) -> Token {
        match self {
            Token::Move(turn) => Token::Move(turn.inverse()),
            Token::Wide(turn) => Token::Wide(turn.inverse()),
            Token::Slice(turn) => Token::Slice(turn.inverse()),
            Token::Rotation(rotation) => Token::Rotation(rotation.inverse()),
            Token::Niss => Token::Niss,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Move(turn) => write!(f, "{turn}"),
            Token::Wide(turn) => write!(f, "{}w{}", turn.face, turn.amount.suffix()),
            Token::Slice(turn) => write!(
                f,
                "[{}]{}",
                turn.face.as_char().to_ascii_lowercase(),
                turn.amount.suffix()
            ),
            Token::Rotation(rotation) => write!(f, "{rotation}"),
            Token::Niss => write!(f, "NISS"),
        }
    }
}

/// Scans `text` for move notation. Unrecognised characters are skipped, so
/// this never fails.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let sequence = NotationParser::parse(Rule::sequence, text)
        .expect("the catch-all rule accepts every input")
        .next()
        .expect("a successful parse yields the sequence pair");

    let tokens = sequence
        .into_inner()
        .filter_map(token_from_pair)
        .collect::<Vec<_>>();

    trace!("Tokenized {} tokens from {text:?}", tokens.len());

    tokens
}

fn token_from_pair(pair: Pair<'_, Rule>) -> Option<Token> {
    Some(match pair.as_rule() {
        Rule::niss => Token::Niss,
        Rule::wide => Token::Wide(turn_from_pair(pair)),
        Rule::slice => Token::Slice(turn_from_pair(pair)),
        Rule::plain => Token::Move(turn_from_pair(pair)),
        Rule::rotation => {
            let mut pairs = pair.into_inner();
            let axis = pairs
                .next()
                .and_then(|axis| axis.as_str().chars().next())
                .and_then(RotationAxis::from_char)
                .expect("the grammar only admits rotation axes");

            Token::Rotation(Rotation::new(axis, amount_from_suffix(pairs.next())))
        }
        Rule::EOI => return None,
        rule => unreachable!("{rule:?}, {}", pair.as_str()),
    })
}

fn turn_from_pair(pair: Pair<'_, Rule>) -> Move {
    let mut pairs = pair.into_inner();
    let face = pairs
        .next()
        .and_then(|face| face.as_str().chars().next())
        .and_then(|c| Face::from_char(c.to_ascii_uppercase()))
        .expect("the grammar only admits face letters");

    Move::new(face, amount_from_suffix(pairs.next()))
}

fn amount_from_suffix(suffix: Option<Pair<'_, Rule>>) -> Amount {
    match suffix.as_ref().map(Pair::as_str) {
        Some("2") => Amount::Half,
        Some("'") => Amount::CounterClockwise,
        _ => Amount::Clockwise,
    }
}
