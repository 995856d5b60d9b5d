//! The canonical move model: the six faces, the three turn amounts, and the
//! notation suffixes that encode them.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid move token: {0:?}")]
    InvalidMoveToken(String),
}

/// A face of the cube. Opposite faces are three apart, so `face as usize % 3`
/// groups a face with its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::{B, D, F, L, R, U};
        let v = [U, R, F, D, L, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// Parses an upper-case face letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    #[must_use]
    pub fn opposite(self) -> Face {
        Face::ALL[(self as usize + 3) % 6]
    }

    /// The axis family shared with the opposite face: 0 for U/D, 1 for R/L,
    /// 2 for F/B.
    #[must_use]
    pub fn family(self) -> usize {
        self as usize % 3
    }

    /// D, L and B turn the cube's frame in the opposite sense of their
    /// partners.
    #[must_use]
    pub fn is_back_half(self) -> bool {
        self as usize >= 3
    }

    /// The U, R or F representative of this face's family.
    #[must_use]
    pub fn front_half(self) -> Face {
        Face::ALL[self.family()]
    }

    /// The whole-cube rotation sharing this face's axis.
    #[must_use]
    pub fn rotation_axis(self) -> RotationAxis {
        match self.front_half() {
            Face::U => RotationAxis::Y,
            Face::R => RotationAxis::X,
            _ => RotationAxis::Z,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// How far a layer turns. Quarter-turn counts are taken modulo four and a
/// count of zero is not representable; a move that cancels out is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Amount {
    Clockwise = 1,
    Half = 2,
    CounterClockwise = 3,
}

impl Amount {
    #[must_use]
    pub fn from_quarter_turns(quarter_turns: u8) -> Option<Amount> {
        match quarter_turns % 4 {
            1 => Some(Amount::Clockwise),
            2 => Some(Amount::Half),
            3 => Some(Amount::CounterClockwise),
            _ => None,
        }
    }

    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Parses a notation suffix: nothing, `2` or `'`.
    ///
    /// # Errors
    ///
    /// Fails with [`MoveError::InvalidMoveToken`] on any other suffix.
    pub fn from_suffix(suffix: &str) -> Result<Amount, MoveError> {
        match suffix {
            "" => Ok(Amount::Clockwise),
            "2" => Ok(Amount::Half),
            "'" => Ok(Amount::CounterClockwise),
            _ => Err(MoveError::InvalidMoveToken(suffix.to_owned())),
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Amount::Clockwise => "",
            Amount::Half => "2",
            Amount::CounterClockwise => "'",
        }
    }

    /// A half turn is its own inverse.
    #[must_use]
    pub fn inverse(self) -> Amount {
        match self {
            Amount::Clockwise => Amount::CounterClockwise,
            Amount::Half => Amount::Half,
            Amount::CounterClockwise => Amount::Clockwise,
        }
    }

    /// Sums two amounts modulo four, returning `None` when they cancel.
    #[must_use]
    pub fn compose(self, other: Amount) -> Option<Amount> {
        Amount::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }
}

/// A single-layer face turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub amount: Amount,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, amount: Amount) -> Move {
        Move { face, amount }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move::new(self.face, self.amount.inverse())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let invalid = || MoveError::InvalidMoveToken(s.to_owned());

        let face = chars.next().and_then(Face::from_char).ok_or_else(invalid)?;
        let amount = Amount::from_suffix(chars.as_str()).map_err(|_| invalid())?;

        Ok(Move::new(face, amount))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.amount.suffix())
    }
}

/// The axis of a whole-cube rotation. The discriminant is the column of the
/// orientation adjacency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    Y = 0,
    X = 1,
    Z = 2,
}

impl RotationAxis {
    #[must_use]
    pub fn from_char(c: char) -> Option<RotationAxis> {
        match c {
            'y' => Some(RotationAxis::Y),
            'x' => Some(RotationAxis::X),
            'z' => Some(RotationAxis::Z),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            RotationAxis::Y => 'y',
            RotationAxis::X => 'x',
            RotationAxis::Z => 'z',
        }
    }
}

/// A whole-cube reorientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub axis: RotationAxis,
    pub amount: Amount,
}

impl Rotation {
    #[must_use]
    pub const fn new(axis: RotationAxis, amount: Amount) -> Rotation {
        Rotation { axis, amount }
    }

    #[must_use]
    pub fn inverse(self) -> Rotation {
        Rotation::new(self.axis, self.amount.inverse())
    }
}

impl FromStr for Rotation {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let invalid = || MoveError::InvalidMoveToken(s.to_owned());

        let axis = chars
            .next()
            .and_then(RotationAxis::from_char)
            .ok_or_else(invalid)?;
        let amount = Amount::from_suffix(chars.as_str()).map_err(|_| invalid())?;

        Ok(Rotation::new(axis, amount))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.as_char(), self.amount.suffix())
    }
}

/// # Errors
///
/// Fails with [`MoveError::InvalidMoveToken`] unless the suffix is empty,
/// `2` or `'`.
pub fn suffix_to_amount(suffix: &str) -> Result<Amount, MoveError> {
    Amount::from_suffix(suffix)
}

#[must_use]
pub fn amount_to_suffix(amount: Amount) -> &'static str {
    amount.suffix()
}

/// Swaps the clockwise and counter-clockwise suffixes, leaving `2` alone.
///
/// # Errors
///
/// Fails with [`MoveError::InvalidMoveToken`] on a malformed suffix.
pub fn invert_suffix(suffix: &str) -> Result<&'static str, MoveError> {
    Ok(Amount::from_suffix(suffix)?.inverse().suffix())
}

/// # Errors
///
/// Fails with [`MoveError::InvalidMoveToken`] if `token` is not a plain face
/// turn such as `R`, `U2` or `F'`.
pub fn parse_move(token: &str) -> Result<Move, MoveError> {
    token.parse()
}

#[must_use]
pub fn compose_move(face: Face, amount: Amount) -> String {
    Move::new(face, amount).to_string()
}
