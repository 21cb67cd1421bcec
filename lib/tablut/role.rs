use super::Side;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// The kind of a Tablut [`Piece`][`super::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Role {
    Defender,
    Attacker,
    King,
}

impl Role {
    /// The [`Side`] that owns pieces of this role.
    pub fn side(&self) -> Side {
        match self {
            Role::Attacker => Side::Black,
            Role::Defender | Role::King => Side::White,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Defender => f.write_char('d'),
            Role::Attacker => f.write_char('a'),
            Role::King => f.write_char('k'),
        }
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse role, expected one of `d`, `a` or `k`")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(Role::Defender),
            "a" => Ok(Role::Attacker),
            "k" => Ok(Role::King),
            _ => Err(ParseRoleError),
        }
    }
}
