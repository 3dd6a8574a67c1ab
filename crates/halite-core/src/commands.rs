//! Commands sent to the game engine.
//!
//! Wire grammar, one command per line, space-separated tokens:
//! `t <ship> <magnitude> <heading>`, `d <ship> <planet>`, `u <ship>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::EntityId;

const THRUST_KEY: &str = "t";
const DOCK_KEY: &str = "d";
const UNDOCK_KEY: &str = "u";

/// A single order for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Move `magnitude` units along `heading` this turn.
    Thrust {
        ship_id: EntityId,
        magnitude: u32,
        /// Whole degrees. Callers clip to `[0, 360)` before encoding.
        heading: i32,
    },
    /// Begin docking at a planet.
    Dock {
        ship_id: EntityId,
        planet_id: EntityId,
    },
    /// Begin leaving the planet the ship is docked at.
    Undock {
        ship_id: EntityId,
    },
}

impl Command {
    pub fn ship_id(&self) -> EntityId {
        match *self {
            Command::Thrust { ship_id, .. }
            | Command::Dock { ship_id, .. }
            | Command::Undock { ship_id } => ship_id,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Thrust {
                ship_id,
                magnitude,
                heading,
            } => write!(f, "{THRUST_KEY} {ship_id} {magnitude} {heading}"),
            Command::Dock { ship_id, planet_id } => write!(f, "{DOCK_KEY} {ship_id} {planet_id}"),
            Command::Undock { ship_id } => write!(f, "{UNDOCK_KEY} {ship_id}"),
        }
    }
}

/// Failure to decode a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command key `{0}`")]
    UnknownKey(String),
    #[error("missing {0}")]
    MissingToken(&'static str),
    #[error("invalid {field}: `{value}`")]
    InvalidToken { field: &'static str, value: String },
    #[error("unexpected trailing token `{0}`")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let key = tokens.next().ok_or(ParseCommandError::Empty)?;

        let command = match key {
            THRUST_KEY => Command::Thrust {
                ship_id: next_token(&mut tokens, "ship id")?,
                magnitude: next_token(&mut tokens, "magnitude")?,
                heading: next_token(&mut tokens, "heading")?,
            },
            DOCK_KEY => Command::Dock {
                ship_id: next_token(&mut tokens, "ship id")?,
                planet_id: next_token(&mut tokens, "planet id")?,
            },
            UNDOCK_KEY => Command::Undock {
                ship_id: next_token(&mut tokens, "ship id")?,
            },
            other => return Err(ParseCommandError::UnknownKey(other.to_string())),
        };

        match tokens.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn next_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, ParseCommandError> {
    let raw = tokens.next().ok_or(ParseCommandError::MissingToken(field))?;
    raw.parse().map_err(|_| ParseCommandError::InvalidToken {
        field,
        value: raw.to_string(),
    })
}
