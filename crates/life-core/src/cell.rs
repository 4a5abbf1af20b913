//! Two-valued cell state.

use crate::error::GridError;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No organism.
    #[default]
    Dead,
    /// Occupied.
    Alive,
}

impl Cell {
    /// `true` for [`Cell::Alive`].
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Raw code: 0 for dead, 1 for alive.
    pub fn code(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Alive => 1,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Dead),
            1 => Ok(Self::Alive),
            _ => Err(GridError::InvalidState { code }),
        }
    }
}
