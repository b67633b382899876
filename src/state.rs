//! Core state structures: cell kinds and the grid storage.

/// Occupancy of a single grid cell.
///
/// `Virus` is an alive sub-kind kept only so a renderer can colour it
/// differently. The transition rule treats it exactly like `Alive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Alive,
    Virus,
}

impl CellState {
    /// True for every state except `Empty`.
    #[inline]
    pub fn is_alive(self) -> bool {
        !matches!(self, CellState::Empty)
    }

    /// Byte encoding used by region transfer and the C ABI.
    #[inline]
    pub fn to_byte(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Alive => 1,
            CellState::Virus => 2,
        }
    }

    /// Decode a byte. 0 is empty, 2 is virus, any other non-zero value is alive.
    #[inline]
    pub fn from_byte(value: u8) -> Self {
        match value {
            0 => CellState::Empty,
            2 => CellState::Virus,
            _ => CellState::Alive,
        }
    }
}

/// A square grid of cells, stored row-major (y changes slowest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub size: i32,
    pub cells: Vec<CellState>,
}

impl Grid {
    /// Get the linear index for a 2D coordinate. Caller checks bounds.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.size as usize + x as usize
    }
}
