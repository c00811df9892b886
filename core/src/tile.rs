use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Position of a tile in reveal order, `0..TILE_COUNT`.
pub type TileIndex = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Hidden,
    Revealed,
}

impl TileState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Grid the tiles are laid out on, filled row by row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    pub columns: usize,
    pub rows: usize,
}

impl TileLayout {
    pub const STANDARD: Self = Self {
        columns: 5,
        rows: 2,
    };

    pub const fn total_tiles(&self) -> TileIndex {
        self.columns * self.rows
    }

    /// `(column, row)` of the tile, `None` when outside the grid.
    pub const fn coords(&self, index: TileIndex) -> Option<(usize, usize)> {
        if index >= self.total_tiles() {
            None
        } else {
            Some((index % self.columns, index / self.columns))
        }
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Tiles uncovered so far, in the order they were uncovered.
///
/// Tiles always open sequentially, so the contents are exactly `0..len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedTiles {
    order: Vec<TileIndex>,
    total: TileIndex,
}

impl RevealedTiles {
    pub fn new(total: TileIndex) -> Self {
        Self {
            order: Vec::with_capacity(total),
            total,
        }
    }

    /// Uncovers the next tile, `None` once every tile is showing.
    pub fn reveal_next(&mut self) -> Option<TileIndex> {
        let next = self.order.len();
        if next >= self.total {
            log::warn!("All {} tiles already revealed", self.total);
            return None;
        }
        self.order.push(next);
        Some(next)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total(&self) -> TileIndex {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.order.len() == self.total
    }

    pub fn contains(&self, index: TileIndex) -> bool {
        index < self.order.len()
    }

    pub fn state_at(&self, index: TileIndex) -> TileState {
        if self.contains(index) {
            TileState::Revealed
        } else {
            TileState::Hidden
        }
    }

    pub fn as_slice(&self) -> &[TileIndex] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.order.iter().copied()
    }
}
