//! Block grid store
//!
//! The owned array of blocks produced by generation. Renderers, collision,
//! lighting and dig/place gameplay only ever go through `get_block_type`
//! and `set_block`.

use crate::block::BlockType;
use crate::error::GridError;
use crate::tilemap::Tilemap;

/// Fixed-size grid of blocks, indexed by (column, row) with rows growing downward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockGrid {
    cells: Tilemap<BlockType>,
}

impl BlockGrid {
    /// Allocate a grid with every cell set to Air.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: Tilemap::new_with(columns, rows, BlockType::Air),
        }
    }

    pub fn columns(&self) -> usize {
        self.cells.width
    }

    pub fn rows(&self) -> usize {
        self.cells.height
    }

    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        self.cells.in_bounds(col, row)
    }

    /// Block at a cell, or `None` outside the grid.
    pub fn block_at(&self, col: usize, row: usize) -> Option<BlockType> {
        self.cells.try_get(col, row).copied()
    }

    /// Block at a cell. Cells outside the grid read as Air.
    pub fn get_block_type(&self, col: usize, row: usize) -> BlockType {
        self.block_at(col, row).unwrap_or(BlockType::Air)
    }

    /// Overwrite a single cell.
    pub fn set_block(&mut self, col: usize, row: usize, block: BlockType) -> Result<(), GridError> {
        if !self.in_bounds(col, row) {
            return Err(GridError::OutOfBounds {
                col,
                row,
                columns: self.columns(),
                rows: self.rows(),
            });
        }
        self.cells.set(col, row, block);
        Ok(())
    }

    /// Whether the cell is in bounds and holds `block`.
    pub fn is(&self, col: usize, row: usize, block: BlockType) -> bool {
        self.block_at(col, row) == Some(block)
    }

    /// First non-Air row of a column, if any.
    pub fn column_surface(&self, col: usize) -> Option<usize> {
        if col >= self.columns() {
            return None;
        }
        (0..self.rows()).find(|&row| *self.cells.get(col, row) != BlockType::Air)
    }

    pub fn count(&self, block: BlockType) -> usize {
        self.cells.iter().filter(|(_, _, b)| **b == block).count()
    }

    /// Iterate over every cell as (column, row, block), row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, BlockType)> + '_ {
        self.cells.iter().map(|(col, row, block)| (col, row, *block))
    }

    pub fn neighbors(&self, col: usize, row: usize) -> Vec<(usize, usize)> {
        self.cells.neighbors(col, row)
    }

    pub fn neighbors_8(&self, col: usize, row: usize) -> Vec<(usize, usize)> {
        self.cells.neighbors_8(col, row)
    }

    /// Write a cell known to be in bounds.
    pub(crate) fn put(&mut self, col: usize, row: usize, block: BlockType) {
        self.cells.set(col, row, block);
    }
}
