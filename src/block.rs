//! Block types stored in the terrain grid
//!
//! Every cell of a generated grid holds exactly one of these.

use serde::{Deserialize, Serialize};

/// Material occupying a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Air,
    Water,
    Sand,
    Dirt,
    Grass,
    Stone,
}

impl BlockType {
    pub fn all() -> &'static [BlockType] {
        &[
            BlockType::Air,
            BlockType::Water,
            BlockType::Sand,
            BlockType::Dirt,
            BlockType::Grass,
            BlockType::Stone,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BlockType::Air => "Air",
            BlockType::Water => "Water",
            BlockType::Sand => "Sand",
            BlockType::Dirt => "Dirt",
            BlockType::Grass => "Grass",
            BlockType::Stone => "Stone",
        }
    }

    /// Blocks that collide and can be dug.
    pub fn is_solid(&self) -> bool {
        !matches!(self, BlockType::Air | BlockType::Water)
    }

    /// Landmass blocks the shoreline pass may turn into sand.
    pub fn is_shore_convertible(&self) -> bool {
        matches!(self, BlockType::Dirt | BlockType::Stone | BlockType::Grass)
    }

    /// Blocks that sand may propagate down into.
    pub fn is_subsurface(&self) -> bool {
        matches!(self, BlockType::Dirt | BlockType::Stone)
    }

    /// Single character used by the ASCII renderer.
    pub fn glyph(&self) -> char {
        match self {
            BlockType::Air => ' ',
            BlockType::Water => '~',
            BlockType::Sand => ':',
            BlockType::Dirt => '%',
            BlockType::Grass => '"',
            BlockType::Stone => '#',
        }
    }

    /// RGB colour used by the PNG exporter.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            BlockType::Air => (135, 190, 235),
            BlockType::Water => (35, 85, 170),
            BlockType::Sand => (220, 200, 130),
            BlockType::Dirt => (120, 85, 55),
            BlockType::Grass => (70, 160, 60),
            BlockType::Stone => (110, 110, 115),
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
