//! file: tile.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:12:41 Saturday
//! brief: a single clickable country or capital

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Country,
    Capital,
}

impl TileKind {
    pub fn label(self) -> &'static str {
        match self {
            TileKind::Country => "country",
            TileKind::Capital => "capital",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    pub kind: TileKind,
    pub value: String,
    pub pair_value: String,
}

impl Tile {
    /// True when `other` is the opposite half of this tile's pair.
    pub fn pairs_with(&self, other: &Tile) -> bool {
        self.kind != other.kind && self.pair_value == other.value
    }
}
