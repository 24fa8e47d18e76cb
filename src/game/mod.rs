//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:01:02 Saturday
//! brief:

mod country;
mod deck;
mod quiz;
mod selection;
mod status;
mod tile;

pub use country::{Country, UNKNOWN_CAPITAL};
pub use deck::{DEFAULT_PAIR_COUNT, build_deck};
pub use quiz::{ClickOutcome, Quiz};
pub use selection::Selection;
pub use status::RoundStatus;
pub use tile::{Tile, TileKind};
