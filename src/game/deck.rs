//! file: deck.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:48:33 Saturday
//! brief: deck sampling and shuffling

use rand::{Rng, seq::SliceRandom};

use super::{Country, Tile, TileKind};

pub const DEFAULT_PAIR_COUNT: usize = 5;

/// Samples up to `pair_count` quizzable countries and lays out a shuffled
/// deck holding one country tile and one capital tile for each.
///
/// Ids are assigned sequentially before the shuffle, so they stay unique.
pub fn build_deck<R: Rng + ?Sized>(
    countries: &[Country],
    pair_count: usize,
    rng: &mut R,
) -> Vec<Tile> {
    let playable: Vec<&Country> = countries.iter().filter(|c| c.is_quizzable()).collect();
    let amount = pair_count.min(playable.len());

    let mut deck = Vec::with_capacity(amount * 2);
    for country in playable.choose_multiple(rng, amount) {
        deck.push(Tile {
            id: deck.len(),
            kind: TileKind::Country,
            value: country.name.clone(),
            pair_value: country.capital.clone(),
        });
        deck.push(Tile {
            id: deck.len(),
            kind: TileKind::Capital,
            value: country.capital.clone(),
            pair_value: country.name.clone(),
        });
    }

    deck.shuffle(rng);
    deck
}
