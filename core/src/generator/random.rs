use super::*;

/// Generation strategy that deals every symbol twice and applies one uniform
/// shuffle, nothing else. For a fixed seed the deal is reproducible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, config: GameConfig) -> Deck {
        use rand::prelude::*;

        if config.pairs == 0 {
            log::warn!("Deck requested with zero pairs, dealing an empty deck");
            return Deck::from_cards_unchecked(Vec::new());
        }

        let mut cards: Vec<Symbol> = Vec::with_capacity(config.total_cards() as usize);
        for symbol in 0..config.pairs {
            cards.push(symbol);
            cards.push(symbol);
        }

        // Fisher-Yates via SliceRandom, every permutation equally likely
        let mut rng = SmallRng::seed_from_u64(self.seed);
        cards.shuffle(&mut rng);
        Deck::from_cards_unchecked(cards)
    }
}
