/// Symbol printed on a card face. Each symbol occurs on exactly two cards.
pub type Symbol = u8;

/// Count type used for pair counts and total-card counts.
pub type CellCount = u16;

pub const fn cards_for_pairs(pairs: u8) -> CellCount {
    (pairs as CellCount).saturating_mul(2)
}
