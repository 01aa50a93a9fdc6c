//! Structural draw detection over hole and board cards.
//!
//! This is a heuristic, not an outs counter: "four consecutive ranks" covers
//! open-ended draws but also a made straight, and a gutshot is missed.

use super::card::Card;

/// True when the combined cards show a flush draw or a straight draw.
pub fn has_strong_draw(hole: &[Card], board: &[Card]) -> bool {
    has_flush_draw(hole, board) || has_straight_draw(hole, board)
}

/// Some suit appears exactly four times.
pub fn has_flush_draw(hole: &[Card], board: &[Card]) -> bool {
    let mut suit_counts = [0u8; 4];
    for card in hole.iter().chain(board) {
        suit_counts[card.suit() as usize] += 1;
    }
    suit_counts.contains(&4)
}

/// Four distinct ranks span exactly three steps (ace counts high only).
pub fn has_straight_draw(hole: &[Card], board: &[Card]) -> bool {
    let mut ranks: Vec<u8> = hole.iter().chain(board).map(Card::rank_value).collect();
    ranks.sort_unstable();
    ranks.dedup();
    ranks.windows(4).any(|w| w[3] - w[0] == 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    #[test]
    fn test_four_spades_is_a_draw() {
        assert!(has_strong_draw(&cards("8s 7s"), &cards("6s 2h 9s")));
    }

    #[test]
    fn test_disconnected_rainbow_is_not() {
        assert!(!has_strong_draw(&cards("2c 3d"), &cards("9h 5s Kc")));
    }

    #[test]
    fn test_made_flush_is_not_a_flush_draw() {
        assert!(!has_flush_draw(&cards("As Ks"), &cards("2s 7s 9s")));
        assert!(has_flush_draw(&cards("As Ks"), &cards("2s 7s 9d")));
    }

    #[test]
    fn test_flush_draw_on_turn_and_river() {
        // four hearts among six and seven cards, no straight shape
        assert!(has_strong_draw(&cards("Ah 2h"), &cards("9h Tc 4h Ks")));
        assert!(has_strong_draw(&cards("Ah 2h"), &cards("9h Tc 4h Ks 3c")));
        // a fifth heart on the river makes the flush
        assert!(!has_flush_draw(&cards("Ah 2h"), &cards("9h Tc 4h Ks 3h")));
    }

    #[test]
    fn test_four_in_a_row() {
        assert!(has_straight_draw(&cards("8c 7d"), &cards("6h 5s Kc")));
        // Paired ranks collapse before windowing
        assert!(has_straight_draw(&cards("8c 8d"), &cards("7h 6s 5c")));
        // Gutshot is not detected
        assert!(!has_straight_draw(&cards("9c 7d"), &cards("6h 5s Kc")));
    }

    #[test]
    fn test_ace_plays_high_only() {
        assert!(!has_straight_draw(&cards("Ac 2d"), &cards("3h 4s 9c")));
        assert!(has_straight_draw(&cards("Ac Kd"), &cards("Qh Js 3c")));
    }

    #[test]
    fn test_made_straight_also_counts() {
        assert!(has_straight_draw(&cards("9c 8d"), &cards("7h 6s 5c")));
    }
}
