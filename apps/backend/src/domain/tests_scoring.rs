use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::full_deck;
use crate::domain::scoring::score_round;
use crate::domain::test_state_helpers::card;

fn score(p0: &[Card], p1: &[Card]) -> [u8; 2] {
    score_round([p0, p1], [0, 0]).points
}

#[test]
fn empty_piles_score_nothing() {
    assert_eq!(score(&[], &[]), [0, 0]);
}

#[test]
fn larger_pile_wins_the_cards_point() {
    // Canonical deck order puts all ten Coins first, then Cups, then the
    // Swords ace: 21 cards for one side, 19 for the other.
    let deck = full_deck();
    let (p0, p1) = deck.split_at(21);

    // P0 takes most cards, most coins, and the sette bello; neither side
    // holds all four suits, so the primiera goes unawarded.
    assert_eq!(score(p0, p1), [3, 0]);
}

#[test]
fn equal_piles_award_no_cards_point() {
    let p0 = [card(Suit::Cups, 7), card(Suit::Swords, 2)];
    let p1 = [card(Suit::Clubs, 4), card(Suit::Swords, 9)];
    assert_eq!(score(&p0, &p1), [0, 0]);
}

#[test]
fn more_coins_wins_the_coins_point() {
    let p0 = [
        card(Suit::Coins, 1),
        card(Suit::Coins, 2),
        card(Suit::Cups, 3),
    ];
    let p1 = [
        card(Suit::Coins, 3),
        card(Suit::Cups, 1),
        card(Suit::Swords, 5),
    ];
    assert_eq!(score(&p0, &p1), [1, 0]);
}

#[test]
fn sette_bello_point_is_unconditional() {
    let p0 = [card(Suit::Coins, 1)];
    let p1 = [card(Suit::Coins, 7)];
    assert_eq!(score(&p0, &p1), [0, 1]);
}

#[test]
fn primiera_goes_to_the_higher_total() {
    let p0 = [
        card(Suit::Coins, 7),
        card(Suit::Cups, 7),
        card(Suit::Swords, 7),
        card(Suit::Clubs, 7),
    ];
    let p1 = [
        card(Suit::Coins, 6),
        card(Suit::Cups, 6),
        card(Suit::Swords, 6),
        card(Suit::Clubs, 6),
    ];
    // Cards and coins tie; P0 takes sette bello and the primiera.
    assert_eq!(score(&p0, &p1), [2, 0]);
}

#[test]
fn primiera_needs_all_four_suits() {
    // P0 has the stronger cards but no Swords, so nobody takes the point.
    let p0 = [
        card(Suit::Coins, 7),
        card(Suit::Cups, 7),
        card(Suit::Clubs, 7),
    ];
    let p1 = [
        card(Suit::Coins, 6),
        card(Suit::Cups, 6),
        card(Suit::Swords, 6),
        card(Suit::Clubs, 6),
    ];
    // P1 takes most cards (4 > 3); coins tie; sette bello is P0's.
    assert_eq!(score(&p0, &p1), [1, 1]);
}

#[test]
fn primiera_uses_the_fixed_weights_not_face_value() {
    // An ace (16) outweighs a king (10) despite the lower face value.
    let p0 = [
        card(Suit::Coins, 1),
        card(Suit::Cups, 1),
        card(Suit::Swords, 1),
        card(Suit::Clubs, 1),
    ];
    let p1 = [
        card(Suit::Coins, 10),
        card(Suit::Cups, 10),
        card(Suit::Swords, 10),
        card(Suit::Clubs, 10),
    ];
    assert_eq!(score(&p0, &p1), [1, 0]);
}

#[test]
fn primiera_takes_the_best_card_per_suit() {
    // Both sides cover all suits. P0's best cards are a seven (21) and
    // three twos (12 each) = 57; P1's are three threes (13) and the Cups
    // ace (16) = 55.
    let p0 = [
        card(Suit::Coins, 7),
        card(Suit::Coins, 2),
        card(Suit::Cups, 2),
        card(Suit::Swords, 2),
        card(Suit::Clubs, 2),
    ];
    let p1 = [
        card(Suit::Coins, 3),
        card(Suit::Cups, 3),
        card(Suit::Swords, 3),
        card(Suit::Clubs, 3),
        card(Suit::Cups, 1),
    ];
    // Cards tie 5-5, coins 2-1 to P0, sette bello P0, primiera P0.
    assert_eq!(score(&p0, &p1), [3, 0]);
}

#[test]
fn scopa_bonuses_are_additive_and_uncontested() {
    assert_eq!(score_round([&[], &[]], [2, 1]).points, [2, 1]);

    let p0 = [card(Suit::Coins, 7)];
    let p1: [Card; 0] = [];
    // Cards + sette bello + coins for P0, plus both sides' scopas.
    assert_eq!(score_round([&p0, &p1], [1, 3]).points, [4, 3]);
}
