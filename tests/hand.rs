//! Hand scoring and resolution tests.

use bjtable::{
    BLACKJACK, Card, Hand, HandError, HandStatus, Outcome, Rank, Suit, best_score, full_deck,
    resolve,
};
use proptest::prelude::*;

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add(Card::new(Suit::Hearts, rank)).unwrap();
    }
    hand
}

#[test]
fn aces_soften_one_at_a_time() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).score(), 12);
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).score(),
        14
    );

    let blackjack = hand_of(&[Rank::Ace, Rank::King]);
    assert_eq!(blackjack.score(), 21);
    assert_eq!(blackjack.status(), HandStatus::Blackjack);
    assert!(blackjack.is_soft());
}

#[test]
fn ace_queen_four_seven_is_bust() {
    let cards = [
        Card::new(Suit::Spades, Rank::Ace),
        Card::new(Suit::Spades, Rank::Queen),
        Card::new(Suit::Spades, Rank::Four),
        Card::new(Suit::Spades, Rank::Seven),
    ];
    assert_eq!(best_score(&cards), 22);

    let hand = hand_of(&[Rank::Queen, Rank::Four, Rank::Seven, Rank::Ace]);
    assert_eq!(hand.score(), 22);
    assert_eq!(hand.status(), HandStatus::Bust);
}

#[test]
fn long_slices_keep_the_true_bust_total() {
    let cards: Vec<Card> = full_deck().chain(full_deck()).collect();
    assert_eq!(best_score(&cards), 680);
}

#[test]
fn empty_hand_is_playable_with_zero() {
    let hand = Hand::new();
    assert_eq!(hand.score(), 0);
    assert!(hand.is_playable());
    assert!(hand.is_empty());
}

#[test]
fn terminal_hands_reject_changes() {
    let mut bust = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
    assert_eq!(
        bust.add(Card::new(Suit::Clubs, Rank::Two)).unwrap_err(),
        HandError::Terminal {
            status: HandStatus::Bust
        }
    );
    assert_eq!(bust.len(), 3);
    assert_eq!(bust.score(), 24);
    assert_eq!(bust.score(), 24);

    let mut blackjack = hand_of(&[Rank::Jack, Rank::Ace]);
    assert!(blackjack.stop().is_err());
    assert_eq!(blackjack.status(), HandStatus::Blackjack);

    let mut stopped = hand_of(&[Rank::Ten, Rank::Six]);
    stopped.stop().unwrap();
    assert!(!stopped.is_playable());
    assert_eq!(
        stopped.stop().unwrap_err(),
        HandError::Terminal {
            status: HandStatus::Stopped
        }
    );
    assert!(stopped.add(Card::new(Suit::Clubs, Rank::Two)).is_err());
    assert_eq!(stopped.score(), 16);
}

#[test]
fn playable_until_terminal() {
    assert!(!hand_of(&[Rank::Ace, Rank::Jack]).is_playable());
    assert!(!hand_of(&[Rank::Jack, Rank::Jack, Rank::Two]).is_playable());
    assert!(hand_of(&[Rank::Jack, Rank::Jack]).is_playable());
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len())
        .prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], Rank::ALL[rank]))
}

/// Deals `cards` until the hand finishes, optionally standing at the end.
fn deal(cards: &[Card], stand: bool) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        if hand.add(card).is_err() {
            break;
        }
    }
    if stand && hand.is_playable() {
        hand.stop().unwrap();
    }
    hand
}

fn any_hand() -> impl Strategy<Value = Hand> {
    (prop::collection::vec(any_card(), 2..8), any::<bool>())
        .prop_map(|(cards, stand)| deal(&cards, stand))
}

proptest! {
    #[test]
    fn score_ignores_card_order(
        (cards, shuffled) in prop::collection::vec(any_card(), 0..10)
            .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
    ) {
        prop_assert_eq!(best_score(&cards), best_score(&shuffled));
    }

    #[test]
    fn score_is_best_total_or_lowest_bust(cards in prop::collection::vec(any_card(), 0..120)) {
        let hard: u32 = cards
            .iter()
            .map(|card| if card.is_ace() { 1 } else { u32::from(card.points()) })
            .sum();
        let score = best_score(&cards);

        if hard > u32::from(BLACKJACK) {
            prop_assert_eq!(score, hard);
        } else {
            prop_assert!(score <= u32::from(BLACKJACK));
            prop_assert!(score >= hard);
            prop_assert_eq!((score - hard) % 10, 0);
        }
    }

    #[test]
    fn resolve_is_total_and_ties_are_symmetric(gambler in any_hand(), dealer in any_hand()) {
        let forward = resolve(&gambler, &dealer);
        let backward = resolve(&dealer, &gambler);

        prop_assert_eq!(forward.is_tie(), backward.is_tie());
        prop_assert_eq!(forward.is_gambler_win(), backward == Outcome::Lose);
    }

    #[test]
    fn bust_never_wins(gambler in any_hand(), dealer in any_hand()) {
        let outcome = resolve(&gambler, &dealer);
        if gambler.is_bust() && !dealer.is_blackjack() {
            let expected = if dealer.is_bust() { Outcome::Push } else { Outcome::Lose };
            prop_assert_eq!(outcome, expected);
        }
        if gambler.is_bust() {
            prop_assert!(!outcome.is_gambler_win());
        }
    }
}
