//! Cards, hands and the blackjack dealer.
//!
//! The dealer publishes hands through a subject; each hand is scored by a
//! try-map stage. A hand over 21 points raises [`HandError::Busted`], which
//! ends the stream.

use super::{console, example_of, note_rejection, settle};
use crate::pipeline::PipelineBuilder;
use crate::producers::PassthroughSubject;
use crate::transcript::Transcript;
use crate::transformer::Transformer;
use crate::transformers::TryMapTransformer;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;

/// A card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
  /// ♠
  Spades,
  /// ♥
  Hearts,
  /// ♦
  Diamonds,
  /// ♣
  Clubs,
}

impl Suit {
  /// Every suit.
  pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
}

impl fmt::Display for Suit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let symbol = match self {
      Suit::Spades => "♠",
      Suit::Hearts => "♥",
      Suit::Diamonds => "♦",
      Suit::Clubs => "♣",
    };
    f.write_str(symbol)
  }
}

/// A card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Rank {
  Ace,
  Two,
  Three,
  Four,
  Five,
  Six,
  Seven,
  Eight,
  Nine,
  Ten,
  Jack,
  Queen,
  King,
}

impl Rank {
  /// Every rank, ace first.
  pub const ALL: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
  ];

  /// Hard points: an ace counts one, face cards ten.
  pub fn points(&self) -> u32 {
    match self {
      Rank::Ace => 1,
      Rank::Jack | Rank::Queen | Rank::King => 10,
      other => *other as u32 + 1,
    }
  }
}

impl fmt::Display for Rank {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Rank::Ace => f.write_str("A"),
      Rank::Jack => f.write_str("J"),
      Rank::Queen => f.write_str("Q"),
      Rank::King => f.write_str("K"),
      other => write!(f, "{}", other.points()),
    }
  }
}

/// A playing card, shown as rank then suit, as in `Q♣`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
  /// The rank.
  pub rank: Rank,
  /// The suit.
  pub suit: Suit,
}

impl Card {
  /// The card of `rank` in `suit`.
  pub const fn new(rank: Rank, suit: Suit) -> Self {
    Self { rank, suit }
  }
}

impl fmt::Display for Card {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.rank, self.suit)
  }
}

/// The cards dealt to one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(pub Vec<Card>);

impl Hand {
  /// Best score for the hand: one ace counts eleven when that stays at or
  /// under 21.
  pub fn points(&self) -> u32 {
    let hard: u32 = self.0.iter().map(|card| card.rank.points()).sum();
    let has_ace = self.0.iter().any(|card| card.rank == Rank::Ace);
    if has_ace && hard + 10 <= 21 {
      hard + 10
    } else {
      hard
    }
  }
}

impl fmt::Display for Hand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, card) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{}", card)?;
    }
    Ok(())
  }
}

/// Errors raised while scoring a hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
  /// The hand scored more than 21 points.
  #[error("busted")]
  Busted,
}

/// Scores `hand`, failing when it is over 21.
pub fn evaluate(hand: Hand) -> Result<String, HandError> {
  match hand.points() {
    points if points > 21 => Err(HandError::Busted),
    points => Ok(format!("{} for {} points", hand, points)),
  }
}

/// A deck of cards, dealt from the top.
#[derive(Debug, Clone)]
pub struct Deck {
  cards: Vec<Card>,
}

impl Deck {
  /// The 52 cards in suit order.
  pub fn standard() -> Self {
    let cards = Suit::ALL
      .iter()
      .flat_map(|suit| Rank::ALL.iter().map(move |rank| Card::new(*rank, *suit)))
      .collect();
    Self { cards }
  }

  /// A standard deck shuffled with `rng`.
  pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
    let mut deck = Self::standard();
    deck.cards.shuffle(rng);
    deck
  }

  /// Cards left to deal.
  pub fn remaining(&self) -> usize {
    self.cards.len()
  }

  /// Deals `count` cards, or nothing when the deck runs short.
  pub fn deal(&mut self, count: usize) -> Option<Hand> {
    if count > self.cards.len() {
      return None;
    }
    let at = self.cards.len() - count;
    Some(Hand(self.cards.split_off(at)))
  }
}

/// The dealer scores a shuffled hand, then two fixed ones; the second busts.
pub async fn blackjack(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "blackjack");
  let dealer = PassthroughSubject::<Hand>::new();
  let subscription = PipelineBuilder::new()
    .producer(dealer.clone())
    .transformer(TryMapTransformer::new(evaluate).with_name("dealer".to_string()))
    .consumer(console(&transcript))
    .spawn();

  let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(21));
  let hands = [
    deck.deal(2),
    Some(Hand(vec![
      Card::new(Rank::Queen, Suit::Clubs),
      Card::new(Rank::Nine, Suit::Hearts),
    ])),
    Some(Hand(vec![
      Card::new(Rank::King, Suit::Spades),
      Card::new(Rank::Queen, Suit::Hearts),
      Card::new(Rank::Three, Suit::Diamonds),
    ])),
  ];
  for hand in hands.into_iter().flatten() {
    if dealer.send(hand).is_err() {
      break;
    }
    settle().await;
  }
  note_rejection(&transcript, "Finish", dealer.finish());
  subscription.join().await;
  transcript.lines()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::consumers::VecConsumer;
  use crate::producers::VecProducer;

  fn hand(cards: &[(Rank, Suit)]) -> Hand {
    Hand(cards.iter().map(|(r, s)| Card::new(*r, *s)).collect())
  }

  #[test]
  fn test_display() {
    let h = hand(&[(Rank::Queen, Suit::Clubs), (Rank::Ten, Suit::Hearts)]);
    assert_eq!(h.to_string(), "Q♣ 10♥");
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
  }

  #[test]
  fn test_points_with_soft_ace() {
    assert_eq!(hand(&[(Rank::Ace, Suit::Spades), (Rank::King, Suit::Hearts)]).points(), 21);
    assert_eq!(
      hand(&[
        (Rank::Ace, Suit::Spades),
        (Rank::Ace, Suit::Hearts),
        (Rank::Nine, Suit::Clubs)
      ])
      .points(),
      21
    );
    assert_eq!(
      hand(&[
        (Rank::Ace, Suit::Spades),
        (Rank::Eight, Suit::Hearts),
        (Rank::Five, Suit::Clubs)
      ])
      .points(),
      14
    );
  }

  #[test]
  fn test_evaluate() {
    let ok = hand(&[(Rank::Queen, Suit::Clubs), (Rank::Nine, Suit::Hearts)]);
    assert_eq!(evaluate(ok).unwrap(), "Q♣ 9♥ for 19 points");
    let bust = hand(&[
      (Rank::King, Suit::Spades),
      (Rank::Queen, Suit::Hearts),
      (Rank::Three, Suit::Diamonds),
    ]);
    assert_eq!(evaluate(bust), Err(HandError::Busted));
  }

  #[test]
  fn test_deck_deals_from_the_top() {
    let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(1));
    assert_eq!(deck.remaining(), 52);
    let dealt = deck.deal(5).unwrap();
    assert_eq!(dealt.0.len(), 5);
    assert_eq!(deck.remaining(), 47);
    assert!(deck.deal(48).is_none());

    let mut all = Deck::standard().deal(52).unwrap().0;
    all.sort_by_key(|card| (card.suit as u8, card.rank as u8));
    all.dedup();
    assert_eq!(all.len(), 52);
  }

  #[tokio::test]
  async fn test_busted_hand_yields_no_value() {
    let bust = hand(&[
      (Rank::King, Suit::Spades),
      (Rank::Queen, Suit::Hearts),
      (Rank::Three, Suit::Diamonds),
    ]);
    let (completion, consumer) = PipelineBuilder::new()
      .producer(VecProducer::new(vec![bust]))
      .transformer(TryMapTransformer::new(evaluate))
      .consumer(VecConsumer::new())
      .run()
      .await;
    assert!(consumer.values().is_empty());
    let error = completion.error().unwrap();
    assert_eq!(error.downcast_ref::<HandError>(), Some(&HandError::Busted));
  }

  #[tokio::test]
  async fn test_blackjack_demo() {
    let lines = blackjack(Transcript::quiet()).await;
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("Received value: ") && lines[1].ends_with(" points"));
    assert_eq!(lines[2], "Received value: Q♣ 9♥ for 19 points");
    assert_eq!(lines[3], "Received completion: failure(busted)");
  }
}
