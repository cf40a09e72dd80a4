use super::*;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::tower::outcome::Outcome;
use crate::tower::row::Row;
use crate::Chips;
use crate::DECK_SIZE;
use crate::MAX_WAGER;
use crate::ROWS;
use crate::TOWER_SIZE;

/// gate 5 and seven playing rows with no diagonal matches anywhere
const CLEAN: &str = "5 \
    1 2 \
    3 4 5 \
    1 2 3 4 \
    5 6 7 1 2 \
    3 4 5 6 7 1 \
    5 6 7 1 2 3 4 \
    7 1 2 3 4 5 6 7";

/// same as CLEAN except row 2 collides once and spends the gate
const RESCUED: &str = "5 \
    1 2 \
    3 2 5 \
    1 2 3 4 \
    5 6 7 1 2 \
    3 4 5 6 7 1 \
    5 6 7 1 2 3 4 \
    7 1 2 3 4 5 6 7";

fn session(deck: &str) -> Session {
    session_with(deck, Options::default())
}

fn session_with(deck: &str, options: Options) -> Session {
    let mut session = Session::new(Options {
        seed: Some(0),
        ..options
    });
    session.new_round_from(Deck::from(deck));
    session
}

fn ride(session: &mut Session) -> Event {
    let mut event = session.advance();
    while !session.round().is_complete() && session.state() == State::Playing {
        event = session.advance();
    }
    event
}

#[test]
fn new_round_is_fresh() {
    let mut session = session("1 1 2");
    session.advance();
    session.new_round();
    let round = session.round();
    assert_eq!(round.deck().len(), DECK_SIZE);
    assert_eq!(*round.counts(), crate::cards::counts::Counts::stock());
    assert!(round.tower().rows().iter().all(Row::is_empty));
    assert_eq!(round.tower().rows().len(), ROWS);
    assert_eq!(round.state(), State::Betting);
    assert_eq!(round.multiplier(), 1);
    assert_eq!(round.cursor(), 0);
    assert_eq!(session.balance(), 285);
}

#[test]
fn tower_fits_in_deck() {
    assert_eq!(TOWER_SIZE, 36);
    assert_eq!(DECK_SIZE, 60);
}

#[test]
fn first_advance_reveals_gate_and_first_row() {
    let mut session = session("1 1 2");
    assert_eq!(
        session.advance(),
        Event::Dealt {
            rows: 2,
            outcome: Outcome::Clear
        }
    );
    let tower = session.round().tower();
    assert_eq!(tower.gate(), Some(Card::from(1u8)));
    assert_eq!(tower.row(1), &Row::from("1 2"));
    assert_eq!(tower.row_value(1), 3);
    assert_eq!(session.balance(), 285);
    assert_eq!(session.state(), State::Playing);
}

#[test]
fn settle_pays_last_row() {
    let mut session = session("1 1 2");
    session.advance();
    let payout = session.settle().unwrap();
    assert_eq!(payout.prize, Prize::Row(1));
    assert_eq!(payout.amount, 3);
    assert_eq!(session.balance(), 288);
    assert_eq!(session.state(), State::Betting);
    assert_eq!(session.round().deck().len(), DECK_SIZE);
}

#[test]
fn settle_on_empty_tower_is_noop() {
    let mut session = session("1 1 2");
    assert_eq!(session.settle(), None);
    assert_eq!(session.input("x"), Event::Ignored);
    assert_eq!(session.balance(), 300);
    assert_eq!(session.state(), State::Betting);
}

#[test]
fn mixed_row_keeps_multiplier() {
    let mut session = session("7 1 2 2 2 1");
    session.advance();
    assert_eq!(session.multiplier(), 1);
    session.advance();
    assert_eq!(session.multiplier(), 1);
}

#[test]
fn uniform_rows_multiply() {
    let mut session = session("0 1 1 2 2 2");
    session.advance();
    assert_eq!(session.multiplier(), 2);
    session.advance();
    assert_eq!(session.round().tower().row(2), &Row::from("2 2 2"));
    assert_eq!(session.multiplier(), 6);
    assert_eq!(session.settle().unwrap().amount, 36);
}

#[test]
fn gate_rescues_one_bust() {
    let mut session = session("7 1 1 2 2 1");
    session.advance();
    let event = session.advance();
    assert_eq!(
        event,
        Event::Dealt {
            rows: 1,
            outcome: Outcome::Rescued {
                column: 2,
                burned: Card::from(1u8)
            }
        }
    );
    assert_ne!(session.state(), State::GameOver);
    assert_eq!(session.round().tower().gate(), None);
    assert_eq!(session.round().tower().row(2), &Row::from("2 2 7"));
    assert_eq!(session.ledger().rescues, 1);
}

#[test]
fn second_collision_ends_round() {
    let mut session = session("7 1 7 2 1 2");
    session.advance();
    session.advance();
    assert_eq!(session.state(), State::GameOver);
    assert_eq!(session.ledger().busts, 1);
    assert_eq!(session.settle(), None);
    assert_eq!(session.deal_next_row(), None);
    assert_eq!(session.balance(), 285);
}

#[test]
fn game_over_restarts_on_either_command() {
    for symbol in ["z", "x"] {
        let mut session = session("7 1 7 2 1 2");
        session.advance();
        session.advance();
        assert_eq!(session.input(symbol), Event::Restarted);
        assert_eq!(session.state(), State::Betting);
        assert_eq!(session.round().cursor(), 0);
        assert_eq!(session.balance(), 285);
    }
}

#[test]
fn unknown_symbols_are_ignored() {
    let mut session = session("1 1 2");
    assert_eq!(session.input("q"), Event::Ignored);
    assert_eq!(session.round().cursor(), 0);
}

#[test]
fn full_tower_waits_for_settle() {
    let mut session = session(CLEAN);
    ride(&mut session);
    assert!(session.round().is_complete());
    assert_eq!(session.state(), State::Playing);
    assert_eq!(session.deal_next_row(), None);
    assert!(session.round().deck().is_empty());
}

#[test]
fn jackpot_pays_every_row() {
    let mut session = session(CLEAN);
    ride(&mut session);
    let tower = session.round().tower();
    assert!(tower.is_jackpot());
    assert_eq!(tower.jackpot_value(), 135);
    assert_eq!(session.round().display_value(ROWS - 1), 135);
    assert_eq!(session.round().display_value(1), 135);
    assert!(session.snapshot().rows.iter().all(|r| r.value == 135));
    match session.advance() {
        Event::Settled(payout) => {
            assert_eq!(payout.prize, Prize::Jackpot);
            assert_eq!(payout.amount, 135);
        }
        other => panic!("expected settlement, got {:?}", other),
    }
    assert_eq!(session.balance(), 300 - 15 + 135);
    assert_eq!(session.ledger().jackpots, 1);
}

#[test]
fn spent_gate_forfeits_jackpot() {
    let mut session = session(RESCUED);
    ride(&mut session);
    assert!(session.round().is_complete());
    assert!(!session.round().tower().is_jackpot());
    assert_eq!(session.round().display_value(ROWS - 1), 35);
    let payout = session.settle().unwrap();
    assert_eq!(payout.prize, Prize::Row(ROWS - 2));
    assert_eq!(payout.value, 28);
}

#[test]
fn automatic_settlement() {
    let options = Options {
        settlement: Settlement::Automatic,
        ..Options::default()
    };
    let mut session = session_with(CLEAN, options);
    match ride(&mut session) {
        Event::Settled(payout) => assert!(payout.is_jackpot()),
        other => panic!("expected settlement, got {:?}", other),
    }
    assert_eq!(session.state(), State::Betting);
}

#[test]
fn wager_scales_multiplier() {
    let mut session = session("1 1 2");
    session.set_wager(30).unwrap();
    session.advance();
    assert_eq!(session.multiplier(), 2);
    assert_eq!(session.balance(), 270);
    assert_eq!(session.settle().unwrap().amount, 6);
}

#[test]
fn small_wager_zeroes_multiplier() {
    let mut session = session("1 1 2");
    session.set_wager(10).unwrap();
    session.advance();
    assert_eq!(session.multiplier(), 0);
    assert_eq!(session.settle().unwrap().amount, 0);
    assert_eq!(session.balance(), 290);
}

#[test]
fn wager_locked_mid_round() {
    let mut session = session("1 1 2");
    assert!(session.set_wager(0).is_err());
    assert!(session.set_wager(-15).is_err());
    session.advance();
    assert!(session.set_wager(45).is_err());
    assert_eq!(session.wager(), 15);
}

#[test]
fn wager_is_capped() {
    let mut session = session("1 1 2");
    assert!(session.set_wager(MAX_WAGER + 1).is_err());
    assert!(session.set_wager(Chips::MAX).is_err());
    assert!(session.set_wager(MAX_WAGER).is_ok());
    for _ in 0..4 {
        session.advance();
        session.settle();
    }
    assert_eq!(session.wager(), MAX_WAGER);
}

#[test]
fn balance_saturates() {
    let options = Options {
        balance: Chips::MIN + 1,
        wager: MAX_WAGER,
        ..Options::default()
    };
    let mut session = session_with("1 1 2", options);
    session.advance();
    assert_eq!(session.balance(), Chips::MIN);
}

#[test]
#[should_panic(expected = "wager out of range")]
fn oversized_starting_wager() {
    Session::new(Options {
        wager: MAX_WAGER + 1,
        ..Options::default()
    });
}

#[test]
fn gate_card_rescue_from_zero_gate() {
    let mut session = session("0 1 1 2 2 1");
    assert_eq!(
        session.advance(),
        Event::Dealt {
            rows: 2,
            outcome: Outcome::Clear
        }
    );
    assert_eq!(
        session.advance(),
        Event::Dealt {
            rows: 1,
            outcome: Outcome::Rescued {
                column: 2,
                burned: Card::from(1u8)
            }
        }
    );
    let tower = session.round().tower();
    assert_eq!(tower.row(2), &Row::from("2 2 0"));
    assert_eq!(tower.gate(), None);
    assert_ne!(session.state(), State::GameOver);
    assert_eq!(session.multiplier(), 2);
}

#[test]
fn rows_grow_by_one() {
    let mut session = Session::new(Options {
        seed: Some(3),
        ..Options::default()
    });
    for _ in 0..50 {
        while session.deal_next_row().is_some() {
            let round = session.round();
            let r = round.cursor() - 1;
            assert_eq!(round.tower().row(r).len(), r + 1);
        }
        session.new_round();
    }
}

#[test]
fn counts_mirror_deck_and_tower() {
    for seed in 0..200 {
        let mut session = Session::new(Options {
            seed: Some(seed),
            ..Options::default()
        });
        while session.deal_next_row().is_some() {
            let round = session.round();
            let tower = round.tower();
            for card in Card::all() {
                let counted = round.counts().of(card);
                let undrawn = round.deck().remaining().iter().filter(|c| **c == card).count();
                let burned = tower.burned().iter().filter(|c| **c == card).count();
                assert_eq!(counted, undrawn);
                assert_eq!(counted + tower.count(card) + burned, card.copies());
            }
        }
    }
}

#[test]
fn snapshot_hides_gate() {
    let mut session = session("7 1 2 3 4 5");
    assert_eq!(session.snapshot().gate, Gate::Empty);
    session.advance();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.gate, Gate::Hidden);
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.rows[0].cards, vec![1, 2]);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["gate"], "hidden");
    assert_eq!(json["state"], "Playing");
    assert!(!json.to_string().contains('7'));
}

#[test]
fn sessions_are_isolated() {
    let mut a = session("7 1 1 2 2 1");
    let b = session("7 1 1 2 2 1");
    a.advance();
    a.advance();
    assert_eq!(b.balance(), 300);
    assert_eq!(b.round().cursor(), 0);
    assert_eq!(b.round().tower().gate(), None);
}
