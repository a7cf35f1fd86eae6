//! End-to-end dispatcher tests driving the engine the way the transport
//! layer does: one tagged event at a time.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::mocks::{jackpot_draw, mixed_draw, test_casino, ManualClock, UnavailableLedger};
use crate::{Casino, Config, Ledger, LedgerError};
use tugrik_types::{
    ClaimResult, Event, Reply, SessionState, WagerOutcome, DAILY_REWARD_COOLDOWN,
};

fn play(user: u64) -> Event {
    Event::PlayRequested { user }
}

fn bet(user: u64, text: &str) -> Event {
    Event::BetSubmitted {
        user,
        text: text.to_string(),
    }
}

#[test]
fn test_full_wager_flow() {
    let casino = test_casino(jackpot_draw());
    casino.ledger().set_balance(1, 100).unwrap();

    assert_eq!(
        casino.handle(play(1)).unwrap(),
        Reply::BetPrompt {
            min_bet: 10,
            max_bet: 1_000,
        }
    );
    assert_eq!(casino.sessions().state(1), SessionState::AwaitingBet);

    let reply = casino.handle(bet(1, "50")).unwrap();
    assert_eq!(
        reply,
        Reply::Wager(WagerOutcome::Settled {
            bet: 50,
            draw: jackpot_draw(),
            payout: 250,
            balance: 300,
        })
    );
    assert_eq!(casino.sessions().state(1), SessionState::Idle);

    // The prompt is gone, so further text is not a bet.
    assert_eq!(casino.handle(bet(1, "50")).unwrap(), Reply::UnknownCommand);
}

#[test]
fn test_invalid_input_reprompts_until_cancel() {
    let casino = test_casino(mixed_draw());
    casino.ledger().set_balance(1, 100).unwrap();

    casino.handle(play(1)).unwrap();
    assert_eq!(
        casino.handle(bet(1, "lots")).unwrap(),
        Reply::Wager(WagerOutcome::InvalidFormat)
    );
    assert_eq!(
        casino.handle(bet(1, "7")).unwrap(),
        Reply::Wager(WagerOutcome::OutOfRange { bet: 7 })
    );
    assert_eq!(casino.sessions().state(1), SessionState::AwaitingBet);

    assert_eq!(casino.handle(Event::CancelRequested { user: 1 }).unwrap(), Reply::Cancelled);
    assert_eq!(casino.sessions().state(1), SessionState::Idle);
    assert_eq!(casino.ledger().balance(1).unwrap(), 100);
}

#[test]
fn test_play_reentry_is_idempotent() {
    let casino = test_casino(mixed_draw());
    casino.ledger().set_balance(1, 100).unwrap();

    casino.handle(play(1)).unwrap();
    // A second play request restarts the same prompt instead of stacking.
    casino.handle(play(1)).unwrap();
    assert_eq!(casino.sessions().state(1), SessionState::AwaitingBet);

    let reply = casino.handle(bet(1, "20")).unwrap();
    assert!(matches!(reply, Reply::Wager(WagerOutcome::Settled { .. })));
    // One settlement consumed the prompt entirely.
    assert_eq!(casino.handle(bet(1, "20")).unwrap(), Reply::UnknownCommand);
}

#[test]
fn test_claim_flow_through_dispatcher() {
    let casino = test_casino(mixed_draw());

    let reply = casino.handle(Event::ClaimRequested { user: 1 }).unwrap();
    assert_eq!(
        reply,
        Reply::Claim(ClaimResult::Granted {
            amount: 80,
            balance: 80,
        })
    );

    let reply = casino.handle(Event::ClaimRequested { user: 1 }).unwrap();
    assert!(matches!(reply, Reply::Claim(ClaimResult::Pending { .. })));

    // Crossing the cooldown grants again.
    casino.clock().advance(DAILY_REWARD_COOLDOWN);
    let reply = casino.handle(Event::ClaimRequested { user: 1 }).unwrap();
    assert_eq!(
        reply,
        Reply::Claim(ClaimResult::Granted {
            amount: 80,
            balance: 160,
        })
    );
}

#[test]
fn test_login_and_balance_and_stats() {
    let config = Config {
        admins: [99].into_iter().collect(),
        ..Config::default()
    };
    let casino = Casino::new(
        config,
        crate::MemoryLedger::new(),
        ManualClock::new(Duration::from_secs(0)),
        crate::mocks::FixedDraws::new(mixed_draw()),
    );

    assert_eq!(
        casino.handle(Event::LoginRequested { user: 1 }).unwrap(),
        Reply::Welcome { balance: 0 }
    );
    casino.handle(Event::LoginRequested { user: 2 }).unwrap();
    casino.handle(Event::LoginRequested { user: 2 }).unwrap();

    casino.ledger().set_balance(1, 40).unwrap();
    assert_eq!(
        casino.handle(Event::BalanceRequested { user: 1 }).unwrap(),
        Reply::Balance { balance: 40 }
    );

    assert_eq!(
        casino.handle(Event::StatsRequested { user: 1 }).unwrap(),
        Reply::StatsDenied
    );
    assert_eq!(
        casino.handle(Event::StatsRequested { user: 99 }).unwrap(),
        Reply::Stats {
            total_users: 2,
            total_logins: 3,
        }
    );
}

#[test]
fn test_users_are_isolated() {
    let casino = test_casino(mixed_draw());
    casino.ledger().set_balance(1, 100).unwrap();
    casino.ledger().set_balance(2, 100).unwrap();

    casino.handle(play(1)).unwrap();
    // User 2 never asked to play; their text is not a bet.
    assert_eq!(casino.handle(bet(2, "50")).unwrap(), Reply::UnknownCommand);
    assert_eq!(casino.ledger().balance(2).unwrap(), 100);

    // User 1's prompt is still open.
    assert!(matches!(
        casino.handle(bet(1, "50")).unwrap(),
        Reply::Wager(WagerOutcome::Settled { .. })
    ));
}

#[test]
fn test_double_submitted_bet_settles_once() {
    let casino = Arc::new(test_casino(mixed_draw()));
    casino.ledger().set_balance(1, 100).unwrap();
    casino.handle(play(1)).unwrap();

    let replies: Vec<Reply> = thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let casino = Arc::clone(&casino);
                scope.spawn(move || casino.handle(bet(1, "100")).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let settled = replies
        .iter()
        .filter(|r| matches!(r, Reply::Wager(WagerOutcome::Settled { .. })))
        .count();
    let ignored = replies
        .iter()
        .filter(|r| matches!(r, Reply::UnknownCommand))
        .count();
    assert_eq!((settled, ignored), (1, 1));
    // Exactly one debit happened.
    assert_eq!(casino.ledger().balance(1).unwrap(), 0);
}

#[test]
fn test_concurrent_claims_grant_once() {
    let casino = Arc::new(test_casino(mixed_draw()));

    let replies: Vec<Reply> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let casino = Arc::clone(&casino);
                scope.spawn(move || casino.handle(Event::ClaimRequested { user: 1 }).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let granted = replies
        .iter()
        .filter(|r| matches!(r, Reply::Claim(ClaimResult::Granted { .. })))
        .count();
    assert_eq!(granted, 1);
    assert_eq!(casino.ledger().balance(1).unwrap(), 80);
}

#[test]
fn test_store_fault_surfaces_and_leaves_session() {
    let casino = Casino::new(
        Config::default(),
        UnavailableLedger,
        ManualClock::new(Duration::from_secs(0)),
        crate::mocks::FixedDraws::new(mixed_draw()),
    );

    casino.handle(play(1)).unwrap();
    let result = casino.handle(bet(1, "50"));
    assert!(matches!(result, Err(LedgerError::Unavailable { .. })));

    // The lock was released on the error path and the prompt survives, so
    // the user can retry once the store is back.
    assert_eq!(casino.sessions().state(1), SessionState::AwaitingBet);

    let result = casino.handle(Event::ClaimRequested { user: 1 });
    assert!(matches!(result, Err(LedgerError::Unavailable { .. })));
}
