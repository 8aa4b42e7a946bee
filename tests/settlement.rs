//! Settlement and export tests.

use bjledger::{
    Card, Decimal, Decision, Outcome, PendingHand, RecordedHand, Session, SettlementTag,
    export_tsv, settle, settle_with,
};

fn amount(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn hand(decision: Decision, result: Outcome, bet: &str, cashout: &str) -> RecordedHand {
    RecordedHand {
        id: 1,
        player_cards: vec![Card::Ten, Card::Seven],
        dealer_cards: vec![Card::Nine, Card::Eight],
        bet: amount(bet),
        cashout: amount(cashout),
        decision,
        result,
    }
}

#[test]
fn stand_win_returns_stake() {
    let settlement = settle(&hand(Decision::Stand, Outcome::Win, "10", "0"));
    assert_eq!(settlement.effective_bet, amount("10"));
    assert_eq!(settlement.profit, amount("10"));
    assert_eq!(settlement.tag, SettlementTag::Win);
    assert_eq!(settlement.tag.code(), "win");
}

#[test]
fn double_doubles_the_stake() {
    let win = settle(&hand(Decision::Double, Outcome::Win, "10", "0"));
    assert_eq!(win.effective_bet, amount("20"));
    assert_eq!(win.profit, amount("20"));
    assert_eq!(win.tag.code(), "ddw");

    let lose = settle(&hand(Decision::Double, Outcome::Lose, "10", "0"));
    assert_eq!(lose.effective_bet, amount("20"));
    assert_eq!(lose.profit, Decimal::ZERO);
    assert_eq!(lose.net(), amount("-20"));
    assert_eq!(lose.tag.code(), "ddl");

    let push = settle(&hand(Decision::Double, Outcome::Push, "10", "0"));
    assert_eq!(push.profit, amount("20"));
    assert_eq!(push.tag.code(), "push");
}

#[test]
fn blackjack_pays_three_to_two() {
    let win = settle(&hand(Decision::Blackjack, Outcome::Win, "10", "0"));
    assert_eq!(win.effective_bet, amount("10"));
    assert_eq!(win.profit, amount("15"));
    assert_eq!(win.tag.code(), "bj");

    let lose = settle(&hand(Decision::Blackjack, Outcome::Lose, "10", "0"));
    assert_eq!(lose.profit, Decimal::ZERO);
    assert_eq!(lose.tag.code(), "bj");

    let odd = settle(&hand(Decision::Blackjack, Outcome::Win, "2.5", "0"));
    assert_eq!(odd.profit, amount("3.75"));
}

#[test]
fn blackjack_ratio_is_configurable() {
    let six_to_five = settle_with(
        &hand(Decision::Blackjack, Outcome::Win, "10", "0"),
        amount("1.2"),
    );
    assert_eq!(six_to_five.profit, amount("12"));
}

#[test]
fn cashout_returns_cashout_amount() {
    let won = settle(&hand(Decision::Cashout, Outcome::Win, "10", "35"));
    assert_eq!(won.effective_bet, amount("10"));
    assert_eq!(won.profit, amount("35"));
    assert_eq!(won.tag.code(), "cow");

    let lost = settle(&hand(Decision::Cashout, Outcome::Lose, "10", "4.5"));
    assert_eq!(lost.profit, amount("4.5"));
    assert_eq!(lost.net(), amount("-5.5"));
    assert_eq!(lost.tag.code(), "col");
}

#[test]
fn push_refunds_effective_bet_for_every_decision() {
    for decision in Decision::ALL {
        let settlement = settle(&hand(decision, Outcome::Push, "10", "35"));
        let expected = if decision == Decision::Double { "20" } else { "10" };
        assert_eq!(settlement.profit, amount(expected), "{decision}");
        assert_eq!(settlement.effective_bet, amount(expected), "{decision}");
        assert_eq!(settlement.tag, SettlementTag::Push, "{decision}");
    }
}

#[test]
fn plain_loss_returns_nothing() {
    let settlement = settle(&hand(Decision::Stand, Outcome::Lose, "10", "0"));
    assert_eq!(settlement.effective_bet, amount("10"));
    assert_eq!(settlement.profit, Decimal::ZERO);
    assert_eq!(settlement.net(), amount("-10"));
    assert_eq!(settlement.tag.code(), "los");

    let split = settle(&hand(Decision::Split, Outcome::Lose, "10", "0"));
    assert_eq!(split.tag.code(), "los");
    let split = settle(&hand(Decision::Split, Outcome::Win, "10", "0"));
    assert_eq!(split.profit, amount("10"));
    assert_eq!(split.tag.code(), "win");
}

#[test]
fn settle_is_idempotent() {
    for decision in Decision::ALL {
        for result in Outcome::ALL {
            let recorded = hand(decision, result, "7.25", "3");
            assert_eq!(settle(&recorded), settle(&recorded));
        }
    }
}

#[test]
fn oversized_hands_saturate_instead_of_overflowing() {
    let recorded = hand(Decision::Double, Outcome::Win, "50000000000000000000000000000", "0");
    let settlement = settle(&recorded);
    assert_eq!(settlement.effective_bet, Decimal::MAX);
    assert_eq!(settlement.profit, Decimal::MAX);

    let session = Session::from_hands(vec![recorded], 6);
    let stats = session.stats();
    assert_eq!(stats.total_bet, Decimal::MAX);
    assert_eq!(stats.net_profit, Decimal::ZERO);
    assert_eq!(stats.return_to_player, amount("100"));
    assert!(!export_tsv(&session).is_empty());
}

#[test]
fn tiny_bet_with_large_cashout_keeps_stats_finite() {
    let recorded = hand(
        Decision::Cashout,
        Outcome::Win,
        "0.0000000000000000000000000001",
        "1",
    );
    let stats = Session::from_hands(vec![recorded], 6).stats();
    assert_eq!(stats.total_profit, Decimal::ONE);
    assert_eq!(stats.return_to_player, Decimal::MAX);
}

#[test]
fn decision_and_outcome_labels_round_trip() {
    for decision in Decision::ALL {
        assert_eq!(decision.label().parse::<Decision>(), Ok(decision));
    }
    for result in Outcome::ALL {
        assert_eq!(result.to_string().parse::<Outcome>(), Ok(result));
    }
    assert_eq!("double".parse::<Decision>(), Ok(Decision::Double));
    assert!("Surrender".parse::<Decision>().is_err());
    assert!("Tie".parse::<Outcome>().is_err());
}

fn record(
    session: &mut Session,
    player: &[Card],
    dealer: &[Card],
    bet: &str,
    decision: Decision,
    result: Outcome,
) {
    let mut pending = PendingHand::new(amount(bet));
    for &card in player {
        pending.add_player_card(card);
    }
    for &card in dealer {
        pending.add_dealer_card(card);
    }
    pending.set_decision(decision);
    pending.set_result(result);
    session.append(&mut pending).unwrap();
}

#[test]
fn export_renders_one_line_per_hand() {
    let mut session = Session::new(6);
    record(
        &mut session,
        &[Card::Ace, Card::King],
        &[Card::Nine, Card::Seven],
        "10",
        Decision::Stand,
        Outcome::Win,
    );
    record(
        &mut session,
        &[Card::Ace, Card::Queen],
        &[Card::Ten, Card::Nine],
        "10",
        Decision::Blackjack,
        Outcome::Win,
    );
    record(
        &mut session,
        &[Card::Five, Card::Six, Card::Two],
        &[Card::Ten, Card::Eight],
        "5",
        Decision::Double,
        Outcome::Lose,
    );
    record(
        &mut session,
        &[Card::Ten, Card::Eight],
        &[Card::Nine, Card::Nine],
        "2.5",
        Decision::Stand,
        Outcome::Push,
    );

    let expected = [
        "10\t10\tStand\t21\t16\twin",
        "10\t15\tBlackjack\t21\t19\tbj",
        "10\t0\tDouble\t13\t18\tddl",
        "2.5\t2.5\tPush\t18\t18\tpush",
    ]
    .join("\n");

    assert_eq!(export_tsv(&session), expected);
}

#[test]
fn export_of_empty_session_is_empty() {
    assert_eq!(export_tsv(&Session::new(6)), "");
}
