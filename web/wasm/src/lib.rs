use bjledger::storage::{decode_hands, encode_hands};
use bjledger::{
    Card, Decision, Outcome, PendingHand, RecordedHand, Session, export_tsv, settle_with,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Ledger state held by the page. The page owns persistence: it passes the
/// stored blob to `load` and writes `hands_json` back after each submit.
#[wasm_bindgen]
pub struct WasmLedger {
    session: Session,
    pending: PendingHand,
    default_bet: String,
}

#[wasm_bindgen]
impl WasmLedger {
    #[wasm_bindgen(constructor)]
    pub fn new(deck_count: u32, default_bet: &str) -> Result<WasmLedger, JsValue> {
        let mut pending = PendingHand::default();
        pending.set_bet_text(default_bet).map_err(js_err)?;
        Ok(Self {
            session: Session::new(deck_count),
            pending,
            default_bet: default_bet.to_string(),
        })
    }

    /// Replaces the session with a stored blob. Corrupt blobs load as empty.
    pub fn load(&mut self, blob: Option<String>) {
        let hands = blob
            .and_then(|text| decode_hands(&text).ok())
            .unwrap_or_default();
        self.session = Session::from_hands(hands, self.session.deck_count());
    }

    pub fn hands_json(&self) -> Result<String, JsValue> {
        encode_hands(self.session.hands()).map_err(js_err)
    }

    pub fn add_player_card(&mut self, label: &str) -> Result<(), JsValue> {
        let card = parse_card(label)?;
        self.pending.add_player_card(card);
        Ok(())
    }

    pub fn add_dealer_card(&mut self, label: &str) -> Result<(), JsValue> {
        let card = parse_card(label)?;
        self.pending.add_dealer_card(card);
        Ok(())
    }

    pub fn remove_player_card(&mut self, index: u32) {
        self.pending.remove_player_card(index as usize);
    }

    pub fn remove_dealer_card(&mut self, index: u32) {
        self.pending.remove_dealer_card(index as usize);
    }

    pub fn observe(&mut self, label: &str) -> Result<(), JsValue> {
        let card = parse_card(label)?;
        self.session.observe(card);
        Ok(())
    }

    pub fn set_bet(&mut self, text: &str) -> Result<(), JsValue> {
        self.pending.set_bet_text(text).map_err(js_err)
    }

    pub fn set_cashout(&mut self, text: &str) -> Result<(), JsValue> {
        self.pending.set_cashout_text(text).map_err(js_err)
    }

    pub fn set_decision(&mut self, label: &str) -> Result<(), JsValue> {
        let decision = label.parse::<Decision>().map_err(js_err)?;
        self.pending.set_decision(decision);
        Ok(())
    }

    pub fn set_result(&mut self, label: &str) -> Result<(), JsValue> {
        let result = label.parse::<Outcome>().map_err(js_err)?;
        self.pending.set_result(result);
        Ok(())
    }

    pub fn set_deck_count(&mut self, deck_count: u32) {
        self.session.set_deck_count(deck_count);
    }

    /// Appends the pending hand and returns its id. The page must persist
    /// `hands_json` afterwards.
    pub fn submit(&mut self) -> Result<u32, JsValue> {
        self.session.append(&mut self.pending).map_err(js_err)
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.pending = PendingHand::default();
        let _ = self.pending.set_bet_text(&self.default_bet);
    }

    pub fn export(&self) -> String {
        export_tsv(&self.session)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let stats = self.session.stats();
        let count = self.session.count();

        let snapshot = Snapshot {
            pending: JsPending::from(&self.pending),
            hands: self
                .session
                .hands()
                .iter()
                .map(|hand| JsHand::new(hand, &self.session))
                .collect(),
            seen_cards: labels(self.session.seen_cards()),
            stats: JsStats {
                hands: stats.hands as u32,
                total_bet: stats.total_bet.normalize().to_string(),
                total_profit: stats.total_profit.normalize().to_string(),
                net_profit: stats.net_profit.normalize().to_string(),
                avg_profit_per_hand: format!("{:.2}", stats.avg_profit_per_hand),
                return_to_player: format!("{:.1}", stats.return_to_player),
            },
            running_count: count.running_count,
            true_count: count.true_count,
            deck_count: self.session.deck_count(),
        };

        serde_wasm_bindgen::to_value(&snapshot).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

#[derive(Serialize)]
struct Snapshot {
    pending: JsPending,
    hands: Vec<JsHand>,
    seen_cards: Vec<&'static str>,
    stats: JsStats,
    running_count: i32,
    true_count: Option<f64>,
    deck_count: u32,
}

#[derive(Serialize)]
struct JsPending {
    player_cards: Vec<&'static str>,
    player_total: u32,
    dealer_cards: Vec<&'static str>,
    dealer_total: u32,
    bet: Option<String>,
    cashout: Option<String>,
    decision: Option<&'static str>,
    result: Option<&'static str>,
}

impl From<&PendingHand> for JsPending {
    fn from(pending: &PendingHand) -> Self {
        Self {
            player_cards: labels(pending.player_cards()),
            player_total: pending.player_total(),
            dealer_cards: labels(pending.dealer_cards()),
            dealer_total: pending.dealer_total(),
            bet: pending.bet().map(|bet| bet.to_string()),
            cashout: pending.cashout().map(|cashout| cashout.to_string()),
            decision: pending.decision().map(Decision::label),
            result: pending.result().map(Outcome::label),
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    id: u32,
    player_cards: Vec<&'static str>,
    player_total: u32,
    dealer_cards: Vec<&'static str>,
    dealer_total: u32,
    bet: String,
    cashout: String,
    decision: &'static str,
    result: &'static str,
    profit: String,
    tag: &'static str,
}

impl JsHand {
    fn new(hand: &RecordedHand, session: &Session) -> Self {
        let settlement = settle_with(hand, session.blackjack_pays());
        Self {
            id: hand.id,
            player_cards: labels(&hand.player_cards),
            player_total: hand.player_total(),
            dealer_cards: labels(&hand.dealer_cards),
            dealer_total: hand.dealer_total(),
            bet: hand.bet.to_string(),
            cashout: hand.cashout.to_string(),
            decision: hand.decision.label(),
            result: hand.result.label(),
            profit: settlement.profit.to_string(),
            tag: settlement.tag.code(),
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    hands: u32,
    total_bet: String,
    total_profit: String,
    net_profit: String,
    avg_profit_per_hand: String,
    return_to_player: String,
}

fn labels(cards: &[Card]) -> Vec<&'static str> {
    cards.iter().map(|card| card.label()).collect()
}

fn parse_card(label: &str) -> Result<Card, JsValue> {
    label.parse::<Card>().map_err(js_err)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
