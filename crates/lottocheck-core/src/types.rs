//! Shared domain types for draw results and ticket checking.

use serde::{Deserialize, Serialize};

/// Canonical winning-numbers record for one draw of one game.
///
/// Produced only by the result normalizer; a value of this type always
/// satisfies the owning game's count and range rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    /// Unique per (game, draw date): `"{game_id}-{draw_date}"`.
    pub id: String,
    pub game_id: String,
    /// ISO-like date of the draw, as reported by the source.
    pub draw_date: String,
    pub main_numbers: Vec<u8>,
    pub bonus_numbers: Vec<u8>,
    /// Prize tiers from the static game table. The fetch layer leaves this
    /// empty; the serving layer attaches the table before responding.
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

/// One fixed prize tier of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    /// Tier label, e.g. `"Jackpot"` or `"Match 4 + Powerball"`.
    pub tier: String,
    pub match_main: usize,
    pub match_bonus: usize,
    /// Fixed average payout in whole dollars.
    pub amount: u64,
    pub description: String,
}

/// A user-entered ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryTicket {
    pub id: String,
    pub game_id: String,
    pub purchase_date: String,
    pub main_numbers: Vec<u8>,
    pub bonus_numbers: Vec<u8>,
}

/// Outcome of comparing one ticket against a draw result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub ticket_id: String,
    pub matched_main_numbers: Vec<u8>,
    pub matched_bonus_numbers: Vec<u8>,
    pub total_main_matches: usize,
    pub total_bonus_matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize: Option<Prize>,
    pub is_winner: bool,
}
