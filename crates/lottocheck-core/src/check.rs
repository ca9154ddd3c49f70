//! Pure ticket-matching against a draw result.

use crate::games::GameConfig;
use crate::types::{CheckResult, DrawResult, LotteryTicket, Prize};

/// Compare one ticket against a draw result and determine its prize tier.
///
/// Match order follows the ticket: a matched number appears in the result in
/// the position the player entered it.
#[must_use]
pub fn check_ticket(ticket: &LotteryTicket, draw: &DrawResult, game: &GameConfig) -> CheckResult {
    let matched_main_numbers: Vec<u8> = ticket
        .main_numbers
        .iter()
        .copied()
        .filter(|n| draw.main_numbers.contains(n))
        .collect();

    let matched_bonus_numbers: Vec<u8> = ticket
        .bonus_numbers
        .iter()
        .copied()
        .filter(|n| draw.bonus_numbers.contains(n))
        .collect();

    let total_main_matches = matched_main_numbers.len();
    let total_bonus_matches = matched_bonus_numbers.len();

    let prize = determine_prize(game, total_main_matches, total_bonus_matches);
    let is_winner = prize.is_some();

    CheckResult {
        ticket_id: ticket.id.clone(),
        matched_main_numbers,
        matched_bonus_numbers,
        total_main_matches,
        total_bonus_matches,
        prize,
        is_winner,
    }
}

/// Check a batch of tickets against the same draw result.
#[must_use]
pub fn check_tickets(
    tickets: &[LotteryTicket],
    draw: &DrawResult,
    game: &GameConfig,
) -> Vec<CheckResult> {
    tickets
        .iter()
        .map(|ticket| check_ticket(ticket, draw, game))
        .collect()
}

/// Find the prize tier for an exact (main, bonus) match count, if any.
#[must_use]
pub fn determine_prize(
    game: &GameConfig,
    main_matches: usize,
    bonus_matches: usize,
) -> Option<Prize> {
    game.prizes
        .iter()
        .find(|p| p.match_main == main_matches && p.match_bonus == bonus_matches)
        .cloned()
}

/// Format a whole-dollar amount the way the UI displays it:
/// `$1.0M`, `$50K`, `$7`.
#[must_use]
pub fn format_prize_amount(amount: u64) -> String {
    if amount >= 1_000_000 {
        #[allow(clippy::cast_precision_loss)]
        let millions = amount as f64 / 1_000_000.0;
        format!("${millions:.1}M")
    } else if amount >= 1_000 {
        format!("${}K", amount / 1_000)
    } else {
        format!("${amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn powerball() -> GameConfig {
        GameConfig {
            id: "powerball".to_string(),
            name: "Powerball".to_string(),
            state: "National".to_string(),
            main_count: 5,
            main_max: 69,
            bonus_count: 1,
            bonus_max: 26,
            bonus_name: "Powerball".to_string(),
            draw_days: vec![],
            official_website: "https://www.powerball.com".to_string(),
            prizes: vec![
                tier("Jackpot", 5, 1, 100_000_000),
                tier("Match 5", 5, 0, 1_000_000),
                tier("Match 4 + Powerball", 4, 1, 50_000),
                tier("Match 4", 4, 0, 100),
                tier("Match 3 + Powerball", 3, 1, 100),
                tier("Match 3", 3, 0, 7),
                tier("Powerball Only", 0, 1, 4),
            ],
        }
    }

    fn tier(name: &str, match_main: usize, match_bonus: usize, amount: u64) -> Prize {
        Prize {
            tier: name.to_string(),
            match_main,
            match_bonus,
            amount,
            description: name.to_string(),
        }
    }

    fn draw(main: Vec<u8>, bonus: Vec<u8>) -> DrawResult {
        DrawResult {
            id: "powerball-2025-10-13".to_string(),
            game_id: "powerball".to_string(),
            draw_date: "2025-10-13".to_string(),
            main_numbers: main,
            bonus_numbers: bonus,
            prizes: vec![],
        }
    }

    fn ticket(main: Vec<u8>, bonus: Vec<u8>) -> LotteryTicket {
        LotteryTicket {
            id: "ticket-1".to_string(),
            game_id: "powerball".to_string(),
            purchase_date: "2025-10-13".to_string(),
            main_numbers: main,
            bonus_numbers: bonus,
        }
    }

    #[test]
    fn full_match_hits_jackpot() {
        let draw = draw(vec![13, 14, 32, 52, 64], vec![12]);
        let ticket = ticket(vec![13, 14, 32, 52, 64], vec![12]);

        let result = check_ticket(&ticket, &draw, &powerball());
        assert_eq!(result.total_main_matches, 5);
        assert_eq!(result.total_bonus_matches, 1);
        assert!(result.is_winner);
        assert_eq!(result.prize.unwrap().tier, "Jackpot");
    }

    #[test]
    fn partial_match_finds_exact_tier() {
        let draw = draw(vec![13, 14, 32, 52, 64], vec![12]);
        let ticket = ticket(vec![13, 14, 32, 52, 1], vec![12]);

        let result = check_ticket(&ticket, &draw, &powerball());
        assert_eq!(result.total_main_matches, 4);
        assert_eq!(result.total_bonus_matches, 1);
        assert_eq!(result.prize.unwrap().tier, "Match 4 + Powerball");
    }

    #[test]
    fn bonus_only_match_wins_smallest_tier() {
        let draw = draw(vec![13, 14, 32, 52, 64], vec![12]);
        let ticket = ticket(vec![1, 2, 3, 4, 5], vec![12]);

        let result = check_ticket(&ticket, &draw, &powerball());
        assert_eq!(result.total_main_matches, 0);
        assert_eq!(result.total_bonus_matches, 1);
        assert_eq!(result.prize.unwrap().tier, "Powerball Only");
    }

    #[test]
    fn no_matching_tier_means_no_winner() {
        let draw = draw(vec![13, 14, 32, 52, 64], vec![12]);
        // Two main matches, no bonus: not a tier for this game.
        let ticket = ticket(vec![13, 14, 3, 4, 5], vec![9]);

        let result = check_ticket(&ticket, &draw, &powerball());
        assert_eq!(result.total_main_matches, 2);
        assert_eq!(result.total_bonus_matches, 0);
        assert!(!result.is_winner);
        assert!(result.prize.is_none());
    }

    #[test]
    fn matched_numbers_keep_ticket_order() {
        let draw = draw(vec![13, 14, 32, 52, 64], vec![12]);
        let ticket = ticket(vec![64, 13, 2, 32, 5], vec![12]);

        let result = check_ticket(&ticket, &draw, &powerball());
        assert_eq!(result.matched_main_numbers, vec![64, 13, 32]);
    }

    #[test]
    fn check_tickets_keeps_batch_order() {
        let draw = draw(vec![13, 14, 32, 52, 64], vec![12]);
        let mut winner = ticket(vec![13, 14, 32, 52, 64], vec![12]);
        winner.id = "winner".to_string();
        let mut loser = ticket(vec![1, 2, 3, 4, 5], vec![6]);
        loser.id = "loser".to_string();

        let results = check_tickets(&[winner, loser], &draw, &powerball());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].ticket_id, "winner");
        assert!(results[0].is_winner);
        assert_eq!(results[1].ticket_id, "loser");
        assert!(!results[1].is_winner);
    }

    #[test]
    fn format_prize_amount_buckets() {
        assert_eq!(format_prize_amount(100_000_000), "$100.0M");
        assert_eq!(format_prize_amount(1_500_000), "$1.5M");
        assert_eq!(format_prize_amount(50_000), "$50K");
        assert_eq!(format_prize_amount(1_000), "$1K");
        assert_eq!(format_prize_amount(7), "$7");
    }
}
