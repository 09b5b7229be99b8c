//! Win statistics over the stored matches.

use super::MatchRecord;

/// Aggregate results for the two current players.
///
/// Totals span every stored match; wins are matched by player name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub player1: String,
    pub player2: String,
    pub total_games: usize,
    pub player1_wins: usize,
    pub player2_wins: usize,
    /// Move count of the newest match
    pub last_game_moves: usize,
}

impl Stats {
    pub fn compute(records: &[MatchRecord], player1: &str, player2: &str) -> Self {
        let wins = |name: &str| {
            records
                .iter()
                .filter(|r| r.winner.as_deref() == Some(name))
                .count()
        };

        Self {
            player1: player1.to_string(),
            player2: player2.to_string(),
            total_games: records.len(),
            player1_wins: wins(player1),
            player2_wins: wins(player2),
            last_game_moves: records.first().map_or(0, |r| r.moves.len()),
        }
    }

    pub fn player1_losses(&self) -> usize {
        self.total_games.saturating_sub(self.player1_wins)
    }

    pub fn player2_losses(&self) -> usize {
        self.total_games.saturating_sub(self.player2_wins)
    }

    /// Percentage of all games won, 0 with no games
    pub fn win_rate(&self, wins: usize) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        wins as f64 / self.total_games as f64 * 100.0
    }

    pub fn player1_win_rate(&self) -> f64 {
        self.win_rate(self.player1_wins)
    }

    pub fn player2_win_rate(&self) -> f64 {
        self.win_rate(self.player2_wins)
    }

    /// Player with strictly more wins, if any
    pub fn leader(&self) -> Option<&str> {
        use std::cmp::Ordering;
        match self.player1_wins.cmp(&self.player2_wins) {
            Ordering::Greater => Some(&self.player1),
            Ordering::Less => Some(&self.player2),
            Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Mark, Pos};
    use crate::game::Players;
    use chrono::Utc;

    fn record(p1: &str, p2: &str, winner: Option<&str>, moves: i32) -> MatchRecord {
        let mut board = Board::new();
        let mut mark = Mark::First;
        for x in 0..moves {
            board.place(Pos::new(x, 0), mark).unwrap();
            mark = mark.opponent();
        }
        MatchRecord::new(&Players::new(p1, p2), winner.map(String::from), Utc::now(), &board)
    }

    #[test]
    fn test_empty_history() {
        let stats = Stats::compute(&[], "Ann", "Ben");
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.player1_win_rate(), 0.0);
        assert_eq!(stats.leader(), None);
        assert_eq!(stats.last_game_moves, 0);
    }

    #[test]
    fn test_counts_and_rates() {
        let records = vec![
            record("Ann", "Ben", Some("Ann"), 9),
            record("Ann", "Ben", Some("Ben"), 11),
            record("Ann", "Ben", Some("Ann"), 13),
            record("Cid", "Dee", Some("Cid"), 9),
        ];
        let stats = Stats::compute(&records, "Ann", "Ben");

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.player1_wins, 2);
        assert_eq!(stats.player2_wins, 1);
        assert_eq!(stats.player1_losses(), 2);
        assert_eq!(stats.player2_losses(), 3);
        assert!((stats.player1_win_rate() - 50.0).abs() < 1e-9);
        assert!((stats.player2_win_rate() - 25.0).abs() < 1e-9);
        assert_eq!(stats.leader(), Some("Ann"));
        assert_eq!(stats.last_game_moves, 9);
    }

    #[test]
    fn test_tie_has_no_leader() {
        let records = vec![
            record("Ann", "Ben", Some("Ann"), 9),
            record("Ann", "Ben", Some("Ben"), 9),
        ];
        assert_eq!(Stats::compute(&records, "Ann", "Ben").leader(), None);
    }
}
