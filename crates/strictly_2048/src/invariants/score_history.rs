//! Score is fully explained by the turn history.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: the score equals the sum of every recorded turn's delta.
pub struct ScoreMatchesHistoryInvariant;

impl Invariant<GameInProgress> for ScoreMatchesHistoryInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let recorded: u64 = game.history().iter().map(|turn| turn.score_delta).sum();
        game.score() == recorded
    }

    fn description() -> &'static str {
        "Score matches the sum of turn deltas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameSetup;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_game_holds() {
        let game = GameSetup::default().start(&mut StdRng::seed_from_u64(4));
        assert_eq!(game.score(), 0);
        assert!(ScoreMatchesHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_points_violate() {
        let mut game = GameSetup::default().start(&mut StdRng::seed_from_u64(4));
        game.score += 8;
        assert!(!ScoreMatchesHistoryInvariant::holds(&game));
    }
}
