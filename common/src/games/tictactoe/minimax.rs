use crate::error::EngineError;
use super::board::{ALL_POSITIONS, Board};
use super::types::Mark;
use super::win_detector::has_won;

pub const AI_WIN_SCORE: i32 = 1;
pub const HUMAN_WIN_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

/// Search counters. Depth is tracked for reporting only; it never changes a score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub max_depth: usize,
}

impl SearchStats {
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Minimax value of `board` for `ai_mark`, in `{-1, 0, 1}`.
///
/// `maximizing_turn` says whether the AI is the side to move. The search runs
/// on a private copy of the board, so the caller's board is never observed
/// mid-search.
pub fn score(board: &Board, ai_mark: Mark, maximizing_turn: bool) -> Result<i32, EngineError> {
    score_with_stats(board, ai_mark, maximizing_turn).map(|(score, _)| score)
}

pub fn score_with_stats(
    board: &Board,
    ai_mark: Mark,
    maximizing_turn: bool,
) -> Result<(i32, SearchStats), EngineError> {
    let human_mark = ai_mark.opponent().ok_or(EngineError::InvalidMark)?;
    let mut scratch = *board;
    let mut stats = SearchStats::default();

    let score = minimax(&mut scratch, 0, maximizing_turn, ai_mark, human_mark, &mut stats);
    Ok((score, stats))
}

/// Exhaustive search without pruning. Every placement is undone when its
/// guard drops, before the next sibling is tried.
pub(crate) fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    ai_mark: Mark,
    human_mark: Mark,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if has_won(board, ai_mark) {
        return AI_WIN_SCORE;
    }
    if has_won(board, human_mark) {
        return HUMAN_WIN_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in ALL_POSITIONS {
            if !board.is_empty(position.row, position.col) {
                continue;
            }
            let mut child = board.place_scoped(position, ai_mark);
            let eval = minimax(&mut child, depth + 1, false, ai_mark, human_mark, stats);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in ALL_POSITIONS {
            if !board.is_empty(position.row, position.col) {
                continue;
            }
            let mut child = board.place_scoped(position, human_mark);
            let eval = minimax(&mut child, depth + 1, true, ai_mark, human_mark, stats);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_ai_win_scores_plus_one() {
        let b = board("OOO/XX_/X__");
        assert_eq!(score(&b, Mark::O, true), Ok(AI_WIN_SCORE));
        assert_eq!(score(&b, Mark::O, false), Ok(AI_WIN_SCORE));
    }

    #[test]
    fn test_terminal_human_win_scores_minus_one() {
        let b = board("XXX/OO_/___");
        assert_eq!(score(&b, Mark::O, true), Ok(HUMAN_WIN_SCORE));
    }

    #[test]
    fn test_ai_win_checked_before_human_win() {
        // Malformed board with lines for both marks.
        let b = board("XXX/OOO/___");
        assert_eq!(score(&b, Mark::O, false), Ok(AI_WIN_SCORE));
        assert_eq!(score(&b, Mark::X, false), Ok(AI_WIN_SCORE));
    }

    #[test]
    fn test_full_board_draw_scores_zero() {
        let (score, stats) = score_with_stats(&board("XOX/XOO/OXX"), Mark::O, true).unwrap();
        assert_eq!(score, DRAW_SCORE);
        assert_eq!(stats, SearchStats { nodes: 1, max_depth: 0 });
    }

    #[test]
    fn test_empty_board_is_a_draw_under_perfect_play() {
        assert_eq!(score(&Board::new(), Mark::X, true), Ok(DRAW_SCORE));
        assert_eq!(score(&Board::new(), Mark::O, false), Ok(DRAW_SCORE));
    }

    #[test]
    fn test_immediate_win_available() {
        // AI (O) to move, can complete the middle row.
        let b = board("X_X/OO_/X__");
        assert_eq!(score(&b, Mark::O, true), Ok(AI_WIN_SCORE));
    }

    #[test]
    fn test_unstoppable_fork_scores_minus_one() {
        // X threatens the top row and the left column; either block hands X the other.
        let b = board("XX_/XO_/__O");
        assert_eq!(score(&b, Mark::O, true), Ok(HUMAN_WIN_SCORE));
    }

    #[test]
    fn test_fast_and_slow_wins_score_identically() {
        // X to move wins now at (0,2); the root only reports +1, not how fast.
        let b = board("XX_/OO_/___");
        assert_eq!(score(&b, Mark::X, true), Ok(AI_WIN_SCORE));
    }

    #[test]
    fn test_score_leaves_board_untouched() {
        let b = board("X__/_O_/__X");
        let before = b;
        let _ = score(&b, Mark::O, true).unwrap();
        assert_eq!(b, before);
    }

    #[test]
    fn test_invalid_ai_mark() {
        assert_eq!(score(&Board::new(), Mark::Empty, true), Err(EngineError::InvalidMark));
    }

    #[test]
    fn test_stats_count_every_node() {
        // One empty cell: root + one child.
        let (_, stats) = score_with_stats(&board("XOX/XOO/OX_"), Mark::O, false).unwrap();
        assert_eq!(stats, SearchStats { nodes: 2, max_depth: 1 });
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats { nodes: 3, max_depth: 2 };
        total.merge(SearchStats { nodes: 5, max_depth: 4 });
        assert_eq!(total, SearchStats { nodes: 8, max_depth: 4 });
    }
}
