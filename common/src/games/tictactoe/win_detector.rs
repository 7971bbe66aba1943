use super::board::Board;
use super::types::{GameOutcome, Mark};

/// Rows, columns, then both diagonals, as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(row, col) == Some(mark))
    })
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_won(board, Mark::X) && !has_won(board, Mark::O)
}

/// X is reported first when a malformed board holds lines for both marks.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(mark) = winner(board) {
        GameOutcome::Win(mark)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let b = Board::new();
        assert!(!has_won(&b, Mark::X));
        assert!(!has_won(&b, Mark::O));
        assert!(!is_draw(&b));
        assert_eq!(outcome(&b), GameOutcome::InProgress);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut b = Board::new();
            for (row, col) in line {
                b.place(row, col, Mark::O).unwrap();
            }
            assert!(has_won(&b, Mark::O), "line {:?} not detected", line);
            assert!(!has_won(&b, Mark::X));
            assert_eq!(winner(&b), Some(Mark::O));
        }
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert!(!has_won(&Board::new(), Mark::Empty));
    }

    #[test]
    fn test_draw_board() {
        let b = board("XOX/XOO/OXX");
        assert!(is_draw(&b));
        assert!(!has_won(&b, Mark::X));
        assert!(!has_won(&b, Mark::O));
        assert_eq!(outcome(&b), GameOutcome::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let b = board("XXX/OOX/XOO");
        assert!(b.is_full());
        assert!(!is_draw(&b));
        assert_eq!(outcome(&b), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let b = board("XX_/O__/O__");
        assert!(!has_won(&b, Mark::X));
        assert_eq!(outcome(&b), GameOutcome::InProgress);
    }

    #[test]
    fn test_evaluation_does_not_mutate() {
        let b = board("XOX/_O_/___");
        let before = b;
        let _ = has_won(&b, Mark::O);
        let _ = is_draw(&b);
        let _ = outcome(&b);
        assert_eq!(b, before);
    }

    fn assert_exclusive_from(board: &mut Board, to_move: Mark, visited: &mut usize) {
        *visited += 1;
        assert!(
            !(has_won(board, Mark::X) && has_won(board, Mark::O)),
            "both marks won on {}",
            board
        );
        if outcome(board) != GameOutcome::InProgress {
            assert!(winner(board).is_some() != is_draw(board), "{}", board);
            return;
        }

        let next = to_move.opponent().unwrap();
        for position in board.available_moves() {
            let mut placed = board.place_scoped(position, to_move);
            assert_exclusive_from(&mut placed, next, visited);
        }
    }

    #[test]
    fn test_reachable_boards_have_at_most_one_outcome() {
        let mut visited = 0;
        assert_exclusive_from(&mut Board::new(), Mark::X, &mut visited);
        assert_eq!(visited, 549_946);
    }
}
