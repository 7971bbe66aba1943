use tictactoe_common::log;
use tictactoe_common::tictactoe::{
    Board, GameOutcome, Mark, MoveAnalysis, Position, analyze_moves, choose_ai_move, has_won,
    is_draw, outcome,
};
use tictactoe_common::EngineError;

pub struct BestMoveReport {
    pub ai_mark: Mark,
    pub analysis: MoveAnalysis,
    pub chosen: Position,
    pub board_after: Board,
    pub outcome_after: GameOutcome,
}

/// Scores every legal move for `ai_mark` (or the side to move) and plays the best one.
pub fn best_move(board: &Board, ai_mark: Option<Mark>) -> Result<BestMoveReport, EngineError> {
    let ai_mark = ai_mark.unwrap_or_else(|| board.next_mark());
    let mut board_after = *board;

    let chosen = choose_ai_move(&mut board_after, ai_mark)?;
    let analysis = analyze_moves(board, ai_mark)?;

    Ok(BestMoveReport {
        ai_mark,
        analysis,
        chosen,
        board_after,
        outcome_after: outcome(&board_after),
    })
}

pub fn log_best_move(report: &BestMoveReport) {
    log!("Evaluating moves for {}", report.ai_mark);
    for evaluation in &report.analysis.evaluations {
        log!("  {} -> {:+}", evaluation.position, evaluation.score);
    }
    log!(
        "Searched {} positions, deepest ply {}",
        report.analysis.stats.nodes,
        report.analysis.stats.max_depth
    );
    log!("Best move: {}", report.chosen);
    log!("Board after move ({}):\n{}", report.outcome_after, report.board_after.pretty());
}

pub fn log_outcome(board: &Board) {
    log!("Board:\n{}", board.pretty());
    log!("X has won: {}", has_won(board, Mark::X));
    log!("O has won: {}", has_won(board, Mark::O));
    log!("Draw: {}", is_draw(board));
    log!("Outcome: {}", outcome(board));
}
