use tictactoe_common::log;
use tictactoe_common::tictactoe::{Side, VerificationReport, verify_unbeatable};
use tictactoe_common::EngineError;

/// Exhaustive check for both seatings; returns the reports in (human first, AI first) order.
pub fn verify_both_seatings() -> Result<[(Side, VerificationReport); 2], EngineError> {
    Ok([
        (Side::Human, verify_unbeatable(Side::Human)?),
        (Side::Ai, verify_unbeatable(Side::Ai)?),
    ])
}

pub fn log_reports(reports: &[(Side, VerificationReport)]) {
    for (first, report) in reports {
        log!(
            "{:?} first: {} games, AI wins {}, draws {}, human wins {}",
            first,
            report.games,
            report.ai_wins,
            report.draws,
            report.human_wins
        );
    }
}
