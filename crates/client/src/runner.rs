//! Replays a command script against a board.
use anyhow::Result;
use skirmish_core::{ActionOutcome, Board, Command, GameEngine, GameError, Team};
use strum::IntoEnumIterator;

/// Tally of a replayed script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub winner: Option<Team>,
}

/// Executes `commands` in order, printing the board after each accepted one.
///
/// Rejected commands are logged and skipped unless `stop_on_error` is set.
/// Replay stops early once a single team is left.
pub fn run_script(
    board: &mut Board,
    commands: &[Command],
    stop_on_error: bool,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();
    let mut engine = GameEngine::new(board);

    for (turn, command) in commands.iter().enumerate() {
        match engine.execute(command) {
            Ok(outcome) => {
                summary.accepted += 1;
                report_outcome(turn, &outcome);
                println!("{}", engine.board());
            }
            Err(err) => {
                summary.rejected += 1;
                tracing::warn!(
                    turn,
                    command = command.as_str(),
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "{err}"
                );
                if stop_on_error {
                    return Err(err.into());
                }
            }
        }

        if let Some(winner) = engine.winner() {
            summary.winner = Some(winner);
            if turn + 1 < commands.len() {
                let skipped = commands.len() - turn - 1;
                tracing::info!(skipped, "match over, script cut short");
            }
            break;
        }
    }

    for team in Team::iter() {
        let board = engine.board();
        let units = board.units_of(team).count();
        let health = board
            .units_of(team)
            .fold(0i32, |total, (_, unit)| total.saturating_add(unit.health()));
        tracing::info!(%team, units, health, "roster after script");
    }

    Ok(summary)
}

fn report_outcome(turn: usize, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Moved { from, to } => {
            tracing::info!(turn, %from, %to, "moved");
        }
        ActionOutcome::Attacked(report) => {
            tracing::info!(
                turn,
                from = %report.attacker,
                to = %report.target,
                hits = report.hits.len(),
                target_health = report.hit_at(report.target).map(|hit| hit.health),
                damage = report.total_damage(),
                removed = report.removed().count(),
                "attacked"
            );
        }
        ActionOutcome::Reloaded { at, ammo } => {
            tracing::info!(turn, %at, ammo, "reloaded");
        }
    }
}
