//! Exploration transcripts and scoring output.
//!
//! Writers are generic over any [`Write`] sink so tests can use
//! `Vec<u8>` and production code can use a file.

use std::io::{self, Write};

use hedge_core::Position;

use crate::annotate::RouteStep;
use crate::explore::TraceEntry;

/// Write the raw exploration trace as CSV.
///
/// One row per visited cell except the final one: the step number, the
/// cell, and the action that left it. `start` is the runner's starting
/// position, conceptually step zero of the trace.
pub fn write_exploration_csv<W: Write>(
    mut sink: W,
    start: Position,
    trace: &[TraceEntry],
) -> io::Result<()> {
    writeln!(sink, "Step,x-coordinate,y-coordinate,Actions")?;
    let mut at = start;
    for (step, entry) in trace.iter().enumerate() {
        writeln!(sink, "{},{},{},{}", step + 1, at.x, at.y, entry.action)?;
        at = entry.position;
    }
    Ok(())
}

/// The run's score: a quarter point per exploration step plus the full
/// route length (the final route plus its goal cell). Lower is better.
pub fn score(trace: &[TraceEntry], route: &[RouteStep]) -> f64 {
    trace.len() as f64 / 4.0 + (route.len() + 1) as f64
}

/// Write the run statistics: maze name, score, exploration step count,
/// the final route, and the route length.
pub fn write_statistics<W: Write>(
    mut sink: W,
    maze_name: Option<&str>,
    trace: &[TraceEntry],
    route: &[RouteStep],
) -> io::Result<()> {
    writeln!(sink, "{}", maze_name.unwrap_or("-"))?;
    writeln!(sink, "{}", score(trace, route))?;
    writeln!(sink, "{}", trace.len())?;
    let rendered: Vec<String> = route
        .iter()
        .map(|s| format!("({}, {}, {})", s.position.x, s.position.y, s.action))
        .collect();
    writeln!(sink, "{}", rendered.join(" -> "))?;
    writeln!(sink, "{}", route.len() + 1)?;
    Ok(())
}
