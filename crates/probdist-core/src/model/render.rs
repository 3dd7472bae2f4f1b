//! Diagnostic text rendering for distributions.
//!
//! Long tables are cut down to their two lowest keys, an ellipsis line and the
//! highest key. The output is meant for people reading a terminal; it is not a
//! serialization format and nothing parses it back.

use crate::model::distribution::Distribution;
use crate::model::outcome::OutcomeTuple;
use crate::model::table::ProbabilityTable;
use core::fmt;

/// Tables up to this size are rendered in full.
const FULL_LIMIT: usize = 3;
const HEAD_LINES: usize = 2;
/// Tuples up to this arity list every variable name.
const ARITY_LIMIT: usize = 3;

pub const ELLIPSIS: &str = "...";

impl<V: fmt::Display> Distribution<V> {
    pub fn title(&self) -> String {
        let count = self.len();
        format!(
            "{} distribution, {count} entr{}",
            self.kind(),
            if count == 1 { "y" } else { "ies" }
        )
    }

    /// Rendered entry lines without the title line.
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            Distribution::Marginal { p } => {
                truncated(p, |outcome, value| format!("{value}, x = {outcome}"))
            }
            Distribution::Joint { p } => truncated(p, |tuple, value| {
                format!("{value}, {} = {tuple}", variables('x', tuple))
            }),
            Distribution::Partial { p } | Distribution::Conditional { p } => {
                truncated(p, |given, value| {
                    format!(
                        "{value}, {} = {} | {} = {}",
                        variables('x', &given.x),
                        given.x,
                        variables('y', &given.y),
                        given.y
                    )
                })
            }
        }
    }
}

impl<V: fmt::Display> fmt::Display for Distribution<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())?;
        for line in self.render_lines() {
            writeln!(f)?;
            f.write_str(&line)?;
        }
        Ok(())
    }
}

fn truncated<K: Ord, V>(
    table: &ProbabilityTable<K, V>,
    line: impl Fn(&K, &V) -> String,
) -> Vec<String> {
    if table.len() <= FULL_LIMIT {
        return table.iter().map(|(key, value)| line(key, value)).collect();
    }

    let mut lines: Vec<String> = table
        .iter()
        .take(HEAD_LINES)
        .map(|(key, value)| line(key, value))
        .collect();
    lines.push(ELLIPSIS.to_string());
    if let Some((key, value)) = table.iter().next_back() {
        lines.push(line(key, value));
    }
    lines
}

/// Variable names for a tuple key, e.g. `(x1,x2)` or `(x1,x2,...,x5)`.
fn variables(prefix: char, tuple: &OutcomeTuple) -> String {
    let arity = tuple.arity();
    let names: Vec<String> = if arity <= ARITY_LIMIT {
        (1..=arity).map(|i| format!("{prefix}{i}")).collect()
    } else {
        vec![
            format!("{prefix}1"),
            format!("{prefix}2"),
            ELLIPSIS.to_string(),
            format!("{prefix}{arity}"),
        ]
    };
    format!("({})", names.join(","))
}
