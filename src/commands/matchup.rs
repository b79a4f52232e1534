use crate::selection::Selection;
use anyhow::Result;

/// Text printed when the pair does not form a matchup
pub const NO_MATCHUP: &str = "No matchup";

/// Apply both picks in away-then-home order and describe the result
pub fn format_matchup(away: &str, home: &str) -> String {
    let mut selection = Selection::new();
    selection.set_away(away);
    selection.set_home(home);

    match selection.current_matchup() {
        Some(matchup) => matchup.to_string(),
        None => {
            if selection.away().is_none() {
                tracing::warn!("Away team '{}' not selected", away);
            }
            if selection.home().is_none() {
                tracing::warn!("Home team '{}' not selected", home);
            }
            NO_MATCHUP.to_string()
        }
    }
}

pub fn run(away: &str, home: &str) -> Result<()> {
    println!("{}", format_matchup(away, home));
    Ok(())
}
