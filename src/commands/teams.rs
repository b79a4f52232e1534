use crate::config::{Config, DisplayConfig};
use crate::formatting::format_header;
use crate::teams::{self, Conference, Division, Team};
use anyhow::Result;

// Layout Constants
/// Width of one team table (for two-column layout)
const TEAMS_COLUMN_WIDTH: usize = 34;

/// Width of abbreviation column
const ABBREV_COL_WIDTH: usize = 4;

/// Width of team name column
const TEAM_NAME_COL_WIDTH: usize = 22;

/// Width of division column
const DIVISION_COL_WIDTH: usize = 6;

/// Spacing between columns in two-column layout
const COLUMN_SPACING: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Division,
    Conference,
    League,
}

impl GroupBy {
    pub fn name(&self) -> &str {
        match self {
            Self::Division => "Division",
            Self::Conference => "Conference",
            Self::League => "League",
        }
    }
}

pub fn format_teams_table<'a>(
    teams: impl IntoIterator<Item = &'a Team>,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<abbrev_width$} {:<team_width$} {:<div_width$}\n",
        "Abbr",
        "Team",
        "Div",
        abbrev_width = ABBREV_COL_WIDTH,
        team_width = TEAM_NAME_COL_WIDTH,
        div_width = DIVISION_COL_WIDTH,
    ));
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(TEAMS_COLUMN_WIDTH)
    ));

    for team in teams {
        output.push_str(&format!(
            "{:<abbrev_width$} {:<team_width$} {:<div_width$}\n",
            team.abbreviation,
            team.name,
            format!("{} {}", team.conference, team.division),
            abbrev_width = ABBREV_COL_WIDTH,
            team_width = TEAM_NAME_COL_WIDTH,
            div_width = DIVISION_COL_WIDTH,
        ));
    }

    output
}

fn format_group_with_header<'a>(
    name: &str,
    teams: impl IntoIterator<Item = &'a Team>,
    display: &DisplayConfig,
) -> Vec<String> {
    let mut lines = Vec::new();
    let header = format_header(name, true, display);
    lines.extend(header.lines().map(|s| s.to_string()));
    lines.push(String::new());

    let table = format_teams_table(teams, display);
    lines.extend(table.lines().map(|s| s.to_string()));

    lines
}

/// Stack every division of a conference, separated by blank lines
fn format_division_column(conference: Conference, display: &DisplayConfig) -> Vec<String> {
    let mut lines = Vec::new();

    for division in Division::all() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let name = format!("{} {}", conference, division);
        lines.extend(format_group_with_header(
            &name,
            teams::in_division(conference, division),
            display,
        ));
    }

    lines
}

fn merge_columns(left_lines: Vec<String>, right_lines: Vec<String>, column_width: usize) -> String {
    let mut output = String::new();
    let max_len = left_lines.len().max(right_lines.len());

    for i in 0..max_len {
        let left = left_lines.get(i).map(|s| s.as_str()).unwrap_or("");
        let right = right_lines.get(i).map(|s| s.as_str()).unwrap_or("");

        let line = format!(
            "{:<width$}{}{}",
            left,
            " ".repeat(COLUMN_SPACING),
            right,
            width = column_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Render the registry grouped the requested way
pub fn format_teams_by_group(by: GroupBy, display: &DisplayConfig) -> String {
    match by {
        GroupBy::Division => merge_columns(
            format_division_column(Conference::Afc, display),
            format_division_column(Conference::Nfc, display),
            TEAMS_COLUMN_WIDTH,
        ),
        GroupBy::Conference => {
            let [left, right] = Conference::all().map(|conference| {
                format_group_with_header(
                    conference.name(),
                    teams::in_conference(conference),
                    display,
                )
            });
            merge_columns(left, right, TEAMS_COLUMN_WIDTH)
        }
        GroupBy::League => format_group_with_header("NFL", teams::all(), display)
            .into_iter()
            .map(|line| line + "\n")
            .collect(),
    }
}

pub fn run(by: GroupBy, config: &Config) -> Result<()> {
    tracing::debug!("Listing teams by {}", by.name());
    let output = format_teams_by_group(by, &config.display());
    print!("{}", output);
    Ok(())
}
