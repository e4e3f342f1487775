//! Home/away assignment for a text span that holds a score.
//!
//! Team names are matched as plain substrings, without word boundaries. A name
//! that is contained in another one ("United" in "Athletic United") is found at
//! the longer name's position, which can put it on the wrong side of the score.
//! Existing output depends on this, so the matching stays literal.

use crate::domain::model::{Fixture, TeamSet};

/// Resolves the fixture described by `span`, whose score starts at byte
/// `score_offset`. Returns `None` unless two distinct known teams are found.
pub fn disambiguate(
    span: &str,
    score_offset: usize,
    home_score: u32,
    away_score: u32,
    teams: &TeamSet,
) -> Option<Fixture> {
    let mut found: Vec<(usize, &str)> = teams
        .iter()
        .filter_map(|team| span.find(team).map(|offset| (offset, team)))
        .collect();
    found.sort_unstable();

    let home = found.iter().find(|(offset, _)| *offset < score_offset);
    let away = found.iter().find(|(offset, _)| *offset >= score_offset);

    let (home, away) = match (home, away) {
        (Some(&(_, home)), Some(&(_, away))) => (home, away),
        // one side is empty: read the first two names left to right
        _ => match found.as_slice() {
            [(_, home), (_, away), ..] => (*home, *away),
            _ => {
                tracing::trace!(text = span.trim(), "Fewer than two known teams near score");
                return None;
            }
        },
    };

    Some(Fixture {
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_score,
        away_score,
    })
}
