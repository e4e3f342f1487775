//! Score tokens: two integers separated by a hyphen or en-dash, e.g. `3-1`, `2 – 2`.

use once_cell::sync::Lazy;
use regex::Regex;

static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*[-–]\s*([0-9]+)").expect("score pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreToken<'t> {
    pub home: u32,
    pub away: u32,
    /// Byte offset of the match within the tokenized text.
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

/// Lazy iterator over the score tokens of a text span. Clone it to restart.
#[derive(Debug, Clone)]
pub struct ScoreTokens<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for ScoreTokens<'t> {
    type Item = ScoreToken<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let caps = SCORE_RE.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            self.pos = whole.end();

            // digit runs too long for u32 are not scores
            let home = caps[1].parse::<u32>();
            let away = caps[2].parse::<u32>();
            if let (Ok(home), Ok(away)) = (home, away) {
                return Some(ScoreToken {
                    home,
                    away,
                    start: whole.start(),
                    end: whole.end(),
                    text: whole.as_str(),
                });
            }
        }
        None
    }
}

pub fn tokenize(text: &str) -> ScoreTokens<'_> {
    ScoreTokens { text, pos: 0 }
}

pub fn first_score(text: &str) -> Option<ScoreToken<'_>> {
    tokenize(text).next()
}
