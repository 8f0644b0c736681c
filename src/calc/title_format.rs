//! Header patterns such as `"MMMM YYYY"`.
//!
//! Supported tokens: `YYYY YY MMMM MMM MM M DD D Do dddd ddd dd d`.
//! Text inside `[...]` is copied verbatim; any other character passes through.

use crate::calc::dates::{month_name, weekday_name};
use crate::error::ConfigError;
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_TITLE_FORMAT: &str = "MMMM YYYY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    MonthName,
    MonthShort,
    Month2,
    Month,
    Day2,
    Day,
    DayOrdinal,
    WeekdayName,
    WeekdayShort,
    WeekdayMin,
    WeekdayNumber,
}

// Longest first so "MMMM" wins over "MM".
const TOKENS: [(&str, Token); 13] = [
    ("YYYY", Token::Year4),
    ("MMMM", Token::MonthName),
    ("dddd", Token::WeekdayName),
    ("MMM", Token::MonthShort),
    ("ddd", Token::WeekdayShort),
    ("YY", Token::Year2),
    ("MM", Token::Month2),
    ("Do", Token::DayOrdinal),
    ("DD", Token::Day2),
    ("dd", Token::WeekdayMin),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::WeekdayNumber),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Token(Token),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFormat {
    pattern: String,
    pieces: Vec<Piece>,
}

impl Default for TitleFormat {
    fn default() -> Self {
        // The default pattern has no brackets, so parsing cannot fail.
        TitleFormat::parse(DEFAULT_TITLE_FORMAT).unwrap_or_else(|_| TitleFormat {
            pattern: DEFAULT_TITLE_FORMAT.to_string(),
            pieces: vec![
                Piece::Token(Token::MonthName),
                Piece::Literal(" ".to_string()),
                Piece::Token(Token::Year4),
            ],
        })
    }
}

impl TitleFormat {
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        'outer: while let Some(c) = rest.chars().next() {
            if c == '[' {
                let Some(close) = rest.find(']') else {
                    return Err(ConfigError::TitleFormat {
                        pattern: pattern.to_string(),
                        reason: "unterminated '[' escape".to_string(),
                    });
                };
                literal.push_str(&rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
            for (text, token) in TOKENS {
                if let Some(after) = rest.strip_prefix(text) {
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Token(token));
                    rest = after;
                    continue 'outer;
                }
            }
            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(TitleFormat {
            pattern: pattern.to_string(),
            pieces,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Token(token) => out.push_str(&render(*token, date)),
            }
        }
        out
    }
}

fn render(token: Token, date: NaiveDate) -> String {
    match token {
        Token::Year4 => format!("{:04}", date.year()),
        Token::Year2 => format!("{:02}", date.year().rem_euclid(100)),
        Token::MonthName => month_name(date.month()).to_string(),
        Token::MonthShort => month_name(date.month())[..3].to_string(),
        Token::Month2 => format!("{:02}", date.month()),
        Token::Month => date.month().to_string(),
        Token::Day2 => format!("{:02}", date.day()),
        Token::Day => date.day().to_string(),
        Token::DayOrdinal => ordinal(date.day()),
        Token::WeekdayName => weekday_name(date.weekday()).to_string(),
        Token::WeekdayShort => weekday_name(date.weekday())[..3].to_string(),
        Token::WeekdayMin => weekday_name(date.weekday())[..2].to_string(),
        Token::WeekdayNumber => date.weekday().num_days_from_sunday().to_string(),
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fmt(pattern: &str, date: NaiveDate) -> String {
        TitleFormat::parse(pattern).unwrap().format(date)
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(TitleFormat::default().format(d(2024, 3, 15)), "March 2024");
        assert_eq!(TitleFormat::default().pattern(), "MMMM YYYY");
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(fmt("YYYY-MM-DD", d(2024, 3, 5)), "2024-03-05");
        assert_eq!(fmt("M/D/YY", d(2009, 11, 7)), "11/7/09");
    }

    #[test]
    fn test_name_tokens() {
        // 2024-03-15 is a Friday.
        assert_eq!(fmt("dddd, MMM Do", d(2024, 3, 15)), "Friday, Mar 15th");
        assert_eq!(fmt("ddd dd d", d(2024, 3, 15)), "Fri Fr 5");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(31), "31st");
    }

    #[test]
    fn test_bracket_escape_is_literal() {
        assert_eq!(fmt("[Month:] MMMM", d(2024, 1, 1)), "Month: January");
        assert_eq!(fmt("[YYYY]YYYY", d(2024, 1, 1)), "YYYY2024");
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(fmt("Y · MMMM", d(2024, 6, 1)), "Y · June");
    }

    #[test]
    fn test_unterminated_escape_is_config_error() {
        let err = TitleFormat::parse("MMMM [YYYY").unwrap_err();
        assert!(matches!(err, ConfigError::TitleFormat { .. }));
    }
}
