use crate::utils::error::{PatentError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, positive US patent number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatentNumber(u64);

impl PatentNumber {
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(PatentError::MalformedInput {
                input: value.to_string(),
                reason: "patent number must be positive".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Parses user input such as `9675757`, `9,675,757` or `US 9,675,757`.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = |reason: &str| PatentError::MalformedInput {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        let without_prefix = trimmed
            .strip_prefix("US")
            .or_else(|| trimmed.strip_prefix("us"))
            .unwrap_or(trimmed)
            .trim_start();

        if without_prefix.is_empty() {
            return Err(malformed("patent number is empty"));
        }
        if without_prefix.starts_with('-') {
            return Err(malformed("patent number cannot be negative"));
        }

        if !without_prefix.chars().all(|c| c.is_ascii_digit() || c == ',') {
            return Err(malformed("patent number must contain only digits"));
        }
        if !has_valid_grouping(without_prefix) {
            return Err(malformed("commas must separate groups of three digits"));
        }

        let digits: String = without_prefix.chars().filter(|c| *c != ',').collect();

        let value: u64 = digits
            .parse()
            .map_err(|_| malformed("patent number is too large"))?;
        if value == 0 {
            return Err(malformed("patent number must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// 逗號可省略；若出現則必須是 1-3 位數開頭，其後每組剛好 3 位
fn has_valid_grouping(digits: &str) -> bool {
    if !digits.contains(',') {
        return true;
    }
    let mut groups = digits.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|first| (1..=3).contains(&first.len()));
    leading_ok && groups.all(|group| group.len() == 3)
}

/// 以千分位逗號顯示，例如 9,675,757
impl fmt::Display for PatentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        f.write_str(&grouped)
    }
}

/// Patent metadata as returned by a record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentRecord {
    pub number: PatentNumber,
    pub title: String,
    pub filing_date: NaiveDate,
    pub issue_date: NaiveDate,
    /// Zero when the registry carries no adjustment data (pre-1999 patents).
    pub term_adjustment_days: u32,
    /// Detected only. Never used to shorten the computed term.
    pub has_terminal_disclaimer: bool,
}

/// Which of the two pre-1995 candidate dates produced the expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreJune1995Winner {
    FilingPlusTwenty,
    IssuePlusSeventeen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum TermBasis {
    ShortcutExpired,
    #[serde(rename = "pre_june_1995")]
    PreJune1995 {
        expiration_date: NaiveDate,
        filing_date: NaiveDate,
        issue_date: NaiveDate,
        filing_plus_twenty: NaiveDate,
        issue_plus_seventeen: NaiveDate,
        winner: PreJune1995Winner,
    },
    #[serde(rename = "post_june_1995")]
    PostJune1995 {
        expiration_date: NaiveDate,
        issue_date: NaiveDate,
        term_adjustment_days: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermResult {
    pub patent_number: PatentNumber,
    pub patent_title: Option<String>,
    pub has_terminal_disclaimer: bool,
    #[serde(flatten)]
    pub basis: TermBasis,
}

impl TermResult {
    /// `None` for the shortcut path, which performs no date arithmetic.
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        match self.basis {
            TermBasis::ShortcutExpired => None,
            TermBasis::PreJune1995 {
                expiration_date, ..
            }
            | TermBasis::PostJune1995 {
                expiration_date, ..
            } => Some(expiration_date),
        }
    }
}
