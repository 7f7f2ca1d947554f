//! Regime selection and term arithmetic.
//!
//! Three mutually exclusive paths:
//! - numbers below 5,000,000 are expired outright, no lookup needed;
//! - filed on or before June 8, 1995: the later of filing + 20 years and
//!   issue + 17 years;
//! - filed after June 8, 1995: issue + 20 years + term adjustment days.

use crate::core::dates::{add_days, add_years};
use crate::domain::model::{PatentNumber, PatentRecord, PreJune1995Winner, TermBasis, TermResult};
use crate::utils::error::Result;
use chrono::NaiveDate;

pub const SHORTCUT_CEILING: u64 = 5_000_000;

/// Effective date of the switch to filing-based terms with adjustment.
pub const JUNE_8_1995: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 8) {
    Some(date) => date,
    None => panic!("invalid threshold date"),
};

const PRE_1995_FILING_TERM_YEARS: u32 = 20;
const PRE_1995_ISSUE_TERM_YEARS: u32 = 17;
const POST_1995_TERM_YEARS: u32 = 20;

pub fn is_shortcut_expired(number: PatentNumber) -> bool {
    number.get() < SHORTCUT_CEILING
}

/// Inclusive: a filing dated exactly June 8, 1995 stays on the pre-1995 path.
pub fn filed_on_or_before_threshold(filing_date: NaiveDate) -> bool {
    filing_date <= JUNE_8_1995
}

pub fn shortcut_expired(number: PatentNumber) -> TermResult {
    TermResult {
        patent_number: number,
        patent_title: None,
        has_terminal_disclaimer: false,
        basis: TermBasis::ShortcutExpired,
    }
}

pub fn calculate(record: &PatentRecord) -> Result<TermResult> {
    if filed_on_or_before_threshold(record.filing_date) {
        pre_june_1995(record)
    } else {
        post_june_1995(record)
    }
}

/// Term adjustment did not exist yet, so any adjustment on the record is ignored.
pub fn pre_june_1995(record: &PatentRecord) -> Result<TermResult> {
    let filing_plus_twenty = add_years(record.filing_date, PRE_1995_FILING_TERM_YEARS)?;
    let issue_plus_seventeen = add_years(record.issue_date, PRE_1995_ISSUE_TERM_YEARS)?;

    // 相同日期時採用 filing + 20
    let (expiration, winner) = if issue_plus_seventeen > filing_plus_twenty {
        (issue_plus_seventeen, PreJune1995Winner::IssuePlusSeventeen)
    } else {
        (filing_plus_twenty, PreJune1995Winner::FilingPlusTwenty)
    };

    Ok(TermResult {
        patent_number: record.number,
        patent_title: Some(record.title.clone()),
        has_terminal_disclaimer: record.has_terminal_disclaimer,
        basis: TermBasis::PreJune1995 {
            expiration_date: expiration,
            filing_date: record.filing_date,
            issue_date: record.issue_date,
            filing_plus_twenty,
            issue_plus_seventeen,
            winner,
        },
    })
}

pub fn post_june_1995(record: &PatentRecord) -> Result<TermResult> {
    // years first, then days
    let nominal = add_years(record.issue_date, POST_1995_TERM_YEARS)?;
    let expiration = add_days(nominal, record.term_adjustment_days)?;

    Ok(TermResult {
        patent_number: record.number,
        patent_title: Some(record.title.clone()),
        has_terminal_disclaimer: record.has_terminal_disclaimer,
        basis: TermBasis::PostJune1995 {
            expiration_date: expiration,
            issue_date: record.issue_date,
            term_adjustment_days: record.term_adjustment_days,
        },
    })
}
