use crate::core::dates::format_long;
use crate::domain::model::{PatentNumber, TermBasis, TermResult};

pub fn explain_result(result: &TermResult) -> String {
    let title = result.patent_title.as_deref().unwrap_or_default();

    match &result.basis {
        TermBasis::ShortcutExpired => shortcut_message(result.patent_number),
        TermBasis::PreJune1995 {
            expiration_date,
            filing_date,
            issue_date,
            filing_plus_twenty,
            issue_plus_seventeen,
            ..
        } => format!(
            "You asked me to calculate the expiration date for patent number {}, \
             with patent title, \"{}\". The patent expires on {}. \
             Filing was on {}. Twenty years after was {}. \
             The patent was issued on {}. Seventeen years later was {}. \
             Patent term expires the later of those dates. \
             Patent term adjustment does not apply to patents filed before 1999.",
            result.patent_number,
            title,
            format_long(*expiration_date),
            format_long(*filing_date),
            format_long(*filing_plus_twenty),
            format_long(*issue_date),
            format_long(*issue_plus_seventeen),
        ),
        TermBasis::PostJune1995 {
            expiration_date,
            issue_date,
            term_adjustment_days,
        } => format!(
            "You asked me to calculate the expiration date for patent number {}, \
             with patent title, \"{}\". The patent expires on {}. \
             The patent was granted on {}, and would ordinarily last for 20 years. \
             There were {} days of patent term adjustment applied.",
            result.patent_number,
            title,
            format_long(*expiration_date),
            format_long(*issue_date),
            term_adjustment_days,
        ),
    }
}

pub fn shortcut_message(number: PatentNumber) -> String {
    format!(
        "You asked me to calculate the expiration for patent number {}, \
         which is a ridiculously low number. That patent is totally expired. \
         I didn't even have to query the USPTO.",
        number
    )
}

pub fn not_found_message(number: PatentNumber) -> String {
    format!(
        "Sorry, patent number {} cannot be found in PAIR.",
        number
    )
}

pub fn malformed_message(input: &str, reason: &str) -> String {
    format!(
        "Sorry, \"{}\" is not a patent number I can look up ({}).",
        input.trim(),
        reason
    )
}
