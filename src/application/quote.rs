//! Loan quote generation.
//!
//! Pure and deterministic: the only time input is the `now` argument, which
//! stamps every quote of a batch identically.
//!
//! The repayment arithmetic is deliberately lossy. Each whole year the running
//! total is floor-divided by 100 before being multiplied by `100 + rate`, one
//! year at a time. The compounded total is then only used to derive the
//! monthly payment, and the total repayable is recomputed from that payment.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::error::DomainError;
use crate::domain::{
    ApprovalStatus, Quote, QueryRecord, QuoteEvent, APPROVAL_LIMIT, LOAN_AMOUNT_FIELD,
};

/// Generate one quote per record, in input order.
///
/// An empty slice yields an empty vector.
///
/// # Errors
///
/// Returns [`DomainError::MalformedRecord`] for the first record whose loan
/// period cannot be parsed, whose amount is missing, or whose amount overflows
/// the repayment arithmetic.
/// No partial batch is returned.
pub fn generate(
    records: &[QueryRecord],
    event: &QuoteEvent,
    now: DateTime<Utc>,
) -> Result<Vec<Quote>, DomainError> {
    let rate = event.annual_rate_percent();
    records
        .iter()
        .map(|record| quote_for(record, rate, now))
        .collect()
}

fn quote_for(record: &QueryRecord, rate: u32, now: DateTime<Utc>) -> Result<Quote, DomainError> {
    let period = record.period()?;
    let amount = record.amount()?;
    let overflow = || DomainError::MalformedRecord {
        id: record.id.to_string(),
        field: LOAN_AMOUNT_FIELD,
        reason: format!("{amount} overflows the repayment calculation"),
    };

    let hundred = Decimal::ONE_HUNDRED;
    let multiplier = Decimal::from(100 + rate);
    let mut total = amount;
    for _ in 0..period.whole_years() {
        total = (total / hundred)
            .floor()
            .checked_mul(multiplier)
            .ok_or_else(overflow)?;
    }

    let months = Decimal::from(period.months());
    let monthly_payment = (total / months)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or_else(overflow)?;
    let total_repayable = monthly_payment
        .checked_mul(i64::from(period.months()))
        .ok_or_else(overflow)?;

    let approval_status = if amount > Decimal::from(APPROVAL_LIMIT) {
        ApprovalStatus::Rejected
    } else {
        ApprovalStatus::Approved
    };

    Ok(Quote {
        id: record.id.clone(),
        reference_number: reference_number(record, now),
        received_at: now,
        annual_rate_percent: rate,
        monthly_payment,
        total_repayable,
        approval_status,
        quote_count: record.prior_quote_count.map_or(0, |n| n.saturating_add(1)),
    })
}

/// `<initial>-<surname><item prefix><yyyymmddhhmmss>`, uppercased, without apostrophes.
fn reference_number(record: &QueryRecord, now: DateTime<Utc>) -> String {
    let initial: String = record.forename.chars().take(1).collect();
    let item: String = record.item.chars().take(3).collect();
    format!(
        "{initial}-{}{item}{}",
        record.surname,
        now.format("%Y%m%d%H%M%S")
    )
    .to_uppercase()
    .replace('\'', "")
}
