use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use vault_quote_sync::domain::{PageResult, PageToken, ProcessedStatus, QueryRecord, RecordId};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 14, 5, 9).unwrap()
}

pub fn record(id: &str, amount: i64, period: &str) -> QueryRecord {
    QueryRecord {
        id: RecordId::new(id),
        forename: "Sinead".to_string(),
        surname: "O'Neill".to_string(),
        item: "Tractor".to_string(),
        loan_amount: Some(Decimal::from(amount)),
        loan_period: period.to_string(),
        prior_quote_count: None,
    }
}

pub fn page(records: Vec<QueryRecord>, next: Option<&str>, status: ProcessedStatus) -> PageResult {
    PageResult {
        records,
        next_page: next.map(PageToken::new),
        status,
        burst_remaining: Some(1999),
    }
}

/// A healthy page with one record and an optional next-page cursor.
pub fn healthy_page(id: &str, next: Option<&str>) -> PageResult {
    page(
        vec![record(id, 120_000, "12 months")],
        next,
        ProcessedStatus::Success,
    )
}
