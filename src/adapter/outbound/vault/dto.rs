//! Vault REST API data transfer objects.
//!
//! Every Vault response carries a `responseStatus` and, on failure, an
//! `errors` array. Record and quote field names are the Vault API names of
//! the loan approval object.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{QueryRecord, Quote, RecordId};

/// `responseStatus` value of a successful call.
pub const RESPONSE_SUCCESS: &str = "SUCCESS";

/// One entry of a Vault `errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

/// Status fields shared by every Vault response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(rename = "responseStatus", default)]
    pub response_status: String,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl Envelope {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response_status == RESPONSE_SUCCESS
    }

    /// First remote error message, or the bare status when Vault sent none.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.errors.first().map_or_else(
            || format!("response status {:?}", self.response_status),
            |e| format!("{}: {}", e.kind, e.message),
        )
    }
}

/// Access to the shared status fields of a response body.
pub trait Enveloped {
    fn envelope(&self) -> &Envelope;
}

/// Response of `POST /auth`.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
}

impl Enveloped for AuthResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// Response of `POST /query` and of next-page `GET`s.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "responseDetails", default)]
    pub response_details: ResponseDetails,
    #[serde(default)]
    pub data: Vec<LoanRecord>,
}

impl Enveloped for QueryResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// Paging details of a query response.
#[derive(Debug, Default, Deserialize)]
pub struct ResponseDetails {
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Picklist values arrive as arrays; plain strings are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PicklistValue {
    Many(Vec<String>),
    One(String),
}

impl PicklistValue {
    fn into_first(self) -> String {
        match self {
            Self::Many(values) => values.into_iter().next().unwrap_or_default(),
            Self::One(value) => value,
        }
    }
}

/// Numeric field that tolerates nulls and junk.
///
/// Numbers and numeric strings become a `Decimal`; anything else becomes
/// `None`, so one bad row cannot fail the page it arrives on.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        _ => return Ok(None),
    };
    Ok(Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok())
}

/// One loan approval row as returned by the query.
#[derive(Debug, Deserialize)]
pub struct LoanRecord {
    pub id: String,
    #[serde(rename = "name__v", default)]
    pub name: Option<String>,
    #[serde(rename = "surname__c", default)]
    pub surname: Option<String>,
    #[serde(rename = "item__c", default)]
    pub item: Option<String>,
    #[serde(rename = "loan_amount__c", default, deserialize_with = "lenient_decimal")]
    pub loan_amount: Option<Decimal>,
    #[serde(rename = "loan_period_months__c", default)]
    pub loan_period_months: Option<PicklistValue>,
    #[serde(
        rename = "number_of_quotes__c",
        default,
        deserialize_with = "lenient_decimal"
    )]
    pub number_of_quotes: Option<Decimal>,
}

impl From<LoanRecord> for QueryRecord {
    fn from(r: LoanRecord) -> Self {
        Self {
            id: RecordId::new(r.id),
            forename: r.name.unwrap_or_default(),
            surname: r.surname.unwrap_or_default(),
            item: r.item.unwrap_or_default(),
            loan_amount: r.loan_amount,
            loan_period: r
                .loan_period_months
                .map(PicklistValue::into_first)
                .unwrap_or_default(),
            prior_quote_count: r.number_of_quotes.and_then(|n| n.trunc().to_u32()),
        }
    }
}

/// One row of the bulk update body.
#[derive(Debug, Serialize)]
pub struct QuoteUpdate<'a> {
    pub id: &'a str,
    #[serde(rename = "quote_reference_number__c")]
    pub reference_number: &'a str,
    #[serde(rename = "quote_received_date__c")]
    pub received_date: String,
    #[serde(rename = "interest_rate_annually__c")]
    pub interest_rate: String,
    #[serde(rename = "monthly_payment__c")]
    pub monthly_payment: i64,
    #[serde(rename = "total_repayable__c")]
    pub total_repayable: i64,
    #[serde(rename = "approval_status__c")]
    pub approval_status: &'static str,
    #[serde(rename = "number_of_quotes__c")]
    pub number_of_quotes: u32,
}

impl<'a> From<&'a Quote> for QuoteUpdate<'a> {
    fn from(q: &'a Quote) -> Self {
        Self {
            id: q.id.as_str(),
            reference_number: &q.reference_number,
            received_date: q.received_date(),
            interest_rate: q.interest_rate_label(),
            monthly_payment: q.monthly_payment,
            total_repayable: q.total_repayable,
            approval_status: q.approval_status.as_picklist(),
            number_of_quotes: q.quote_count,
        }
    }
}

/// Response of the bulk object update.
#[derive(Debug, Deserialize)]
pub struct BulkUpdateResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Vec<RowResult>,
}

impl Enveloped for BulkUpdateResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// Per-record outcome inside a bulk update response.
#[derive(Debug, Deserialize)]
pub struct RowResult {
    #[serde(flatten)]
    pub envelope: Envelope,
}
