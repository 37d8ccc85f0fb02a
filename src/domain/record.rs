//! Loan approval records as fetched from Vault.

use rust_decimal::Decimal;

use super::error::DomainError;
use super::ids::RecordId;

/// Vault field name of the loan period picklist.
const LOAN_PERIOD_FIELD: &str = "loan_period_months__c";

/// Vault field name of the loan amount.
pub const LOAN_AMOUNT_FIELD: &str = "loan_amount__c";

/// Loan period in months.
///
/// Vault stores the period as a label such as `"36 months"`; only the first
/// two characters carry the number of months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPeriod {
    months: u32,
}

impl LoanPeriod {
    /// Parse the month count from the first two characters of a period label.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedRecord`] when the prefix is not a
    /// number or when it encodes zero months.
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        let prefix: String = label.chars().take(2).collect();
        let months: u32 = prefix
            .trim()
            .parse()
            .map_err(|_| DomainError::MalformedRecord {
                id: String::new(),
                field: LOAN_PERIOD_FIELD,
                reason: format!("has non-numeric prefix in {label:?}"),
            })?;
        if months == 0 {
            return Err(DomainError::MalformedRecord {
                id: String::new(),
                field: LOAN_PERIOD_FIELD,
                reason: format!("encodes zero months in {label:?}"),
            });
        }
        Ok(Self { months })
    }

    /// Create a period directly from a month count.
    #[must_use]
    pub const fn from_months(months: u32) -> Self {
        Self { months }
    }

    #[must_use]
    pub const fn months(self) -> u32 {
        self.months
    }

    /// Whole years in the period, truncated.
    #[must_use]
    pub const fn whole_years(self) -> u32 {
        self.months / 12
    }
}

/// One row of the loan approval query.
///
/// Immutable once fetched; quotes are derived from it, never written into it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRecord {
    pub id: RecordId,
    pub forename: String,
    pub surname: String,
    pub item: String,
    /// `None` when Vault sent a null or non-numeric amount.
    pub loan_amount: Option<Decimal>,
    /// Raw period label, parsed lazily so that a malformed value is reported
    /// by the quote generator with the record id attached.
    pub loan_period: String,
    pub prior_quote_count: Option<u32>,
}

impl QueryRecord {
    /// Parse this record's loan period.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedRecord`] tagged with this record's id.
    pub fn period(&self) -> Result<LoanPeriod, DomainError> {
        LoanPeriod::parse(&self.loan_period).map_err(|e| e.for_record(self.id.as_str()))
    }

    /// This record's loan amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedRecord`] when the amount is missing.
    pub fn amount(&self) -> Result<Decimal, DomainError> {
        self.loan_amount.ok_or_else(|| DomainError::MalformedRecord {
            id: self.id.to_string(),
            field: LOAN_AMOUNT_FIELD,
            reason: "is missing or not a number".to_string(),
        })
    }
}
