//! The loan approval VQL query.

use super::ids::RecordId;

/// Fields selected for every loan approval record.
pub const LOAN_FIELDS: [&str; 7] = [
    "id",
    "name__v",
    "surname__c",
    "item__c",
    "loan_amount__c",
    "loan_period_months__c",
    "number_of_quotes__c",
];

/// Query selecting a batch of loan approval records by id.
#[derive(Debug, Clone)]
pub struct LoanQuery<'a> {
    object: &'a str,
    ids: &'a [RecordId],
    page_limit: u32,
}

impl<'a> LoanQuery<'a> {
    #[must_use]
    pub const fn new(object: &'a str, ids: &'a [RecordId], page_limit: u32) -> Self {
        Self {
            object,
            ids,
            page_limit,
        }
    }

    /// Render the query as VQL using an `id CONTAINS (...)` membership predicate.
    #[must_use]
    pub fn to_vql(&self) -> String {
        let ids = self
            .ids
            .iter()
            .map(|id| format!("'{}'", escape_literal(id.as_str())))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "SELECT {} FROM {} WHERE id CONTAINS ({}) LIMIT {}",
            LOAN_FIELDS.join(", "),
            self.object,
            ids,
            self.page_limit
        )
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
