//! Challan record extraction and reconciliation.

use std::collections::HashMap;

use tracing::debug;

use crate::models::challan::ChallanRecord;

use super::rules::{AmountPolicy, Breakup, SectionMap, parse_amount_with};
use super::{ChallanTables, Result};

pub const KEY_CHALLAN_NO: &str = "Challan No";
pub const KEY_BSR_CODE: &str = "BSR code";
pub const KEY_TENDER_DATE: &str = "Tender Date";
pub const KEY_NATURE_OF_PAYMENT: &str = "Nature of Payment";
pub const KEY_FINANCIAL_YEAR: &str = "Financial Year";
pub const KEY_AMOUNT: &str = "Amount (in Rs.)";
pub const KEY_NAME: &str = "Name";

/// Builds [`ChallanRecord`]s from the two tables of a challan receipt.
#[derive(Debug, Clone, Default)]
pub struct ChallanParser {
    sections: SectionMap,
    amount_policy: AmountPolicy,
}

impl ChallanParser {
    /// Create a parser with the built-in section codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section map.
    pub fn with_sections(mut self, sections: SectionMap) -> Self {
        self.sections = sections;
        self
    }

    /// Set the amount parsing policy.
    pub fn with_amount_policy(mut self, policy: AmountPolicy) -> Self {
        self.amount_policy = policy;
        self
    }

    /// Extract and reconcile one record.
    ///
    /// A missing `Amount (in Rs.)` key fails as a malformed amount; other
    /// missing keys leave the field empty.
    pub fn extract(&self, file_name: &str, tables: &ChallanTables) -> Result<ChallanRecord> {
        let fields = key_values(&tables.key_values);
        let field = |key: &str| fields.get(key).map(|v| v.to_string());

        let total_amount = parse_amount_with(
            fields.get(KEY_AMOUNT).copied().unwrap_or_default(),
            self.amount_policy,
        )?;

        let breakup = Breakup::from_lines(&tables.breakup, self.amount_policy)?;
        breakup.reconcile(total_amount)?;

        let section_raw = field(KEY_NATURE_OF_PAYMENT).unwrap_or_default();
        let section = self.sections.resolve(&section_raw);

        debug!(
            "{}: section {} total {} (tax {}, interest {}, other {})",
            file_name, section_raw, total_amount, breakup.tax, breakup.interest, breakup.other
        );

        Ok(ChallanRecord {
            file_name: file_name.to_string(),
            tender_date: field(KEY_TENDER_DATE),
            challan_no: field(KEY_CHALLAN_NO),
            bsr_code: field(KEY_BSR_CODE),
            section_raw,
            section,
            financial_year: field(KEY_FINANCIAL_YEAR),
            firm_name: field(KEY_NAME),
            total_amount,
            tax_amount: breakup.tax,
            interest_amount: breakup.interest,
            other_amount: breakup.other,
        })
    }
}

/// Split `Key: Value` lines on the first colon. Later keys overwrite earlier
/// ones; lines without a colon are skipped.
pub fn key_values<S: AsRef<str>>(lines: &[S]) -> HashMap<&str, &str> {
    lines
        .iter()
        .filter_map(|line| line.as_ref().split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}
