//! Tax breakup table rules.

use crate::error::ExtractionError;

use super::amounts::{AmountPolicy, parse_amount_with};

/// Where a breakup row's amount goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Tax,
    Interest,
    Other,
}

/// Breakup row labels, tested as line prefixes in this order.
pub const BREAKUP_RULES: [(&str, Component); 6] = [
    ("A Tax", Component::Tax),
    ("D Interest", Component::Interest),
    ("B Surcharge", Component::Other),
    ("C Cess", Component::Other),
    ("E Penalty", Component::Other),
    ("F Fee under section 234E", Component::Other),
];

/// Match a trimmed line against [`BREAKUP_RULES`], returning the component and
/// the text after the label.
pub fn classify(line: &str) -> Option<(Component, &str)> {
    BREAKUP_RULES.iter().find_map(|(label, component)| {
        line.strip_prefix(label)
            .map(|remainder| (*component, remainder))
    })
}

/// Amounts collected from the breakup table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakup {
    pub tax: u64,
    pub interest: u64,
    pub other: u64,
}

impl Breakup {
    /// Collect amounts from breakup lines; unlabelled lines are ignored.
    ///
    /// Tax and interest take the value of their (last) row; the other rows
    /// add up.
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        policy: AmountPolicy,
    ) -> Result<Self, ExtractionError> {
        let mut breakup = Self::default();

        for line in lines {
            let line = line.as_ref().trim();
            let Some((component, remainder)) = classify(line) else {
                continue;
            };

            let amount = parse_amount_with(remainder, policy)?;
            match component {
                Component::Tax => breakup.tax = amount,
                Component::Interest => breakup.interest = amount,
                Component::Other => {
                    breakup.other = breakup.other.checked_add(amount).ok_or_else(|| {
                        ExtractionError::MalformedAmount {
                            value: line.to_string(),
                        }
                    })?;
                }
            }
        }

        Ok(breakup)
    }

    /// Check the components against the stated total.
    pub fn reconcile(&self, total: u64) -> Result<(), ExtractionError> {
        let sum = u128::from(self.tax) + u128::from(self.interest) + u128::from(self.other);
        if sum == u128::from(total) {
            Ok(())
        } else {
            Err(ExtractionError::ReconciliationMismatch {
                total,
                tax: self.tax,
                interest: self.interest,
                other: self.other,
            })
        }
    }
}
