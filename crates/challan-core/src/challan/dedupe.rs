//! Duplicate challan removal.

use std::collections::HashSet;

use tracing::warn;

use crate::models::challan::ChallanRecord;

/// Output of [`dedupe`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    /// First occurrence of each challan number, in input order.
    pub unique: Vec<ChallanRecord>,
    /// Records dropped because an earlier record had the same challan number.
    pub duplicates: Vec<ChallanRecord>,
}

/// Keep the first record for each challan number.
///
/// Records without a challan number count as one shared key.
pub fn dedupe(records: &[ChallanRecord]) -> Deduplicated {
    let mut seen: HashSet<Option<&str>> = HashSet::new();
    let mut result = Deduplicated::default();

    for record in records {
        if seen.insert(record.challan_no.as_deref()) {
            result.unique.push(record.clone());
        } else {
            warn!(
                "Duplicate challan {} in {}, dropping",
                record.challan_no.as_deref().unwrap_or("<none>"),
                record.file_name
            );
            result.duplicates.push(record.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::challan::sample_record;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let a = sample_record("a.pdf", "1");
        let b = sample_record("b.pdf", "2");
        let c = sample_record("c.pdf", "1");
        let input = vec![a.clone(), b.clone(), c.clone()];

        let result = dedupe(&input);

        assert_eq!(result.unique, vec![a, b]);
        assert_eq!(result.duplicates, vec![c]);
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_dedupe_missing_challan_numbers() {
        let mut a = sample_record("a.pdf", "");
        a.challan_no = None;
        let mut b = sample_record("b.pdf", "");
        b.challan_no = None;

        let result = dedupe(&[a.clone(), b]);
        assert_eq!(result.unique, vec![a]);
        assert_eq!(result.duplicates.len(), 1);
    }

    #[test]
    fn test_dedupe_empty() {
        assert_eq!(dedupe(&[]), Deduplicated::default());
    }
}
