use std::sync::LazyLock;

use regex::Regex;

use super::field::{FieldKey, FieldKind};
use super::record::RecapRecord;

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("valid hardcoded regex"));

/// Returns `true` if `input` is an acceptable in-progress numeric string:
/// digits with at most one decimal point. The empty string is acceptable
/// (the field's unset state).
pub fn is_numeric_input(input: &str) -> bool {
    NUMERIC_RE.is_match(input)
}

/// Returns `true` if `key` must carry a value before this record can be
/// submitted.
///
/// Gated fields are required only while their gating flag is set.
pub fn is_required(key: FieldKey, record: &RecapRecord) -> bool {
    match key.gated_by() {
        Some(gate) => key.required() && record.flag(gate),
        None => key.required(),
    }
}

/// The single validation boundary run before submission.
///
/// Returns the required fields that are still unset, in wire order. Text-like
/// fields count as unset when empty, ratings when `0`, gated counters when
/// `0` while their flag is set.
pub fn missing_required(record: &RecapRecord) -> Vec<FieldKey> {
    FieldKey::all()
        .iter()
        .copied()
        .filter(|key| is_required(*key, record) && !is_satisfied(*key, record))
        .collect()
}

fn is_satisfied(key: FieldKey, record: &RecapRecord) -> bool {
    match key.kind() {
        FieldKind::Text | FieldKind::Numeric | FieldKind::Date => !record.text(key).is_empty(),
        FieldKind::Rating => record.rating(key) != 0,
        FieldKind::Count => record.count(key) != 0,
        FieldKind::Flag | FieldKind::MultiChoice => true,
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::field::FieldValue;

    fn fill_required(record: &mut RecapRecord) {
        for key in FieldKey::all() {
            if !is_required(*key, record) {
                continue;
            }
            match key.kind() {
                FieldKind::Numeric => record.set(*key, FieldValue::Numeric("1".into())),
                FieldKind::Text => record.set(*key, FieldValue::Text("x".into())),
                FieldKind::Rating => record.set_rating(*key, 3),
                FieldKind::Count => record.set(*key, FieldValue::Count(1)),
                _ => {}
            }
        }
    }

    // --- is_numeric_input ---

    #[test]
    fn numeric_accepts_integers_and_decimals() {
        assert!(is_numeric_input("0"));
        assert!(is_numeric_input("42"));
        assert!(is_numeric_input("42.5"));
        assert!(is_numeric_input(".5"));
        assert!(is_numeric_input("5."));
    }

    #[test]
    fn numeric_accepts_empty() {
        assert!(is_numeric_input(""));
    }

    #[test]
    fn numeric_rejects_letters_and_signs() {
        assert!(!is_numeric_input("4a"));
        assert!(!is_numeric_input("-4"));
        assert!(!is_numeric_input("4 "));
    }

    #[test]
    fn numeric_rejects_second_decimal_point() {
        assert!(!is_numeric_input("1.2.3"));
        assert!(!is_numeric_input(".."));
    }

    #[quickcheck]
    fn numeric_accepts_any_digit_string(digits: Vec<u8>) -> bool {
        let s: String = digits.iter().map(|d| char::from(b'0' + (d % 10))).collect();
        is_numeric_input(&s)
    }

    // --- is_required / missing_required ---

    #[test]
    fn fresh_record_misses_the_unconditional_requireds() {
        let record = RecapRecord::new();
        let missing = missing_required(&record);
        assert!(missing.contains(&FieldKey::DistanceCovered));
        assert!(missing.contains(&FieldKey::TeamHealthScore));
        // Gated counters stay dormant while their flag is unset.
        assert!(!missing.contains(&FieldKey::NumberOfBreakdowns));
        assert!(!missing.contains(&FieldKey::EquipmentBreakdownCount));
        // Optional fields never block.
        assert!(!missing.contains(&FieldKey::Country));
        assert!(!missing.contains(&FieldKey::Date));
        assert!(!missing.contains(&FieldKey::RoadQuality));
    }

    #[test]
    fn missing_is_in_wire_order() {
        let record = RecapRecord::new();
        let missing = missing_required(&record);
        let mut sorted = missing.clone();
        sorted.sort();
        assert_eq!(missing, sorted);
    }

    #[test]
    fn filled_record_passes() {
        let mut record = RecapRecord::new();
        fill_required(&mut record);
        assert!(missing_required(&record).is_empty());
    }

    #[test]
    fn breakdown_flag_requires_its_counter() {
        let mut record = RecapRecord::new();
        fill_required(&mut record);
        record.set_flag(FieldKey::BreakdownsEncountered, true);
        assert_eq!(missing_required(&record), vec![FieldKey::NumberOfBreakdowns]);

        record.push_digit(FieldKey::NumberOfBreakdowns, 2);
        assert!(missing_required(&record).is_empty());
    }

    #[test]
    fn equipment_flag_requires_its_counter() {
        let mut record = RecapRecord::new();
        fill_required(&mut record);
        record.set_flag(FieldKey::EquipmentBreakdowns, true);
        assert_eq!(
            missing_required(&record),
            vec![FieldKey::EquipmentBreakdownCount]
        );
    }

    #[test]
    fn injury_description_never_required() {
        let mut record = RecapRecord::new();
        fill_required(&mut record);
        record.set_flag(FieldKey::InjuriesAccidents, true);
        assert!(missing_required(&record).is_empty());
    }

    #[test]
    fn unset_rating_blocks_submission() {
        let mut record = RecapRecord::new();
        fill_required(&mut record);
        record.set(FieldKey::TeamHealthScore, FieldValue::Rating(0));
        assert_eq!(missing_required(&record), vec![FieldKey::TeamHealthScore]);
    }
}
