use serde::ser::{Serialize, SerializeMap, Serializer};

use super::field::{FieldKey, FieldKind, FieldValue};
use super::fix::Fix;

/// The complete set of answers for one daily recap submission.
///
/// Every declared field is present from construction with its kind's default;
/// no field is ever null/absent. The record is created once per form session,
/// mutated in place, and not persisted — a fresh session starts empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RecapRecord {
    // One slot per FieldKey, indexed by declaration order.
    values: Vec<FieldValue>,
}

impl Default for RecapRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl RecapRecord {
    /// Creates a record with every field at its declared default.
    pub fn new() -> Self {
        Self {
            values: FieldKey::all()
                .iter()
                .map(|k| k.kind().default_value())
                .collect(),
        }
    }

    /// Returns the value of a field.
    pub fn get(&self, key: FieldKey) -> &FieldValue {
        &self.values[key as usize]
    }

    /// Replaces the value of a field.
    ///
    /// Storing a value of the wrong kind is a programming error, not a
    /// runtime case.
    pub fn set(&mut self, key: FieldKey, value: FieldValue) {
        debug_assert_eq!(value.kind(), key.kind(), "kind mismatch for {key:?}");
        self.values[key as usize] = value;
    }

    /// Returns a full copy of the record, for submission.
    pub fn snapshot(&self) -> RecapRecord {
        self.clone()
    }

    /// Projects a resolved location fix into the latitude/longitude fields
    /// as strings with exactly six digits after the decimal point.
    pub fn apply_fix(&mut self, fix: &Fix) {
        self.set(
            FieldKey::Latitude,
            FieldValue::Numeric(format!("{:.6}", fix.latitude)),
        );
        self.set(
            FieldKey::Longitude,
            FieldValue::Numeric(format!("{:.6}", fix.longitude)),
        );
    }

    /// Returns the string content of a text-like field (`Text`, `Numeric`,
    /// `Date`), or `""` for other kinds.
    pub fn text(&self, key: FieldKey) -> &str {
        match self.get(key) {
            FieldValue::Text(s) | FieldValue::Numeric(s) | FieldValue::Date(s) => s,
            _ => "",
        }
    }

    /// Returns a flag field's value, or `false` for other kinds.
    pub fn flag(&self, key: FieldKey) -> bool {
        matches!(self.get(key), FieldValue::Flag(true))
    }

    /// Returns a rating field's value (`0` = unset), or `0` for other kinds.
    pub fn rating(&self, key: FieldKey) -> u8 {
        match self.get(key) {
            FieldValue::Rating(r) => *r,
            _ => 0,
        }
    }

    /// Returns a counter field's value, or `0` for other kinds.
    pub fn count(&self, key: FieldKey) -> u32 {
        match self.get(key) {
            FieldValue::Count(n) => *n,
            _ => 0,
        }
    }

    /// Returns the selected options of a multi-choice field.
    pub fn choices(&self, key: FieldKey) -> &[String] {
        match self.get(key) {
            FieldValue::Choices(c) => c,
            _ => &[],
        }
    }

    /// Appends a character to a text-like field.
    pub fn push_char(&mut self, key: FieldKey, ch: char) {
        debug_assert!(matches!(
            key.kind(),
            FieldKind::Text | FieldKind::Numeric | FieldKind::Date
        ));
        if let FieldValue::Text(s) | FieldValue::Numeric(s) | FieldValue::Date(s) =
            &mut self.values[key as usize]
        {
            s.push(ch);
        }
    }

    /// Removes the last character of a text-like field.
    pub fn pop_char(&mut self, key: FieldKey) {
        if let FieldValue::Text(s) | FieldValue::Numeric(s) | FieldValue::Date(s) =
            &mut self.values[key as usize]
        {
            s.pop();
        }
    }

    /// Sets a flag field.
    pub fn set_flag(&mut self, key: FieldKey, value: bool) {
        debug_assert_eq!(key.kind(), FieldKind::Flag);
        self.set(key, FieldValue::Flag(value));
    }

    /// Toggles a flag field, returning the new value.
    pub fn toggle_flag(&mut self, key: FieldKey) -> bool {
        let value = !self.flag(key);
        self.set_flag(key, value);
        value
    }

    /// Sets a rating field to a value in `1..=5`.
    pub fn set_rating(&mut self, key: FieldKey, rating: u8) {
        debug_assert_eq!(key.kind(), FieldKind::Rating);
        debug_assert!((1..=5).contains(&rating));
        self.set(key, FieldValue::Rating(rating));
    }

    /// Appends a decimal digit to a counter field.
    pub fn push_digit(&mut self, key: FieldKey, digit: u32) {
        debug_assert_eq!(key.kind(), FieldKind::Count);
        debug_assert!(digit < 10);
        let value = self.count(key).saturating_mul(10).saturating_add(digit);
        self.set(key, FieldValue::Count(value));
    }

    /// Removes the last decimal digit of a counter field.
    pub fn pop_digit(&mut self, key: FieldKey) {
        let value = self.count(key) / 10;
        self.set(key, FieldValue::Count(value));
    }

    /// Toggles an option's membership in a multi-choice field.
    pub fn toggle_choice(&mut self, key: FieldKey, choice: &str) {
        debug_assert_eq!(key.kind(), FieldKind::MultiChoice);
        if let FieldValue::Choices(selected) = &mut self.values[key as usize] {
            match selected.iter().position(|c| c == choice) {
                Some(i) => {
                    selected.remove(i);
                }
                None => selected.push(choice.to_string()),
            }
        }
    }
}

impl Serialize for RecapRecord {
    /// Serializes the record as a single flat JSON object, fields in wire
    /// order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for key in FieldKey::all() {
            map.serialize_entry(key.name(), self.get(*key))?;
        }
        map.end()
    }
}
