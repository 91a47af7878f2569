use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::{Field, MessageCatalog};

/// The kind of a single validation failure.
///
/// Kinds are symbolic; display text comes from a `MessageCatalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is empty or whitespace.
    Blank,

    /// A field does not have the expected shape.
    Invalid,

    /// The all-you-can-drink present was selected by a minor.
    CannotPresentToMinor,
}

impl ViolationKind {
    /// The catalog key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Invalid => "invalid",
            Self::CannotPresentToMinor => "cannot_present_to_minor",
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            Self::Blank => ErrorCategory::MissingRequiredField,
            Self::Invalid => ErrorCategory::InvalidFormat,
            Self::CannotPresentToMinor => ErrorCategory::BusinessRuleViolation,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Broad classes of validation failure. All of them are recoverable by
/// resubmitting corrected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    MissingRequiredField,
    InvalidFormat,
    BusinessRuleViolation,
}

/// Field-level validation failures of one submission.
///
/// An empty set means the submission is valid. Fields iterate in
/// declaration order; kinds keep the order in which they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations {
    by_field: BTreeMap<Field, Vec<ViolationKind>>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation on a field.
    pub fn add(&mut self, field: Field, kind: ViolationKind) {
        self.by_field.entry(field).or_default().push(kind);
    }

    /// Check if no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Number of violating fields.
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// The violations recorded on a field, empty if it passed.
    pub fn get(&self, field: Field) -> &[ViolationKind] {
        self.by_field.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Check if a specific violation was recorded on a field.
    pub fn contains(&self, field: Field, kind: ViolationKind) -> bool {
        self.get(field).contains(&kind)
    }

    /// The fields that have at least one violation.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.by_field.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[ViolationKind])> {
        self.by_field.iter().map(|(f, kinds)| (*f, kinds.as_slice()))
    }

    /// Resolve every violation to display text.
    ///
    /// The result maps field names to their messages, in the same order as
    /// the violations.
    pub fn messages(&self, catalog: &dyn MessageCatalog) -> BTreeMap<String, Vec<String>> {
        self.iter()
            .map(|(field, kinds)| {
                let messages = kinds
                    .iter()
                    .map(|kind| catalog.resolve(*kind, field))
                    .collect();
                (field.to_string(), messages)
            })
            .collect()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, kinds) in self.iter() {
            for kind in kinds {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{field}: {kind}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BuiltinCatalog, Locale};

    #[test]
    fn empty_is_valid() {
        let violations = Violations::new();
        assert!(violations.is_empty());
        assert!(violations.get(Field::Name).is_empty());
    }

    #[test]
    fn kinds_keep_insertion_order() {
        let mut violations = Violations::new();
        violations.add(Field::Email, ViolationKind::Blank);
        violations.add(Field::Email, ViolationKind::Invalid);
        violations.add(Field::Name, ViolationKind::Blank);

        assert_eq!(
            violations.get(Field::Email),
            &[ViolationKind::Blank, ViolationKind::Invalid]
        );
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations.fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Email]
        );
    }

    #[test]
    fn categories() {
        assert_eq!(
            ViolationKind::Blank.category(),
            ErrorCategory::MissingRequiredField
        );
        assert_eq!(ViolationKind::Invalid.category(), ErrorCategory::InvalidFormat);
        assert_eq!(
            ViolationKind::CannotPresentToMinor.category(),
            ErrorCategory::BusinessRuleViolation
        );
    }

    #[test]
    fn messages_are_keyed_by_field_name() {
        let mut violations = Violations::new();
        violations.add(Field::Name, ViolationKind::Blank);
        violations.add(Field::PresentOptionId, ViolationKind::CannotPresentToMinor);

        let messages = violations.messages(&BuiltinCatalog::new(Locale::En));

        assert_eq!(messages.len(), 2);
        assert_eq!(messages["name"], vec!["Name can't be blank".to_string()]);
        assert_eq!(
            messages["present_option_id"],
            vec!["Present cannot be given to a minor".to_string()]
        );
    }

    #[test]
    fn display_lists_every_violation() {
        let mut violations = Violations::new();
        violations.add(Field::Email, ViolationKind::Blank);
        violations.add(Field::Name, ViolationKind::Blank);

        assert_eq!(violations.to_string(), "name: blank, email: blank");
    }
}
