use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::{EnqueteConfig, Field, FoodEnquete, ViolationKind, Violations};

/// Age from which the all-you-can-drink present may be chosen.
const ADULT_AGE: u32 = 20;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\w+\-.]+@[a-z\d\-]+(\.[a-z\d\-]+)*\.[a-z]+$").unwrap()
});

/// Checks a `FoodEnquete` before it is stored.
///
/// Every check runs on every call, so a single pass reports all problems
/// with a submission.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: EnqueteConfig,
}

impl Validator {
    pub fn new(config: EnqueteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnqueteConfig {
        &self.config
    }

    /// Validate an answer. An empty result means it may be stored.
    pub fn validate(&self, enquete: &FoodEnquete) -> Violations {
        let mut violations = Violations::new();
        check_presence(enquete, &mut violations);
        check_email_format(enquete, &mut violations);
        self.check_present_for_minor(enquete, &mut violations);
        violations
    }

    pub fn is_valid(&self, enquete: &FoodEnquete) -> bool {
        self.validate(enquete).is_empty()
    }

    fn check_present_for_minor(&self, enquete: &FoodEnquete, violations: &mut Violations) {
        if enquete.present_option_id != Some(self.config.alcohol_present_id) {
            return;
        }
        // An unknown age is not a verified adult.
        if !enquete.age.is_some_and(is_adult) {
            trace!(age = ?enquete.age, "alcohol present selected by a minor");
            violations.add(Field::PresentOptionId, ViolationKind::CannotPresentToMinor);
        }
    }
}

fn check_presence(enquete: &FoodEnquete, violations: &mut Violations) {
    for (field, value) in [(Field::Name, &enquete.name), (Field::Email, &enquete.email)] {
        if is_blank(value) {
            trace!(%field, "required field is blank");
            violations.add(field, ViolationKind::Blank);
        }
    }
}

fn check_email_format(enquete: &FoodEnquete, violations: &mut Violations) {
    if is_blank(&enquete.email) {
        return;
    }
    if !is_email(&enquete.email) {
        trace!(email = %enquete.email, "email has an invalid format");
        violations.add(Field::Email, ViolationKind::Invalid);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub(crate) fn is_adult(age: u32) -> bool {
    age >= ADULT_AGE
}
