use tracing::{debug, info};

use crate::{
    EnqueteRepository, FoodEnquete, RepositoryError, StoredEnquete, Validator, Violations,
};

/// The result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The answer passed validation and was stored.
    Accepted(StoredEnquete),

    /// The answer failed validation. Nothing was stored.
    Rejected(Violations),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The assigned id, if the answer was stored.
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Accepted(stored) => Some(stored.id),
            Self::Rejected(_) => None,
        }
    }

    /// The violations, if the answer was rejected.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(violations) => Some(violations),
        }
    }
}

/// Validate an answer and store it if it is valid.
///
/// Validation failures are reported as `Outcome::Rejected` and leave the
/// repository untouched. Only storage failures are returned as `Err`.
pub fn submit<R>(
    validator: &Validator,
    repository: &mut R,
    enquete: FoodEnquete,
) -> Result<Outcome, RepositoryError>
where
    R: EnqueteRepository + ?Sized,
{
    let violations = validator.validate(&enquete);
    if !violations.is_empty() {
        info!(%violations, "enquete rejected");
        return Ok(Outcome::Rejected(violations));
    }

    let id = repository.save(enquete.clone())?;
    debug!(id, "enquete stored");
    Ok(Outcome::Accepted(StoredEnquete { id, enquete }))
}
