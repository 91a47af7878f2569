use crate::FormData;

/// Trait for records that can be bound from a form submission.
pub trait Form: Sized {
    /// Binds a record from submitted form data.
    ///
    /// Binding is infallible. Fields that are absent or do not coerce to
    /// their declared type take their default value, and it is left to
    /// validation to reject the result.
    fn from_form(data: &FormData) -> Self;
}
