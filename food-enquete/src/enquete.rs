use std::fmt;

use food_enquete_types::{Form, FormData};
use serde::{Deserialize, Serialize};

/// One answer to the food survey.
///
/// Numeric fields are optional: a submission may leave them out, and a value
/// that does not bind (negative, non-numeric) is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEnquete {
    /// Respondent's name. Required.
    pub name: String,

    /// Respondent's email address. Required and must look like an address.
    pub email: String,

    /// Respondent's age in years.
    pub age: Option<u32>,

    /// The food item the respondent ate.
    pub food_item_id: Option<u32>,

    /// Satisfaction rating.
    pub score: Option<u32>,

    /// Free-text comment. Optional.
    pub comment: String,

    /// The present the respondent wants to receive.
    pub present_option_id: Option<u32>,
}

/// The fields of a `FoodEnquete`, used as keys for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Age,
    FoodItemId,
    Score,
    Comment,
    PresentOptionId,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Age,
        Field::FoodItemId,
        Field::Score,
        Field::Comment,
        Field::PresentOptionId,
    ];

    /// The form field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::FoodItemId => "food_item_id",
            Self::Score => "score",
            Self::Comment => "comment",
            Self::PresentOptionId => "present_option_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn bind_u32(data: &FormData, field: Field) -> Option<u32> {
    data.int_opt(field.as_str()).and_then(|value| u32::try_from(value).ok())
}

impl Form for FoodEnquete {
    fn from_form(data: &FormData) -> Self {
        Self {
            name: data.text_or_default(Field::Name.as_str()),
            email: data.text_or_default(Field::Email.as_str()),
            age: bind_u32(data, Field::Age),
            food_item_id: bind_u32(data, Field::FoodItemId),
            score: bind_u32(data, Field::Score),
            comment: data.text_or_default(Field::Comment.as_str()),
            present_option_id: bind_u32(data, Field::PresentOptionId),
        }
    }
}
