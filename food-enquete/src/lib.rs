//! # food-enquete
//!
//! Answers to a restaurant's food survey: who answered, what they ate, how
//! satisfied they were, and which present they would like in return.
//!
//! ## Usage
//!
//! ```rust
//! use food_enquete::{Form, FormData, FoodEnquete, InMemoryRepository, Validator, submit};
//!
//! let data = FormData::from_pairs([
//!     ("name", "Taro Tanaka"),
//!     ("email", "taro.tanaka@example.com"),
//!     ("age", "25"),
//!     ("present_option_id", "1"),
//! ]);
//! let enquete = FoodEnquete::from_form(&data);
//!
//! let mut repository = InMemoryRepository::new();
//! let outcome = submit(&Validator::default(), &mut repository, enquete)?;
//! assert_eq!(outcome.id(), Some(1));
//! # Ok::<(), food_enquete::RepositoryError>(())
//! ```
//!
//! ## Rules
//!
//! - `name` and `email` are required, and blank text counts as missing.
//! - `email` must look like `local@domain.tld`.
//! - The all-you-can-drink present (id 3 by default, see `EnqueteConfig`)
//!   may only be chosen by respondents aged 20 or over.
//! - `comment` is optional. The same email address may answer any number
//!   of times.

// Re-export the form-binding types
pub use food_enquete_types::*;

mod enquete;
pub use enquete::{Field, FoodEnquete};

mod violation;
pub use violation::{ErrorCategory, ViolationKind, Violations};

mod catalog;
pub use catalog::{BuiltinCatalog, Locale, MessageCatalog};

pub mod menu;
pub use menu::{FoodItem, PresentOption};

mod config;
pub use config::{ConfigError, EnqueteConfig};

mod validation;
pub use validation::Validator;

mod repository;
pub use repository::{EnqueteRepository, InMemoryRepository, RepositoryError, StoredEnquete};

mod submission;
pub use submission::{Outcome, submit};
