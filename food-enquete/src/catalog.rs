use serde::Deserialize;

use crate::{Field, ViolationKind};

/// Resolves a violation to the text shown to the respondent.
///
/// The validator only deals in `ViolationKind`s. Callers supply a catalog to
/// turn them into display text, for example one backed by their own
/// translation files.
pub trait MessageCatalog {
    fn resolve(&self, kind: ViolationKind, field: Field) -> String;
}

/// Languages covered by `BuiltinCatalog`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Message catalog with English and Japanese text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinCatalog {
    locale: Locale,
}

impl BuiltinCatalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Human-readable name of a field.
    pub fn label(&self, field: Field) -> &'static str {
        match (self.locale, field) {
            (Locale::En, Field::Name) => "Name",
            (Locale::En, Field::Email) => "Email",
            (Locale::En, Field::Age) => "Age",
            (Locale::En, Field::FoodItemId) => "Food item",
            (Locale::En, Field::Score) => "Score",
            (Locale::En, Field::Comment) => "Comment",
            (Locale::En, Field::PresentOptionId) => "Present",
            (Locale::Ja, Field::Name) => "お名前",
            (Locale::Ja, Field::Email) => "メールアドレス",
            (Locale::Ja, Field::Age) => "年齢",
            (Locale::Ja, Field::FoodItemId) => "料理",
            (Locale::Ja, Field::Score) => "満足度",
            (Locale::Ja, Field::Comment) => "ご意見・ご要望",
            (Locale::Ja, Field::PresentOptionId) => "プレゼント",
        }
    }
}

impl MessageCatalog for BuiltinCatalog {
    fn resolve(&self, kind: ViolationKind, field: Field) -> String {
        let label = self.label(field);
        match (self.locale, kind) {
            (Locale::En, ViolationKind::Blank) => format!("{label} can't be blank"),
            (Locale::En, ViolationKind::Invalid) => format!("{label} is invalid"),
            (Locale::En, ViolationKind::CannotPresentToMinor) => {
                format!("{label} cannot be given to a minor")
            }
            (Locale::Ja, ViolationKind::Blank) => format!("{label}を入力してください"),
            (Locale::Ja, ViolationKind::Invalid) => format!("{label}は不正な値です"),
            (Locale::Ja, ViolationKind::CannotPresentToMinor) => {
                format!("{label}は未成年の方には選択できません")
            }
        }
    }
}
