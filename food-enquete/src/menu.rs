//! Display data for the food items and presents a respondent can pick.

use serde::Deserialize;

use crate::FoodEnquete;

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    /// Price in yen.
    pub price: u32,
}

impl FoodItem {
    pub fn new(id: u32, name: impl Into<String>, price: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

/// A present a respondent can choose for answering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresentOption {
    pub id: u32,
    pub name: String,
}

impl PresentOption {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The menu used when no configuration overrides it.
pub fn default_menu() -> Vec<FoodItem> {
    vec![
        FoodItem::new(0, "Shoyu ramen", 780),
        FoodItem::new(1, "Miso ramen", 850),
        FoodItem::new(2, "Tonkotsu ramen", 900),
        FoodItem::new(3, "Ramen and gyoza set", 1200),
    ]
}

/// The presents used when no configuration overrides them.
///
/// Id 3 is the all-you-can-drink beer option.
pub fn default_presents() -> Vec<PresentOption> {
    vec![
        PresentOption::new(0, "Almond jelly"),
        PresentOption::new(1, "Free extra noodles"),
        PresentOption::new(2, "Gyoza"),
        PresentOption::new(3, "All-you-can-drink beer"),
    ]
}

/// Render a yen amount with thousands separators, e.g. `¥1,200`.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut label = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    label.push('¥');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            label.push(',');
        }
        label.push(c);
    }
    label
}

/// Label for a satisfaction score on the 1 to 5 scale.
pub fn satisfaction_label(score: u32) -> Option<&'static str> {
    match score {
        1 => Some("Very dissatisfied"),
        2 => Some("Dissatisfied"),
        3 => Some("Neutral"),
        4 => Some("Satisfied"),
        5 => Some("Very satisfied"),
        _ => None,
    }
}

impl FoodEnquete {
    /// The menu entry this answer refers to, if any.
    pub fn food_item<'a>(&self, menu: &'a [FoodItem]) -> Option<&'a FoodItem> {
        let id = self.food_item_id?;
        menu.iter().find(|item| item.id == id)
    }

    /// The present this answer selected, if any.
    pub fn present<'a>(&self, presents: &'a [PresentOption]) -> Option<&'a PresentOption> {
        let id = self.present_option_id?;
        presents.iter().find(|present| present.id == id)
    }

    pub fn satisfaction(&self) -> Option<&'static str> {
        self.score.and_then(satisfaction_label)
    }
}
