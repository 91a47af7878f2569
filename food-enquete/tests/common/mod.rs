//! Answers shared by the integration tests.

#![allow(dead_code)]

use food_enquete::FoodEnquete;

/// Present id of the all-you-can-drink beer in the default configuration.
pub const ALCOHOL_PRESENT: u32 = 3;

/// An adult who ate tonkotsu ramen and picked free extra noodles.
pub fn tanaka() -> FoodEnquete {
    FoodEnquete {
        name: "Taro Tanaka".into(),
        email: "taro.tanaka@example.com".into(),
        age: Some(25),
        food_item_id: Some(2),
        score: Some(3),
        comment: "It was delicious.".into(),
        present_option_id: Some(1),
    }
}

/// A second respondent with a different address.
pub fn yamada() -> FoodEnquete {
    FoodEnquete {
        name: "Hanako Yamada".into(),
        email: "hanako.yamada@example.com".into(),
        age: Some(22),
        food_item_id: Some(1),
        score: Some(2),
        comment: String::new(),
        present_option_id: Some(0),
    }
}

/// A minor who asks for the all-you-can-drink beer.
pub fn sato() -> FoodEnquete {
    FoodEnquete {
        name: "Jiro Sato".into(),
        email: "jiro.sato@example.com".into(),
        age: Some(19),
        food_item_id: Some(3),
        score: Some(5),
        comment: "Great gyoza.".into(),
        present_option_id: Some(ALCOHOL_PRESENT),
    }
}
