use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Course category of a meal. Breakfast, lunch, and dinner are the only
/// valid values; anything else fails to parse.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Course {
    #[serde(rename = "breakfast")]
    #[strum(serialize = "breakfast")]
    Breakfast,
    #[serde(rename = "lunch")]
    #[strum(serialize = "lunch")]
    Lunch,
    #[serde(rename = "dinner")]
    #[strum(serialize = "dinner")]
    Dinner,
}

/// The seven conventional day names.
///
/// Plan days are free-form strings; this enum is vocabulary for the usual
/// Monday..Sunday keys, not a constraint on them.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.to_string()
    }
}
