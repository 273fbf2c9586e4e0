//! Core types for the shopping list

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A single entry on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Caller-supplied identifier, not guaranteed unique
    #[schema(example = 1)]
    #[serde(deserialize_with = "lax_int")]
    pub id: i64,
    /// Display name, unique at creation time
    #[schema(example = "Apple")]
    pub name: String,
    /// How many to buy
    #[schema(example = 5)]
    #[serde(deserialize_with = "lax_int")]
    pub quantity: i64,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    /// Overwrite every field with the values from `other`
    pub fn merge(&mut self, other: Item) {
        self.id = other.id;
        self.name = other.name;
        self.quantity = other.quantity;
    }
}

/// Accept integers the way a lenient JSON client expects: whole floats,
/// booleans and numeric strings are coerced, anything lossy is rejected.
fn lax_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LaxIntVisitor)
}

struct LaxIntVisitor;

impl<'de> de::Visitor<'de> for LaxIntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a valid integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<i64, E> {
        Ok(i64::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Items the store starts with
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new(1, "Apple", 5),
        Item::new(2, "Banana", 10),
        Item::new(3, "Orange", 7),
    ]
}
