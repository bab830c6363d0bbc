use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use merx_core::{DomainError, DomainResult, ValueObject};

/// Catalog entry: a named product with a unit price.
///
/// Product names follow a fixed shape: one leading ASCII letter, an arbitrary
/// middle, a trailing ASCII digit (`P5`, `PP234`, `Widget-01`). Construction
/// rejects anything else, so a `Product` in hand always carries a well-formed
/// name. Prices are not validated: zero and negative prices are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    name: String,
    price: f64,
}

/// Wire shape for `Product`. Deserialization converts through
/// [`Product::new`], so a decoded product carries the same name invariant as
/// a constructed one.
#[derive(Deserialize)]
struct RawProduct {
    name: String,
    price: f64,
}

impl TryFrom<RawProduct> for Product {
    type Error = DomainError;

    fn try_from(raw: RawProduct) -> DomainResult<Self> {
        Product::new(raw.name, raw.price)
    }
}

impl Product {
    /// Create a product, enforcing the name-shape invariant.
    pub fn new(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = name.into();
        if !has_valid_shape(&name) {
            return Err(DomainError::validation(format!(
                "product name '{name}' must start with a letter and end with a digit"
            )));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl ValueObject for Product {}

// Must agree with PartialEq: equal products hash equal. The price hashes by
// bit pattern since f64 itself is not hashable; 0.0 and -0.0 compare equal
// but differ in bits, so the sign of zero is normalized away first.
impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        let price = if self.price == 0.0 { 0.0 } else { self.price };
        price.to_bits().hash(state);
    }
}

/// Name shape `^[A-Za-z].*\d$`: leading ASCII letter, trailing ASCII digit,
/// anything between.
fn has_valid_shape(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.next_back().is_some_and(|c| c.is_ascii_digit())
}
