//! Beverage categories, compliance tiers and the per-category attribute
//! payloads the classifier consumes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Result, ValidationError};

// ─── Category ────────────────────────────────────────────────────────────────

/// The kind of beverage being classified. Each category carries its own
/// attribute set and rule table.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
  Juice,
  Milk,
  Other,
}

// ─── Tier ────────────────────────────────────────────────────────────────────

/// Compliance tier. Serialised lowercase, which is also the value written to
/// the `Recommendation` column on export.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
  Green,
  Yellow,
  Red,
}

impl Tier {
  /// The human-readable verdict shown next to the tier.
  pub fn label(self) -> &'static str {
    match self {
      Self::Green => "Go For It!",
      Self::Yellow => "OK Sometimes",
      Self::Red => "Maybe Not",
    }
  }
}

// ─── Attribute payloads ──────────────────────────────────────────────────────

/// Yes/no answers for a milk product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MilkAttributes {
  pub flavored:   bool,
  pub sweetened:  bool,
  /// Contains artificial (non-nutritive) sweeteners.
  pub artificial: bool,
}

/// Serving size and juice content for a juice product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JuiceAttributes {
  /// Fluid ounces per serving. Must be finite and greater than zero.
  pub serving_size_oz: f64,
  pub is_100_percent:  bool,
}

/// Sugar content for anything that is neither milk nor juice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OtherAttributes {
  pub total_sugar_g: f64,
  /// Must not exceed `total_sugar_g`.
  pub added_sugar_g: f64,
  pub artificial:    bool,
}

/// Category-tagged attributes. The variant name doubles as the [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "attributes")]
pub enum BeverageAttributes {
  Juice(JuiceAttributes),
  Milk(MilkAttributes),
  Other(OtherAttributes),
}

impl BeverageAttributes {
  pub fn category(&self) -> Category {
    match self {
      Self::Juice(_) => Category::Juice,
      Self::Milk(_) => Category::Milk,
      Self::Other(_) => Category::Other,
    }
  }

  /// Range and consistency checks. Returns `self` unchanged when every check
  /// passes so callers can chain into [`crate::classify::classify`].
  pub fn validated(self) -> Result<Self> {
    match &self {
      Self::Milk(_) => {}
      Self::Juice(j) => {
        if !(j.serving_size_oz.is_finite() && j.serving_size_oz > 0.0) {
          return Err(ValidationError::ServingSize);
        }
      }
      Self::Other(o) => {
        if !(o.total_sugar_g.is_finite() && o.total_sugar_g >= 0.0) {
          return Err(ValidationError::TotalSugar);
        }
        if !(o.added_sugar_g.is_finite() && o.added_sugar_g >= 0.0) {
          return Err(ValidationError::AddedSugar);
        }
        if o.added_sugar_g > o.total_sugar_g {
          return Err(ValidationError::AddedExceedsTotal);
        }
      }
    }
    Ok(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_parses_case_insensitively() {
    assert_eq!("juice".parse::<Category>().unwrap(), Category::Juice);
    assert_eq!("MILK".parse::<Category>().unwrap(), Category::Milk);
    assert_eq!("Other".parse::<Category>().unwrap(), Category::Other);
    assert!("soda".parse::<Category>().is_err());
  }

  #[test]
  fn tier_serialises_lowercase() {
    assert_eq!(serde_json::to_string(&Tier::Yellow).unwrap(), "\"yellow\"");
    assert_eq!(Tier::Red.to_string(), "red");
    assert_eq!(Tier::Green.label(), "Go For It!");
  }

  #[test]
  fn juice_serving_must_be_positive() {
    let zero = BeverageAttributes::Juice(JuiceAttributes {
      serving_size_oz: 0.0,
      is_100_percent:  true,
    });
    assert_eq!(zero.validated(), Err(ValidationError::ServingSize));

    let nan = BeverageAttributes::Juice(JuiceAttributes {
      serving_size_oz: f64::NAN,
      is_100_percent:  true,
    });
    assert_eq!(nan.validated(), Err(ValidationError::ServingSize));
  }

  #[test]
  fn other_sugar_checks_run_in_order() {
    let other = |total, added| {
      BeverageAttributes::Other(OtherAttributes {
        total_sugar_g: total,
        added_sugar_g: added,
        artificial:    false,
      })
      .validated()
    };
    assert_eq!(other(-1.0, 0.0), Err(ValidationError::TotalSugar));
    assert_eq!(other(5.0, -0.5), Err(ValidationError::AddedSugar));
    assert_eq!(other(5.0, 6.0), Err(ValidationError::AddedExceedsTotal));
    assert!(other(5.0, 5.0).is_ok());
  }
}
