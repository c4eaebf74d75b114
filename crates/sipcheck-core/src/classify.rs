//! Tier rules, one pure function per beverage category.
//!
//! Every rule set returns the same [`Classification`] shape so callers never
//! branch on the category themselves.

use serde::{Deserialize, Serialize};

use crate::beverage::{
  BeverageAttributes, JuiceAttributes, MilkAttributes, OtherAttributes, Tier,
};

/// Reason stored for an `Other` beverage that passes every check.
pub const OTHER_GREEN_REASON: &str =
  "No added sugar, low total sugar, no artificial sweeteners";

/// The outcome of classifying one beverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
  pub tier:    Tier,
  /// Verdict text for the tier, e.g. "OK Sometimes".
  pub label:   String,
  /// Disqualifying checks that fired, in evaluation order.
  pub reasons: Vec<String>,
  /// Rendered explanation stored on the ledger record.
  pub reason:  Option<String>,
}

impl Classification {
  fn new(tier: Tier, reasons: Vec<String>, reason: Option<String>) -> Self {
    Self {
      tier,
      label: tier.label().to_owned(),
      reasons,
      reason,
    }
  }
}

/// Classify already-validated attributes.
pub fn classify(attributes: &BeverageAttributes) -> Classification {
  match attributes {
    BeverageAttributes::Milk(m) => classify_milk(m),
    BeverageAttributes::Juice(j) => classify_juice(j),
    BeverageAttributes::Other(o) => classify_other(o),
  }
}

/// Milk is Green with no flags set and Red otherwise.
pub fn classify_milk(milk: &MilkAttributes) -> Classification {
  let reasons = triggered(&[
    (milk.sweetened, "milk sweetened"),
    (milk.flavored, "milk flavored"),
    (milk.artificial, "contains artificial sweeteners"),
  ]);

  if reasons.is_empty() {
    Classification::new(Tier::Green, reasons, None)
  } else {
    let reason = sentence_case(&reasons.join(", "));
    Classification::new(Tier::Red, reasons, Some(reason))
  }
}

/// Juice is at best Yellow: 100% juice in a serving of 12oz or less.
pub fn classify_juice(juice: &JuiceAttributes) -> Classification {
  let size_ok = juice.serving_size_oz <= 12.0;

  if juice.is_100_percent && size_ok {
    return Classification::new(Tier::Yellow, Vec::new(), None);
  }

  let reasons = triggered(&[
    (!size_ok, "serving size > 12oz"),
    (!juice.is_100_percent, "not 100% juice"),
  ]);
  let reason = sentence_case(&reasons.join(", "));
  Classification::new(Tier::Red, reasons, Some(reason))
}

/// Sugar thresholds: 12g total / any added / artificial for Green, then 24g
/// total and 12g added as the Yellow ceiling.
pub fn classify_other(other: &OtherAttributes) -> Classification {
  let total = other.total_sugar_g;
  let added = other.added_sugar_g;

  let mut reasons = triggered(&[
    (total > 12.0, "Total sugar exceeds 12g"),
    (added > 0.0, "Contains added sugar"),
    (other.artificial, "Contains artificial sweeteners"),
  ]);

  if reasons.is_empty() {
    return Classification::new(
      Tier::Green,
      reasons,
      Some(OTHER_GREEN_REASON.to_owned()),
    );
  }

  if total <= 24.0 && added <= 12.0 {
    let reason = reasons.join(", ");
    return Classification::new(Tier::Yellow, reasons, Some(reason));
  }

  reasons.extend(triggered(&[
    (total > 24.0, "Total sugar exceeds 24g"),
    (added > 12.0, "Added sugar exceeds 12g"),
  ]));
  let reason = reasons.join(", ");
  Classification::new(Tier::Red, reasons, Some(reason))
}

fn triggered(checks: &[(bool, &str)]) -> Vec<String> {
  checks
    .iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, text)| (*text).to_owned())
    .collect()
}

/// Upper-case the first character and lower-case the rest.
fn sentence_case(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first
      .to_uppercase()
      .chain(chars.flat_map(char::to_lowercase))
      .collect(),
    None => String::new(),
  }
}
