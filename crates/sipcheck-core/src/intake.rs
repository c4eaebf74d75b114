//! Form intake: a category tag plus a loose map of attribute values, turned
//! into validated [`BeverageAttributes`].
//!
//! Numbers may arrive as JSON numbers or numeric strings; yes/no answers as
//! JSON booleans or `true`/`false`/`yes`/`no` strings in any case.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
  Result, ValidationError,
  beverage::{
    BeverageAttributes, Category, JuiceAttributes, MilkAttributes,
    OtherAttributes,
  },
};

/// Raw submission as posted by the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
  pub category:   String,
  #[serde(default)]
  pub name:       Option<String>,
  #[serde(default)]
  pub attributes: Map<String, Value>,
}

/// A submission that passed validation and is ready to classify.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
  pub name:       Option<String>,
  pub attributes: BeverageAttributes,
}

impl ValidSubmission {
  pub fn category(&self) -> Category { self.attributes.category() }
}

impl Submission {
  /// Parse and validate. Field checks run in form order so the first
  /// problem the user would see is the one reported.
  pub fn parse(&self) -> Result<ValidSubmission> {
    let category: Category = self
      .category
      .trim()
      .parse()
      .map_err(|_| ValidationError::UnknownCategory(self.category.clone()))?;

    let fields = &self.attributes;
    let attributes = match category {
      Category::Juice => BeverageAttributes::Juice(JuiceAttributes {
        serving_size_oz: number(fields, "serving_size_oz")?,
        is_100_percent:  flag(fields, "is_100_percent")?,
      }),
      Category::Milk => BeverageAttributes::Milk(MilkAttributes {
        flavored:   flag(fields, "flavored")?,
        sweetened:  flag(fields, "sweetened")?,
        artificial: flag(fields, "artificial")?,
      }),
      Category::Other => BeverageAttributes::Other(OtherAttributes {
        total_sugar_g: number(fields, "total_sugar_g")?,
        added_sugar_g: number(fields, "added_sugar_g")?,
        artificial:    flag(fields, "artificial")?,
      }),
    }
    .validated()?;

    let name = self.name.clone().filter(|n| !n.trim().is_empty());

    Ok(ValidSubmission { name, attributes })
  }
}

fn present<'a>(
  fields: &'a Map<String, Value>,
  field: &'static str,
) -> Result<&'a Value> {
  match fields.get(field) {
    None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
    Some(Value::String(s)) if s.trim().is_empty() => {
      Err(ValidationError::MissingField(field))
    }
    Some(v) => Ok(v),
  }
}

fn number(fields: &Map<String, Value>, field: &'static str) -> Result<f64> {
  let value = present(fields, field)?;
  let parsed = match value {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse::<f64>().ok(),
    _ => None,
  };
  parsed.ok_or_else(|| ValidationError::NotNumeric {
    field,
    value: display(value),
  })
}

fn flag(fields: &Map<String, Value>, field: &'static str) -> Result<bool> {
  let value = present(fields, field)?;
  let parsed = match value {
    Value::Bool(b) => Some(*b),
    Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
      "true" | "yes" => Some(true),
      "false" | "no" => Some(false),
      _ => None,
    },
    _ => None,
  };
  parsed.ok_or_else(|| ValidationError::NotBoolean {
    field,
    value: display(value),
  })
}

fn display(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
