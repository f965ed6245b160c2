//! Typed access to one declaration object.

use serde_yaml::{Mapping, Value};

/// A single declaration: a YAML object discriminated by its `type` field.
///
/// Accessors are lenient. A field of the wrong shape reads as absent, which
/// the constructors turn into defaults or placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declaration {
  fields: Mapping,
}

impl Declaration {
  /// Interpret a manifest value as a declaration.
  ///
  /// A mapping is used as-is; any other value `x` is shorthand for `{type: x}`.
  pub fn from_value(value: &Value) -> Self {
    match value {
      Value::Mapping(fields) => Self { fields: fields.clone() },
      other => {
        let mut fields = Mapping::new();
        fields.insert(Value::from("type"), other.clone());
        Self { fields }
      }
    }
  }

  /// Declaration with only a `type` field.
  pub fn of_type(kind: &str) -> Self {
    Self::from_value(&Value::from(kind))
  }

  /// The declared `type` tag, when it is a string.
  pub fn kind(&self) -> Option<&str> {
    self.str("type")
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.fields.get(key)
  }

  /// A string field.
  pub fn str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(Value::as_str)
  }

  /// A scalar field rendered as text, absent when empty.
  pub fn text(&self, key: &str) -> Option<String> {
    self.get(key).and_then(scalar_to_string).filter(|s| !s.is_empty())
  }

  /// A boolean field. Anything but a literal `true` reads as false.
  pub fn flag(&self, key: &str) -> bool {
    self.get(key).and_then(Value::as_bool).unwrap_or(false)
  }

  /// A list of scalars. A single scalar is a one-element list.
  pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
    match self.get(key)? {
      Value::Sequence(items) => Some(items.iter().filter_map(scalar_to_string).collect()),
      Value::Null => None,
      single => scalar_to_string(single).map(|s| vec![s]),
    }
  }

  /// The raw items of a list field, a single value counting as one item.
  pub fn items(&self, key: &str) -> Vec<Value> {
    match self.get(key) {
      Some(Value::Sequence(items)) => items.clone(),
      Some(Value::Null) | None => Vec::new(),
      Some(single) => vec![single.clone()],
    }
  }
}

/// Render a YAML scalar as text. Sequences, mappings and null have no text.
pub fn scalar_to_string(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    Value::Tagged(tagged) => scalar_to_string(&tagged.value),
    Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
  }
}
