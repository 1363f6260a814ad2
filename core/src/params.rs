//! Request parameter values and their form encoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single parameter value: plain text or a list of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    List(Vec<String>),
}

impl ParamValue {
    /// The text value, or `None` for lists.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            ParamValue::List(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(u32, u64, i32, i64);

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Parameter name to value. Keys are unique; the last write wins.
pub type Parameters = BTreeMap<String, ParamValue>;

/// Encode parameters as `application/x-www-form-urlencoded`.
///
/// Lists use the indexed bracket form (`urls[0]=a&urls[1]=b`).
pub fn encode(parameters: &Parameters) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in parameters {
        match value {
            ParamValue::Text(text) => {
                serializer.append_pair(name, text);
            }
            ParamValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    serializer.append_pair(&format!("{name}[{index}]"), item);
                }
            }
        }
    }
    serializer.finish()
}
