//! Strongly typed claim values and claim sets

use serde_json::Value;
use std::collections::BTreeMap;

/// A single JSON claim value
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    /// JSON string
    String(String),
    /// JSON number representable as `i64`
    Integer(i64),
    /// Any other JSON number
    Float(f64),
    /// JSON boolean
    Bool(bool),
    /// JSON null
    Null,
    /// JSON array
    Array(Vec<ClaimValue>),
    /// JSON object
    Object(BTreeMap<String, ClaimValue>),
}

impl ClaimValue {
    /// String content, if this is a string claim
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is an integral number
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ClaimValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric content of either number variant
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ClaimValue::Integer(n) => Some(*n as f64),
            ClaimValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean content
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ClaimValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert back into an untyped JSON value
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            ClaimValue::String(s) => Value::String(s.clone()),
            ClaimValue::Integer(n) => Value::from(*n),
            ClaimValue::Float(n) => Value::from(*n),
            ClaimValue::Bool(b) => Value::Bool(*b),
            ClaimValue::Null => Value::Null,
            ClaimValue::Array(items) => Value::Array(items.iter().map(ClaimValue::to_json).collect()),
            ClaimValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for ClaimValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ClaimValue::String(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ClaimValue::Integer(i),
                None => ClaimValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::Bool(b) => ClaimValue::Bool(b),
            Value::Null => ClaimValue::Null,
            Value::Array(items) => ClaimValue::Array(items.into_iter().map(ClaimValue::from).collect()),
            Value::Object(map) => ClaimValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, ClaimValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// A decoded JSON object: the token header or its payload.
///
/// Registered claims have typed accessors; everything else is reachable
/// through [`Claims::get`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    entries: BTreeMap<String, ClaimValue>,
}

impl Claims {
    pub(crate) fn from_object(object: serde_json::Map<String, Value>) -> Self {
        Self {
            entries: object
                .into_iter()
                .map(|(key, value)| (key, ClaimValue::from(value)))
                .collect(),
        }
    }

    /// Look up any claim by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClaimValue> {
        self.entries.get(name)
    }

    /// Iterate claims in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClaimValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of claims
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for `{}`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ClaimValue::as_str)
    }

    /// Subject (`sub`)
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.string("sub")
    }

    /// Issuer (`iss`)
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.string("iss")
    }

    /// Token identifier (`jti`)
    #[must_use]
    pub fn jwt_id(&self) -> Option<&str> {
        self.string("jti")
    }

    /// Audience (`aud`), accepting either a single string or an array of strings
    #[must_use]
    pub fn audience(&self) -> Vec<&str> {
        match self.get("aud") {
            Some(ClaimValue::String(aud)) => vec![aud.as_str()],
            Some(ClaimValue::Array(items)) => items.iter().filter_map(ClaimValue::as_str).collect(),
            _ => Vec::new(),
        }
    }

    // Non-numeric or non-finite temporal claims count as absent.
    fn numeric_date(&self, name: &str) -> Option<f64> {
        self.get(name)
            .and_then(ClaimValue::as_f64)
            .filter(|seconds| seconds.is_finite())
    }

    /// Expiry (`exp`) in seconds since the epoch
    #[must_use]
    pub fn expiration(&self) -> Option<f64> {
        self.numeric_date("exp")
    }

    /// Issued-at (`iat`) in seconds since the epoch
    #[must_use]
    pub fn issued_at(&self) -> Option<f64> {
        self.numeric_date("iat")
    }

    /// Not-before (`nbf`) in seconds since the epoch
    #[must_use]
    pub fn not_before(&self) -> Option<f64> {
        self.numeric_date("nbf")
    }

    /// Render as a JSON value
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}
