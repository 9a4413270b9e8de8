//! Claim sets carried in the token payload
//!
//! A [`Claims`] value is an ordered mapping from string keys to JSON values
//! (`miniserde::json::Value`): null, bool, number, string, array or nested
//! object. Keys are kept sorted, so the same logical claim set always
//! serializes to the same bytes.

mod validator;

pub(crate) use validator::validate_expiration;
pub use validator::Validation;

use crate::error::DecodeError;
use miniserde::json::{Array, Number, Object, Value};

/// Issued-at claim, milliseconds since the Unix epoch, set by the signer
pub const ISSUED_AT: &str = "iat";

/// Expiration claim, milliseconds since the Unix epoch
pub const EXPIRATION: &str = "exp";

/// Subject claim
pub const SUBJECT: &str = "sub";

/// A token's claim set
///
/// # Examples
///
/// ```
/// use hstoken::Claims;
///
/// let claims = Claims::new()
///     .with("sub", "alice")
///     .with("admin", false)
///     .with("scopes", vec!["read", "write"]);
///
/// assert_eq!(claims.subject(), Some("alice"));
/// assert_eq!(claims.to_json(), r#"{"admin":false,"scopes":["read","write"],"sub":"alice"}"#);
/// ```
#[derive(Debug, Clone)]
pub struct Claims {
    inner: Object,
}

impl Claims {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self {
            inner: Object::new(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl ClaimValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a claim, returning the previous value for that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl ClaimValue) -> Option<Value> {
        self.inner.insert(key.into(), value.into_value())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Get a string claim
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get an integer claim
    ///
    /// Floats are accepted only when they hold an exact integer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(Number::U64(n)) => i64::try_from(*n).ok(),
            Value::Number(Number::I64(n)) => Some(*n),
            Value::Number(Number::F64(f))
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Subject (`sub`)
    pub fn subject(&self) -> Option<&str> {
        self.get_str(SUBJECT)
    }

    /// Issued at (`iat`), milliseconds since the Unix epoch
    pub fn issued_at(&self) -> Option<i64> {
        self.get_i64(ISSUED_AT)
    }

    /// Expiration (`exp`), milliseconds since the Unix epoch
    pub fn expiration(&self) -> Option<i64> {
        self.get_i64(EXPIRATION)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over claims in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical JSON form (sorted keys, no whitespace)
    pub fn to_json(&self) -> String {
        miniserde::json::to_string(&self.inner)
    }

    /// Parse a JSON object into a claim set
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let inner: Object = miniserde::json::from_str(json)
            .map_err(|e| DecodeError::Json(format!("Failed to parse payload: {e}")))?;
        Ok(Self { inner })
    }

    pub fn as_object(&self) -> &Object {
        &self.inner
    }

    pub fn into_object(self) -> Object {
        self.inner
    }

    /// Store a millisecond timestamp under `key`
    pub(crate) fn set_timestamp(&mut self, key: &str, millis: i64) {
        self.inner.insert(key.to_string(), integer(millis));
    }
}

impl Default for Claims {
    fn default() -> Self {
        Self::new()
    }
}

/// Claim sets are equal when their canonical JSON is equal
///
/// This treats `5` parsed from JSON (`U64`) and `5` inserted as `i64` as the
/// same claim.
impl PartialEq for Claims {
    fn eq(&self, other: &Self) -> bool {
        self.to_json() == other.to_json()
    }
}

impl From<Object> for Claims {
    fn from(inner: Object) -> Self {
        Self { inner }
    }
}

/// Conversion of Rust values into claim values
pub trait ClaimValue {
    fn into_value(self) -> Value;
}

impl ClaimValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl ClaimValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl ClaimValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl ClaimValue for &String {
    fn into_value(self) -> Value {
        Value::String(self.clone())
    }
}

impl ClaimValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

/// JSON has no NaN or infinity, so non-finite values become `null`
impl ClaimValue for f64 {
    fn into_value(self) -> Value {
        if self.is_finite() {
            Value::Number(Number::F64(self))
        } else {
            Value::Null
        }
    }
}

macro_rules! signed_claim_value {
    ($($ty:ty),*) => {
        $(
            impl ClaimValue for $ty {
                fn into_value(self) -> Value {
                    integer(i64::from(self))
                }
            }
        )*
    };
}

macro_rules! unsigned_claim_value {
    ($($ty:ty),*) => {
        $(
            impl ClaimValue for $ty {
                fn into_value(self) -> Value {
                    Value::Number(Number::U64(u64::from(self)))
                }
            }
        )*
    };
}

signed_claim_value!(i8, i16, i32, i64);
unsigned_claim_value!(u8, u16, u32, u64);

impl<T: ClaimValue> ClaimValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

impl<T: ClaimValue> ClaimValue for Vec<T> {
    fn into_value(self) -> Value {
        let mut array = Array::new();
        array.extend(self.into_iter().map(ClaimValue::into_value));
        Value::Array(array)
    }
}

impl ClaimValue for Claims {
    fn into_value(self) -> Value {
        Value::Object(self.inner)
    }
}

/// Integer value in the shape the JSON parser produces (`U64` when non-negative)
pub(crate) fn integer(n: i64) -> Value {
    match u64::try_from(n) {
        Ok(unsigned) => Value::Number(Number::U64(unsigned)),
        Err(_) => Value::Number(Number::I64(n)),
    }
}
