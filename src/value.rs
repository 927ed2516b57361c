//! Contains the `JsonValue` enum, an owned tree representation of any
//! valid JSON value, and its accessors.
//!
//! Accessors come in two flavors. The `as_*` methods and [`JsonValue::get`]
//! return `Option` and never panic. The `to_*` methods, `len`, and the
//! indexing operators treat a variant mismatch or a missing element as a
//! caller bug and panic, the same way slice indexing does.
use crate::error::ParseError;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The array payload of a [`JsonValue`].
pub type Array = Vec<JsonValue>;

/// The object payload of a [`JsonValue`].
///
/// Keys iterate in insertion order, which keeps serialization
/// deterministic.
pub type Object = IndexMap<String, JsonValue>;

/// A native Rust representation of any valid JSON value.
///
/// Equality is deep. Values of different variants are never equal, arrays
/// compare element by element in order, and objects compare as maps
/// regardless of key order. `Clone` produces a fully independent deep copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// Represents a JSON `null`.
    #[default]
    Null,
    /// Represents a JSON `true` or `false`.
    Bool(bool),
    /// Represents a JSON number, always stored at double precision.
    Number(f64),
    /// Represents a JSON string. May contain embedded NUL characters.
    String(String),
    /// Represents a JSON array.
    Array(Array),
    /// Represents a JSON object.
    Object(Object),
}

/// The variant tag of a [`JsonValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        })
    }
}

impl JsonValue {
    /// An empty array.
    #[must_use]
    pub fn array() -> Self {
        JsonValue::Array(Array::new())
    }

    /// An empty object.
    #[must_use]
    pub fn object() -> Self {
        JsonValue::Object(Object::new())
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Bool(_) => ValueKind::Bool,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            JsonValue::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            JsonValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the boolean payload.
    ///
    /// # Panics
    /// Panics if the value is not a `Bool`.
    #[track_caller]
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            JsonValue::Bool(b) => *b,
            other => other.mismatch("to_bool", ValueKind::Bool),
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    /// Panics if the value is not a `Number`.
    #[track_caller]
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            JsonValue::Number(n) => *n,
            other => other.mismatch("to_number", ValueKind::Number),
        }
    }

    /// Returns the string payload.
    ///
    /// # Panics
    /// Panics if the value is not a `String`.
    #[track_caller]
    #[must_use]
    pub fn to_str(&self) -> &str {
        match self {
            JsonValue::String(s) => s,
            other => other.mismatch("to_str", ValueKind::String),
        }
    }

    /// Returns the elements of an array.
    ///
    /// # Panics
    /// Panics if the value is not an `Array`.
    #[track_caller]
    #[must_use]
    pub fn to_array(&self) -> &Array {
        match self {
            JsonValue::Array(items) => items,
            other => other.mismatch("to_array", ValueKind::Array),
        }
    }

    /// Returns the members of an object.
    ///
    /// # Panics
    /// Panics if the value is not an `Object`.
    #[track_caller]
    #[must_use]
    pub fn to_object(&self) -> &Object {
        match self {
            JsonValue::Object(members) => members,
            other => other.mismatch("to_object", ValueKind::Object),
        }
    }

    /// Looks up an object member. Returns `None` for a missing key or a
    /// value that is not an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.as_object_mut()?.get_mut(key)
    }

    /// Looks up an array element. Returns `None` when out of range or when
    /// the value is not an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array()?.get(index)
    }

    /// The number of elements of an array or members of an object.
    ///
    /// # Panics
    /// Panics for scalar values, which have no size.
    #[track_caller]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Array(items) => items.len(),
            JsonValue::Object(members) => members.len(),
            other => panic!("called `len` on a {} value", other.kind()),
        }
    }

    /// # Panics
    /// Panics for scalar values, like [`JsonValue::len`].
    #[track_caller]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[track_caller]
    fn mismatch(&self, method: &str, expected: ValueKind) -> ! {
        panic!(
            "called `{method}` on a {} value, expected {expected}",
            self.kind()
        )
    }
}

impl Index<usize> for JsonValue {
    type Output = JsonValue;

    #[track_caller]
    fn index(&self, index: usize) -> &JsonValue {
        match self {
            JsonValue::Array(items) => match items.get(index) {
                Some(item) => item,
                None => panic!(
                    "index {index} out of range for array of length {}",
                    items.len()
                ),
            },
            other => panic!("cannot index a {} value by position", other.kind()),
        }
    }
}

impl IndexMut<usize> for JsonValue {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut JsonValue {
        match self {
            JsonValue::Array(items) => {
                let len = items.len();
                match items.get_mut(index) {
                    Some(item) => item,
                    None => panic!("index {index} out of range for array of length {len}"),
                }
            }
            other => panic!("cannot index a {} value by position", other.kind()),
        }
    }
}

impl Index<&str> for JsonValue {
    type Output = JsonValue;

    #[track_caller]
    fn index(&self, key: &str) -> &JsonValue {
        match self {
            JsonValue::Object(members) => match members.get(key) {
                Some(value) => value,
                None => panic!("no member named {key:?} in object"),
            },
            other => panic!("cannot index a {} value by key", other.kind()),
        }
    }
}

/// Writing through a missing key inserts `Null` first, so
/// `value["new"] = JsonValue::from(1)` works on any object.
impl IndexMut<&str> for JsonValue {
    #[track_caller]
    fn index_mut(&mut self, key: &str) -> &mut JsonValue {
        match self {
            JsonValue::Object(members) => members.entry(key.to_owned()).or_default(),
            other => panic!("cannot index a {} value by key", other.kind()),
        }
    }
}

// --- Conversions ---

impl From<()> for JsonValue {
    fn from((): ()) -> Self {
        JsonValue::Null
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

macro_rules! impl_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    JsonValue::Number(value as f64)
                }
            }

            impl PartialEq<$ty> for JsonValue {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast,
                    clippy::float_cmp
                )]
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, JsonValue::Number(n) if *n == *other as f64)
                }
            }
        )*
    };
}

impl_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(items: Vec<T>) -> Self {
        JsonValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for JsonValue {
    fn from(members: Object) -> Self {
        JsonValue::Object(members)
    }
}

impl From<HashMap<String, JsonValue>> for JsonValue {
    fn from(members: HashMap<String, JsonValue>) -> Self {
        JsonValue::Object(members.into_iter().collect())
    }
}

impl From<BTreeMap<String, JsonValue>> for JsonValue {
    fn from(members: BTreeMap<String, JsonValue>) -> Self {
        JsonValue::Object(members.into_iter().collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        JsonValue::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// --- Comparisons against plain Rust values ---

impl PartialEq<bool> for JsonValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<str> for JsonValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for JsonValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for JsonValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

// --- Text conversions ---

/// Writes the canonical serialization.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}

impl FromStr for JsonValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
