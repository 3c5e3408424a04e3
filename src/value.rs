//! The JSON value model.
//!
//! [`Json`] is a tagged union holding exactly one representation at a
//! time. Values retype themselves on mutation: keyed access turns a value
//! into an object, indexed access into an array, and `append` into an
//! array that keeps the previous content as its first element. Switching
//! kind discards the old payload and starts from the new kind's empty
//! payload.
//!
//! Objects are backed by a `BTreeMap`, so key iteration order is always
//! key sort order, never insertion order. Clones are deep copies; two
//! values never share backing storage.

use std::collections::BTreeMap;
use std::ops;

/// The kind of representation a [`Json`] value currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// JSON null
    Null,
    /// JSON boolean
    Boolean,
    /// JSON number stored as a 64-bit signed integer
    Integral,
    /// JSON number stored as a 64-bit IEEE float
    Floating,
    /// JSON string
    String,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

/// A JSON value.
///
/// Default-constructed values are `Null`. Mutation through [`Json::key`],
/// [`Json::at`], [`Json::append`], or the `IndexMut` operators retypes
/// the value as needed (auto-vivification).
///
/// # Example
///
/// ```
/// use simplejson::Json;
///
/// let mut v = Json::default();
/// v["a"]["b"]["c"] = Json::from("d");
/// assert!(v.has_key("a"));
/// assert_eq!(v["a"]["b"]["c"].to_string(), "d");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Json {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Boolean(bool),
    /// JSON number without a fractional part or exponent
    Integral(i64),
    /// JSON number with a fractional part or exponent
    Floating(f64),
    /// JSON string (decoded text, except `\u` escapes which are kept
    /// verbatim by the parser)
    String(String),
    /// JSON array of values
    Array(Vec<Json>),
    /// JSON object with sorted keys
    Object(BTreeMap<String, Json>),
}

/// Shared null used for read-only access to missing entries.
static NULL: Json = Json::Null;

impl Json {
    /// Build an empty value of the requested kind.
    ///
    /// Containers start empty, numbers start at zero, booleans start
    /// false.
    pub fn make(kind: Kind) -> Json {
        match kind {
            Kind::Null => Json::Null,
            Kind::Boolean => Json::Boolean(false),
            Kind::Integral => Json::Integral(0),
            Kind::Floating => Json::Floating(0.0),
            Kind::String => Json::String(String::new()),
            Kind::Array => Json::Array(Vec::new()),
            Kind::Object => Json::Object(BTreeMap::new()),
        }
    }

    /// Get the currently active kind.
    pub fn kind(&self) -> Kind {
        match self {
            Json::Null => Kind::Null,
            Json::Boolean(_) => Kind::Boolean,
            Json::Integral(_) => Kind::Integral,
            Json::Floating(_) => Kind::Floating,
            Json::String(_) => Kind::String,
            Json::Array(_) => Kind::Array,
            Json::Object(_) => Kind::Object,
        }
    }

    /// Switch this value to `kind`, discarding the current payload.
    ///
    /// A no-op when the value already holds the requested kind; the
    /// existing payload is kept in that case.
    pub fn retype(&mut self, kind: Kind) {
        if self.kind() != kind {
            *self = Json::make(kind);
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    /// Mutable access to the entry for `key`, retyping to Object first.
    ///
    /// Any non-object content is discarded by the retype. A missing key
    /// is inserted with a Null value.
    pub fn key(&mut self, key: &str) -> &mut Json {
        self.retype(Kind::Object);
        match self {
            Json::Object(map) => map.entry(key.to_owned()).or_insert(Json::Null),
            _ => unreachable!(),
        }
    }

    /// Mutable access to the element at `index`, retyping to Array first.
    ///
    /// Any non-array content is discarded by the retype. The array grows
    /// to `index + 1` elements, filling new slots with Null.
    pub fn at(&mut self, index: usize) -> &mut Json {
        self.retype(Kind::Array);
        match self {
            Json::Array(list) => {
                if index >= list.len() {
                    list.resize(index + 1, Json::Null);
                }
                &mut list[index]
            }
            _ => unreachable!(),
        }
    }

    /// Append a value, retyping to Array first.
    ///
    /// Unlike [`Json::at`], an existing non-array, non-null value is not
    /// discarded: it becomes the array's first element before the new
    /// one is pushed.
    pub fn append(&mut self, value: impl Into<Json>) {
        self.promote_to_array();
        if let Json::Array(list) = self {
            list.push(value.into());
        }
    }

    /// Append several values in order. See [`Json::append`].
    pub fn append_all<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Json>,
    {
        for value in values {
            self.append(value);
        }
    }

    fn promote_to_array(&mut self) {
        match self {
            Json::Array(_) => {}
            Json::Null => *self = Json::Array(Vec::new()),
            _ => {
                let first = std::mem::take(self);
                *self = Json::Array(vec![first]);
            }
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&Json> {
        match self {
            Json::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Json> {
        match self {
            Json::Array(list) => list.get(index),
            _ => None,
        }
    }

    /// Returns true if this is an object containing `key`.
    pub fn has_key(&self, key: &str) -> bool {
        matches!(self, Json::Object(map) if map.contains_key(key))
    }

    /// Number of entries in an object or array.
    ///
    /// `None` for every other kind; size is not a meaningful question
    /// for scalars.
    pub fn size(&self) -> Option<usize> {
        match self {
            Json::Object(map) => Some(map.len()),
            Json::Array(list) => Some(list.len()),
            _ => None,
        }
    }

    /// Number of elements in an array; 0 for every other kind.
    pub fn length(&self) -> usize {
        match self {
            Json::Array(list) => list.len(),
            _ => 0,
        }
    }

    /// Collect an object's keys in sorted order.
    ///
    /// Empty for non-objects.
    pub fn dump_keys(&self) -> Vec<String> {
        match self {
            Json::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Iterate an object's entries in key order. Empty for non-objects.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Json)> {
        self.as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Iterate an array's elements in order. Empty for non-arrays.
    pub fn elements(&self) -> impl Iterator<Item = &Json> {
        self.as_array().into_iter().flatten()
    }

    /// Returns the boolean payload, or `false` on a kind mismatch.
    pub fn to_bool(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    /// Returns the boolean payload if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, or `0` on a kind mismatch.
    pub fn to_int(&self) -> i64 {
        self.as_int().unwrap_or(0)
    }

    /// Returns the integer payload if this is an Integral, None otherwise.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Json::Integral(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float payload, or `0.0` on a kind mismatch.
    pub fn to_float(&self) -> f64 {
        self.as_float().unwrap_or(0.0)
    }

    /// Returns the float payload if this is a Floating, None otherwise.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Json::Floating(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string payload, or an empty string on a kind mismatch.
    pub fn to_string(&self) -> String {
        self.as_str().unwrap_or("").to_owned()
    }

    /// Returns the string payload if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&[Json]> {
        match self {
            Json::Array(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the backing map if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Json>> {
        match self {
            Json::Object(map) => Some(map),
            _ => None,
        }
    }
}

/// Build an empty Array value.
pub fn array() -> Json {
    Json::make(Kind::Array)
}

/// Build an Array value pre-populated from `items`, in order.
///
/// Mixed-kind arrays are built from already-converted values:
///
/// ```
/// use simplejson::{array_of, Json};
///
/// let arr = array_of([Json::from(true), Json::from("two"), Json::from(3)]);
/// assert_eq!(arr.length(), 3);
/// ```
pub fn array_of<I, T>(items: I) -> Json
where
    I: IntoIterator<Item = T>,
    T: Into<Json>,
{
    let mut arr = array();
    arr.append_all(items);
    arr
}

/// Build an empty Object value.
pub fn object() -> Json {
    Json::make(Kind::Object)
}

impl From<bool> for Json {
    fn from(value: bool) -> Self {
        Json::Boolean(value)
    }
}

macro_rules! impl_from_integral {
    ($($ty:ty)*) => {$(
        impl From<$ty> for Json {
            fn from(value: $ty) -> Self {
                Json::Integral(i64::from(value))
            }
        }
    )*};
}

impl_from_integral!(i8 i16 i32 i64 u8 u16 u32);

impl From<f32> for Json {
    fn from(value: f32) -> Self {
        Json::Floating(f64::from(value))
    }
}

impl From<f64> for Json {
    fn from(value: f64) -> Self {
        Json::Floating(value)
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Self {
        Json::String(value.to_owned())
    }
}

impl From<String> for Json {
    fn from(value: String) -> Self {
        Json::String(value)
    }
}

impl From<Vec<Json>> for Json {
    fn from(value: Vec<Json>) -> Self {
        Json::Array(value)
    }
}

impl From<BTreeMap<String, Json>> for Json {
    fn from(value: BTreeMap<String, Json>) -> Self {
        Json::Object(value)
    }
}

impl ops::Index<&str> for Json {
    type Output = Json;

    /// Read-only keyed access; missing keys and non-objects read as Null.
    fn index(&self, key: &str) -> &Json {
        self.get(key).unwrap_or(&NULL)
    }
}

impl ops::IndexMut<&str> for Json {
    /// Auto-vivifying keyed access; see [`Json::key`].
    fn index_mut(&mut self, key: &str) -> &mut Json {
        self.key(key)
    }
}

impl ops::Index<usize> for Json {
    type Output = Json;

    /// Read-only indexed access; out-of-range and non-arrays read as Null.
    fn index(&self, index: usize) -> &Json {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl ops::IndexMut<usize> for Json {
    /// Auto-vivifying indexed access; see [`Json::at`].
    fn index_mut(&mut self, index: usize) -> &mut Json {
        self.at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(Json::default().is_null());
        assert_eq!(Json::default().kind(), Kind::Null);
    }

    #[test]
    fn test_from_dispatch() {
        assert_eq!(Json::from(true).kind(), Kind::Boolean);
        assert_eq!(Json::from(5).kind(), Kind::Integral);
        assert_eq!(Json::from(5u8).kind(), Kind::Integral);
        assert_eq!(Json::from(5.0).kind(), Kind::Floating);
        assert_eq!(Json::from("five").kind(), Kind::String);
        assert_eq!(Json::from(String::from("five")).kind(), Kind::String);
    }

    #[test]
    fn test_make_empty_values() {
        assert_eq!(Json::make(Kind::Null), Json::Null);
        assert_eq!(Json::make(Kind::Boolean), Json::Boolean(false));
        assert_eq!(Json::make(Kind::Integral), Json::Integral(0));
        assert_eq!(Json::make(Kind::Floating), Json::Floating(0.0));
        assert_eq!(Json::make(Kind::String), Json::String(String::new()));
        assert_eq!(Json::make(Kind::Array), Json::Array(vec![]));
        assert_eq!(Json::make(Kind::Object), Json::Object(BTreeMap::new()));
    }

    #[test]
    fn test_retype_discards_payload() {
        let mut v = Json::from("text");
        v.retype(Kind::Integral);
        assert_eq!(v, Json::Integral(0));

        // Same kind keeps the payload
        let mut v = Json::from(7);
        v.retype(Kind::Integral);
        assert_eq!(v, Json::Integral(7));
    }

    #[test]
    fn test_auto_vivification() {
        let mut v = Json::default();
        v["a"]["b"]["c"] = Json::from("d");
        assert!(v.has_key("a"));
        assert_eq!(v["a"]["b"]["c"].to_string(), "d");
        assert_eq!(v["a"].kind(), Kind::Object);
    }

    #[test]
    fn test_keyed_access_discards_non_object() {
        let mut v = Json::from(42);
        v["a"] = Json::from(1);
        assert_eq!(v.kind(), Kind::Object);
        assert_eq!(v.size(), Some(1));
    }

    #[test]
    fn test_array_growth_fills_null() {
        let mut v = array();
        v[3] = Json::from("x");
        assert_eq!(v.length(), 4);
        assert!(v[0].is_null());
        assert!(v[1].is_null());
        assert!(v[2].is_null());
        assert_eq!(v[3], Json::from("x"));
    }

    #[test]
    fn test_append_on_non_array_keeps_first_element() {
        let mut v = Json::from(5);
        v.append("next");
        assert_eq!(v.kind(), Kind::Array);
        assert_eq!(v.length(), 2);
        assert_eq!(v[0], Json::Integral(5));
        assert_eq!(v[1], Json::from("next"));
    }

    #[test]
    fn test_append_on_null_starts_empty() {
        let mut v = Json::Null;
        v.append(1);
        assert_eq!(v.length(), 1);
        assert_eq!(v[0], Json::Integral(1));
    }

    #[test]
    fn test_append_all_order() {
        let mut v = array();
        v.append_all([Json::from(1), Json::from(2), Json::from(3)]);
        assert_eq!(v.length(), 3);
        assert_eq!(v[2], Json::Integral(3));
    }

    #[test]
    fn test_array_of_mixed() {
        let v = array_of([Json::from(2), Json::from("Test"), Json::from(true)]);
        assert_eq!(v.kind(), Kind::Array);
        assert_eq!(v[0], Json::Integral(2));
        assert_eq!(v[1], Json::from("Test"));
        assert_eq!(v[2], Json::Boolean(true));
    }

    #[test]
    fn test_accessor_defaults_on_mismatch() {
        let v = Json::from("text");
        assert_eq!(v.to_bool(), false);
        assert_eq!(v.to_int(), 0);
        assert_eq!(v.to_float(), 0.0);
        assert_eq!(Json::from(5).to_string(), "");
    }

    #[test]
    fn test_checked_accessors_report_mismatch() {
        let v = Json::Boolean(false);
        // "actually false" is distinguishable from "wrong kind"
        assert_eq!(v.as_bool(), Some(false));
        assert_eq!(Json::from("text").as_bool(), None);
        assert_eq!(Json::from(5).as_int(), Some(5));
        assert_eq!(Json::from(5.5).as_float(), Some(5.5));
        assert_eq!(Json::from("s").as_str(), Some("s"));
    }

    #[test]
    fn test_size_sentinel() {
        assert_eq!(object().size(), Some(0));
        assert_eq!(array().size(), Some(0));
        assert_eq!(Json::from("text").size(), None);
        assert_eq!(Json::Null.size(), None);
    }

    #[test]
    fn test_length_is_array_only() {
        let mut v = array();
        v.append(1);
        assert_eq!(v.length(), 1);
        assert_eq!(object().length(), 0);
        assert_eq!(Json::from("text").length(), 0);
    }

    #[test]
    fn test_dump_keys_sorted() {
        let mut v = object();
        v["b"] = Json::from(2);
        v["a"] = Json::from(1);
        v["c"] = Json::from(3);
        assert_eq!(v.dump_keys(), vec!["a", "b", "c"]);
        assert!(Json::from(1).dump_keys().is_empty());
    }

    #[test]
    fn test_entries_and_elements() {
        let mut v = object();
        v["b"] = Json::from(2);
        v["a"] = Json::from(1);
        let entries: Vec<_> = v.entries().collect();
        assert_eq!(entries[0], ("a", &Json::Integral(1)));
        assert_eq!(entries[1], ("b", &Json::Integral(2)));

        let mut a = array();
        a.append_all([1, 2]);
        assert_eq!(a.elements().count(), 2);

        // Empty for mismatched kinds
        assert_eq!(Json::Null.entries().count(), 0);
        assert_eq!(Json::Null.elements().count(), 0);
    }

    #[test]
    fn test_read_only_index_misses_are_null() {
        let v = object();
        assert!(v["missing"].is_null());
        assert!(v[3].is_null());
        assert!(Json::from(1)["key"].is_null());
    }

    #[test]
    fn test_equality_is_tag_gated() {
        // Mixed numeric kinds never compare equal, by design.
        assert_ne!(Json::Integral(1), Json::Floating(1.0));
        assert_ne!(Json::Floating(1.0), Json::Integral(1));
        assert_eq!(Json::Integral(1), Json::Integral(1));
        assert_eq!(Json::Floating(1.0), Json::Floating(1.0));
        assert_eq!(Json::Null, Json::Null);
        assert_ne!(Json::Boolean(false), Json::Null);
    }

    #[test]
    fn test_structural_equality() {
        let mut a = object();
        a["x"]["y"] = Json::from(1);
        a["z"].append_all([Json::from(true), Json::from("s")]);
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clone_is_deep_copy() {
        let mut original = object();
        original["k"] = Json::from(1);
        let copy = original.clone();

        // Mutation through the original is not visible through the copy.
        original["k"] = Json::from(2);
        assert_eq!(copy["k"], Json::Integral(1));
        assert_eq!(original["k"], Json::Integral(2));
    }
}
