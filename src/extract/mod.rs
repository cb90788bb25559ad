//! # Property Extractor
//!
//! Moves known fields out of a private working copy of an element's
//! property bag into a variant struct. Whatever is left in the bag once
//! every manifest in the ancestor chain has been applied becomes the
//! variant's `extended_properties`, untouched.
//!
//! ## Absent-vs-default policy
//!
//! One rule everywhere: **omit if absent**. Every named field is an
//! `Option`; an absent key and an explicit `Null` both give `None`.
//! A `Null` key counts as consumed. A value whose runtime type cannot be
//! converted to the field's kind is *not* consumed and stays in the
//! residual map, so no property is ever dropped.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{PropertyBag, Value};
use crate::properties::{ElementProperties, VariantFields};
use crate::shape::VariantKind;

// ============================================================================
// Field manifests
// ============================================================================

/// Runtime kind a named field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    String,
    Int,
    Float,
    Bool,
    Date,
    Enum,
    StringList,
    StringMap,
    Map,
}

/// One row of a variant's field manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

// ============================================================================
// Typed conversion
// ============================================================================

/// Conversion from a raw property value to a named field's Rust type.
///
/// `convert` returns `None` for a value of the wrong shape; the extractor
/// then leaves the value in the bag.
pub trait FieldValue: Sized {
    const KIND: FieldKind;

    fn convert(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn convert(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for i32 {
    const KIND: FieldKind = FieldKind::Int;

    fn convert(value: &Value) -> Option<Self> {
        value.as_int().and_then(|i| i32::try_from(i).ok())
    }
}

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn convert(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn convert(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Date;

    fn convert(value: &Value) -> Option<Self> {
        value.as_datetime()
    }
}

/// Array of strings. Any non-string member refuses the whole value.
impl FieldValue for Vec<String> {
    const KIND: FieldKind = FieldKind::StringList;

    fn convert(value: &Value) -> Option<Self> {
        value
            .as_list()?
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect()
    }
}

/// Map of strings. Any non-string value refuses the whole map.
impl FieldValue for BTreeMap<String, String> {
    const KIND: FieldKind = FieldKind::StringMap;

    fn convert(value: &Value) -> Option<Self> {
        value
            .as_map()?
            .iter()
            .map(|(k, v)| v.as_str().map(|s| (k.to_owned(), s.to_owned())))
            .collect()
    }
}

impl FieldValue for PropertyBag {
    const KIND: FieldKind = FieldKind::Map;

    fn convert(value: &Value) -> Option<Self> {
        value.as_map().cloned()
    }
}

// ============================================================================
// Extractor
// ============================================================================

/// Destructive reader over a working copy of a property bag.
#[derive(Debug)]
pub struct Extractor {
    bag: PropertyBag,
    consumed: Vec<String>,
}

impl Extractor {
    /// Takes ownership of the bag; callers pass a clone of the source's.
    pub fn new(bag: PropertyBag) -> Self {
        Self { bag, consumed: Vec::new() }
    }

    /// Remove `key` and convert it. See the module docs for the policy.
    pub fn take<T: FieldValue>(&mut self, key: &str) -> Option<T> {
        let converted = match self.bag.get(key)? {
            Value::Null => None,
            value => match T::convert(value) {
                Some(v) => Some(v),
                None => {
                    tracing::trace!(
                        field = key,
                        expected = ?T::KIND,
                        found = value.type_name(),
                        "field kept as extended property"
                    );
                    return None;
                }
            },
        };
        self.bag.remove(key);
        self.consumed.push(key.to_owned());
        converted
    }

    /// Keys consumed so far, in consumption order.
    pub fn consumed(&self) -> &[String] {
        &self.consumed
    }

    /// Entries not yet consumed.
    pub fn remaining(&self) -> &PropertyBag {
        &self.bag
    }

    /// Hand back the residual bag and the consumed key list.
    pub fn finish(self) -> (PropertyBag, Vec<String>) {
        (self.bag, self.consumed)
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Outcome of extracting one element's properties into a variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub properties: ElementProperties,
    /// Keys that landed in named fields.
    pub consumed: Vec<String>,
}

/// Populate `variant` from a private copy of `source`.
///
/// `type_name` is the element's reported type and is kept on the root of
/// the variant even when it is more specific than the variant itself.
pub fn extract_properties(variant: VariantKind, type_name: &str, source: &PropertyBag) -> Extraction {
    let mut extractor = Extractor::new(source.clone());
    let mut properties = variant.extract(&mut extractor);
    let (residual, consumed) = extractor.finish();

    let root = properties.root_mut();
    root.type_name = type_name.to_owned();
    root.extended_properties = residual;

    Extraction { properties, consumed }
}

/// Collect the manifest of a variant struct, ancestors first.
pub fn manifest_of<T: VariantFields>() -> Vec<FieldSpec> {
    let mut out = Vec::new();
    T::manifest(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumValue;

    #[test]
    fn test_take_converts_and_removes() {
        let bag = PropertyBag::new().with("name", "orders").with("priority", 3);
        let mut x = Extractor::new(bag);
        assert_eq!(x.take::<String>("name"), Some("orders".to_string()));
        assert_eq!(x.take::<i32>("priority"), Some(3));
        assert_eq!(x.take::<String>("name"), None);
        let (rest, consumed) = x.finish();
        assert!(rest.is_empty());
        assert_eq!(consumed, vec!["name", "priority"]);
    }

    #[test]
    fn test_wrong_kind_stays_in_bag() {
        let bag = PropertyBag::new().with("priority", "urgent");
        let mut x = Extractor::new(bag);
        assert_eq!(x.take::<i32>("priority"), None);
        assert!(x.consumed().is_empty());
        assert_eq!(x.remaining().get("priority"), Some(&Value::from("urgent")));
    }

    #[test]
    fn test_null_is_consumed_as_absent() {
        let bag = PropertyBag::new().with("description", Value::Null);
        let mut x = Extractor::new(bag);
        assert_eq!(x.take::<String>("description"), None);
        assert_eq!(x.consumed(), ["description".to_string()]);
        assert!(x.remaining().is_empty());
    }

    #[test]
    fn test_collections_refuse_mixed_members() {
        let ok = Value::from(vec!["a", "b"]);
        assert_eq!(<Vec<String>>::convert(&ok), Some(vec!["a".into(), "b".into()]));
        let mixed = Value::List(vec![Value::from("a"), Value::Int(1)]);
        assert_eq!(<Vec<String>>::convert(&mixed), None);

        let map = Value::Map(PropertyBag::new().with("k", "v"));
        let converted = <BTreeMap<String, String>>::convert(&map).unwrap();
        assert_eq!(converted.get("k").map(String::as_str), Some("v"));
        assert_eq!(<BTreeMap<String, String>>::convert(&Value::Enum(EnumValue::new(0, "x"))), None);
    }

    #[test]
    fn test_int_range_checked_for_i32() {
        assert_eq!(i32::convert(&Value::Int(i64::MAX)), None);
        assert_eq!(i32::convert(&Value::Int(-4)), Some(-4));
    }
}
