//! Attribute-mapping tables and the values recorded against them.

use crate::errors::SportsMlError;
use crate::mapping::OutputMapping;
use crate::xml::XmlElement;
use serde_json::Value;
use std::fmt;

/// How a recorded attribute value is projected into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Opaque string, emitted exactly as read.
    #[default]
    Text,
    /// Parsed as a signed integer and emitted as a JSON number.
    Integer,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => f.write_str("string"),
            ValueKind::Integer => f.write_str("integer"),
        }
    }
}

/// One declared attribute: wire name, output key and value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMapping {
    pub source: &'static str,
    pub output: &'static str,
    pub kind: ValueKind,
}

impl AttributeMapping {
    pub const fn text(source: &'static str, output: &'static str) -> Self {
        Self {
            source,
            output,
            kind: ValueKind::Text,
        }
    }

    pub const fn integer(source: &'static str, output: &'static str) -> Self {
        Self {
            source,
            output,
            kind: ValueKind::Integer,
        }
    }
}

/// A named, reusable set of attribute mappings (an XML Schema attribute
/// group, or the attributes a single element type adds on its own).
#[derive(Debug)]
pub struct AttributeGroup {
    pub name: &'static str,
    pub mappings: &'static [AttributeMapping],
}

impl AttributeGroup {
    pub const fn new(name: &'static str, mappings: &'static [AttributeMapping]) -> Self {
        Self { name, mappings }
    }
}

/// The fully merged attribute table of one concrete entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    mappings: Vec<AttributeMapping>,
}

impl MappingTable {
    /// Fold `groups` in order into one table.
    ///
    /// A source key declared again by a later group replaces the earlier
    /// output key and kind but keeps the earlier position, so output order
    /// follows first declaration.
    pub fn merge(groups: &[&AttributeGroup]) -> Self {
        let mut mappings: Vec<AttributeMapping> = Vec::new();
        for group in groups {
            for mapping in group.mappings {
                match mappings.iter_mut().find(|m| m.source == mapping.source) {
                    Some(existing) => *existing = *mapping,
                    None => mappings.push(*mapping),
                }
            }
        }
        Self { mappings }
    }

    pub fn get(&self, source: &str) -> Option<&AttributeMapping> {
        self.mappings.iter().find(|m| m.source == source)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeMapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// A coerced attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    Text(String),
    Integer(i64),
}

impl ScalarValue {
    fn coerce(
        element: &XmlElement,
        mapping: &AttributeMapping,
        raw: &str,
    ) -> Result<Self, SportsMlError> {
        match mapping.kind {
            ValueKind::Text => Ok(ScalarValue::Text(raw.to_string())),
            ValueKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(ScalarValue::Integer)
                .map_err(|_| SportsMlError::AttributeCoercion {
                    element: element.name().to_string(),
                    key: mapping.source.to_string(),
                    kind: mapping.kind,
                    value: raw.to_string(),
                }),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            ScalarValue::Integer(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Integer(i) => Some(*i),
            ScalarValue::Text(_) => None,
        }
    }
}

impl From<&ScalarValue> for Value {
    fn from(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Text(s) => Value::String(s.clone()),
            ScalarValue::Integer(i) => Value::from(*i),
        }
    }
}

/// The attribute values an entity recorded at construction, in table order.
///
/// Attributes missing from the element, or present with an empty value, are
/// not recorded at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: Vec<(AttributeMapping, ScalarValue)>,
}

impl Attributes {
    pub fn extract(
        table: &MappingTable,
        element: Option<&XmlElement>,
    ) -> Result<Self, SportsMlError> {
        let Some(element) = element else {
            return Ok(Self::default());
        };

        let mut values = Vec::new();
        for mapping in table.iter() {
            match element.attribute(mapping.source) {
                Some(raw) if !raw.is_empty() => {
                    values.push((*mapping, ScalarValue::coerce(element, mapping, raw)?));
                }
                _ => {}
            }
        }
        Ok(Self { values })
    }

    /// Recorded value for a wire attribute name.
    pub fn get(&self, source: &str) -> Option<&ScalarValue> {
        self.values
            .iter()
            .find(|(m, _)| m.source == source)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_output(&self) -> OutputMapping {
        self.values
            .iter()
            .map(|(mapping, value)| (mapping.output.to_string(), Value::from(value)))
            .collect()
    }
}
