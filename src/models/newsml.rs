//! NewsML-G2 building blocks reused by SportsML: concept names, catalog
//! references and flexible locations.

use crate::errors::SportsMlError;
use crate::mapping::{
    AttributeGroup, AttributeMapping, Attributes, MappedEntity, MappingTable, OutputMapping,
    mapped_entity,
};
use crate::xml::XmlElement;
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use serde_json::Value;

static CONCEPT_NAME_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "ConceptNameType",
    &[
        AttributeMapping::text("role", "role"),
        AttributeMapping::text("roleuri", "roleuri"),
        AttributeMapping::text("part", "part"),
        AttributeMapping::text("parturi", "parturi"),
        AttributeMapping::text("xml:lang", "lang"),
    ],
);

/// A natural language name for a concept. The element text becomes `name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Name {
    pub attributes: Attributes,
    pub name: Option<String>,
}

impl MappedEntity for Name {
    fn attribute_table() -> &'static MappingTable {
        static TABLE: Lazy<MappingTable> =
            Lazy::new(|| MappingTable::merge(&[&CONCEPT_NAME_ATTRIBUTES]));
        &TABLE
    }

    fn from_element(element: Option<&XmlElement>) -> Result<Self, SportsMlError> {
        Ok(Self {
            attributes: Attributes::extract(Self::attribute_table(), element)?,
            name: element
                .map(XmlElement::text)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        })
    }

    fn to_output(&self) -> OutputMapping {
        let mut output = self.attributes.to_output();
        if let Some(name) = &self.name {
            output.insert("name".to_string(), Value::String(name.clone()));
        }
        output
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_output().serialize(serializer)
    }
}

static CATALOG_REF_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "catalogRef",
    &[
        AttributeMapping::text("href", "href"),
        AttributeMapping::text("title", "title"),
    ],
);

mapped_entity! {
    /// A hyperlink to a remote set of scheme alias declarations.
    pub struct CatalogRef {
        groups: [&CATALOG_REF_ATTRIBUTES],
    }
}

static FLEX_PROPERTY_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "FlexPropType",
    &[
        AttributeMapping::text("qcode", "qcode"),
        AttributeMapping::text("uri", "uri"),
        AttributeMapping::text("literal", "literal"),
        AttributeMapping::text("type", "type"),
        AttributeMapping::text("typeuri", "typeuri"),
    ],
);

mapped_entity! {
    /// Geopolitical area or point of interest, controlled or free-text.
    pub struct FlexLocation {
        groups: [&FLEX_PROPERTY_ATTRIBUTES],
        many {
            names: Name => "name" as "names",
        }
    }
}

static SPORTS_PROPERTY_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "sportsProperty",
    &[
        AttributeMapping::text("formal-name", "formalName"),
        AttributeMapping::text("value", "value"),
        AttributeMapping::text("value-type", "valueType"),
    ],
);

mapped_entity! {
    /// Open-ended typed property for data the vocabulary has no slot for.
    pub struct SportsProperty {
        groups: [&FLEX_PROPERTY_ATTRIBUTES, &SPORTS_PROPERTY_ATTRIBUTES],
        many {
            names: Name => "name" as "names",
        }
    }
}
