//! Homogeneous collections of sibling elements.

use crate::errors::SportsMlError;
use crate::mapping::{MappedEntity, OutputMapping};
use crate::xml::XmlElement;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

/// Zero or more entities of one type, built from sibling elements in
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: MappedEntity> Collection<T> {
    /// Build one entity per element. Order is preserved; nothing is
    /// filtered or deduplicated.
    pub fn from_elements<'a, I>(elements: I) -> Result<Self, SportsMlError>
    where
        I: IntoIterator<Item = &'a XmlElement>,
    {
        let items = elements
            .into_iter()
            .map(|element| T::from_element(Some(element)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    pub fn to_output_vec(&self) -> Vec<OutputMapping> {
        self.items.iter().map(MappedEntity::to_output).collect()
    }

    pub fn to_output_array(&self) -> Value {
        Value::Array(self.to_output_vec().into_iter().map(Value::Object).collect())
    }
}

impl<T> Collection<T> {
    pub fn is_present(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: MappedEntity> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(&item.to_output())?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{AttributeGroup, AttributeMapping, Attributes, MappingTable};
    use crate::xml::parse_str;
    use once_cell::sync::Lazy;
    use serde_json::json;

    static ITEM_ATTRIBUTES: AttributeGroup =
        AttributeGroup::new("item", &[AttributeMapping::text("key", "key")]);

    #[derive(Debug, Default, PartialEq)]
    struct Item {
        attributes: Attributes,
    }

    impl MappedEntity for Item {
        fn attribute_table() -> &'static MappingTable {
            static TABLE: Lazy<MappingTable> = Lazy::new(|| MappingTable::merge(&[&ITEM_ATTRIBUTES]));
            &TABLE
        }

        fn from_element(element: Option<&XmlElement>) -> Result<Self, SportsMlError> {
            Ok(Self {
                attributes: Attributes::extract(Self::attribute_table(), element)?,
            })
        }

        fn to_output(&self) -> OutputMapping {
            self.attributes.to_output()
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let root = parse_str(r#"<r><i key="c"/><i key="a"/><i/><i key="a"/></r>"#).unwrap();
        let items: Collection<Item> = Collection::from_elements(root.children_named("i")).unwrap();

        assert!(items.is_present());
        assert_eq!(items.len(), 4);
        assert_eq!(
            items.to_output_array(),
            json!([{ "key": "c" }, { "key": "a" }, {}, { "key": "a" }])
        );
        assert_eq!(serde_json::to_value(&items).unwrap(), items.to_output_array());
    }

    #[test]
    fn test_empty_collection_is_absent() {
        let items: Collection<Item> = Collection::from_elements(Vec::<&XmlElement>::new()).unwrap();
        assert!(!items.is_present());
        assert_eq!(items, Collection::default());
    }
}
