//! The attribute/element mapping mechanism shared by every SportsML type.
//!
//! A type declares which attribute groups it is composed of and which child
//! elements it owns; construction from an [`XmlElement`] and projection to an
//! [`OutputMapping`] are derived from those declarations. Most types are
//! generated with [`mapped_entity!`]; types with unusual shapes (element text,
//! for instance) implement [`MappedEntity`] by hand.

pub mod collection;
pub mod table;

pub use collection::Collection;
pub use table::{AttributeGroup, AttributeMapping, Attributes, MappingTable, ScalarValue, ValueKind};

use crate::errors::SportsMlError;
use crate::xml::XmlElement;

/// Ordered JSON object holding only the fields that were present.
pub type OutputMapping = serde_json::Map<String, serde_json::Value>;

/// Uniform construction and projection contract for a SportsML element type.
pub trait MappedEntity: Sized {
    /// Merged attribute table for this type, computed once.
    fn attribute_table() -> &'static MappingTable;

    /// Build from an element, or from `None` when the element is absent, in
    /// which case nothing is recorded.
    fn from_element(element: Option<&XmlElement>) -> Result<Self, SportsMlError>;

    /// Sparse projection of the recorded values and present nested fields.
    fn to_output(&self) -> OutputMapping;

    fn is_present(&self) -> bool {
        !self.to_output().is_empty()
    }
}

/// Declares a struct implementing [`MappedEntity`] and `serde::Serialize`.
///
/// ```ignore
/// mapped_entity! {
///     pub struct Team {
///         groups: [&COMMON_ATTRIBUTES],
///         one { team_metadata: TeamMetadata => "team-metadata" as "teamMetadata" }
///         many { players: Player => "player" as "players" }
///     }
/// }
/// ```
///
/// `groups` are folded left to right, so later groups override earlier ones.
/// `one` fields are built from the first matching child (or from absence);
/// `many` fields from every element reached by the `/`-separated path.
/// Nested fields are emitted after attributes, in declaration order, and only
/// when present.
macro_rules! mapped_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            groups: [$($group:expr),* $(,)?],
            $(one {
                $($one_field:ident : $one_ty:ty => $one_tag:literal as $one_key:literal),* $(,)?
            })?
            $(many {
                $($many_field:ident : $many_ty:ty => $($many_seg:literal)/+ as $many_key:literal),* $(,)?
            })?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            pub attributes: $crate::mapping::Attributes,
            $($(pub $one_field: $one_ty,)*)?
            $($(pub $many_field: $crate::mapping::Collection<$many_ty>,)*)?
        }

        impl $crate::mapping::MappedEntity for $name {
            fn attribute_table() -> &'static $crate::mapping::MappingTable {
                static TABLE: ::once_cell::sync::Lazy<$crate::mapping::MappingTable> =
                    ::once_cell::sync::Lazy::new(|| {
                        $crate::mapping::MappingTable::merge(&[$($group),*])
                    });
                &TABLE
            }

            fn from_element(
                element: Option<&$crate::xml::XmlElement>,
            ) -> Result<Self, $crate::errors::SportsMlError> {
                Ok(Self {
                    attributes: $crate::mapping::Attributes::extract(
                        <Self as $crate::mapping::MappedEntity>::attribute_table(),
                        element,
                    )?,
                    $($($one_field: <$one_ty as $crate::mapping::MappedEntity>::from_element(
                        element.and_then(|e| e.child($one_tag)),
                    )?,)*)?
                    $($($many_field: $crate::mapping::Collection::from_elements(
                        element
                            .map(|e| e.children_at(&[$($many_seg),+]))
                            .unwrap_or_default(),
                    )?,)*)?
                })
            }

            fn to_output(&self) -> $crate::mapping::OutputMapping {
                #[allow(unused_mut)]
                let mut output = self.attributes.to_output();
                $($(
                    let nested = $crate::mapping::MappedEntity::to_output(&self.$one_field);
                    if !nested.is_empty() {
                        output.insert($one_key.to_string(), ::serde_json::Value::Object(nested));
                    }
                )*)?
                $($(
                    if self.$many_field.is_present() {
                        output.insert($many_key.to_string(), self.$many_field.to_output_array());
                    }
                )*)?
                output
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(
                    &$crate::mapping::MappedEntity::to_output(self),
                    serializer,
                )
            }
        }
    };
}

pub(crate) use mapped_entity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_str;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    static SHARED: AttributeGroup = AttributeGroup::new(
        "shared",
        &[
            AttributeMapping::text("id", "id"),
            AttributeMapping::text("rank", "rank"),
        ],
    );

    static LEAF_OWN: AttributeGroup = AttributeGroup::new(
        "leaf",
        &[
            AttributeMapping::integer("rank", "position"),
            AttributeMapping::text("key", "key"),
        ],
    );

    mapped_entity! {
        struct Leaf {
            groups: [&SHARED, &LEAF_OWN],
        }
    }

    mapped_entity! {
        struct Node {
            groups: [&SHARED],
            one {
                leaf: Leaf => "leaf" as "leaf",
            }
            many {
                nodes: Node => "node" as "nodes",
                wrapped: Leaf => "leaves"/"leaf" as "wrappedLeaves",
            }
        }
    }

    fn node(xml: &str) -> Node {
        Node::from_element(Some(&parse_str(xml).unwrap())).unwrap()
    }

    #[test]
    fn test_generated_table_merges_groups() {
        let table = Leaf::attribute_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("rank").unwrap().kind, ValueKind::Integer);
        assert!(std::ptr::eq(table, Leaf::attribute_table()));
    }

    #[test]
    fn test_sparse_projection_with_nested_fields() {
        let parsed = node(
            r#"<node id="n1">
  <leaf rank="3" key="k"/>
  <node id="n2"><node/></node>
  <leaves><leaf key="w1"/><leaf key="w2"/></leaves>
</node>"#,
        );

        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({
                "id": "n1",
                "leaf": { "position": 3, "key": "k" },
                "nodes": [ { "id": "n2", "nodes": [ {} ] } ],
                "wrappedLeaves": [ { "key": "w1" }, { "key": "w2" } ]
            })
        );
    }

    #[test]
    fn test_absent_children_are_omitted() {
        let parsed = node(r#"<node><leaf/></node>"#);
        assert!(!parsed.leaf.is_present());
        assert!(!parsed.nodes.is_present());
        assert!(!parsed.is_present());
        assert_eq!(parsed.to_output(), OutputMapping::new());
    }

    #[test]
    fn test_absent_source_builds_empty_entity() {
        let parsed = Node::from_element(None).unwrap();
        assert_eq!(parsed, Node::default());
        assert!(!parsed.is_present());
    }

    #[test]
    fn test_nested_coercion_error_aborts_construction() {
        let result = Node::from_element(Some(
            &parse_str(r#"<node><node><leaf rank="first"/></node></node>"#).unwrap(),
        ));
        assert!(matches!(result, Err(SportsMlError::AttributeCoercion { .. })));
    }
}
