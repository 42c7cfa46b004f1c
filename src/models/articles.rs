//! Editorial articles carried alongside the data.

use crate::mapping::{AttributeGroup, AttributeMapping, mapped_entity};
use crate::models::attributes::{COMMON_ATTRIBUTES, COVERAGE_ATTRIBUTES};
use crate::models::metadata::SportsContentCode;
use crate::models::newsml::SportsProperty;

static ARTICLE_METADATA_ATTRIBUTES: AttributeGroup = AttributeGroup::new(
    "articleMetadata",
    &[
        AttributeMapping::text("key", "key"),
        AttributeMapping::text("status", "status"),
        AttributeMapping::text("language", "language"),
        AttributeMapping::text("date-time", "dateTime"),
        AttributeMapping::text("comment", "comment"),
    ],
);

mapped_entity! {
    pub struct ArticleMetadata {
        groups: [&COMMON_ATTRIBUTES, &COVERAGE_ATTRIBUTES, &ARTICLE_METADATA_ATTRIBUTES],
        many {
            sports_content_codes: SportsContentCode
                => "sports-content-codes"/"sports-content-code" as "sportsContentCodes",
            sports_properties: SportsProperty => "sports-property" as "sportsProperties",
        }
    }
}

mapped_entity! {
    pub struct Article {
        groups: [&COMMON_ATTRIBUTES],
        one {
            article_metadata: ArticleMetadata => "article-metadata" as "articleMetadata",
        }
    }
}
