use crate::errors::SportsMlError;
use crate::mapping::mapped_entity;
use crate::models::articles::Article;
use crate::models::events::SportsEvent;
use crate::models::metadata::SportsMetadata;
use crate::models::schedules::Schedule;
use crate::models::standings::Standing;
use crate::models::statistics::Statistic;
use crate::models::tournaments::Tournament;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;

mapped_entity! {
    /// The root of every SportsML document.
    pub struct SportsContent {
        groups: [],
        one {
            sports_metadata: SportsMetadata => "sports-metadata" as "sportsMetadata",
        }
        many {
            sports_events: SportsEvent => "sports-event" as "sportsEvents",
            tournaments: Tournament => "tournament" as "tournaments",
            schedules: Schedule => "schedule" as "schedules",
            standings: Standing => "standing" as "standings",
            statistics: Statistic => "statistic" as "statistics",
            articles: Article => "article" as "articles",
        }
    }
}

impl SportsContent {
    /// Serialize to a JSON string, indented by four spaces when `pretty`.
    pub fn to_json(&self, pretty: bool) -> Result<String, SportsMlError> {
        if !pretty {
            return Ok(serde_json::to_string(self)?);
        }
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(|e| {
            SportsMlError::Io(
                io::Error::new(io::ErrorKind::InvalidData, e),
                "JSON output is not valid UTF-8".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappedEntity;
    use crate::xml::parse_str;

    #[test]
    fn test_empty_document_serializes_to_empty_object() {
        let root = parse_str("<sports-content/>").unwrap();
        let content = SportsContent::from_element(Some(&root)).unwrap();
        assert_eq!(content.to_json(false).unwrap(), "{}");
        assert_eq!(content.to_json(true).unwrap(), "{}");
    }

    #[test]
    fn test_pretty_output_keeps_non_ascii_text() {
        let root = parse_str(
            r#"<sports-content><sports-metadata doc-id="Müller – 日本"/></sports-content>"#,
        )
        .unwrap();
        let content = SportsContent::from_element(Some(&root)).unwrap();
        assert_eq!(
            content.to_json(true).unwrap(),
            "{\n    \"sportsMetadata\": {\n        \"docId\": \"Müller – 日本\"\n    }\n}"
        );
    }

    #[test]
    fn test_compact_and_pretty_agree() {
        let root = parse_str(
            r#"<sports-content><sports-metadata doc-id="d.1"/><statistic type="leaders"/></sports-content>"#,
        )
        .unwrap();
        let content = SportsContent::from_element(Some(&root)).unwrap();
        let compact: serde_json::Value =
            serde_json::from_str(&content.to_json(false).unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&content.to_json(true).unwrap()).unwrap();
        assert_eq!(compact, pretty);
        assert!(content.to_json(true).unwrap().contains("\n    \"sportsMetadata\""));
    }
}
