//! Document root detection.
//!
//! A SportsML document arrives either as a bare `sports-content` element or
//! wrapped in a NewsML-G2 `newsItem`. Both resolve to one [`SportsContent`].

use crate::errors::SportsMlError;
use crate::mapping::MappedEntity;
use crate::models::SportsContent;
use crate::xml::{self, XmlElement};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The IPTC NewsML-G2 namespace SportsML-G2 elements live in.
pub const NEWSMLG2_NS: &str = "http://iptc.org/std/nar/2006-10-01/";

const SPORTS_CONTENT: &str = "sports-content";
const NEWS_ITEM: &str = "newsItem";

/// Kind of root element a document was recognised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// `sports-content` at the root.
    SportsContent,
    /// `newsItem` wrapper with `sports-content` somewhere inside it.
    NewsItem,
}

impl DocumentKind {
    pub fn name(&self) -> &'static str {
        match self {
            DocumentKind::SportsContent => "sports-content",
            DocumentKind::NewsItem => "NewsML-G2 newsItem",
        }
    }
}

/// Classify a root element. Elements in no namespace are accepted as well as
/// elements in the NewsML-G2 namespace.
pub fn detect_kind(root: &XmlElement) -> Option<DocumentKind> {
    if !matches!(root.namespace(), None | Some(NEWSMLG2_NS)) {
        return None;
    }
    match root.name() {
        SPORTS_CONTENT => Some(DocumentKind::SportsContent),
        NEWS_ITEM => Some(DocumentKind::NewsItem),
        _ => None,
    }
}

/// The element a [`SportsContent`] is built from: the root itself, or the
/// first `sports-content` found depth-first inside a `newsItem`.
pub fn effective_root(root: &XmlElement) -> Result<&XmlElement, SportsMlError> {
    let kind = detect_kind(root).ok_or_else(|| {
        SportsMlError::UnrecognizedDocument(format!(
            "root element <{}> ({}) is neither sports-content nor newsItem",
            root.name(),
            root.namespace().unwrap_or("no namespace")
        ))
    })?;
    debug!("Detected {} document", kind.name());

    match kind {
        DocumentKind::SportsContent => Ok(root),
        DocumentKind::NewsItem => root
            .find_descendant(SPORTS_CONTENT, root.namespace())
            .ok_or_else(|| {
                SportsMlError::UnrecognizedDocument(
                    "newsItem does not contain a sports-content element".to_string(),
                )
            }),
    }
}

/// Build the object graph from an already parsed tree.
pub fn from_root(root: &XmlElement) -> Result<SportsContent, SportsMlError> {
    SportsContent::from_element(Some(effective_root(root)?))
}

/// Parse a document held in memory.
pub fn parse_str(text: &str) -> Result<SportsContent, SportsMlError> {
    from_root(&xml::parse_str(text)?)
}

/// Parse a document from any reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<SportsContent, SportsMlError> {
    from_root(&xml::parse_reader(reader)?)
}

/// Parse the document stored at `path`.
pub fn parse_file(path: &Path) -> Result<SportsContent, SportsMlError> {
    info!("Reading {}", path.display());
    let file = File::open(path).map_err(|e| {
        SportsMlError::Io(e, format!("Failed to open input file {}", path.display()))
    })?;
    parse_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOX_SCORE: &str = r#"<?xml version="1.0"?>
<sports-content xmlns="http://iptc.org/std/nar/2006-10-01/">
  <sports-metadata date-time="2015-02-02T00:35:00-05:00" doc-id="xt.22956338-box" language="en-US" fixture-key="spfixt:event-stats" document-class="spct:event-summary">
    <catalogRef href="http://www.iptc.org/std/catalog/catalog.IPTC-Sports_1.xml"/>
  </sports-metadata>
  <sports-event>
    <event-metadata key="vendevent:l.nfl.com-2014-e.4481" temporal-unit-value="vendor:l.nfl.com-2014-e.4481" event-status="speventstatus:post-event" duration="PT3H36M" start-date-time="2015-02-01T18:30:00-05:00">
      <sports-content-codes/>
    </event-metadata>
  </sports-event>
</sports-content>"#;

    #[test]
    fn test_box_score_exact_output() {
        let content = parse_str(BOX_SCORE).unwrap();
        assert_eq!(
            content.to_json(true).unwrap(),
            r#"{
    "sportsMetadata": {
        "docId": "xt.22956338-box",
        "dateTime": "2015-02-02T00:35:00-05:00",
        "language": "en-US",
        "documentClass": "spct:event-summary",
        "fixtureKey": "spfixt:event-stats",
        "catalogRefs": [
            {
                "href": "http://www.iptc.org/std/catalog/catalog.IPTC-Sports_1.xml"
            }
        ]
    },
    "sportsEvents": [
        {
            "eventMetadata": {
                "startDateTime": "2015-02-01T18:30:00-05:00",
                "temporalUnitValue": "vendor:l.nfl.com-2014-e.4481",
                "key": "vendevent:l.nfl.com-2014-e.4481",
                "eventStatus": "speventstatus:post-event",
                "duration": "PT3H36M"
            }
        }
    ]
}"#
        );
    }

    #[test]
    fn test_news_item_matches_bare_payload() {
        let payload = BOX_SCORE.trim_start_matches(r#"<?xml version="1.0"?>"#);
        let wrapped = format!(
            r#"<newsItem xmlns="http://iptc.org/std/nar/2006-10-01/" guid="urn:test" version="1">
  <itemMeta><itemClass qcode="ninat:text"/></itemMeta>
  <contentSet><inlineXML contenttype="application/sportsml+xml">{}</inlineXML></contentSet>
</newsItem>"#,
            payload.replace(r#" xmlns="http://iptc.org/std/nar/2006-10-01/""#, "")
        );

        assert_eq!(parse_str(&wrapped).unwrap(), parse_str(BOX_SCORE).unwrap());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = parse_str(BOX_SCORE).unwrap().to_json(false).unwrap();
        let second = parse_str(BOX_SCORE).unwrap().to_json(false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_root() {
        let err = parse_str(r#"<rss version="2.0"><channel/></rss>"#).unwrap_err();
        assert!(matches!(err, SportsMlError::UnrecognizedDocument(_)));
        assert!(err.is_document_format_error());
    }

    #[test]
    fn test_foreign_namespace_root_is_rejected() {
        let err = parse_str(r#"<sports-content xmlns="http://example.com/other"/>"#).unwrap_err();
        assert!(matches!(err, SportsMlError::UnrecognizedDocument(_)));
    }

    #[test]
    fn test_news_item_without_payload() {
        let err = parse_str(r#"<newsItem><contentSet/></newsItem>"#).unwrap_err();
        assert!(matches!(err, SportsMlError::UnrecognizedDocument(_)));
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_str("<sports-content><sports-event></sports-content>").unwrap_err();
        assert!(matches!(err, SportsMlError::MalformedXml(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_file(Path::new("/definitely/not/here.xml")).unwrap_err();
        assert!(matches!(err, SportsMlError::Io(..)));
    }
}
