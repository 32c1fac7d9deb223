//! Link values returned by page link extraction

use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};

/// How a destination inside the document should be positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DestinationKind {
    /// No positioning information
    #[default]
    Unknown,
    /// Keep the current zoom, scroll to `left`/`top`
    Xyz,
    /// Fit the whole page
    Fit,
    /// Fit the page width
    FitH,
    /// Fit the page height
    FitV,
    /// Fit a rectangle
    FitR,
    /// Fit the bounding box of the page contents
    FitB,
    /// Fit the width of the bounding box
    FitBH,
    /// Fit the height of the bounding box
    FitBV,
}

/// Where activating a link leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LinkTarget {
    /// Link without an action
    None,
    /// Jump to a page of the same document
    GotoDestination {
        page_index: usize,
        left: Option<f64>,
        top: Option<f64>,
        kind: DestinationKind,
    },
    /// Jump to a page of another file
    GotoRemote {
        file: String,
        page_index: Option<usize>,
    },
    /// Open a URI
    Uri(String),
    /// Launch an external file or program
    Launch(String),
    /// Named action (e.g. `NextPage`)
    Named(String),
}

/// A link found on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Active area of the link.
    pub position: Rectangle,
    /// Where the link leads.
    pub target: LinkTarget,
}

impl Link {
    pub fn new(position: Rectangle, target: LinkTarget) -> Self {
        Self { position, target }
    }

    /// URI of the link, if it is a web link.
    pub fn uri(&self) -> Option<&str> {
        match &self.target {
            LinkTarget::Uri(uri) => Some(uri),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_accessor() {
        let link = Link::new(
            Rectangle::new(10.0, 80.0, 200.0, 100.0),
            LinkTarget::Uri("https://example.org".into()),
        );
        assert_eq!(link.uri(), Some("https://example.org"));

        let named = Link::new(Rectangle::default(), LinkTarget::Named("NextPage".into()));
        assert_eq!(named.uri(), None);
    }

    #[test]
    fn test_target_serializes_tagged() {
        let target = LinkTarget::GotoDestination {
            page_index: 4,
            left: None,
            top: Some(720.0),
            kind: DestinationKind::Xyz,
        };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["type"], "goto_destination");
        assert_eq!(json["value"]["page_index"], 4);
        assert_eq!(json["value"]["kind"], "Xyz");

        let uri = serde_json::to_value(LinkTarget::Uri("https://example.org".into())).unwrap();
        assert_eq!(uri["type"], "uri");
        assert_eq!(uri["value"], "https://example.org");
    }
}
