//! Intermediate representation: the semantic description of a slide.
//!
//! The IR is authored (or generated) upstream and validated there; by the time
//! it reaches this crate, every element `type` is one of the five known kinds
//! and priorities are in `[0, 100]`. The engine reads only `type`, `priority`,
//! and `group` — `content`, `layout`, and `style` are carried so callers can
//! resolve hints back to IR fields without a second document.

use core_geometry::Rect;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SchemaError;
use crate::dom::SlideSize;

/// Semantic element kinds. `title`, `text`, and `bullets` carry rendered text
/// ("text types"); `decoration` is exempt from pair checks entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Title,
    Text,
    Bullets,
    Image,
    Decoration,
}

impl ElementType {
    /// Member of the text-type set `{title, text, bullets}`.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Text | Self::Bullets)
    }

    /// Body kinds for topology checks: `text` and `bullets`.
    pub fn is_body(self) -> bool {
        matches!(self, Self::Text | Self::Bullets)
    }
}

/// Intended layout of an element as authored in the IR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrLayout {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "zIndex", default)]
    pub z_index: i32,
}

impl IrLayout {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Authored style overrides. Only font metrics are named; anything else the
/// generator put there rides along untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IrStyle {
    #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(rename = "lineHeight", default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrElement {
    pub eid: String,
    #[serde(rename = "type")]
    pub kind: ElementType,
    /// Semantic importance in `[0, 100]`; drives font tiers and overlap
    /// ownership.
    pub priority: i64,
    #[serde(default)]
    pub content: Value,
    pub layout: IrLayout,
    #[serde(default)]
    pub style: IrStyle,
    /// Elements sharing a non-empty group are intentionally co-located
    /// (e.g. text on a shape) and bypass pair checks against each other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl IrElement {
    /// The group tag, treating an empty string as absent.
    pub fn group_tag(&self) -> Option<&str> {
        match self.group.as_deref() {
            Some("") | None => None,
            Some(g) => Some(g),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrDocument {
    #[serde(default)]
    pub slide: SlideSize,
    pub elements: Vec<IrElement>,
}

impl IrDocument {
    pub fn from_json_str(s: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(s).map_err(SchemaError::Ir)
    }
}
