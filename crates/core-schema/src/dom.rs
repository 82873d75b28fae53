//! Measured DOM document: what the headless renderer actually laid out.
//!
//! Input contract (abridged): the extractor walks every `data-eid` element
//! under `#slide` and records its `getBoundingClientRect()` in slide-local
//! coordinates (`bbox`), the union of its text range client rects
//! (`contentBox`, null when no inline content rendered), the computed
//! `z-index` (0 when `auto`), and computed font metrics with `lineHeight`
//! normalised to a ratio (`"normal"` → 1.2, px values → px / fontSize).
//!
//! `safeBox` is `bbox` inflated by the document's `safe_padding` on all four
//! sides. Extractors usually ship it precomputed; when absent,
//! [`DomDocument::from_json_str`] reconciles it so the invariant
//! `safeBox.x = bbox.x − safe_padding` (etc.) holds for every element.

use core_geometry::{Rect, inflate};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

pub const DEFAULT_SLIDE_W: f64 = 1280.0;
pub const DEFAULT_SLIDE_H: f64 = 720.0;
pub const DEFAULT_SAFE_PADDING: f64 = 8.0;

/// Fixed slide dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    #[serde(default = "default_slide_w")]
    pub w: f64,
    #[serde(default = "default_slide_h")]
    pub h: f64,
}

impl Default for SlideSize {
    fn default() -> Self {
        Self {
            w: DEFAULT_SLIDE_W,
            h: DEFAULT_SLIDE_H,
        }
    }
}

fn default_slide_w() -> f64 {
    DEFAULT_SLIDE_W
}

fn default_slide_h() -> f64 {
    DEFAULT_SLIDE_H
}

fn default_safe_padding() -> f64 {
    DEFAULT_SAFE_PADDING
}

/// Computed font metrics for one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedStyle {
    /// Font size in pixels; the extractor guarantees `> 0`.
    #[serde(rename = "fontSize")]
    pub font_size: f64,
    /// Line height as a ratio of the font size.
    #[serde(rename = "lineHeight", default = "default_line_height")]
    pub line_height: f64,
}

fn default_line_height() -> f64 {
    1.2
}

/// One measured element, keyed by its stable `eid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomElement {
    pub eid: String,
    pub bbox: Rect,
    /// `bbox` inflated by the document's safe padding. Optional on the wire;
    /// reconciled at parse time, so it is always present after
    /// [`DomDocument::from_json_str`].
    #[serde(rename = "safeBox", default, skip_serializing_if = "Option::is_none")]
    pub safe_box: Option<Rect>,
    /// Union of the element's text client rects; `None` when no inline
    /// content rendered.
    #[serde(rename = "contentBox", default, skip_serializing_if = "Option::is_none")]
    pub content_box: Option<Rect>,
    #[serde(rename = "zIndex", default)]
    pub z_index: i32,
    pub computed: ComputedStyle,
}

/// The full measured document for one rendered slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomDocument {
    #[serde(default)]
    pub slide: SlideSize,
    #[serde(default = "default_safe_padding")]
    pub safe_padding: f64,
    pub elements: Vec<DomElement>,
}

impl DomDocument {
    /// Parse from JSON, filling defaults and reconciling missing safe boxes.
    pub fn from_json_str(s: &str) -> Result<Self, SchemaError> {
        let mut doc: DomDocument = serde_json::from_str(s).map_err(SchemaError::Dom)?;
        doc.reconcile_safe_boxes();
        Ok(doc)
    }

    /// Fill `safeBox` from `bbox` wherever the extractor omitted it.
    pub fn reconcile_safe_boxes(&mut self) {
        let pad = self.safe_padding;
        for el in &mut self.elements {
            if el.safe_box.is_none() {
                el.safe_box = Some(inflate(&el.bbox, pad));
            }
        }
    }

    /// Resolved safe box for an element (computing on the fly if the document
    /// was built by hand and never reconciled).
    pub fn safe_box_of(&self, el: &DomElement) -> Rect {
        el.safe_box
            .unwrap_or_else(|| inflate(&el.bbox, self.safe_padding))
    }
}
