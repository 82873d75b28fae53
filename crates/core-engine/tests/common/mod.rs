#![allow(dead_code)] // Shared across integration test binaries; each uses a subset of helpers.

use core_geometry::Rect;
use core_schema::{
    ComputedStyle, DomDocument, DomElement, ElementType, IrDocument, IrElement, IrLayout,
    SlideSize,
};
use serde_json::Value;

/// Everything needed to place one element in both documents.
pub struct Fixture {
    pub eid: &'static str,
    pub kind: ElementType,
    pub priority: i64,
    pub bbox: Rect,
    pub font_size: f64,
    pub z_index: i32,
    pub content_box: Option<Rect>,
    pub group: Option<&'static str>,
}

impl Fixture {
    pub fn new(eid: &'static str, kind: ElementType, priority: i64, bbox: Rect) -> Self {
        Self {
            eid,
            kind,
            priority,
            bbox,
            font_size: 20.0,
            z_index: 0,
            content_box: None,
            group: None,
        }
    }

    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = px;
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    pub fn content_box(mut self, rect: Rect) -> Self {
        self.content_box = Some(rect);
        self
    }

    pub fn group(mut self, tag: &'static str) -> Self {
        self.group = Some(tag);
        self
    }
}

/// Build matched DOM and IR documents for a 1280×720 slide, safe padding 8.
pub fn slide(fixtures: Vec<Fixture>) -> (DomDocument, IrDocument) {
    let mut dom_elements = Vec::new();
    let mut ir_elements = Vec::new();
    for s in fixtures {
        dom_elements.push(DomElement {
            eid: s.eid.into(),
            bbox: s.bbox,
            safe_box: None,
            content_box: s.content_box,
            z_index: s.z_index,
            computed: ComputedStyle {
                font_size: s.font_size,
                line_height: 1.2,
            },
        });
        ir_elements.push(IrElement {
            eid: s.eid.into(),
            kind: s.kind,
            priority: s.priority,
            content: Value::Null,
            layout: IrLayout {
                x: s.bbox.x,
                y: s.bbox.y,
                w: s.bbox.w,
                h: s.bbox.h,
                z_index: s.z_index,
            },
            style: Default::default(),
            group: s.group.map(String::from),
        });
    }
    let mut dom = DomDocument {
        slide: SlideSize::default(),
        safe_padding: 8.0,
        elements: dom_elements,
    };
    dom.reconcile_safe_boxes();
    let ir = IrDocument {
        slide: SlideSize::default(),
        elements: ir_elements,
    };
    (dom, ir)
}
