//! Joined DOM + IR view used by every detector and the conflict analyser.
//!
//! Elements are matched by `eid`. An eid present in only one document is not
//! an error — dependent checks simply never see it (logged at debug so a
//! mis-keyed extractor run is visible without aborting anything). Iteration
//! order follows the DOM element array, which fixes pair-scan tie-breaks.

use std::collections::HashMap;

use core_geometry::Rect;
use tracing::debug;

use crate::dom::{DomDocument, DomElement, SlideSize};
use crate::ir::{ElementType, IrDocument, IrElement};

/// One element as seen by both documents, with the safe box resolved once.
#[derive(Debug, Clone, Copy)]
pub struct ElementView<'a> {
    pub dom: &'a DomElement,
    pub ir: &'a IrElement,
    pub safe_box: Rect,
}

impl<'a> ElementView<'a> {
    pub fn eid(&self) -> &'a str {
        &self.dom.eid
    }

    pub fn kind(&self) -> ElementType {
        self.ir.kind
    }

    pub fn priority(&self) -> i64 {
        self.ir.priority
    }

    pub fn bbox(&self) -> Rect {
        self.dom.bbox
    }

    /// Measured stacking value (the DOM wins over authored IR layout).
    pub fn z_index(&self) -> i32 {
        self.dom.z_index
    }

    pub fn group_tag(&self) -> Option<&'a str> {
        self.ir.group_tag()
    }

    /// True when both elements carry the same non-empty group tag.
    pub fn same_group(&self, other: &ElementView<'_>) -> bool {
        match (self.group_tag(), other.group_tag()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// The joined slide: every eid present in both DOM and IR, in DOM order.
#[derive(Debug, Clone)]
pub struct SlideView<'a> {
    pub slide: SlideSize,
    pub safe_padding: f64,
    pub elements: Vec<ElementView<'a>>,
}

impl<'a> SlideView<'a> {
    pub fn join(dom: &'a DomDocument, ir: &'a IrDocument) -> Self {
        let by_eid: HashMap<&str, &IrElement> =
            ir.elements.iter().map(|el| (el.eid.as_str(), el)).collect();

        let mut elements = Vec::with_capacity(dom.elements.len());
        for dom_el in &dom.elements {
            match by_eid.get(dom_el.eid.as_str()) {
                Some(ir_el) => elements.push(ElementView {
                    dom: dom_el,
                    ir: ir_el,
                    safe_box: dom.safe_box_of(dom_el),
                }),
                None => {
                    debug!(target: "schema.join", eid = %dom_el.eid, "dom_element_without_ir");
                }
            }
        }
        if elements.len() < ir.elements.len() {
            for ir_el in &ir.elements {
                if !dom.elements.iter().any(|d| d.eid == ir_el.eid) {
                    debug!(target: "schema.join", eid = %ir_el.eid, "ir_element_without_dom");
                }
            }
        }

        Self {
            slide: dom.slide,
            safe_padding: dom.safe_padding,
            elements,
        }
    }

    pub fn get(&self, eid: &str) -> Option<&ElementView<'a>> {
        self.elements.iter().find(|el| el.eid() == eid)
    }
}
