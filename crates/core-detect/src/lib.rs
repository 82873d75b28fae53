//! Geometric defect detectors.
//!
//! One module per defect family, each a pure function from the joined
//! [`SlideView`] (plus the engine configuration) to zero or more defects.
//! Detectors never read global state and never see each other's output; the
//! orchestrator fixes their execution order, which defines reporting order in
//! the diagnostics document.
//!
//! Shared conventions:
//! - Elements present in only one of DOM/IR never reach a detector (the join
//!   already dropped them).
//! - Pair scans run index-ordered `(i < j)` over the DOM array, which fixes
//!   every tie-break.
//! - Pixel fields in emitted defects are integers, rounded half away from
//!   zero at construction time.

pub mod bounds;
pub mod font;
pub mod overflow;
pub mod overlap;
pub mod topology;

pub use bounds::detect_out_of_bounds;
pub use font::detect_font_too_small;
pub use overflow::detect_content_overflow;
pub use overlap::detect_overlap;
pub use topology::detect_layout_topology;

#[cfg(test)]
pub(crate) mod testutil {
    //! Builders shared by the detector unit tests.

    use core_geometry::Rect;
    use core_schema::{
        ComputedStyle, DomDocument, DomElement, ElementType, IrDocument, IrElement, IrLayout,
        SlideSize,
    };
    use serde_json::Value;

    pub fn dom_el(eid: &str, x: f64, y: f64, w: f64, h: f64) -> DomElement {
        DomElement {
            eid: eid.into(),
            bbox: Rect::new(x, y, w, h),
            safe_box: None,
            content_box: None,
            z_index: 0,
            computed: ComputedStyle {
                font_size: 20.0,
                line_height: 1.2,
            },
        }
    }

    pub fn ir_el(eid: &str, kind: ElementType, priority: i64) -> IrElement {
        IrElement {
            eid: eid.into(),
            kind,
            priority,
            content: Value::Null,
            layout: IrLayout {
                x: 0.0,
                y: 0.0,
                w: 0.0,
                h: 0.0,
                z_index: 0,
            },
            style: Default::default(),
            group: None,
        }
    }

    pub fn docs(elements: Vec<(DomElement, IrElement)>) -> (DomDocument, IrDocument) {
        let (dom_els, ir_els): (Vec<_>, Vec<_>) = elements.into_iter().unzip();
        let mut dom = DomDocument {
            slide: SlideSize::default(),
            safe_padding: 8.0,
            elements: dom_els,
        };
        dom.reconcile_safe_boxes();
        let ir = IrDocument {
            slide: SlideSize::default(),
            elements: ir_els,
        };
        (dom, ir)
    }
}
