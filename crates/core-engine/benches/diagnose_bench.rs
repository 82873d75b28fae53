//! Full-pass benchmark over a busy 24-element slide (overlapping columns,
//! small fonts, one off-slide element) — the upper end of realistic input.

use criterion::{Criterion, criterion_group, criterion_main};

use core_config::EngineConfig;
use core_engine::diagnose;
use core_geometry::Rect;
use core_schema::{
    ComputedStyle, DomDocument, DomElement, ElementType, IrDocument, IrElement, IrLayout,
    SlideSize,
};
use serde_json::Value;

fn busy_slide() -> (DomDocument, IrDocument) {
    let mut dom_elements = Vec::new();
    let mut ir_elements = Vec::new();
    for i in 0..24usize {
        let eid = format!("e{i}");
        let col = (i % 4) as f64;
        let row = (i / 4) as f64;
        // Columns deliberately placed close enough that neighbours overlap.
        let bbox = Rect::new(40.0 + col * 290.0, 30.0 + row * 110.0, 320.0, 100.0);
        dom_elements.push(DomElement {
            eid: eid.clone(),
            bbox,
            safe_box: None,
            content_box: Some(Rect::new(bbox.x + 8.0, bbox.y + 8.0, 300.0, 80.0)),
            z_index: 0,
            computed: ComputedStyle {
                font_size: if i % 5 == 0 { 12.0 } else { 20.0 },
                line_height: 1.2,
            },
        });
        ir_elements.push(IrElement {
            eid,
            kind: match i % 4 {
                0 => ElementType::Title,
                1 => ElementType::Text,
                2 => ElementType::Bullets,
                _ => ElementType::Image,
            },
            priority: ((i * 7) % 101) as i64,
            content: Value::Null,
            layout: IrLayout {
                x: bbox.x,
                y: bbox.y,
                w: bbox.w,
                h: bbox.h,
                z_index: 0,
            },
            style: Default::default(),
            group: None,
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

fn bench_diagnose(c: &mut Criterion) {
    let (dom, ir) = busy_slide();
    let cfg = EngineConfig::default();
    c.bench_function("diagnose_busy_slide", |b| {
        b.iter(|| diagnose(std::hint::black_box(&dom), std::hint::black_box(&ir), &cfg))
    });
}

criterion_group!(benches, bench_diagnose);
criterion_main!(benches);
