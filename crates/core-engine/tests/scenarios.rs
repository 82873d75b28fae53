//! End-to-end contract scenarios for the diagnostics pass on a 1280×720
//! slide with safe padding 8.

mod common;

use common::{Fixture, slide};
use core_config::EngineConfig;
use core_engine::diagnose;
use core_geometry::Rect;
use core_schema::{DefectDetails, DefectKind, Edge, ElementType, HintAction, WarningKind};

#[test]
fn clean_slide_produces_empty_diagnostics() {
    let (dom, ir) = slide(vec![
        Fixture::new(
            "title",
            ElementType::Title,
            100,
            Rect::new(100.0, 50.0, 800.0, 80.0),
        )
        .font_size(44.0),
        Fixture::new(
            "text",
            ElementType::Text,
            60,
            Rect::new(100.0, 200.0, 800.0, 200.0),
        )
        .font_size(20.0),
    ]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    assert_eq!(diag.summary.defect_count, 0);
    assert_eq!(diag.summary.warning_count, 0);
    assert_eq!(diag.summary.total_severity, 0);
    assert!(diag.summary.conflict_graph.is_none());
}

#[test]
fn title_below_body_reports_topology_defect() {
    let (dom, ir) = slide(vec![
        Fixture::new(
            "title",
            ElementType::Title,
            100,
            Rect::new(100.0, 400.0, 800.0, 80.0),
        )
        .font_size(44.0),
        Fixture::new(
            "text",
            ElementType::Text,
            60,
            Rect::new(100.0, 100.0, 800.0, 200.0),
        ),
    ]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    assert_eq!(diag.summary.defect_count, 1);
    let d = &diag.defects[0];
    assert_eq!(d.kind, DefectKind::LayoutTopology);
    assert_eq!(d.severity, 1000);
    assert_eq!(
        d.details,
        DefectDetails::Topology {
            title_cy: 440,
            body_cy: 200
        }
    );
    let hint = d.hint.as_ref().unwrap();
    assert_eq!(hint.action, HintAction::MoveToTop);
    assert_eq!(hint.suggested_y, Some(12)); // max(0, 100 − 80 − 8)
    assert!(hint.validated);
}

#[test]
fn element_past_right_edge_reports_out_of_bounds() {
    let (dom, ir) = slide(vec![Fixture::new(
        "img",
        ElementType::Image,
        60,
        Rect::new(1200.0, 50.0, 200.0, 100.0),
    )]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    assert_eq!(diag.summary.defect_count, 1);
    let d = &diag.defects[0];
    assert_eq!(d.kind, DefectKind::OutOfBounds);
    assert_eq!(
        d.details,
        DefectDetails::OutOfBounds {
            edge: Edge::Right,
            by_px: 128
        }
    );
    let hint = d.hint.as_ref().unwrap();
    assert_eq!(hint.suggested_x, Some(1080));
    assert!(hint.validated);
}

#[test]
fn same_z_overlap_yields_defect_and_conflict_component() {
    let (dom, ir) = slide(vec![
        Fixture::new(
            "a",
            ElementType::Text,
            60,
            Rect::new(100.0, 100.0, 400.0, 200.0),
        )
        .z_index(10),
        Fixture::new(
            "b",
            ElementType::Text,
            100,
            Rect::new(300.0, 100.0, 400.0, 200.0),
        )
        .z_index(10),
    ]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    assert_eq!(diag.summary.defect_count, 1);
    assert_eq!(diag.summary.warning_count, 0);

    let d = &diag.defects[0];
    assert_eq!(d.kind, DefectKind::Overlap);
    assert_eq!(d.owner_eid.as_deref(), Some("a"));
    assert_eq!(d.other_eid.as_deref(), Some("b"));
    // 216 × 216 safe-box intersection, doubled for text.
    assert_eq!(d.severity, 93312);

    let graph = diag.summary.conflict_graph.as_ref().unwrap();
    assert_eq!(graph.len(), 1);
    let component = &graph[0];
    assert_eq!(component.eids, vec!["a", "b"]);
    assert_eq!(component.edges.len(), 1);
    let edge = &component.edges[0];
    assert_eq!(edge.overlap_area, 46656);
    assert_eq!(edge.separations.len(), 4);
    for pair in edge.separations.windows(2) {
        assert!(pair[0].cost_px <= pair[1].cost_px);
    }
    assert_eq!(component.envelopes.len(), 2);
}

#[test]
fn z_index_difference_downgrades_to_occlusion_warning() {
    let (dom, ir) = slide(vec![
        Fixture::new(
            "a",
            ElementType::Text,
            60,
            Rect::new(100.0, 100.0, 400.0, 200.0),
        )
        .z_index(10),
        Fixture::new(
            "b",
            ElementType::Text,
            100,
            Rect::new(300.0, 100.0, 400.0, 200.0),
        )
        .z_index(20),
    ]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    assert_eq!(diag.summary.defect_count, 0);
    assert_eq!(diag.summary.warning_count, 1);
    let w = &diag.warnings[0];
    assert_eq!(w.kind, WarningKind::OcclusionSuspected);
    assert_eq!(w.details.top_eid, "b");
    assert_eq!(diag.summary.warning_severity, 46656);
    assert!(diag.summary.conflict_graph.is_none());
}

#[test]
fn small_font_on_mid_priority_text() {
    let (dom, ir) = slide(vec![Fixture::new(
        "text",
        ElementType::Text,
        60,
        Rect::new(100.0, 200.0, 800.0, 200.0),
    )
    .font_size(12.0)]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    assert_eq!(diag.summary.defect_count, 1);
    let d = &diag.defects[0];
    assert_eq!(d.kind, DefectKind::FontTooSmall);
    assert_eq!(d.severity, 40); // round((16 − 12) × 10)
    let hint = d.hint.as_ref().unwrap();
    assert_eq!(hint.suggested_font_size, Some(16));
    assert!(hint.validated);
}

#[test]
fn reporting_order_follows_detector_order() {
    // One slide that trips topology, font, overflow, bounds, and overlap.
    let (dom, ir) = slide(vec![
        Fixture::new(
            "title",
            ElementType::Title,
            100,
            Rect::new(100.0, 500.0, 400.0, 80.0),
        )
        .font_size(44.0),
        Fixture::new(
            "body",
            ElementType::Text,
            60,
            Rect::new(100.0, 100.0, 400.0, 100.0),
        )
        .font_size(12.0)
        .content_box(Rect::new(110.0, 110.0, 420.0, 80.0)),
        Fixture::new(
            "offslide",
            ElementType::Image,
            40,
            Rect::new(1200.0, 300.0, 200.0, 100.0),
        ),
        Fixture::new(
            "under",
            ElementType::Text,
            55,
            Rect::new(120.0, 120.0, 400.0, 100.0),
        ),
    ]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    let kinds: Vec<DefectKind> = diag.defects.iter().map(|d| d.kind).collect();
    let mut sorted = kinds.clone();
    sorted.sort_by_key(|k| match k {
        DefectKind::LayoutTopology => 0,
        DefectKind::FontTooSmall => 1,
        DefectKind::ContentOverflow | DefectKind::ContentUnderflow => 2,
        DefectKind::OutOfBounds => 3,
        DefectKind::Overlap => 4,
    });
    assert_eq!(kinds, sorted);
    assert!(kinds.contains(&DefectKind::LayoutTopology));
    assert!(kinds.contains(&DefectKind::FontTooSmall));
    assert!(kinds.contains(&DefectKind::ContentOverflow));
    assert!(kinds.contains(&DefectKind::OutOfBounds));
    assert!(kinds.contains(&DefectKind::Overlap));
}

#[test]
fn applying_the_overlap_hint_reduces_the_overlap() {
    let (mut dom, ir) = slide(vec![
        Fixture::new(
            "a",
            ElementType::Text,
            60,
            Rect::new(100.0, 100.0, 400.0, 200.0),
        ),
        Fixture::new(
            "b",
            ElementType::Text,
            100,
            Rect::new(300.0, 100.0, 400.0, 200.0),
        ),
    ]);
    let cfg = EngineConfig::default();
    let before = diagnose(&dom, &ir, &cfg);
    let defect = before
        .defects
        .iter()
        .find(|d| d.kind == DefectKind::Overlap)
        .unwrap();
    let area_before = match defect.details {
        DefectDetails::Overlap {
            overlap_area_px, ..
        } => overlap_area_px,
        _ => unreachable!(),
    };
    let hint = defect.hint.as_ref().unwrap();
    assert!(hint.validated);

    // Apply the suggested single-axis move to the owner.
    let owner = dom
        .elements
        .iter_mut()
        .find(|el| Some(el.eid.as_str()) == defect.owner_eid.as_deref())
        .unwrap();
    if let Some(x) = hint.suggested_x {
        owner.bbox.x = x as f64;
    }
    if let Some(y) = hint.suggested_y {
        owner.bbox.y = y as f64;
    }
    owner.safe_box = None;
    dom.reconcile_safe_boxes();

    let after = diagnose(&dom, &ir, &cfg);
    let area_after = after
        .defects
        .iter()
        .find(|d| d.kind == DefectKind::Overlap)
        .map(|d| match d.details {
            DefectDetails::Overlap {
                overlap_area_px, ..
            } => overlap_area_px,
            _ => 0,
        })
        .unwrap_or(0);
    assert!(area_after < area_before);
}

#[test]
fn grouped_elements_do_not_conflict() {
    let (dom, ir) = slide(vec![
        Fixture::new(
            "label",
            ElementType::Text,
            60,
            Rect::new(100.0, 100.0, 300.0, 80.0),
        )
        .group("badge"),
        Fixture::new(
            "shape",
            ElementType::Image,
            40,
            Rect::new(90.0, 90.0, 320.0, 100.0),
        )
        .group("badge"),
    ]);
    let diag = diagnose(&dom, &ir, &EngineConfig::default());
    assert_eq!(diag.summary.defect_count, 0);
    assert!(diag.summary.conflict_graph.is_none());
}

#[test]
fn engine_is_deterministic() {
    let (dom, ir) = slide(vec![
        Fixture::new(
            "title",
            ElementType::Title,
            100,
            Rect::new(100.0, 400.0, 800.0, 80.0),
        ),
        Fixture::new(
            "a",
            ElementType::Text,
            60,
            Rect::new(100.0, 100.0, 400.0, 200.0),
        ),
        Fixture::new(
            "b",
            ElementType::Bullets,
            60,
            Rect::new(300.0, 100.0, 400.0, 200.0),
        ),
        Fixture::new(
            "img",
            ElementType::Image,
            40,
            Rect::new(1200.0, 300.0, 200.0, 100.0),
        ),
    ]);
    let cfg = EngineConfig::default();
    let first = diagnose(&dom, &ir, &cfg);
    let second = diagnose(&dom, &ir, &cfg);
    assert_eq!(first, second);
    // And the serialised form is byte-identical too.
    assert_eq!(
        first.to_json_string().unwrap(),
        second.to_json_string().unwrap()
    );
}
