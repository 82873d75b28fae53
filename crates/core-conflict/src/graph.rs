//! Conflict-graph construction from overlap defects.
//!
//! Nodes are `eid` strings, edges are overlap pairs; connected components are
//! extracted by BFS in first-appearance order so the output is deterministic
//! for a given defect list. Each component carries:
//! - one [`ConflictEdge`] per member overlap, with the full four-direction
//!   separation option list, and
//! - one [`SpaceEnvelope`] per member element: free pixels from its safe box
//!   toward each slide edge, tightened by every non-decoration element on the
//!   slide (not just component members — a move can collide with anything).
//!
//! Envelope obstacle rule: a neighbour overlapping the focal element's x-span
//! tightens `free_top` when fully above, `free_bottom` when fully below, and
//! zeroes both when it intersects the focal band (the obstacle is already in
//! the way whichever vertical direction the element moves). Symmetric on the
//! other axis. Results are clamped to `[0, max(slide_w, slide_h)]`.

use std::collections::{HashMap, HashSet, VecDeque};

use core_geometry::{round_px, x_overlap, y_overlap};
use tracing::debug;

use core_schema::{
    ConflictComponent, ConflictEdge, Defect, DefectDetails, DefectKind, ElementType, ElementView,
    SlideView, SpaceEnvelope,
};

use crate::separation::separation_options;

/// Group the overlap defects of one engine run into conflict components.
///
/// Defects that are not overlaps, lack an endpoint, or reference an eid the
/// joined view cannot resolve are ignored. Returns components in discovery
/// order; empty when no overlap survives the filter.
pub fn build_conflict_graph(defects: &[Defect], view: &SlideView<'_>) -> Vec<ConflictComponent> {
    let pairs: Vec<(&str, &str, i64)> = defects
        .iter()
        .filter(|d| d.kind == DefectKind::Overlap)
        .filter_map(|d| {
            let owner = d.owner_eid.as_deref()?;
            let other = d.other_eid.as_deref()?;
            if view.get(owner).is_none() || view.get(other).is_none() {
                debug!(target: "conflict", owner, other, "overlap_endpoint_unresolved");
                return None;
            }
            let area = match d.details {
                DefectDetails::Overlap {
                    overlap_area_px, ..
                } => overlap_area_px,
                _ => return None,
            };
            Some((owner, other, area))
        })
        .collect();

    if pairs.is_empty() {
        return Vec::new();
    }

    // Adjacency in insertion order; node list in first-appearance order.
    let mut nodes: Vec<&str> = Vec::new();
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for &(a, b, _) in &pairs {
        for eid in [a, b] {
            if !adjacency.contains_key(eid) {
                nodes.push(eid);
                adjacency.insert(eid, Vec::new());
            }
        }
        if let Some(v) = adjacency.get_mut(a) {
            v.push(b);
        }
        if let Some(v) = adjacency.get_mut(b) {
            v.push(a);
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut components = Vec::new();
    for &root in &nodes {
        if visited.contains(root) {
            continue;
        }
        let mut member_order: Vec<&str> = Vec::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(root);
        queue.push_back(root);
        while let Some(eid) = queue.pop_front() {
            member_order.push(eid);
            if let Some(neighbours) = adjacency.get(eid) {
                for &n in neighbours {
                    if visited.insert(n) {
                        queue.push_back(n);
                    }
                }
            }
        }
        // Every node has at least one edge, so singletons should not occur.
        if member_order.len() < 2 {
            continue;
        }

        let members: HashSet<&str> = member_order.iter().copied().collect();
        let edges: Vec<ConflictEdge> = pairs
            .iter()
            .filter(|(a, b, _)| members.contains(a) && members.contains(b))
            .filter_map(|&(owner, other, area)| {
                let owner_view = view.get(owner)?;
                let other_view = view.get(other)?;
                Some(ConflictEdge {
                    owner_eid: owner.to_string(),
                    other_eid: other.to_string(),
                    overlap_area: area,
                    separations: separation_options(owner_view, other_view, view.safe_padding),
                })
            })
            .collect();

        let envelopes: Vec<SpaceEnvelope> = member_order
            .iter()
            .filter_map(|eid| view.get(eid).map(|el| space_envelope(view, el)))
            .collect();

        components.push(ConflictComponent {
            eids: member_order.iter().map(|s| s.to_string()).collect(),
            edges,
            envelopes,
        });
    }
    components
}

/// Free-space envelope of `focal` against every non-decoration element on the
/// slide (excluding itself and same-group peers) and the slide edges.
pub fn space_envelope(view: &SlideView<'_>, focal: &ElementView<'_>) -> SpaceEnvelope {
    let f = focal.safe_box;
    let mut free_top = f.y;
    let mut free_bottom = view.slide.h - f.bottom();
    let mut free_left = f.x;
    let mut free_right = view.slide.w - f.right();

    for n in &view.elements {
        if n.eid() == focal.eid()
            || n.kind() == ElementType::Decoration
            || focal.same_group(n)
        {
            continue;
        }
        let nb = n.safe_box;
        if x_overlap(&f, &nb) > 0.0 {
            if nb.bottom() <= f.y {
                free_top = free_top.min(f.y - nb.bottom());
            } else if nb.y >= f.bottom() {
                free_bottom = free_bottom.min(nb.y - f.bottom());
            } else {
                free_top = 0.0;
                free_bottom = 0.0;
            }
        }
        if y_overlap(&f, &nb) > 0.0 {
            if nb.right() <= f.x {
                free_left = free_left.min(f.x - nb.right());
            } else if nb.x >= f.right() {
                free_right = free_right.min(nb.x - f.right());
            } else {
                free_left = 0.0;
                free_right = 0.0;
            }
        }
    }

    let cap = view.slide.w.max(view.slide.h);
    let clamp = |v: f64| round_px(v.clamp(0.0, cap));
    SpaceEnvelope {
        eid: focal.eid().to_string(),
        free_top: clamp(free_top),
        free_bottom: clamp(free_bottom),
        free_left: clamp(free_left),
        free_right: clamp(free_right),
    }
}
