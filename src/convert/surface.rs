//! Grouping of boundary segments into edge-numbered surface sets.
//!
//! Each named element set in the source mesh describes a physical boundary
//! as a list of 2-node segments. To apply boundary conditions the solver
//! needs the same boundary expressed as (surface element, local edge
//! number) pairs instead, so every segment has to be traced back to the 2D
//! element that owns it and to the specific edge of that element it lies
//! on.

use crate::mesh::{EdgeNumbering, ElementId, Mesh};

use super::edge::edge_number;
use super::type_map::map_element_type;

/// Highest local edge number a 2D element can carry.
pub const MAX_EDGE: usize = 6;

/// Surface definition for one boundary group: owning element identifiers
/// bucketed by local edge number (1..=6).
///
/// Buckets keep the order in which segments resolved to them and are not
/// deduplicated. Only populated buckets appear in the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceDefinition {
    buckets: [Vec<ElementId>; MAX_EDGE],
}

impl SurfaceDefinition {
    /// Create an empty surface definition.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, edge: usize, element: ElementId) {
        self.buckets[edge - 1].push(element);
    }

    /// Elements whose given local edge lies on this surface (`edge` in
    /// 1..=6).
    pub fn elements_on_edge(&self, edge: usize) -> &[ElementId] {
        &self.buckets[edge - 1]
    }

    /// Iterate populated buckets as `(edge, elements)` in edge order.
    pub fn iter_populated(&self) -> impl Iterator<Item = (usize, &[ElementId])> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, elements)| !elements.is_empty())
            .map(|(i, elements)| (i + 1, elements.as_slice()))
    }

    /// Check if no segment resolved into any bucket.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Result of building one surface definition.
#[derive(Clone, Debug, Default)]
pub struct BuiltSurface {
    /// Element identifiers bucketed by edge number.
    pub definition: SurfaceDefinition,
    /// Segments that matched no element and were dropped.
    pub unmatched_segments: usize,
}

/// Build the surface definition for one boundary group.
///
/// For each member segment, the endpoints are the first two nodes in parsed
/// order. The owning element is the first element in mesh order whose
/// mapped type equals `target_type` and whose node list contains both
/// endpoints; no uniqueness is assumed, so the outcome depends on element
/// order when several candidates share both nodes. The endpoint pair is
/// swapped if needed so the first endpoint precedes the second in the
/// owner's node order, then resolved to an edge number.
///
/// Segments with no owning element contribute nothing; they are only
/// counted.
pub fn build_surface(
    mesh: &Mesh,
    members: &[ElementId],
    target_type: &str,
    numbering: EdgeNumbering,
) -> BuiltSurface {
    let mut built = BuiltSurface::default();

    for &sbe in members {
        let endpoints = mesh
            .element(sbe)
            .and_then(|segment| Some((*segment.nodes.first()?, *segment.nodes.get(1)?)));
        let Some((n1, n2)) = endpoints else {
            built.unmatched_segments += 1;
            continue;
        };

        let mut resolved = None;
        for element in mesh.elements() {
            if map_element_type(&element.type_code) != target_type {
                continue;
            }
            let (Some(p1), Some(p2)) = (element.position(n1), element.position(n2)) else {
                continue;
            };
            // n1 must precede n2 in the owner's node order
            let (a, b) = if p1 > p2 { (n2, n1) } else { (n1, n2) };
            resolved = edge_number(numbering, &element.nodes, a, b)
                .map(|edge| (edge, element.id));
            break;
        }

        match resolved {
            Some((edge, element)) => built.definition.push(edge, element),
            None => built.unmatched_segments += 1,
        }
    }

    built
}
