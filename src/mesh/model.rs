//! In-memory mesh representation.
//!
//! Stores nodes, elements and named element sets in the exact order they
//! were parsed. Element node order is geometrically meaningful (it defines
//! the element's boundary connectivity) and is never reordered. Surface
//! reconstruction resolves the owning element of a boundary segment with a
//! first-match-wins scan over the element list, so insertion order of the
//! stores is part of the observable behavior.

use std::collections::HashMap;

/// Node identifier as read from the mesh file (positive, unique).
pub type NodeId = usize;

/// Element identifier as read from the mesh file (positive, unique).
pub type ElementId = usize;

/// A mesh node with its coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Node identifier.
    pub id: NodeId,
    /// Coordinates (x, y, z). Missing trailing coordinates parse as 0.
    pub coords: [f64; 3],
}

/// A mesh element: a type code and an ordered node list.
///
/// 2-node elements are boundary line segments; 3- and 4-node elements are
/// the 2D surface elements they bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Element identifier.
    pub id: ElementId,
    /// Source element type code (e.g., `CPS4`, `T3D2`).
    pub type_code: String,
    /// Node identifiers in parsed order.
    pub nodes: Vec<NodeId>,
}

impl Element {
    /// Check if this element is a 2-node boundary segment.
    pub fn is_segment(&self) -> bool {
        self.nodes.len() == 2
    }

    /// Position of a node in this element's node list, if present.
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }
}

/// A named, ordered collection of element identifiers.
///
/// Element sets name physical boundaries (curves) in the source mesh and
/// become surface definitions in the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementSet {
    /// Set name (e.g., `LEFT`).
    pub name: String,
    /// Member element identifiers in parsed order.
    pub members: Vec<ElementId>,
}

/// A parsed mesh: nodes, elements and named element sets.
///
/// All collections preserve parse order. Lookups by identifier go through
/// internal index maps; the identifier spaces for nodes and elements are
/// independent.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    sets: Vec<ElementSet>,
    node_index: HashMap<NodeId, usize>,
    element_index: HashMap<ElementId, usize>,
    set_index: HashMap<String, usize>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. A repeated identifier replaces the earlier node in place,
    /// keeping its original position.
    pub fn add_node(&mut self, node: Node) {
        match self.node_index.get(&node.id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.node_index.insert(node.id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    /// Add an element. A repeated identifier replaces the earlier element in
    /// place, keeping its original position.
    pub fn add_element(&mut self, element: Element) {
        match self.element_index.get(&element.id) {
            Some(&i) => self.elements[i] = element,
            None => {
                self.element_index.insert(element.id, self.elements.len());
                self.elements.push(element);
            }
        }
    }

    /// Append an element identifier to a named set, creating the set on
    /// first use. Sets keep the order in which their names first appear.
    pub fn add_to_set(&mut self, name: &str, element: ElementId) {
        let i = match self.set_index.get(name) {
            Some(&i) => i,
            None => {
                self.set_index.insert(name.to_string(), self.sets.len());
                self.sets.push(ElementSet {
                    name: name.to_string(),
                    members: Vec::new(),
                });
                self.sets.len() - 1
            }
        };
        self.sets[i].members.push(element);
    }

    /// Nodes in parse order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Elements in parse order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Named element sets in first-appearance order.
    pub fn sets(&self) -> &[ElementSet] {
        &self.sets
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Look up an element by identifier.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.element_index.get(&id).map(|&i| &self.elements[i])
    }

    /// Look up an element set by name.
    pub fn set(&self, name: &str) -> Option<&ElementSet> {
        self.set_index.get(name).map(|&i| &self.sets[i])
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements.
    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: ElementId, type_code: &str, nodes: &[NodeId]) -> Element {
        Element {
            id,
            type_code: type_code.to_string(),
            nodes: nodes.to_vec(),
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut mesh = Mesh::new();
        mesh.add_element(element(30, "CPS4", &[1, 2, 3, 4]));
        mesh.add_element(element(10, "CPS4", &[2, 5, 6, 3]));
        mesh.add_element(element(20, "T3D2", &[1, 2]));

        let ids: Vec<ElementId> = mesh.elements().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut mesh = Mesh::new();
        mesh.add_node(Node {
            id: 7,
            coords: [1.0, 2.0, 0.0],
        });
        mesh.add_element(element(3, "CPS3", &[7, 8, 9]));

        assert_eq!(mesh.node(7).unwrap().coords, [1.0, 2.0, 0.0]);
        assert_eq!(mesh.element(3).unwrap().type_code, "CPS3");
        assert!(mesh.node(8).is_none());
        assert!(mesh.element(4).is_none());
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let mut mesh = Mesh::new();
        mesh.add_element(element(1, "CPS4", &[1, 2, 3, 4]));
        mesh.add_element(element(2, "CPS4", &[2, 5, 6, 3]));
        mesh.add_element(element(1, "T3D2", &[1, 2]));

        assert_eq!(mesh.n_elements(), 2);
        assert_eq!(mesh.elements()[0].type_code, "T3D2");
        assert_eq!(mesh.elements()[0].id, 1);
    }

    #[test]
    fn test_sets_created_lazily() {
        let mut mesh = Mesh::new();
        mesh.add_to_set("LEFT", 4);
        mesh.add_to_set("RIGHT", 5);
        mesh.add_to_set("LEFT", 6);

        let names: Vec<&str> = mesh.sets().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["LEFT", "RIGHT"]);
        assert_eq!(mesh.set("LEFT").unwrap().members, vec![4, 6]);
        assert_eq!(mesh.set("RIGHT").unwrap().members, vec![5]);
    }

    #[test]
    fn test_element_position() {
        let e = element(1, "CPS4", &[10, 20, 30, 40]);
        assert_eq!(e.position(10), Some(0));
        assert_eq!(e.position(40), Some(3));
        assert_eq!(e.position(50), None);
        assert!(!e.is_segment());
        assert!(element(2, "T3D2", &[1, 2]).is_segment());
    }
}
