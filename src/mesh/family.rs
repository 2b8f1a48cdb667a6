//! Edge numbering families for 2D target element types.
//!
//! CalculiX numbers the edges of a 2D element differently depending on the
//! element family (CalculiX documentation, chapter "*SURFACE"):
//!
//! - Shell elements (`S3`, `S4`) reserve edge numbers 1 and 2 for the faces
//!   of the companion solid representation, so edge numbering starts at 3.
//! - Plane stress/strain and axisymmetric elements (`CPS3`, `CPS4`, `CPE3`,
//!   `CPE4`) have no such reservation and number edges from 1.
//!
//! In both families, edge k connects consecutive nodes and the last edge
//! closes the loop from the final node back to the first:
//!
//! ```text
//! quad (S4):            quad (CPS4):
//!     Edge 3: 1-2           Edge 1: 1-2
//!     Edge 4: 2-3           Edge 2: 2-3
//!     Edge 5: 3-4           Edge 3: 3-4
//!     Edge 6: 4-1           Edge 4: 4-1
//! ```
//!
//! This table mirrors the solver's convention and must not be rederived.

/// Edge numbering family of a 2D target element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeNumbering {
    /// Triangular and quadrilateral shell elements (`S3`, `S4`).
    Shell,
    /// Plane stress, plane strain and axisymmetric elements
    /// (`CPS3`, `CPS4`, `CPE3`, `CPE4`).
    Plane,
}

impl EdgeNumbering {
    /// Family of a target element type, or `None` for types without a 2D
    /// edge numbering (beams, unknown codes).
    pub fn for_target_type(target: &str) -> Option<Self> {
        match target {
            "S3" | "S4" => Some(EdgeNumbering::Shell),
            "CPS3" | "CPS4" | "CPE3" | "CPE4" => Some(EdgeNumbering::Plane),
            _ => None,
        }
    }

    /// Edge number of the first consecutive node pair (nodes 1-2).
    pub fn first_edge(self) -> usize {
        match self {
            EdgeNumbering::Shell => 3,
            EdgeNumbering::Plane => 1,
        }
    }

    /// Edge number of the closing edge, from the last of `n_nodes` nodes
    /// back to the first.
    pub fn closing_edge(self, n_nodes: usize) -> usize {
        match self {
            EdgeNumbering::Shell => n_nodes + 2,
            EdgeNumbering::Plane => n_nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_of_shell_types() {
        assert_eq!(
            EdgeNumbering::for_target_type("S3"),
            Some(EdgeNumbering::Shell)
        );
        assert_eq!(
            EdgeNumbering::for_target_type("S4"),
            Some(EdgeNumbering::Shell)
        );
    }

    #[test]
    fn test_family_of_plane_types() {
        for t in ["CPS3", "CPS4", "CPE3", "CPE4"] {
            assert_eq!(
                EdgeNumbering::for_target_type(t),
                Some(EdgeNumbering::Plane)
            );
        }
    }

    #[test]
    fn test_family_of_other_types() {
        assert_eq!(EdgeNumbering::for_target_type("B31"), None);
        assert_eq!(EdgeNumbering::for_target_type("B32"), None);
        assert_eq!(EdgeNumbering::for_target_type("XYZ9"), None);
        // Case-sensitive: the solver's codes are uppercase
        assert_eq!(EdgeNumbering::for_target_type("s4"), None);
    }

    #[test]
    fn test_shell_numbering() {
        let f = EdgeNumbering::Shell;
        assert_eq!(f.first_edge(), 3);
        assert_eq!(f.closing_edge(3), 5);
        assert_eq!(f.closing_edge(4), 6);
    }

    #[test]
    fn test_plane_numbering() {
        let f = EdgeNumbering::Plane;
        assert_eq!(f.first_edge(), 1);
        assert_eq!(f.closing_edge(3), 3);
        assert_eq!(f.closing_edge(4), 4);
    }
}
