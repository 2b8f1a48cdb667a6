//! Element type translation from Gmsh codes to CalculiX codes.

/// CalculiX element type for a Gmsh element type, from the fixed
/// translation table. Returns `None` for codes outside the table.
pub fn target_type(source: &str) -> Option<&'static str> {
    match source {
        // 2-node beams
        "C1D2" | "T3D2" => Some("B31"),
        // 3-node beams
        "C1D3" | "T3D3" => Some("B32"),
        // 3-node shells
        "C2D3" | "CPS3" => Some("S3"),
        // 4-node shells
        "C2D4" | "CPS4" => Some("S4"),
        _ => None,
    }
}

/// Translate an element type code, passing unknown codes through unchanged.
///
/// Pass-through is a degraded outcome, not an error: an element of an
/// unknown type is only retained downstream if its code happens to equal
/// the requested target type. Callers that want to surface the degradation
/// check [`target_type`] separately.
pub fn map_element_type(source: &str) -> &str {
    target_type(source).unwrap_or(source)
}
