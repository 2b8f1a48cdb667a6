//! CalculiX input deck output.
//!
//! Emits the converted mesh as `.inp` keyword records, in deck order:
//!
//! ```text
//! *NODE, NSET=ALL
//!     1, 0, 0, 0
//! *ELEMENT, type=S4, ELSET=ALL
//!     10, 1, 2, 3, 4
//! *ELSET, ELSET=LEFT_S6
//!     10,
//! *SURFACE, name=LEFT, type=ELEMENT
//!     LEFT_S6, S6
//! ```
//!
//! Only elements whose mapped type equals the requested target type are
//! written. Each boundary group produces one `*ELSET` per populated edge
//! bucket, named `<group>_S<edge>`, and one `*SURFACE` record listing the
//! `(<group>_S<edge>, S<edge>)` pairs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::convert::{map_element_type, NamedSurface};
use crate::mesh::Mesh;

/// Write a converted mesh to a CalculiX `.inp` file.
///
/// # Arguments
/// * `path` - Output file path
/// * `mesh` - The source mesh
/// * `target_type` - Target element type to retain
/// * `surfaces` - One resolved surface per boundary group, in group order
/// * `write_node_sets` - Also emit a raw `*NSET` per boundary group
pub fn write_ccx_file(
    path: &Path,
    mesh: &Mesh,
    target_type: &str,
    surfaces: &[NamedSurface],
    write_node_sets: bool,
) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ccx(&mut writer, mesh, target_type, surfaces, write_node_sets)?;
    writer.flush()
}

/// Write a converted mesh as a CalculiX input deck.
pub fn write_ccx<W: Write>(
    out: &mut W,
    mesh: &Mesh,
    target_type: &str,
    surfaces: &[NamedSurface],
    write_node_sets: bool,
) -> std::io::Result<()> {
    write_nodes(out, mesh)?;
    write_elements(out, mesh, target_type)?;

    if write_node_sets {
        for set in mesh.sets() {
            writeln!(out, "*NSET, NSET={}", set.name)?;
            for &e in &set.members {
                if let Some(element) = mesh.element(e) {
                    for &n in &element.nodes {
                        writeln!(out, "\t{n},")?;
                    }
                }
            }
        }
    }

    for surface in surfaces {
        for (edge, elements) in surface.definition.iter_populated() {
            writeln!(out, "*ELSET, ELSET={}_S{}", surface.name, edge)?;
            for e in elements {
                writeln!(out, "\t{e},")?;
            }
        }
        writeln!(out, "*SURFACE, name={}, type=ELEMENT", surface.name)?;
        for (edge, _) in surface.definition.iter_populated() {
            writeln!(out, "\t{0}_S{1}, S{1}", surface.name, edge)?;
        }
    }

    Ok(())
}

fn write_nodes<W: Write>(out: &mut W, mesh: &Mesh) -> std::io::Result<()> {
    if mesh.nodes().is_empty() {
        return Ok(());
    }
    writeln!(out, "*NODE, NSET=ALL")?;
    for node in mesh.nodes() {
        let [x, y, z] = node.coords;
        writeln!(out, "\t{}, {}, {}, {}", node.id, x, y, z)?;
    }
    Ok(())
}

fn write_elements<W: Write>(out: &mut W, mesh: &Mesh, target_type: &str) -> std::io::Result<()> {
    if mesh.elements().is_empty() {
        return Ok(());
    }
    writeln!(out, "*ELEMENT, type={target_type}, ELSET=ALL")?;
    for element in mesh.elements() {
        if map_element_type(&element.type_code) != target_type {
            continue;
        }
        let nodes: Vec<String> = element.nodes.iter().map(|n| n.to_string()).collect();
        writeln!(out, "\t{}, {}", element.id, nodes.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{build_surfaces, ConversionReport};
    use crate::io::parse_inp;
    use tempfile::NamedTempFile;

    const SQUARE: &str = r#"
*NODE
1, 0, 0, 0
2, 1, 0, 0
3, 1, 1, 0
4, 0, 1, 0
*ELEMENT, type=CPS4, ELSET=Surface1
10, 1, 2, 3, 4
*ELEMENT, type=T3D2, ELSET=LEFT
20, 4, 1
"#;

    fn deck(target_type: &str, write_node_sets: bool) -> String {
        let mesh = parse_inp(SQUARE).unwrap();
        let mut report = ConversionReport::default();
        let surfaces = build_surfaces(&mesh, target_type, &mut report);
        let mut out = Vec::new();
        write_ccx(&mut out, &mesh, target_type, &surfaces, write_node_sets).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_node_block() {
        let deck = deck("S4", false);
        assert!(deck.contains("*NODE, NSET=ALL"));
        assert!(deck.contains("\t1, 0, 0, 0"));
        assert!(deck.contains("\t3, 1, 1, 0"));
    }

    #[test]
    fn test_element_block_filters_to_target_type() {
        let deck = deck("S4", false);
        assert!(deck.contains("*ELEMENT, type=S4, ELSET=ALL"));
        assert!(deck.contains("\t10, 1, 2, 3, 4"));
        // The T3D2 segment maps to B31, not S4
        assert!(!deck.contains("\t20, 4, 1"));
    }

    #[test]
    fn test_surface_records() {
        let deck = deck("S4", false);
        assert!(deck.contains("*ELSET, ELSET=LEFT_S6"));
        assert!(deck.contains("\t10,"));
        assert!(deck.contains("*SURFACE, name=LEFT, type=ELEMENT"));
        assert!(deck.contains("\tLEFT_S6, S6"));
        // Surface1 holds the quad itself; its first two nodes resolve to
        // the quad's first edge.
        assert!(deck.contains("*ELSET, ELSET=Surface1_S3"));
    }

    #[test]
    fn test_node_sets_on_request() {
        let without = deck("S4", false);
        assert!(!without.contains("*NSET"));

        let with = deck("S4", true);
        assert!(with.contains("*NSET, NSET=LEFT"));
        assert!(with.contains("\t4,\n\t1,"));
    }

    #[test]
    fn test_beam_target_emits_no_surfaces() {
        let deck = deck("B31", false);
        assert!(deck.contains("*ELEMENT, type=B31, ELSET=ALL"));
        assert!(deck.contains("\t20, 4, 1"));
        assert!(!deck.contains("*SURFACE"));
        assert!(!deck.contains("*ELSET"));
    }

    #[test]
    fn test_empty_mesh_writes_nothing() {
        let mesh = Mesh::new();
        let mut out = Vec::new();
        write_ccx(&mut out, &mesh, "S3", &[], true).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_ccx_file() {
        let mesh = parse_inp(SQUARE).unwrap();
        let mut report = ConversionReport::default();
        let surfaces = build_surfaces(&mesh, "S4", &mut report);

        let file = NamedTempFile::new().unwrap();
        write_ccx_file(file.path(), &mesh, "S4", &surfaces, false).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("*SURFACE, name=LEFT, type=ELEMENT"));
    }
}
