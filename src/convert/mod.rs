//! Conversion pipeline from a parsed Gmsh mesh to a CalculiX input deck.
//!
//! The pipeline is a single deterministic pass over immutable collections:
//! translate element types, resolve every named element set into an
//! edge-numbered surface definition, and emit the output deck. It never
//! fails on its own; all degradation is local (unknown element types pass
//! through, unmatched boundary segments are dropped) and is reported in a
//! [`ConversionReport`].

mod edge;
mod surface;
mod type_map;

use std::fmt;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::io::{read_inp_file, write_ccx, InpError};
use crate::mesh::{EdgeNumbering, Mesh};

pub use edge::{edge_number, VERIFY_CLOSING_EDGE};
pub use surface::{build_surface, BuiltSurface, SurfaceDefinition, MAX_EDGE};
pub use type_map::{map_element_type, target_type};

/// Error type for a full file-to-file conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading or parsing the source mesh failed.
    #[error("reading input mesh: {0}")]
    Read(#[from] InpError),

    /// Writing the output deck failed.
    #[error("writing output deck: {0}")]
    Write(#[from] std::io::Error),
}

/// Configuration for one conversion run.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Target element type; only elements mapping to this type are written.
    pub target_type: String,
    /// Also emit a raw `*NSET` node set per boundary group.
    pub write_node_sets: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            target_type: "S3".to_string(),
            write_node_sets: false,
        }
    }
}

/// A surface definition with the boundary group name it belongs to.
#[derive(Clone, Debug)]
pub struct NamedSurface {
    /// Boundary group (element set) name.
    pub name: String,
    /// Resolved surface definition.
    pub definition: SurfaceDefinition,
}

/// Diagnostics collected over one conversion run.
///
/// The conversion itself always completes; these counters surface the
/// degraded outcomes so a caller can warn about them.
#[derive(Clone, Debug, Default)]
pub struct ConversionReport {
    /// Nodes written.
    pub nodes: usize,
    /// Elements in the source mesh.
    pub elements: usize,
    /// Elements whose mapped type equals the target type.
    pub elements_retained: usize,
    /// Boundary groups processed.
    pub groups: usize,
    /// Source element type codes outside the translation table, with the
    /// number of elements carrying each, in first-occurrence order.
    pub unrecognized_types: Vec<(String, usize)>,
    /// Boundary segments that matched no element and were dropped.
    pub unmatched_segments: usize,
}

impl ConversionReport {
    /// Check if any degraded outcome occurred.
    pub fn has_warnings(&self) -> bool {
        !self.unrecognized_types.is_empty() || self.unmatched_segments > 0
    }

    fn record_unrecognized(&mut self, type_code: &str) {
        match self
            .unrecognized_types
            .iter_mut()
            .find(|(code, _)| code == type_code)
        {
            Some((_, count)) => *count += 1,
            None => self.unrecognized_types.push((type_code.to_string(), 1)),
        }
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {}/{} elements, {} surface groups",
            self.nodes, self.elements_retained, self.elements, self.groups
        )?;
        if self.unmatched_segments > 0 {
            write!(f, ", {} unmatched segments dropped", self.unmatched_segments)?;
        }
        for (code, count) in &self.unrecognized_types {
            write!(f, "\nunrecognized element type {code} ({count} elements)")?;
        }
        Ok(())
    }
}

/// Resolve every named element set of the mesh into a surface definition.
///
/// Returns one entry per set, in set order. A target type outside the two
/// known 2D families has no edge numbering, so no surfaces are built for
/// it.
pub fn build_surfaces(
    mesh: &Mesh,
    target_type: &str,
    report: &mut ConversionReport,
) -> Vec<NamedSurface> {
    let Some(numbering) = EdgeNumbering::for_target_type(target_type) else {
        return Vec::new();
    };

    mesh.sets()
        .iter()
        .map(|set| {
            let built = build_surface(mesh, &set.members, target_type, numbering);
            report.unmatched_segments += built.unmatched_segments;
            NamedSurface {
                name: set.name.clone(),
                definition: built.definition,
            }
        })
        .collect()
}

/// Run the conversion on a parsed mesh and write the output deck.
pub fn convert<W: Write>(
    mesh: &Mesh,
    config: &ConvertConfig,
    out: &mut W,
) -> Result<ConversionReport, std::io::Error> {
    let mut report = ConversionReport {
        nodes: mesh.n_nodes(),
        elements: mesh.n_elements(),
        groups: mesh.sets().len(),
        ..Default::default()
    };

    for element in mesh.elements() {
        if target_type(&element.type_code).is_none() {
            report.record_unrecognized(&element.type_code);
        }
        if map_element_type(&element.type_code) == config.target_type {
            report.elements_retained += 1;
        }
    }

    let surfaces = build_surfaces(mesh, &config.target_type, &mut report);
    write_ccx(
        out,
        mesh,
        &config.target_type,
        &surfaces,
        config.write_node_sets,
    )?;

    Ok(report)
}

/// Convert a Gmsh `.inp` file into a CalculiX `.inp` file.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConvertConfig,
) -> Result<ConversionReport, ConvertError> {
    let mesh = read_inp_file(input)?;
    let file = std::fs::File::create(output).map_err(ConvertError::Write)?;
    let mut writer = std::io::BufWriter::new(file);
    let report = convert(&mesh, config, &mut writer)?;
    writer.flush()?;
    Ok(report)
}
