//! # gmsh2ccx
//!
//! Convert finite-element meshes written by Gmsh in Abaqus-style `.inp`
//! format into CalculiX `.inp` input decks.
//!
//! The conversion translates element type codes and, critically,
//! reconstructs boundary surface definitions that the source format does
//! not express directly: each named set of 2-node boundary segments is
//! traced back to the 2D elements owning the segments and grouped by the
//! local edge number the segment lies on, so the solver can apply boundary
//! conditions to specific element edges.
//!
//! This crate provides the building blocks of that pipeline:
//! - Mesh representation with parse-order collections ([`mesh`])
//! - Gmsh `.inp` reading and CalculiX `.inp` writing ([`io`])
//! - Element type translation, edge resolution and surface set
//!   construction ([`convert`])
//!
//! # Example
//!
//! ```no_run
//! use gmsh2ccx::{convert_file, ConvertConfig};
//! use std::path::Path;
//!
//! let config = ConvertConfig {
//!     target_type: "S4".to_string(),
//!     write_node_sets: false,
//! };
//! let report = convert_file(Path::new("square.inp"), Path::new("ccx.inp"), &config)?;
//! println!("{report}");
//! # Ok::<(), gmsh2ccx::ConvertError>(())
//! ```

pub mod convert;
pub mod io;
pub mod mesh;

// Re-export main types for convenience
pub use convert::{
    build_surface, build_surfaces, convert, convert_file, edge_number, map_element_type,
    target_type, BuiltSurface, ConversionReport, ConvertConfig, ConvertError, NamedSurface,
    SurfaceDefinition, MAX_EDGE, VERIFY_CLOSING_EDGE,
};
pub use io::{parse_inp, read_inp_file, write_ccx, write_ccx_file, InpError};
pub use mesh::{EdgeNumbering, Element, ElementId, ElementSet, Mesh, Node, NodeId};
