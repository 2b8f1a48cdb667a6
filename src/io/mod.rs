//! Mesh file I/O.
//!
//! This module provides the two ends of the conversion pipeline:
//! - [`read_inp_file`], [`parse_inp`]: Gmsh Abaqus-style `.inp` input
//! - [`write_ccx_file`], [`write_ccx`]: CalculiX `.inp` output

mod ccx_writer;
mod inp_reader;

pub use ccx_writer::{write_ccx, write_ccx_file};
pub use inp_reader::{parse_inp, read_inp_file, InpError};
