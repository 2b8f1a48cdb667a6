//! Reader for Gmsh meshes in Abaqus-style `.inp` format.
//!
//! Parses the keyword records Gmsh emits when exporting a mesh as `.inp`:
//!
//! ```text
//! *Heading
//!  square.inp
//! *NODE
//! 1, 0, 0, 0
//! 2, 1, 0, 0
//! *ELEMENT, type=CPS4, ELSET=Surface1
//! 10, 1, 2, 3, 4
//! *ELEMENT, type=T3D2, ELSET=LEFT
//! 20, 4, 1
//! *ELSET,ELSET=BOTTOM
//! 21, 22
//! ```
//!
//! Keywords are case-insensitive and lines starting with `**` are comments.
//! Element set membership accumulates both from the `ELSET` parameter on
//! `*ELEMENT` blocks and from standalone `*ELSET` blocks; Gmsh uses either
//! form depending on version and physical-group setup. Unrecognized
//! keywords and their data lines are skipped.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::mesh::{Element, Mesh, Node};

/// Error type for `.inp` mesh parsing.
#[derive(Debug, Error)]
pub enum InpError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

impl InpError {
    fn at(line: usize, message: impl Into<String>) -> Self {
        InpError::ParseError {
            line,
            message: message.into(),
        }
    }
}

/// Block opened by the most recent keyword line.
enum Block {
    /// Data lines are skipped (`*Heading`, unrecognized keywords).
    Skip,
    Node,
    Element {
        type_code: String,
        elset: Option<String>,
    },
    ElSet {
        name: String,
    },
}

/// Read a Gmsh `.inp` mesh file.
///
/// # Arguments
/// * `path` - Path to the `.inp` file
///
/// # Returns
/// * `Ok(Mesh)` - The parsed mesh
/// * `Err(InpError)` - If reading or parsing fails
pub fn read_inp_file(path: &Path) -> Result<Mesh, InpError> {
    let content = std::fs::read_to_string(path)?;
    parse_inp(&content)
}

/// Parse a Gmsh `.inp` mesh from a string.
///
/// Same format as the file, useful for testing or embedded data.
pub fn parse_inp(content: &str) -> Result<Mesh, InpError> {
    let mut mesh = Mesh::new();
    let mut block = Block::Skip;

    for (line_num, raw) in content.lines().enumerate() {
        let line_num = line_num + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with("**") {
            continue;
        }
        if line.starts_with('*') {
            block = parse_keyword_line(line, line_num)?;
            continue;
        }

        match &block {
            Block::Skip => {}
            Block::Node => {
                let node = parse_node_line(line, line_num)?;
                mesh.add_node(node);
            }
            Block::Element { type_code, elset } => {
                let element = parse_element_line(line, line_num, type_code)?;
                let id = element.id;
                mesh.add_element(element);
                if let Some(name) = elset {
                    mesh.add_to_set(name, id);
                }
            }
            Block::ElSet { name } => {
                for field in fields(line) {
                    let id = field.parse().map_err(|_| {
                        InpError::at(line_num, format!("Invalid element id: {field}"))
                    })?;
                    mesh.add_to_set(name, id);
                }
            }
        }
    }

    Ok(mesh)
}

/// Split a data line into comma-separated fields, ignoring blanks from a
/// trailing comma.
fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|f| !f.is_empty())
}

/// Parse a keyword line into the block it opens.
///
/// Format: `*KEYWORD, PARAM=value, ...` with case-insensitive keyword and
/// parameter names.
fn parse_keyword_line(line: &str, line_num: usize) -> Result<Block, InpError> {
    let mut parts = line.split(',').map(str::trim);
    let keyword = parts
        .next()
        .unwrap_or_default()
        .trim_start_matches('*')
        .to_uppercase();

    let mut params: HashMap<String, String> = HashMap::new();
    for part in parts {
        match part.split_once('=') {
            Some((key, value)) => {
                params.insert(key.trim().to_uppercase(), value.trim().to_string());
            }
            None => {
                // Valueless parameters (e.g. GENERATE) are not supported on
                // the blocks we read; keep them visible to the match below.
                params.insert(part.to_uppercase(), String::new());
            }
        }
    }

    match keyword.as_str() {
        "NODE" => Ok(Block::Node),
        "ELEMENT" => {
            let type_code = params
                .remove("TYPE")
                .ok_or_else(|| InpError::at(line_num, "*ELEMENT without type parameter"))?;
            Ok(Block::Element {
                type_code,
                elset: params.remove("ELSET"),
            })
        }
        "ELSET" => {
            let name = params
                .remove("ELSET")
                .ok_or_else(|| InpError::at(line_num, "*ELSET without ELSET parameter"))?;
            Ok(Block::ElSet { name })
        }
        _ => Ok(Block::Skip),
    }
}

/// Parse a node data line: `id, x, y, z`.
///
/// Trailing coordinates may be omitted and default to 0.
fn parse_node_line(line: &str, line_num: usize) -> Result<Node, InpError> {
    let mut it = fields(line);
    let id = it
        .next()
        .ok_or_else(|| InpError::at(line_num, "Empty node line"))?;
    let id = id
        .parse()
        .map_err(|_| InpError::at(line_num, format!("Invalid node id: {id}")))?;

    let mut coords = [0.0; 3];
    for (i, field) in it.take(3).enumerate() {
        coords[i] = field
            .parse()
            .map_err(|_| InpError::at(line_num, format!("Invalid coordinate: {field}")))?;
    }

    Ok(Node { id, coords })
}

/// Parse an element data line: `id, n1, n2, ...`.
fn parse_element_line(line: &str, line_num: usize, type_code: &str) -> Result<Element, InpError> {
    let mut it = fields(line);
    let id = it
        .next()
        .ok_or_else(|| InpError::at(line_num, "Empty element line"))?;
    let id = id
        .parse()
        .map_err(|_| InpError::at(line_num, format!("Invalid element id: {id}")))?;

    let mut nodes = Vec::new();
    for field in it {
        let node = field
            .parse()
            .map_err(|_| InpError::at(line_num, format!("Invalid node reference: {field}")))?;
        nodes.push(node);
    }
    if nodes.is_empty() {
        return Err(InpError::at(line_num, "Element without nodes"));
    }

    Ok(Element {
        id,
        type_code: type_code.to_string(),
        nodes,
    })
}
