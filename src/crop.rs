use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use log::debug;

use super::classify::Thresholds;
use super::error::{CropError, CropResult};
use super::face::Face;
use super::remap::VertexRemap;

/// Counts reported after a successful crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropStats {
    pub vertices_in: usize,
    pub vertices_kept: usize,
    pub faces_in: usize,
    pub faces_kept: usize,
}

fn parse_vertex(rest: &str, line_no: usize, text: &str) -> CropResult<[super::F; 3]> {
    let mut fields = rest.split_whitespace();
    let mut coord = || {
        fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| CropError::MalformedVertex {
                line: line_no,
                text: text.to_string(),
            })
    };
    // fields past the third are ignored by classification but stay in the line
    Ok([coord()?, coord()?, coord()?])
}

/// Crops the mesh at `input` and writes the result to `output`.
///
/// Pass 1 classifies every vertex and builds the remap; pass 2 rebuilds
/// faces against the completed remap. The two passes are load-bearing: a
/// face may reference a vertex that appears later in the file, so no face
/// can be settled until every vertex has been seen.
pub fn crop_file(input: &Path, output: &Path, thresholds: &Thresholds) -> CropResult<CropStats> {
    let content = fs::read_to_string(input).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CropError::FileNotFound {
                path: input.to_path_buf(),
            }
        } else {
            CropError::Io(e)
        }
    })?;

    // Pass 1: classify vertices and build the remap. Vertex lines are kept
    // verbatim; anything that is neither a vertex nor a face passes through.
    let mut remap = VertexRemap::default();
    let mut kept_vertices: Vec<&str> = Vec::new();
    let mut pass_through: Vec<&str> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        if let Some(rest) = line.strip_prefix("v ") {
            let pos = parse_vertex(rest, line_no, line)?;
            if remap.push(thresholds.keep(pos)).is_some() {
                kept_vertices.push(line);
            }
        } else if !line.starts_with("f ") {
            pass_through.push(line);
        }
    }
    debug!(
        "pass 1: {} of {} vertices kept, {} pass-through lines",
        remap.kept(),
        remap.total(),
        pass_through.len()
    );

    // Pass 2: rebuild faces against the completed remap.
    let mut faces_in = 0;
    let mut kept_faces: Vec<String> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if let Some(rest) = line.strip_prefix("f ") {
            faces_in += 1;
            let face = Face::parse(rest, i + 1)?;
            if let Some(rebuilt) = face.rebuild(&remap) {
                kept_faces.push(rebuilt);
            }
        }
    }
    debug!("pass 2: {} of {} faces kept", kept_faces.len(), faces_in);

    let mut out = BufWriter::new(File::create(output)?);
    writeln!(out, "# cropped by obj_crop")?;
    for v in &kept_vertices {
        writeln!(out, "{v}")?;
    }
    for l in &pass_through {
        writeln!(out, "{l}")?;
    }
    for f in &kept_faces {
        writeln!(out, "{f}")?;
    }
    out.flush()?;

    Ok(CropStats {
        vertices_in: remap.total(),
        vertices_kept: remap.kept(),
        faces_in,
        faces_kept: kept_faces.len(),
    })
}
