use log::warn;
use smallvec::SmallVec;

use super::error::{CropError, CropResult};
use super::remap::VertexRemap;

/// One `v`, `v/vt`, `v/vt/vn`, or `v//vn` reference from a face record.
/// The suffix keeps everything after the vertex index byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRef {
    pub v_idx: i64,
    pub suffix: String,
}

impl FaceRef {
    /// Splits a reference token into its numeric vertex index and the
    /// untouched remainder. Fails if the numeric part is missing or not an
    /// integer.
    pub fn parse(token: &str, line: usize) -> CropResult<Self> {
        let digits_end = token
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
            .map_or(token.len(), |(i, _)| i);
        let v_idx = token[..digits_end]
            .parse::<i64>()
            .map_err(|_| CropError::MalformedFaceRef {
                line,
                token: token.to_string(),
            })?;
        Ok(Self {
            v_idx,
            suffix: token[digits_end..].to_string(),
        })
    }
}

/// An `f` record: its reference tokens and the source line it came from.
#[derive(Debug, Clone)]
pub struct Face {
    pub refs: SmallVec<[FaceRef; 4]>,
    pub line: usize,
}

impl Face {
    pub fn parse(rest: &str, line: usize) -> CropResult<Self> {
        let refs = rest
            .split_whitespace()
            .map(|tok| FaceRef::parse(tok, line))
            .collect::<CropResult<_>>()?;
        Ok(Self { refs, line })
    }

    /// Rewrites this face against the completed remap, or drops it entirely
    /// if any referenced vertex was removed. Short-circuits on the first
    /// removed reference.
    pub fn rebuild(&self, remap: &VertexRemap) -> Option<String> {
        let mut out = String::from("f");
        for r in &self.refs {
            let Some(ni) = remap.get(r.v_idx) else {
                if remap.is_dangling(r.v_idx) {
                    warn!(
                        "line {}: face references vertex {} outside 1..={}, dropping face",
                        self.line,
                        r.v_idx,
                        remap.total()
                    );
                }
                return None;
            };
            out.push(' ');
            out.push_str(&ni.to_string());
            out.push_str(&r.suffix);
        }
        Some(out)
    }
}
