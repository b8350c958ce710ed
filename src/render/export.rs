//! Image export. The output format follows the file extension.

use crate::error::{Error, Result};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Pick the format from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            Some(other) => Err(Error::Render(format!(
                "unsupported output format .{other} for {} (expected .svg or .png)",
                path.display()
            ))),
            None => Err(Error::Render(format!(
                "output path {} has no extension (expected .svg or .png)",
                path.display()
            ))),
        }
    }

    /// Encode a finished SVG document in this format.
    pub fn encode(self, svg: &str) -> Result<Vec<u8>> {
        match self {
            OutputFormat::Svg => Ok(svg.as_bytes().to_vec()),
            OutputFormat::Png => rasterize(svg),
        }
    }

    pub fn write(self, svg: &str, path: &Path) -> Result<()> {
        let bytes = self.encode(svg)?;
        fs::write(path, bytes).map_err(|e| Error::io(path, e))
    }
}

fn rasterize(svg: &str) -> Result<Vec<u8>> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| Error::Render(format!("failed to parse generated SVG: {e}")))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        Error::Render(format!("failed to allocate {width}x{height} surface for PNG export"))
    })?;

    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| Error::Render(format!("failed to encode PNG output: {e}")))
}
