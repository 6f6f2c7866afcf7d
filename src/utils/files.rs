//! Encoding and persisting rendered surfaces
//!
//! A surface is encoded in memory first and only then written, through a
//! temporary file in the destination directory that is renamed into place.
//! Readers of `path` never observe a partially written image.

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use tempfile::NamedTempFile;

use super::error::{RenderError, RenderResult};
use crate::canvas::SvgCanvas;

/// A surface that can be serialized to an image file format
pub trait Encode {
    /// Encoded file content
    fn encode(&self) -> RenderResult<Vec<u8>>;

    /// Conventional file extension, without the dot
    fn extension(&self) -> &'static str;
}

impl Encode for SvgCanvas {
    fn encode(&self) -> RenderResult<Vec<u8>> {
        Ok(self.to_svg_string().into_bytes())
    }

    fn extension(&self) -> &'static str {
        "svg"
    }
}

#[cfg(feature = "raster")]
impl Encode for crate::canvas::RasterCanvas {
    fn encode(&self) -> RenderResult<Vec<u8>> {
        use crate::canvas::Canvas;

        let pixmap = self.pixmap().ok_or_else(|| {
            let (width, height) = (self.width(), self.height());
            if width == 0 || height == 0 {
                RenderError::encode(format!(
                    "cannot encode an empty ({}x{}) surface as PNG",
                    width, height
                ))
            } else {
                RenderError::encode(format!(
                    "no pixmap for the {}x{} surface, it was too large to allocate",
                    width, height
                ))
            }
        })?;
        pixmap
            .encode_png()
            .map_err(|err| RenderError::encode(err.to_string()))
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}

/// Image format of a persisted surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Format implied by the extension of `path`, if any is known
    pub fn from_path(path: &Path) -> Option<Self> {
        crate::core::options::extension_of(path).and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(RenderError::unsupported(other)),
        }
    }
}

/// Encode `surface` and atomically write it to `path`
pub fn persist<E: Encode + ?Sized>(surface: &E, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let bytes = surface.encode()?;
    write_atomic(path, &bytes)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Write `content` to `path` via a sibling temp file and rename
pub fn write_atomic(path: &Path, content: &[u8]) -> RenderResult<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| RenderError::io(parent, e))?;
    temp.write_all(content)
        .map_err(|e| RenderError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| RenderError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| RenderError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Backend, Canvas, SvgBackend};
    use crate::data::Color;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert!(matches!(
            "gif".parse::<OutputFormat>(),
            Err(RenderError::UnsupportedFormat { .. })
        ));
        assert_eq!(
            OutputFormat::from_path(Path::new("out/report.Svg")),
            Some(OutputFormat::Svg)
        );
        assert_eq!(OutputFormat::from_path(Path::new("report")), None);
        assert_eq!(OutputFormat::default().extension(), "png");
    }

    #[test]
    fn test_persist_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.svg");

        let mut canvas = SvgBackend.allocate(20, 10);
        canvas.set_fill_style(Color::WHITE);
        canvas.fill_rect(0.0, 0.0, 20.0, 10.0);
        persist(&canvas, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
        assert_eq!(written, canvas.to_svg_string());
        assert_eq!(canvas.extension(), "svg");
    }

    #[test]
    fn test_persist_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        std::fs::write(&path, "stale").unwrap();

        persist(&SvgBackend.allocate(1, 1), &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
        // no temp files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_persist_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");

        let err = persist(&SvgBackend.allocate(1, 1), &path).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
        assert!(!path.exists());
    }

    #[cfg(feature = "raster")]
    #[test]
    fn test_persist_png() {
        use crate::canvas::RasterBackend;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.png");
        let canvas = RasterBackend::without_system_fonts().allocate(4, 3);
        persist(&canvas, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(canvas.extension(), "png");
    }

    #[cfg(feature = "raster")]
    #[test]
    fn test_empty_raster_cannot_be_encoded() {
        use crate::canvas::RasterBackend;

        let canvas = RasterBackend::without_system_fonts().allocate(0, 0);
        let err = canvas.encode().unwrap_err();
        assert!(matches!(err, RenderError::Encode { .. }));
        assert!(err.to_string().contains("empty (0x0)"), "{}", err);
    }

    #[cfg(feature = "raster")]
    #[test]
    fn test_oversized_raster_reports_its_size() {
        use crate::canvas::RasterBackend;

        let canvas = RasterBackend::without_system_fonts().allocate(u32::MAX, 2);
        let err = canvas.encode().unwrap_err();
        assert!(matches!(err, RenderError::Encode { .. }));
        let message = err.to_string();
        assert!(message.contains("4294967295x2"), "{}", message);
        assert!(message.contains("too large"), "{}", message);
    }
}
