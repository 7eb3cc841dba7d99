//! # QR Codes
//!
//! Encodes the current short link as a QR code. An artifact is tied to one
//! short URL and one target size; generating again builds a fresh artifact
//! that replaces the old one.
//!
//! Terminal rendering packs two module rows into one text row using half
//! blocks. Light modules (and the quiet zone) are drawn as ink so the code
//! scans on the dark backgrounds most terminals use.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use qrcode::render::svg;
use qrcode::{Color, QrCode};
use url::Url;

use crate::capability::ActionError;

/// Light border around the code, in modules. Scanners need at least a little.
pub const QUIET_ZONE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrArtifact {
    /// The exact text encoded (the short URL).
    pub text: String,
    /// Target edge length in pixels for exported images.
    pub size: u32,
    /// Modules per side, without quiet zone.
    pub width: usize,
    modules: Vec<bool>,
}

impl QrArtifact {
    pub fn generate(text: &str, size: u32) -> Result<Self, ActionError> {
        let code = QrCode::new(text.as_bytes()).map_err(|e| ActionError::Qr(e.to_string()))?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Ok(Self {
            text: text.to_string(),
            size,
            width,
            modules,
        })
    }

    /// Whether the module at (x, y) is dark. Out-of-range coordinates are
    /// light, which is what the quiet zone needs.
    pub fn is_dark(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Side length including the quiet zone on both edges.
    pub fn padded_width(&self) -> usize {
        self.width + 2 * QUIET_ZONE
    }

    /// Text rows for a terminal, half blocks, two module rows per line.
    pub fn render_lines(&self) -> Vec<String> {
        let side = self.padded_width() as isize;
        let quiet = QUIET_ZONE as isize;
        let ink = |x: isize, y: isize| y < side && !self.is_dark(x - quiet, y - quiet);

        (0..side)
            .step_by(2)
            .map(|y| {
                (0..side)
                    .map(|x| match (ink(x, y), ink(x, y + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect()
    }

    /// SVG image at least `size` pixels on each side.
    pub fn to_svg(&self) -> Result<String, ActionError> {
        let code =
            QrCode::new(self.text.as_bytes()).map_err(|e| ActionError::Qr(e.to_string()))?;
        Ok(code
            .render::<svg::Color>()
            .min_dimensions(self.size, self.size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build())
    }

    /// `qr-<code>.svg`, where `<code>` is the last path segment of the short URL.
    pub fn file_name(&self) -> String {
        let code = Url::parse(&self.text)
            .ok()
            .and_then(|url| {
                url.path_segments()
                    .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                    .map(str::to_string)
            })
            .map(|segment| {
                segment
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                    .collect::<String>()
            })
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| "code".to_string());
        format!("qr-{code}.svg")
    }
}

/// Write the artifact as SVG into `dir`, creating it if needed.
pub fn save_svg(artifact: &QrArtifact, dir: &Path) -> Result<PathBuf, ActionError> {
    let svg = artifact.to_svg()?;
    fs::create_dir_all(dir)?;
    let path = dir.join(artifact.file_name());
    fs::write(&path, svg)?;
    info!("Saved QR code for {} to {}", artifact.text, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "https://short.ly/abc123";

    #[test]
    fn test_generate_keeps_text_and_size() {
        let qr = QrArtifact::generate(LINK, 100).unwrap();
        assert_eq!(qr.text, LINK);
        assert_eq!(qr.size, 100);
        // Smallest QR version is 21x21, versions grow by 4
        assert!(qr.width >= 21);
        assert_eq!((qr.width - 21) % 4, 0);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = QrArtifact::generate(LINK, 100).unwrap();
        let b = QrArtifact::generate(LINK, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_links_give_different_codes() {
        let a = QrArtifact::generate(LINK, 100).unwrap();
        let b = QrArtifact::generate("https://short.ly/zzz999", 100).unwrap();
        assert_ne!(a.render_lines(), b.render_lines());
    }

    #[test]
    fn test_finder_pattern_corner_is_dark() {
        let qr = QrArtifact::generate(LINK, 100).unwrap();
        assert!(qr.is_dark(0, 0));
        assert!(!qr.is_dark(-1, 0));
        assert!(!qr.is_dark(0, qr.width as isize));
    }

    #[test]
    fn test_render_lines_dimensions() {
        let qr = QrArtifact::generate(LINK, 100).unwrap();
        let lines = qr.render_lines();
        let side = qr.padded_width();
        assert_eq!(lines.len(), side.div_ceil(2));
        assert!(lines.iter().all(|line| line.chars().count() == side));
        // Quiet zone rows are solid ink
        assert!(lines[0].chars().all(|c| c == '█'));
    }

    #[test]
    fn test_svg_export() {
        let qr = QrArtifact::generate(LINK, 100).unwrap();
        let svg = qr.to_svg().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_file_name_uses_short_code() {
        let qr = QrArtifact::generate(LINK, 100).unwrap();
        assert_eq!(qr.file_name(), "qr-abc123.svg");

        let qr = QrArtifact::generate("https://short.ly/", 100).unwrap();
        assert_eq!(qr.file_name(), "qr-code.svg");

        let qr = QrArtifact::generate("https://short.ly/a/b%2F..x", 100).unwrap();
        assert_eq!(qr.file_name(), "qr-b2Fx.svg");
    }

    #[test]
    fn test_save_svg_writes_file() {
        let dir = std::env::temp_dir().join(format!("shorty-qr-test-{}", std::process::id()));
        let qr = QrArtifact::generate(LINK, 120).unwrap();
        let path = save_svg(&qr, &dir).unwrap();
        assert_eq!(path, dir.join("qr-abc123.svg"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
