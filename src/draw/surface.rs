//! Owned raster surface with full-repaint replay.

use super::log::ActionLog;
use super::render;
use super::theme::Theme;
use crate::config::Config;
use log::debug;

/// An ARGB32 raster surface the board renders onto.
///
/// The surface is the only shared mutable drawing resource; every repaint
/// clears it and replays the whole log, so its contents are always a pure
/// function of `(log, dimensions, theme, config)`.
pub struct BoardSurface {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl BoardSurface {
    /// Creates a surface of the given pixel dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Replaces the backing surface with one of the new dimensions.
    ///
    /// Stored action coordinates are absolute and are not rescaled; the
    /// caller repaints immediately afterwards, and actions outside a shrunk
    /// surface simply fall off it.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), cairo::Error> {
        if width == self.width && height == self.height {
            return Ok(());
        }
        debug!("resizing surface {}x{} -> {width}x{height}", self.width, self.height);
        self.surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Clears the surface to the theme background and replays the full log,
    /// committed actions first, then the in-progress action on top.
    pub fn repaint(&mut self, log: &ActionLog, theme: Theme, config: &Config) -> Result<(), cairo::Error> {
        let ctx = cairo::Context::new(&self.surface)?;
        render::render_background(&ctx, theme, config);
        render::render_actions(&ctx, log.render_iter(), theme, config);
        drop(ctx);
        self.surface.flush();
        Ok(())
    }

    /// Snapshot of the raw pixel data (row stride included).
    pub fn pixels(&mut self) -> Vec<u8> {
        self.surface.flush();
        self.surface.data().map(|d| d.to_vec()).unwrap_or_default()
    }

    /// Row stride of the backing surface in bytes.
    pub fn stride(&self) -> i32 {
        self.surface.stride()
    }

    /// Writes the surface as a PNG to the given stream.
    pub fn write_png<W: std::io::Write>(&mut self, stream: &mut W) -> Result<(), cairo::IoError> {
        self.surface.flush();
        self.surface.write_to_png(stream)
    }
}
