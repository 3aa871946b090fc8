use std::path::PathBuf;

use anyhow::Result;
use la_core::config::{OutputMode, SessionConfig};
use la_core::error::CoreError;
use la_core::ImageBuffer;
use la_image::padded_dims;
use la_match::{BitmapFont, CharPalette};

use crate::output::{self, AsciiOutput, ConsoleOutput, HtmlOutput};
use crate::pipeline;

/// All mutable state of one interactive session, in one place.
///
/// Owns the current image, its padded dimensions (recomputed on every
/// reload), the resolution, the character palette, and the output sink.
/// The shell mutates a `Session` through these methods only, which keeps
/// the resolution bounds and palette invariants enforced in one spot and
/// the pipeline testable without the command loop.
pub struct Session {
    image: ImageBuffer,
    padded_width: u32,
    padded_height: u32,
    resolution: u32,
    palette: CharPalette<BitmapFont>,
    output: Box<dyn AsciiOutput>,
    html_path: PathBuf,
    html_font: String,
}

impl Session {
    /// Build a session from a loaded image and a config.
    ///
    /// The configured resolution is clamped into the bounds the padded
    /// dimensions allow.
    #[must_use]
    pub fn new(image: ImageBuffer, config: &SessionConfig) -> Self {
        let (padded_width, padded_height) = padded_dims(image.width(), image.height());
        let mut session = Self {
            image,
            padded_width,
            padded_height,
            resolution: config.resolution,
            palette: CharPalette::with_charset(BitmapFont, &config.charset),
            output: output::from_config(config),
            html_path: PathBuf::from(&config.html_path),
            html_font: config.html_font.clone(),
        };
        session.clamp_resolution();
        session
    }

    /// Lowest allowed resolution: max(1, paddedWidth / paddedHeight).
    #[must_use]
    pub fn min_resolution(&self) -> u32 {
        (self.padded_width / self.padded_height).max(1)
    }

    /// Highest allowed resolution: the padded width.
    #[must_use]
    pub fn max_resolution(&self) -> u32 {
        self.padded_width
    }

    /// Current resolution.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Double the resolution.
    ///
    /// # Errors
    /// Returns `CoreError::Resolution` when doubling would exceed the upper
    /// bound.
    pub fn res_up(&mut self) -> Result<u32, CoreError> {
        let next = self.resolution * 2;
        if next > self.max_resolution() {
            return Err(self.bounds_error(next));
        }
        self.resolution = next;
        Ok(next)
    }

    /// Halve the resolution.
    ///
    /// # Errors
    /// Returns `CoreError::Resolution` when halving would fall below the
    /// lower bound.
    pub fn res_down(&mut self) -> Result<u32, CoreError> {
        let next = self.resolution / 2;
        if next < self.min_resolution() {
            return Err(self.bounds_error(next));
        }
        self.resolution = next;
        Ok(next)
    }

    /// Replace the current image, re-padding and re-clamping the resolution.
    pub fn set_image(&mut self, image: ImageBuffer) {
        let (pw, ph) = padded_dims(image.width(), image.height());
        self.image = image;
        self.padded_width = pw;
        self.padded_height = ph;
        self.clamp_resolution();
    }

    /// Add every character in the inclusive range.
    pub fn add_range(&mut self, lo: char, hi: char) {
        for code in lo.min(hi) as u32..=lo.max(hi) as u32 {
            if let Some(ch) = char::from_u32(code) {
                self.palette.add(ch);
            }
        }
    }

    /// Remove every character in the inclusive range.
    pub fn remove_range(&mut self, lo: char, hi: char) {
        for code in lo.min(hi) as u32..=lo.max(hi) as u32 {
            if let Some(ch) = char::from_u32(code) {
                self.palette.remove(ch);
            }
        }
    }

    /// Palette characters in ascending order, space-separated.
    #[must_use]
    pub fn chars_line(&self) -> String {
        let mut line = String::new();
        for ch in self.palette.chars() {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push(ch);
        }
        line
    }

    /// Switch the output sink.
    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output = match mode {
            OutputMode::Console => Box::new(ConsoleOutput),
            OutputMode::Html => Box::new(HtmlOutput::new(
                self.html_path.clone(),
                self.html_font.clone(),
            )),
        };
    }

    /// Convert the current image and render it to the active sink.
    ///
    /// # Errors
    /// Propagates `CoreError::EmptyPalette` (and the other conversion
    /// errors) untouched so the shell can map them to user messages.
    pub fn run_ascii(&self) -> Result<()> {
        let grid = pipeline::convert(&self.image, self.resolution, &self.palette)?;
        self.output.render(&grid)
    }

    /// Read access for shell status displays and tests.
    #[must_use]
    pub fn palette(&self) -> &CharPalette<BitmapFont> {
        &self.palette
    }

    fn bounds_error(&self, requested: u32) -> CoreError {
        CoreError::Resolution {
            requested,
            min: self.min_resolution(),
            max: self.max_resolution(),
        }
    }

    fn clamp_resolution(&mut self) {
        let clamped = self
            .resolution
            .clamp(self.min_resolution(), self.max_resolution());
        if clamped != self.resolution {
            log::info!("resolution clamped from {} to {clamped}", self.resolution);
            self.resolution = clamped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(resolution: u32) -> SessionConfig {
        SessionConfig {
            resolution,
            ..SessionConfig::default()
        }
    }

    fn session(width: u32, height: u32, resolution: u32) -> Session {
        Session::new(ImageBuffer::filled(width, height, (0, 0, 0)), &config(resolution))
    }

    #[test]
    fn configured_resolution_is_clamped_to_padded_width() {
        let s = session(8, 8, 128);
        assert_eq!(s.resolution(), 8);
    }

    #[test]
    fn resolution_doubles_and_halves_within_bounds() {
        let mut s = session(8, 8, 2);
        assert_eq!(s.res_up(), Ok(4));
        assert_eq!(s.res_up(), Ok(8));
        assert!(matches!(s.res_up(), Err(CoreError::Resolution { .. })));
        assert_eq!(s.resolution(), 8);

        assert_eq!(s.res_down(), Ok(4));
        assert_eq!(s.res_down(), Ok(2));
        assert_eq!(s.res_down(), Ok(1));
        assert!(matches!(s.res_down(), Err(CoreError::Resolution { .. })));
    }

    #[test]
    fn wide_images_raise_the_lower_bound() {
        // 64×8 padded: min resolution 64/8 = 8.
        let mut s = session(64, 8, 8);
        assert_eq!(s.min_resolution(), 8);
        assert!(s.res_down().is_err());
    }

    #[test]
    fn image_reload_repads_and_reclamps() {
        let mut s = session(64, 64, 64);
        s.set_image(ImageBuffer::filled(4, 4, (0, 0, 0)));
        assert_eq!(s.max_resolution(), 4);
        assert_eq!(s.resolution(), 4);
    }

    #[test]
    fn add_and_remove_ranges_update_the_palette() {
        let mut s = session(8, 8, 4);
        s.remove_range(' ', '~');
        assert!(s.palette().is_empty());
        s.add_range('c', 'a'); // either direction
        assert_eq!(s.chars_line(), "a b c");
        s.remove_range('b', 'b');
        assert_eq!(s.chars_line(), "a c");
    }

    #[test]
    fn run_ascii_surfaces_empty_palette() {
        let mut s = session(8, 8, 4);
        s.remove_range(' ', '~');
        let err = s.run_ascii().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::EmptyPalette)
        ));
    }
}
