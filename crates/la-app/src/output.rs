use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use la_core::config::{OutputMode, SessionConfig};
use la_core::grid::CharGrid;

/// Renders a conversion result somewhere.
pub trait AsciiOutput {
    /// Render one grid.
    ///
    /// # Errors
    /// Returns an error when the underlying sink cannot be written.
    fn render(&self, grid: &CharGrid) -> Result<()>;
}

/// Prints the grid to stdout, one row per line.
pub struct ConsoleOutput;

impl AsciiOutput for ConsoleOutput {
    fn render(&self, grid: &CharGrid) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        for row in grid.rows() {
            let line: String = row.iter().collect();
            writeln!(stdout, "{line}")?;
        }
        Ok(())
    }
}

/// Writes the grid to an HTML file in a monospace font.
pub struct HtmlOutput {
    path: PathBuf,
    font: String,
}

impl HtmlOutput {
    #[must_use]
    pub fn new(path: PathBuf, font: String) -> Self {
        Self { path, font }
    }

    /// Full HTML page for a grid. Spaces become `&nbsp;` so runs of blank
    /// cells survive HTML whitespace collapsing.
    fn page(&self, grid: &CharGrid) -> String {
        let mut body = String::new();
        for row in grid.rows() {
            for &ch in row {
                match ch {
                    ' ' => body.push_str("&nbsp;"),
                    '&' => body.push_str("&amp;"),
                    '<' => body.push_str("&lt;"),
                    '>' => body.push_str("&gt;"),
                    _ => body.push(ch),
                }
            }
            body.push_str("<br>\n");
        }
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n\
             body {{ font-family: '{}', monospace; font-size: 8px; line-height: 1; }}\n\
             </style>\n</head>\n<body>\n<p>\n{body}</p>\n</body>\n</html>\n",
            self.font
        )
    }
}

impl AsciiOutput for HtmlOutput {
    fn render(&self, grid: &CharGrid) -> Result<()> {
        std::fs::write(&self.path, self.page(grid))
            .with_context(|| format!("cannot write {}", self.path.display()))?;
        log::info!("wrote {}", self.path.display());
        Ok(())
    }
}

/// Build the output sink a config asks for.
#[must_use]
pub fn from_config(config: &SessionConfig) -> Box<dyn AsciiOutput> {
    match config.output {
        OutputMode::Console => Box::new(ConsoleOutput),
        OutputMode::Html => Box::new(HtmlOutput::new(
            PathBuf::from(&config.html_path),
            config.html_font.clone(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_page_escapes_markup_and_spaces() {
        let grid = CharGrid::from_cells(2, vec!['<', ' ', '&', 'x']);
        let out = HtmlOutput::new(PathBuf::from("unused"), "Courier New".to_string());
        let page = out.page(&grid);
        assert!(page.contains("&lt;&nbsp;<br>"));
        assert!(page.contains("&amp;x<br>"));
        assert!(page.contains("font-family: 'Courier New'"));
    }

    #[test]
    fn html_render_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.html");
        let grid = CharGrid::from_cells(1, vec!['@']);
        HtmlOutput::new(path.clone(), "Courier New".to_string())
            .render(&grid)
            .unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("@<br>"));
    }

    #[test]
    fn sink_selection_follows_config() {
        let config = SessionConfig {
            output: OutputMode::Html,
            ..SessionConfig::default()
        };
        // Just exercise both arms; the returned sinks are opaque.
        let _html = from_config(&config);
        let _console = from_config(&SessionConfig::default());
    }
}
