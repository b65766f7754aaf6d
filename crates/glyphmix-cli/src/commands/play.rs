//! Play command implementation
//!
//! Interactive text version of the widget. The display sequence is shown on
//! its own line; `r` regenerates it and `d` downloads the composition as PNG.
//! Both actions stay disabled until the source logo has been sliced.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphmix_backend_raster::png::write_png_file;
use glyphmix_backend_raster::LogoWidget;
use glyphmix_core::layout::ExportLayout;
use glyphmix_core::rng::DeterministicRng;
use glyphmix_core::sequence::GlyphDraw;
use glyphmix_core::strings::{DOWNLOAD_LABEL, EXPORT_FILE_NAME, REGENERATE_LABEL, TITLE};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::input::{load_layout, read_source};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Regenerate,
    Download,
    Quit,
    Unknown,
}

impl Action {
    /// Parse a line of input.
    pub fn parse(line: &str) -> Action {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "regenerate" => Action::Regenerate,
            "d" | "download" => Action::Download,
            "q" | "quit" | "exit" => Action::Quit,
            _ => Action::Unknown,
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Regenerations performed
    pub regenerations: usize,
    /// Files written
    pub downloads: Vec<PathBuf>,
    /// Actions refused because the widget was not ready
    pub refused: usize,
    /// Downloads that failed to export or write
    pub failed: usize,
}

/// Run the play command
///
/// # Arguments
/// * `source` - Path to the source logo PNG
/// * `seed` - Optional seed for the random draws
/// * `out` - Output PNG path (default: `saizeriya-logo.png`)
/// * `layout_path` - Optional layout JSON file
pub fn run(
    source: &str,
    seed: Option<u32>,
    out: Option<&str>,
    layout_path: Option<&str>,
) -> Result<ExitCode> {
    let layout = load_layout(layout_path)?;
    let out = Path::new(out.unwrap_or(EXPORT_FILE_NAME));
    let mut rng = DeterministicRng::from_seed_option(seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_session(
        source,
        layout,
        &mut rng,
        out,
        stdin.lock(),
        &mut stdout.lock(),
    )?;

    println!(
        "{} {} regenerations, {} downloads",
        "Bye:".dimmed(),
        summary.regenerations,
        summary.downloads.len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Drive one interactive session over arbitrary input and output.
///
/// A source that cannot be read or sliced is reported once; the session then
/// keeps running with every action disabled.
pub fn run_session<D, R, W>(
    source: &str,
    layout: ExportLayout,
    draw: &mut D,
    out: &Path,
    input: R,
    output: &mut W,
) -> Result<SessionSummary>
where
    D: GlyphDraw + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut widget = LogoWidget::new(layout);
    let mut summary = SessionSummary::default();

    writeln!(output, "{}", TITLE.bold())?;
    writeln!(output, "{}", widget.display_text())?;

    let loaded = read_source(source).and_then(|png_data| {
        widget
            .load_png(&png_data, draw)
            .with_context(|| format!("Failed to load source logo: {}", source))
    });
    if let Err(e) = loaded {
        writeln!(output, "{}: {:#}", "error".red(), e)?;
    } else {
        writeln!(output, "{}", widget.display_text().bold())?;
    }
    write_menu(&widget, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match Action::parse(&line) {
            Action::Quit => break,
            Action::Unknown => {
                writeln!(output, "{}", "Enter r, d or q".dimmed())?;
            }
            Action::Regenerate | Action::Download if !widget.is_ready() => {
                summary.refused += 1;
                writeln!(output, "{}", "disabled: source logo is not loaded".yellow())?;
            }
            Action::Regenerate => {
                widget.regenerate(draw)?;
                summary.regenerations += 1;
                writeln!(output, "{}", widget.display_text().bold())?;
            }
            Action::Download => match download(&widget, out) {
                Ok((width, height, size)) => {
                    summary.downloads.push(out.to_path_buf());
                    writeln!(
                        output,
                        "{} {} ({}x{}, {} bytes)",
                        "Saved:".green().bold(),
                        out.display(),
                        width,
                        height,
                        size
                    )?;
                }
                Err(e) => {
                    summary.failed += 1;
                    writeln!(output, "{}: {:#}", "error".red(), e)?;
                }
            },
        }
    }

    Ok(summary)
}

/// Export the widget and write the PNG, returning canvas size and byte count.
fn download(widget: &LogoWidget, out: &Path) -> Result<(u32, u32, usize)> {
    let exported = widget.export().context("Failed to export composition")?;
    write_png_file(&exported.png_data, out)
        .with_context(|| format!("Failed to write output: {}", out.display()))?;
    Ok((
        exported.composition.width,
        exported.composition.height,
        exported.png_data.len(),
    ))
}

fn write_menu<W: Write>(widget: &LogoWidget, output: &mut W) -> io::Result<()> {
    let state = if widget.is_ready() {
        String::new()
    } else {
        format!(" {}", "(disabled)".dimmed())
    };
    writeln!(
        output,
        "[r] {}  [d] {}  [q] quit{}",
        REGENERATE_LABEL, DOWNLOAD_LABEL, state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmix_backend_raster::png::{decode_png, encode_rgba, PngConfig};
    use glyphmix_backend_raster::{Raster, Rgba};
    use glyphmix_core::catalog::Glyph;
    use glyphmix_core::sequence::ScriptedDraw;
    use std::fs;
    use std::io::Cursor;

    fn write_logo(dir: &Path) -> String {
        let logo = Raster::new(436, 30, Rgba::rgb(255, 255, 255));
        let path = dir.join("logo.png");
        fs::write(&path, encode_rgba(&logo, &PngConfig::default()).unwrap()).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse(" R "), Action::Regenerate);
        assert_eq!(Action::parse("download"), Action::Download);
        assert_eq!(Action::parse("q"), Action::Quit);
        assert_eq!(Action::parse("x"), Action::Unknown);
    }

    #[test]
    fn test_session_regenerates_and_downloads() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_logo(dir.path());
        let out = dir.path().join("saizeriya-logo.png");
        let mut draw = ScriptedDraw::new(1, [Glyph::Ya]).then(3, [Glyph::Sa, Glyph::I, Glyph::Ze]);
        let mut output = Vec::new();

        let summary = run_session(
            &source,
            ExportLayout::default(),
            &mut draw,
            &out,
            Cursor::new("r\nd\nq\nr\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(summary.regenerations, 1);
        assert_eq!(summary.downloads, vec![out.clone()]);
        assert_eq!(summary.refused, 0);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("サイゼリヤロゴチャレンジャー"));
        assert!(text.contains("ヤ"));
        assert!(text.contains("サイゼ"));

        let canvas = decode_png(&fs::read(&out).unwrap()).unwrap();
        assert_eq!((canvas.width, canvas.height), (576, 200));
    }

    #[test]
    fn test_failed_download_keeps_session_running() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_logo(dir.path());
        let out = dir.path().join("missing-dir").join("saizeriya-logo.png");
        let mut draw = ScriptedDraw::new(1, [Glyph::Ri]).then(2, [Glyph::Ze, Glyph::Ya]);
        let mut output = Vec::new();

        let summary = run_session(
            &source,
            ExportLayout::default(),
            &mut draw,
            &out,
            Cursor::new("d\nr\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(summary.failed, 1);
        assert!(summary.downloads.is_empty());
        assert_eq!(summary.regenerations, 1);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Failed to write output"));
        assert!(text.contains("ゼヤ"));
    }

    #[test]
    fn test_session_with_broken_source_stays_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.png");
        fs::write(&source, b"not a png").unwrap();
        let out = dir.path().join("saizeriya-logo.png");
        let mut draw = ScriptedDraw::new(2, [Glyph::Sa, Glyph::Sa]);
        let mut output = Vec::new();

        let summary = run_session(
            source.to_str().unwrap(),
            ExportLayout::default(),
            &mut draw,
            &out,
            Cursor::new("r\nd\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(summary.refused, 2);
        assert!(summary.downloads.is_empty());
        assert!(!out.exists());

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("読み込み中..."));
        assert!(text.contains("disabled"));
    }
}
