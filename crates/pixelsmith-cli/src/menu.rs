//! The interactive numbered menu.
//!
//! Every selection is applied to the image loaded at startup, never to the
//! previous result, and the output is written through an [`ImageSink`].

use std::io::{self, BufRead, Write};

use pixelsmith_core::{Operation, OperationRequest, Outcome, PixelBuffer, apply};

use crate::dump;
use crate::image_io::ImageSink;

/// Menu number that leaves the loop.
pub const EXIT_CHOICE: u32 = 15;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    /// Parse a selection line. `None` for anything that is not a listed number.
    pub fn parse(line: &str) -> Option<Self> {
        let number: u32 = line.trim().parse().ok()?;
        if number == EXIT_CHOICE {
            return Some(Self::Exit);
        }
        Operation::from_menu_number(number).map(Self::Run)
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Choose a number between 1 and {EXIT_CHOICE}:")?;
    for &op in Operation::all() {
        writeln!(out, "\t{}. {}", op.menu_number(), op.label())?;
    }
    writeln!(out, "\t{EXIT_CHOICE}. Exit")?;
    writeln!(out)?;
    out.flush()
}

/// Run the menu until the user exits or `input` reaches EOF.
///
/// A selection line may carry the parameter after the menu number
/// (`2 50`); otherwise the parameter is prompted for.
///
/// `source` is `None` when the startup image could not be loaded; each
/// selection then reports the failure and the loop continues. Only I/O
/// errors on `input` or `out` end the loop early.
pub fn run_menu<R, W, S>(
    input: &mut R,
    out: &mut W,
    source: Option<&PixelBuffer>,
    sink: &mut S,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: ImageSink,
{
    writeln!(out, "Image Editor!")?;
    loop {
        print_menu(out)?;
        let Some(line) = next_line(input)? else {
            break;
        };

        let mut tokens = line.split_whitespace();
        let choice = tokens.next().unwrap_or_default();
        let inline_value = tokens.next().map(str::to_owned);

        let op = match MenuChoice::parse(choice) {
            Some(MenuChoice::Run(op)) => op,
            Some(MenuChoice::Exit) => break,
            None => {
                tracing::debug!("rejected menu input {:?}", line.trim());
                writeln!(out, "Error: invalid choice")?;
                continue;
            }
        };

        let value = match op.parameter() {
            Some(kind) => {
                let text = match inline_value {
                    Some(text) => text,
                    None => {
                        write!(out, "{} ", kind.prompt())?;
                        out.flush()?;
                        let Some(line) = next_line(input)? else {
                            break;
                        };
                        line.trim().to_owned()
                    }
                };
                match text.parse::<f64>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        writeln!(out, "Error: `{text}` is not a number")?;
                        continue;
                    }
                }
            }
            None => None,
        };

        run_selection(op, value, out, source, sink)?;
    }
    writeln!(out, "Exiting the code!")?;
    out.flush()
}

fn run_selection<W: Write, S: ImageSink>(
    op: Operation,
    value: Option<f64>,
    out: &mut W,
    source: Option<&PixelBuffer>,
    sink: &mut S,
) -> io::Result<()> {
    let outcome = OperationRequest::new(op, value).and_then(|request| apply(&request, source));
    match outcome {
        Ok(Outcome::Image(image)) => match sink.store(&image) {
            Ok(location) => {
                tracing::info!("{} written to {location}", op.slug());
                writeln!(out, "You can see the output by opening the file -> {location}")
            }
            Err(err) => {
                tracing::warn!("failed to store {} result: {err}", op.slug());
                writeln!(out, "Error: {err}")
            }
        },
        Ok(Outcome::Dump(pixels)) => dump::write_text(pixels, out),
        Err(err) => {
            tracing::warn!("{} failed: {err}", op.slug());
            writeln!(out, "Error: {err}")
        }
    }
}

/// Next non-blank line, or `None` at EOF. Invalid UTF-8 is replaced rather
/// than treated as a read error.
fn next_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    loop {
        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        if !line.trim().is_empty() {
            return Ok(Some(line.into_owned()));
        }
    }
}
