//! Command execution against a resolved [`EditorConfig`].

use std::io::{self, Write};

use pixelsmith_core::transform::dump_pixel_values;
use pixelsmith_core::{Operation, OperationRequest, Outcome, apply};

use crate::cli::{ApplyArgs, Command, DumpArgs};
use crate::config::EditorConfig;
use crate::dump::{self, DumpFormat};
use crate::error::CliError;
use crate::image_io::{FileSink, ImageSink, load_image};
use crate::menu::run_menu;

/// Run `command`, defaulting to the interactive menu.
pub fn run(command: Option<Command>, config: &EditorConfig) -> Result<(), CliError> {
    match command.unwrap_or(Command::Menu) {
        Command::Menu => menu(config),
        Command::Apply(args) => apply_once(&args, config, &mut io::stdout().lock()),
        Command::Dump(args) => dump_input(&args, config, &mut io::stdout().lock()),
        Command::List => list(&mut io::stdout().lock()),
    }
}

fn menu(config: &EditorConfig) -> Result<(), CliError> {
    let source = match load_image(&config.input) {
        Ok(image) => Some(image),
        Err(err) => {
            tracing::warn!("continuing without an image: {err}");
            None
        }
    };
    let mut sink = file_sink(config);
    run_menu(
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        source.as_ref(),
        &mut sink,
    )?;
    Ok(())
}

/// One non-interactive transform. A dump request prints to `out` instead of
/// writing a file.
pub fn apply_once<W: Write>(
    args: &ApplyArgs,
    config: &EditorConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let request = OperationRequest::new(args.operation, args.value)?;
    let source = load_image(&config.input)?;
    match apply(&request, Some(&source))? {
        Outcome::Image(image) => {
            let location = file_sink(config).store(&image)?;
            writeln!(out, "{location}")?;
        }
        Outcome::Dump(pixels) => dump::write_text(pixels, out)?,
    }
    Ok(())
}

pub fn dump_input<W: Write>(
    args: &DumpArgs,
    config: &EditorConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let source = load_image(&config.input)?;
    let pixels = dump_pixel_values(&source);
    match args.format {
        DumpFormat::Text => dump::write_text(pixels, out)?,
        DumpFormat::Json => dump::write_json(pixels, out)?,
    }
    Ok(())
}

/// Print `menu-number  slug  label` for every operation.
pub fn list<W: Write>(out: &mut W) -> Result<(), CliError> {
    for &op in Operation::all() {
        let param = op
            .parameter()
            .map(|kind| format!(" (--value: {kind:?})"))
            .unwrap_or_default();
        writeln!(out, "{:>2}  {:<24} {}{param}", op.menu_number(), op.slug(), op.label())?;
    }
    Ok(())
}

fn file_sink(config: &EditorConfig) -> FileSink {
    FileSink {
        path: config.output.clone(),
        jpeg_quality: config.jpeg_quality,
    }
}
