//! Command implementations.
//!
//! Every command writes its result to `out` and reports through the logger;
//! nothing here exits the process.

use crate::args::{Cmd, EditArgs, FileArgs, KeysArgs, PathArgs, SetArgs};
use crate::config::JsonDocConfig;
use crate::error::{CliError, Result};
use crate::path::DocPath;
use chrono::Utc;
use json_doc::{JsonValue, ParseOptions, dump, parse_file_with, parse_file_with_progress, save_to_file};
use logging::{LogLevel, Logger};
use std::io::Write;
use std::path::Path;

/// Runs one command and flushes `out`.
///
/// A failed flush is reported as `CliError::Output` like any failed write.
pub fn run(cmd: &Cmd, config: &JsonDocConfig, logger: &Logger, out: &mut dyn Write) -> Result<()> {
    let ctx = Context {
        options: config.parser.options(),
        report_progress: config.parser.report_progress,
        logger: logger.for_component("Parser"),
    };

    let result = match cmd {
        Cmd::Check(args) => cmd_check(&ctx, args, out),
        Cmd::Dump(args) => cmd_dump(&ctx, args, out),
        Cmd::Get(args) => cmd_get(&ctx, args, out),
        Cmd::Keys(args) => cmd_keys(&ctx, args, out),
        Cmd::Set(args) => cmd_set(&ctx, args),
        Cmd::Remove(args) => cmd_remove(&ctx, args),
    };
    result?;

    out.flush()?;
    Ok(())
}

struct Context {
    options: ParseOptions,
    report_progress: bool,
    logger: Logger,
}

impl Context {
    /// Loads a document, logging timing and, when enabled, progress.
    fn load(&self, file: &Path) -> Result<(JsonValue, i64)> {
        let started = Utc::now();

        let result = if self.report_progress && self.logger.is_enabled(LogLevel::Debug) {
            let mut last_decile = 0;
            parse_file_with_progress(file, &self.options, |promille| {
                let decile = promille / 100;
                if decile > last_decile {
                    last_decile = decile;
                    self.logger
                        .debug(&format!("{}: {}% parsed", file.display(), decile * 10));
                }
            })
        } else {
            parse_file_with(file, &self.options)
        };

        let elapsed = (Utc::now() - started).num_milliseconds();
        match result {
            Ok(doc) => {
                self.logger.info(&format!(
                    "Parsed {} in {} ms ({})",
                    file.display(),
                    elapsed,
                    doc.json_type()
                ));
                Ok((doc, elapsed))
            }
            Err(e) => {
                // The caller reports the error itself
                self.logger.debug(&format!(
                    "Loading {} failed after {} ms with code {}",
                    file.display(),
                    elapsed,
                    e.code()
                ));
                Err(e.into())
            }
        }
    }

    fn save(&self, doc: &JsonValue, input: &Path, out: Option<&Path>) -> Result<()> {
        let target = out.unwrap_or(input);
        save_to_file(target, doc)?;
        self.logger.info(&format!("Saved {}", target.display()));
        Ok(())
    }
}

fn cmd_check(ctx: &Context, args: &FileArgs, out: &mut dyn Write) -> Result<()> {
    let (doc, elapsed) = ctx.load(&args.file)?;
    match doc.json_type() {
        json_doc::JsonType::Array | json_doc::JsonType::Object => writeln!(
            out,
            "{}: {} with {} entries, parsed in {} ms",
            args.file.display(),
            doc.json_type(),
            doc.len(),
            elapsed
        )?,
        kind => writeln!(
            out,
            "{}: {}, parsed in {} ms",
            args.file.display(),
            kind,
            elapsed
        )?,
    }
    Ok(())
}

fn cmd_dump(ctx: &Context, args: &FileArgs, out: &mut dyn Write) -> Result<()> {
    let (doc, _) = ctx.load(&args.file)?;
    writeln!(out, "{}", dump(&doc))?;
    Ok(())
}

fn cmd_get(ctx: &Context, args: &PathArgs, out: &mut dyn Write) -> Result<()> {
    let path: DocPath = args.path.parse()?;
    let (doc, _) = ctx.load(&args.file)?;
    let value = path
        .resolve(&doc)
        .ok_or_else(|| CliError::PathNotFound(path.to_string()))?;
    writeln!(out, "{}", dump(value))?;
    Ok(())
}

fn cmd_keys(ctx: &Context, args: &KeysArgs, out: &mut dyn Write) -> Result<()> {
    let path: DocPath = args.path.as_deref().unwrap_or("").parse()?;
    let (doc, _) = ctx.load(&args.file)?;
    let value = path
        .resolve(&doc)
        .ok_or_else(|| CliError::PathNotFound(path.to_string()))?;
    if !value.is_object() {
        return Err(CliError::NotAnObject(path.to_string()));
    }
    for key in value.object_keys() {
        writeln!(out, "{}", key)?;
    }
    Ok(())
}

fn cmd_set(ctx: &Context, args: &SetArgs) -> Result<()> {
    let path: DocPath = args.path.parse()?;
    // The literal must be one complete value
    let value = json_doc::parse_with(&args.value, &ParseOptions::strict())?;
    let (mut doc, _) = ctx.load(&args.file)?;

    *path.resolve_or_create(&mut doc)? = value;
    ctx.logger.debug(&format!("Set {} in {}", path, args.file.display()));

    ctx.save(&doc, &args.file, args.out.as_deref())
}

fn cmd_remove(ctx: &Context, args: &EditArgs) -> Result<()> {
    let path: DocPath = args.path.parse()?;
    let (mut doc, _) = ctx.load(&args.file)?;

    if path.remove(&mut doc).is_none() {
        return Err(CliError::PathNotFound(path.to_string()));
    }
    ctx.logger.debug(&format!("Removed {} from {}", path, args.file.display()));

    ctx.save(&doc, &args.file, args.out.as_deref())
}
