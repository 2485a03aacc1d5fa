//! CLI context: bundles settings and flags.

use std::io::{BufWriter, Write};

use zeroize::Zeroizing;

use super::{CliFlags, parse, print_help, prompts};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::{self, Selection};
use crate::settings::Settings;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

/// Larger batches are streamed to stdout instead of collected for the clipboard.
pub const MAX_CLIPBOARD_BATCH: usize = 10_000;

/// What a run resolved to, after flags are applied over settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub selection: Selection,
    pub count: usize,
}

impl Context {
    pub fn new(args: &[String], settings: Settings) -> Result<Self> {
        let flags = parse(args)?;
        Ok(Self { settings, flags })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        prompts::set_quiet(self.flags.quiet);

        let request = self.request()?;
        if self.flags.save {
            self.save(&request)?;
        }

        if self.flags.clipboard {
            if request.count > MAX_CLIPBOARD_BATCH {
                prompts::warn(&format!(
                    "Clipboard holds at most {MAX_CLIPBOARD_BATCH} passwords, printing instead"
                ));
            } else {
                return self.copy_or_print(&request);
            }
        }

        let stdout = std::io::stdout();
        write_passwords(&mut BufWriter::new(stdout.lock()), &request)
    }

    /// Resolve flags over saved settings, validating the length.
    pub fn request(&self) -> Result<Request> {
        let length = match &self.flags.length {
            Some(raw) => pass::validate_length(raw)?,
            None => self.settings.length,
        };
        Ok(Request {
            length,
            selection: self.flags.selection(self.settings.selection),
            count: self.flags.number.unwrap_or(1),
        })
    }

    fn save(&mut self, request: &Request) -> Result<()> {
        self.settings = Settings {
            length: request.length,
            selection: request.selection,
        };
        self.settings.save_to_file()?;
        prompts::settings_saved();
        Ok(())
    }

    fn copy_or_print(&self, request: &Request) -> Result<()> {
        let passwords = generate_batch(request)?;
        match copy_all(&passwords) {
            Ok(()) => {
                prompts::clipboard_copied(passwords.len());
                return Ok(());
            }
            Err(e) => prompts::clipboard_fallback(&e.to_string()),
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for p in &passwords {
            writeln!(out, "{}", p.as_str())?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Generate and write one password per line, without holding the batch.
pub fn write_passwords<W: Write>(out: &mut W, request: &Request) -> Result<()> {
    let pool = pass::build_pool(&request.selection);
    for _ in 0..request.count {
        let password = Zeroizing::new(pass::generate(&pool, request.length)?);
        writeln!(out, "{}", password.as_str())?;
    }
    out.flush()?;
    Ok(())
}

pub fn generate_batch(request: &Request) -> Result<Vec<Zeroizing<String>>> {
    let pool = pass::build_pool(&request.selection);
    (0..request.count)
        .map(|_| {
            pass::generate(&pool, request.length)
                .map(Zeroizing::new)
                .map_err(Into::into)
        })
        .collect()
}

fn copy_all(passwords: &[Zeroizing<String>]) -> Result<()> {
    let joined = Zeroizing::new(
        passwords
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    );
    Clipboard::new()?.copy(&joined)
}
