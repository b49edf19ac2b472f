//! Shell layer - a line-oriented host for the catalog core
//!
//! Each input line is one command. The shell parses text, drives the
//! `SelectionController`, and renders results as text; it holds no catalog
//! rules of its own.

/// Command implementations (browse, detail, general)
pub mod commands;
/// Input helpers (autocomplete)
pub mod handlers;

use crate::{
    config::LoadedCatalog,
    core::{Catalog, ContactRequest, DetailPresenter, OutboundContact, SelectionController},
    errors::{Error, Result},
};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Data shared by every command.
pub struct ShellData {
    /// The product store
    pub catalog: Catalog,
    /// Detail view and outbound message builder
    pub presenter: DetailPresenter,
}

impl ShellData {
    /// Wraps a loaded catalog with a presenter signing as `business_name`.
    #[must_use]
    pub fn new(loaded: LoadedCatalog, business_name: &str, contact_number: &str) -> Self {
        Self {
            catalog: loaded.catalog,
            presenter: DetailPresenter::new(loaded.images, business_name, contact_number),
        }
    }
}

/// Outbound contact that only logs the request; used when no platform link
/// handler is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingContact;

impl OutboundContact for LoggingContact {
    fn open(&self, request: &ContactRequest) -> Result<()> {
        info!(
            "Outbound message to {}: {}",
            request.destination.as_deref().unwrap_or("<user choice>"),
            request.message
        );
        Ok(())
    }
}

/// Interactive catalog browser
pub struct Shell {
    pub(crate) data: ShellData,
    pub(crate) controller: SelectionController,
    pub(crate) contact: Box<dyn OutboundContact>,
}

impl Shell {
    /// Creates a shell positioned at the full catalog listing.
    #[must_use]
    pub fn new(data: ShellData, contact: Box<dyn OutboundContact>) -> Self {
        let controller = SelectionController::new(&data.catalog);
        Self {
            data,
            controller,
            contact,
        }
    }

    /// Current selection state
    #[must_use]
    pub const fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Runs one command line and returns the text to show.
    ///
    /// Unknown commands and malformed arguments are answered with a message
    /// rather than an error.
    ///
    /// # Errors
    /// Returns an error only if an outbound collaborator fails.
    pub fn execute(&mut self, line: &str) -> Result<String> {
        let line = line.trim();
        let (name, args) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, args)| (name, args.trim()));
        debug!("Executing command '{name}' with args '{args}'");

        let result = match name.to_ascii_lowercase().as_str() {
            "" => Ok(String::new()),
            "help" => Ok(commands::general::help()),
            "categories" => Ok(commands::browse::categories(self)),
            "category" | "cat" => commands::browse::category(self, args),
            "subcategories" | "subs" => Ok(commands::browse::subcategories(self)),
            "subcategory" | "sub" => commands::browse::subcategory(self, args),
            "price" => commands::browse::price(self, args),
            "facet" => commands::browse::facet(self, args),
            "facets" => commands::browse::facets(self),
            "sort" => commands::browse::sort(self, args),
            "list" => commands::browse::list(self),
            "featured" => commands::browse::featured(self),
            "reset" => Ok(commands::browse::reset(self)),
            "open" => commands::detail::open(self, args),
            "close" => Ok(commands::detail::close(self)),
            "inquire" => commands::detail::inquire(self),
            "share" => commands::detail::share(self),
            other => Ok(format!(
                "❓ Unknown command '{other}'. Type `help` for a list of commands."
            )),
        };

        match result {
            Err(
                e @ (Error::InvalidCommand { .. }
                | Error::UnknownCategory { .. }
                | Error::ProductNotFound { .. }),
            ) => {
                debug!("Command '{name}' rejected: {e}");
                Ok(format!("❌ {e}"))
            }
            other => other,
        }
    }

    /// Reads commands from `input` until end of input or `quit`, writing each
    /// reply to `output`.
    ///
    /// # Errors
    /// Returns an error if reading or writing fails, or if an outbound
    /// collaborator fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", commands::general::welcome(&self.data.catalog))?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if matches!(line.trim(), "quit" | "exit") {
                break;
            }
            match self.execute(&line) {
                Ok(reply) if reply.is_empty() => {}
                Ok(reply) => writeln!(output, "{reply}")?,
                Err(e) => {
                    warn!("Command '{}' failed: {e}", line.trim());
                    writeln!(output, "⚠️ {e}")?;
                }
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        info!("Shell session finished");
        Ok(())
    }
}
