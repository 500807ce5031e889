//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use std::cell::OnceCell;

use indicatif::ProgressBar;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` updates a spinner on a TTY, otherwise prints `"  → {message}"`.
///   The spinner is started by the first step, so commands that never report
///   a step draw nothing.
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ⚠ {message}"` (never suppressed)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    spinner: OnceCell<ProgressBar>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            spinner: OnceCell::new(),
        }
    }

    /// Run `print` without the spinner line getting in the way.
    fn above_spinner(&self, print: impl FnOnce()) {
        match self.spinner.get() {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if self.ctx.show_progress() {
            self.spinner
                .get_or_init(|| progress::spinner(""))
                .set_message(message.to_string());
        } else {
            self.ctx.info(message);
        }
    }

    fn success(&self, message: &str) {
        self.above_spinner(|| self.ctx.success(message));
    }

    fn warn(&self, message: &str) {
        self.above_spinner(|| self.ctx.warn(message));
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}
