//! `TerminalAcknowledger`: Presentation-layer implementation of `Acknowledger`.
//!
//! Wraps `&OutputContext` so the registration flow can acknowledge a submit
//! without depending on any presentation type directly.

use owo_colors::OwoColorize as _;

use crate::application::ports::Acknowledger;
use crate::output::OutputContext;

/// Prints the acknowledgment as a bold title line followed by its body.
///
/// Unlike the other helpers this is not suppressed by `quiet`: the user has
/// to see the outcome of a submit.
pub struct TerminalAcknowledger<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalAcknowledger<'a> {
    /// Create a new `TerminalAcknowledger` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl Acknowledger for TerminalAcknowledger<'_> {
    fn acknowledge(&self, title: &str, body: &str) {
        println!();
        println!("  {}", title.style(self.ctx.styles.bold));
        println!("  {body}");
    }
}

/// Swallows acknowledgments; used when stdout carries JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAcknowledger;

impl Acknowledger for SilentAcknowledger {
    fn acknowledge(&self, title: &str, _body: &str) {
        tracing::debug!(title, "acknowledgment suppressed");
    }
}
