//! Diagnostics - user-readable messages
//!
//! Grammar files, token vocabularies and source programs can all be wrong in
//! ways the user needs to fix. Each crate turns its errors into a
//! [`Diagnostic`], and the binary hands them to a [`DiagnosticCoordinator`]
//! which knows how to present them.

mod caret;
mod diagnostic;
mod diagnostic_coordinator;
mod emitter;
mod input_coordinator;
mod level;
mod span;

pub use self::{
    caret::Caret,
    diagnostic::Diagnostic,
    diagnostic_coordinator::DiagnosticCoordinator,
    emitter::{Emitter, PlainEmitter, TerminalEmitter},
    input_coordinator::{InputCoordinator, InputId},
    level::Level,
    span::Span,
};
