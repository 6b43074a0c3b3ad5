//! Diagnostics reported while processing a round.
//!
//! Every rejected candidate produces exactly one [`Diagnostic`]. Sinks must
//! not fail; a round never aborts because reporting went wrong.

use crate::prelude::*;
use derive_more::Display;
use std::fmt;

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// Wrong declaration kind, modifier or arity.
    Structural,
    /// Valid shape, wrong place: orphan members, duplicates, name clashes.
    Semantic,
    /// Unexpected failure while building or emitting a descriptor.
    Internal,
}

///
/// Location
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Location {
    pub decl: DeclId,
    pub name: String,
}

impl Location {
    #[must_use]
    pub fn of(decl: &Declaration) -> Self {
        Self {
            decl: decl.id.clone(),
            name: decl.name.clone(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.decl)
    }
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub location: Location,
    pub class: ErrorClass,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(location: Location, class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            location,
            class,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error at {}: {}", self.class, self.location, self.message)
    }
}

///
/// DiagnosticSink
///

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

///
/// TracingSink
///
/// Forwards diagnostics to `tracing` at warn level and counts them.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink {
    reported: usize,
}

impl TracingSink {
    #[must_use]
    pub const fn new() -> Self {
        Self { reported: 0 }
    }

    #[must_use]
    pub const fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        tracing::warn!(
            decl = %diagnostic.location.decl,
            class = %diagnostic.class,
            "{}",
            diagnostic.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostic {
        let decl = Declaration::class("com.example", "CardView");
        Diagnostic::new(Location::of(&decl), ErrorClass::Structural, "bad")
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink = Vec::new();
        sink.report(sample());
        (&mut sink).report(sample());

        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn tracing_sink_counts_reports() {
        let mut sink = TracingSink::new();
        sink.report(sample());

        assert_eq!(sink.reported(), 1);
    }

    #[test]
    fn display_names_class_and_location() {
        assert_eq!(
            sample().to_string(),
            "Structural error at CardView (com.example.CardView): bad"
        );
    }
}
