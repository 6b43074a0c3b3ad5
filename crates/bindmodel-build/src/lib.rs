//! Metamodel construction for bindable view components.
//!
//! Each round validates the annotated components, resolves their property
//! setters into attributes, synthesizes resource-id overloads for text
//! attributes, collects reset methods, and hands the finished
//! [`ModelDescriptor`]s to an [`Emitter`]. Rounds share no state.

pub mod emit;
pub mod error;
pub mod overload;
pub mod registry;
pub mod resolve;
pub mod round;
pub mod validate;

pub use emit::{EmitError, Emitter, ManifestEmitter, NullEmitter};
pub use error::ProcessError;
pub use round::{Phase, Round, RoundReport};

use bindmodel_schema::prelude::*;

/// Process one round without emitting; the same input always yields the
/// same report.
#[must_use]
pub fn process_round(config: &ProcessorConfig, input: &RoundInput) -> RoundReport {
    Round::new(config).run(input, &mut NullEmitter)
}

///
/// Processor
///
/// Long-lived driver: runs rounds, forwards diagnostics to `sink` and models
/// to `emitter`.
///

pub struct Processor<S, E> {
    config: ProcessorConfig,
    sink: S,
    emitter: E,
    rounds: usize,
}

impl<S: DiagnosticSink, E: Emitter> Processor<S, E> {
    #[must_use]
    pub const fn new(config: ProcessorConfig, sink: S, emitter: E) -> Self {
        Self {
            config,
            sink,
            emitter,
            rounds: 0,
        }
    }

    /// Run a round and return its emitted models; diagnostics go to the sink.
    pub fn run_round(&mut self, input: &RoundInput) -> Vec<ModelDescriptor> {
        self.rounds += 1;
        tracing::debug!(round = self.rounds, "starting round");

        let report = Round::new(&self.config).run(input, &mut self.emitter);
        for diagnostic in report.diagnostics {
            self.sink.report(diagnostic);
        }

        report.models
    }

    #[must_use]
    pub const fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub const fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn into_parts(self) -> (S, E) {
        (self.sink, self.emitter)
    }
}
