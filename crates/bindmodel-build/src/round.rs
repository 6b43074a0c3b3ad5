//! One processing pass over a round's declarations.

use crate::{
    emit::Emitter,
    error::ProcessError,
    overload::synthesize_overloads,
    registry::ModelRegistry,
    resolve::{attach_property, build_model},
    validate::{MemberRole, validate_component, validate_member},
};
use bindmodel_schema::prelude::*;
use derive_more::Display;

///
/// Phase
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    ScanningComponents,
    ScanningProperties,
    SynthesizingOverloads,
    ScanningResets,
    Emitting,
}

impl Phase {
    /// Unconditional successor; `Emitting` wraps back to `Idle`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Idle => Self::ScanningComponents,
            Self::ScanningComponents => Self::ScanningProperties,
            Self::ScanningProperties => Self::SynthesizingOverloads,
            Self::SynthesizingOverloads => Self::ScanningResets,
            Self::ScanningResets => Self::Emitting,
            Self::Emitting => Self::Idle,
        }
    }
}

///
/// RoundReport
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundReport {
    pub models: Vec<ModelDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RoundReport {
    #[must_use]
    pub fn model(&self, generated_name: &str) -> Option<&ModelDescriptor> {
        self.models
            .iter()
            .find(|m| m.generated_class_name() == generated_name)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

///
/// Round
///
/// Orchestrates a single pass. Each candidate is either attached or reported;
/// nothing aborts the round.
///

pub struct Round<'a> {
    config: &'a ProcessorConfig,
    registry: ModelRegistry,
    diagnostics: Vec<Diagnostic>,
    phase: Phase,
}

impl<'a> Round<'a> {
    #[must_use]
    pub fn new(config: &'a ProcessorConfig) -> Self {
        Self {
            config,
            registry: ModelRegistry::new(),
            diagnostics: Vec::new(),
            phase: Phase::Idle,
        }
    }

    /// Run every phase over `input`, handing finished models to `emitter`.
    pub fn run<E: Emitter + ?Sized>(mut self, input: &RoundInput, emitter: &mut E) -> RoundReport {
        let span = tracing::info_span!("round", candidates = input.len());
        let _enter = span.enter();

        self.registry.clear();

        self.advance();
        self.scan_components(&input.components);

        self.advance();
        self.scan_properties(&input.properties);

        self.advance();
        self.run_synthesis();

        self.advance();
        self.scan_resets(&input.resets);

        self.advance();
        let models = self.emit(emitter);

        self.advance();
        tracing::debug!(
            models = models.len(),
            diagnostics = self.diagnostics.len(),
            "round complete"
        );

        RoundReport {
            models,
            diagnostics: self.diagnostics,
        }
    }

    fn advance(&mut self) {
        let next = self.phase.next();
        tracing::debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
    }

    fn report(&mut self, decl: &Declaration, err: &ProcessError) {
        self.diagnostics.push(err.at(decl));
    }

    fn scan_components(&mut self, components: &[Declaration]) {
        for decl in components {
            let result = validate_component(decl, self.config)
                .and_then(|()| self.registry.register(build_model(decl, self.config)));

            if let Err(err) = result {
                self.report(decl, &err);
            }
        }
    }

    fn scan_properties(&mut self, properties: &[Declaration]) {
        for decl in properties {
            if let Err(err) = self.process_property(decl) {
                self.report(decl, &err);
            }
        }
    }

    fn process_property(&mut self, decl: &Declaration) -> Result<(), ProcessError> {
        validate_member(decl, MemberRole::Property, self.config)?;

        let model = self
            .registry
            .owner_of_mut(decl)
            .ok_or_else(|| orphan(decl, MemberRole::Property, self.config))?;
        attach_property(model, decl, self.config)?;

        Ok(())
    }

    fn run_synthesis(&mut self) {
        for model in self.registry.iter_mut() {
            synthesize_overloads(model, self.config);
        }
    }

    fn scan_resets(&mut self, resets: &[Declaration]) {
        for decl in resets {
            if let Err(err) = self.process_reset(decl) {
                self.report(decl, &err);
            }
        }
    }

    fn process_reset(&mut self, decl: &Declaration) -> Result<(), ProcessError> {
        validate_member(decl, MemberRole::Reset, self.config)?;

        let model = self
            .registry
            .owner_of_mut(decl)
            .ok_or_else(|| orphan(decl, MemberRole::Reset, self.config))?;
        model.reset_actions.push(ResetAction::new(decl.name.clone()));

        Ok(())
    }

    // Models whose emission fails are reported and left out of the report.
    fn emit<E: Emitter + ?Sized>(&mut self, emitter: &mut E) -> Vec<ModelDescriptor> {
        emitter.begin_round();

        let mut emitted = Vec::with_capacity(self.registry.len());
        for model in self.registry.take_models() {
            match emitter.emit_model(&model) {
                Ok(()) => emitted.push(model),
                Err(err) => {
                    let location = Location {
                        decl: model.component.clone(),
                        name: model.component_type.name.clone(),
                    };
                    let err = ProcessError::from(err);
                    self.diagnostics
                        .push(Diagnostic::new(location, err.class(), err.to_string()));
                }
            }
        }

        emitted
    }
}

fn orphan(decl: &Declaration, role: MemberRole, config: &ProcessorConfig) -> ProcessError {
    ProcessError::OrphanMember {
        marker: role.marker(config),
        component_marker: ProcessorConfig::marker_label(&config.component_marker),
        name: decl.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::NullEmitter;

    #[test]
    fn phases_cycle_back_to_idle() {
        let mut phase = Phase::Idle;
        let mut seen = Vec::new();
        for _ in 0..6 {
            phase = phase.next();
            seen.push(phase);
        }

        assert_eq!(
            seen,
            vec![
                Phase::ScanningComponents,
                Phase::ScanningProperties,
                Phase::SynthesizingOverloads,
                Phase::ScanningResets,
                Phase::Emitting,
                Phase::Idle,
            ]
        );
    }

    #[test]
    fn empty_round_produces_nothing() {
        let config = ProcessorConfig::default();
        let report = Round::new(&config).run(&RoundInput::new(), &mut NullEmitter);

        assert!(report.models.is_empty());
        assert!(report.is_clean());
    }
}
