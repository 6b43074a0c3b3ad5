//! Seam to the external source emitter.

use bindmodel_schema::prelude::*;
use std::io::{self, Write};
use thiserror::Error as ThisError;

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("failed to serialize model {model}: {source}")]
    Serialize {
        model: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("emitter rejected {model}: {reason}")]
    Rejected { model: String, reason: String },
}

///
/// Emitter
///
/// Receives every finished descriptor of a round, in discovery order.
///

pub trait Emitter {
    /// Called once before the first model of a round.
    fn begin_round(&mut self) {}

    fn emit_model(&mut self, model: &ModelDescriptor) -> Result<(), EmitError>;
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn begin_round(&mut self) {
        (**self).begin_round();
    }

    fn emit_model(&mut self, model: &ModelDescriptor) -> Result<(), EmitError> {
        (**self).emit_model(model)
    }
}

///
/// NullEmitter
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullEmitter;

impl Emitter for NullEmitter {
    fn emit_model(&mut self, _: &ModelDescriptor) -> Result<(), EmitError> {
        Ok(())
    }
}

///
/// Manifest
///

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    models: &'a [ModelDescriptor],
}

///
/// ManifestEmitter
///
/// Collects the round's descriptors and writes them as one JSON document for
/// a downstream source generator.
///

#[derive(Clone, Debug, Default)]
pub struct ManifestEmitter {
    models: Vec<ModelDescriptor>,
}

impl ManifestEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn to_json_string(&self) -> Result<String, EmitError> {
        serde_json::to_string_pretty(&Manifest {
            models: &self.models,
        })
        .map_err(|source| EmitError::Serialize {
            model: "manifest".to_string(),
            source,
        })
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), EmitError> {
        let json = self.to_json_string()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;

        Ok(())
    }
}

impl Emitter for ManifestEmitter {
    fn begin_round(&mut self) {
        self.models.clear();
    }

    fn emit_model(&mut self, model: &ModelDescriptor) -> Result<(), EmitError> {
        // fail here rather than when the whole manifest is written
        serde_json::to_value(model).map_err(|source| EmitError::Serialize {
            model: model.generated.to_string(),
            source,
        })?;
        self.models.push(model.clone());

        Ok(())
    }
}
