use crate::error::ProcessError;
use bindmodel_schema::prelude::*;
use std::collections::HashMap;

///
/// ModelRegistry
///
/// Descriptors for the current round, in component discovery order, indexed
/// by component identity and by generated class name.
///

#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
    by_component: HashMap<DeclId, usize>,
    by_generated: HashMap<String, DeclId>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything from the previous round.
    pub fn clear(&mut self) {
        self.models.clear();
        self.by_component.clear();
        self.by_generated.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Register a component's descriptor; generated names must be unique.
    pub fn register(&mut self, model: ModelDescriptor) -> Result<(), ProcessError> {
        let generated = model.generated.qualified_name();

        if let Some(previous) = self.by_generated.get(&generated) {
            return Err(ProcessError::DuplicateGeneratedName {
                generated,
                previous: previous.clone(),
            });
        }
        if self.by_component.contains_key(&model.component) {
            return Err(ProcessError::internal(
                "registering model",
                format!("component {} registered twice", model.component),
            ));
        }

        self.by_generated.insert(generated, model.component.clone());
        self.by_component
            .insert(model.component.clone(), self.models.len());
        self.models.push(model);

        Ok(())
    }

    #[must_use]
    pub fn get(&self, component: &DeclId) -> Option<&ModelDescriptor> {
        self.by_component.get(component).map(|&i| &self.models[i])
    }

    pub fn get_mut(&mut self, component: &DeclId) -> Option<&mut ModelDescriptor> {
        self.by_component
            .get(component)
            .copied()
            .and_then(|i| self.models.get_mut(i))
    }

    /// Model owning a member, looked up by the member's enclosing
    /// declaration (never by the member's own id).
    pub fn owner_of_mut(&mut self, member: &Declaration) -> Option<&mut ModelDescriptor> {
        let owner = member.enclosing.as_ref()?;
        self.get_mut(owner)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ModelDescriptor> {
        self.models.iter_mut()
    }

    /// Hand the round's descriptors over, leaving the registry empty.
    pub fn take_models(&mut self) -> Vec<ModelDescriptor> {
        self.by_component.clear();
        self.by_generated.clear();
        std::mem::take(&mut self.models)
    }
}
