use thiserror::Error;

use crate::model::SystemId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnatomyError {
    #[error("anatomy system name cannot be empty")]
    EmptyName,

    #[error("anatomy system {0} has no structures")]
    NoStructures(SystemId),

    #[error("structure name cannot be empty")]
    EmptyStructureName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub name: String,
    pub description: String,
}

/// A body system and the structures it is browsed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnatomySystem {
    id: SystemId,
    name: String,
    structures: Vec<Structure>,
}

impl AnatomySystem {
    /// # Errors
    ///
    /// Returns `AnatomyError` for a blank system or structure name, or when no
    /// structures are given.
    pub fn new(
        id: SystemId,
        name: impl Into<String>,
        structures: Vec<Structure>,
    ) -> Result<Self, AnatomyError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(AnatomyError::EmptyName);
        }
        if structures.is_empty() {
            return Err(AnatomyError::NoStructures(id));
        }
        if structures.iter().any(|s| s.name.trim().is_empty()) {
            return Err(AnatomyError::EmptyStructureName);
        }
        Ok(Self {
            id,
            name,
            structures,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SystemId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// Case-insensitive lookup by structure name.
    #[must_use]
    pub fn structure(&self, name: &str) -> Option<&Structure> {
        self.structures
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// What the anatomy browser is focused on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnatomySelection {
    system: SystemId,
    structure: Option<String>,
    rotating: bool,
}

impl AnatomySelection {
    #[must_use]
    pub fn new(system: SystemId) -> Self {
        Self {
            system,
            structure: None,
            rotating: false,
        }
    }

    #[must_use]
    pub fn system(&self) -> &SystemId {
        &self.system
    }

    #[must_use]
    pub fn structure(&self) -> Option<&str> {
        self.structure.as_deref()
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Switching systems clears the structure focus.
    pub fn select_system(&mut self, system: SystemId) {
        self.system = system;
        self.structure = None;
    }

    pub fn select_structure(&mut self, name: impl Into<String>) {
        self.structure = Some(name.into());
    }

    pub fn toggle_rotation(&mut self) {
        self.rotating = !self.rotating;
    }
}
