use std::sync::Arc;

use tracing::debug;

use content::AnatomyRepository;
use study_core::model::{AnatomySelection, AnatomySystem, Structure, SystemId};

use crate::error::AnatomyServiceError;

/// Browsing state over the anatomy systems.
#[derive(Debug, Clone)]
pub struct AnatomyViewer {
    systems: Vec<AnatomySystem>,
    /// Index into `systems` of the selected system.
    current: usize,
    selection: AnatomySelection,
}

impl AnatomyViewer {
    /// Viewer focused on the first system.
    ///
    /// # Errors
    ///
    /// Returns `AnatomyServiceError::NoSystems` if `systems` is empty.
    pub fn new(systems: Vec<AnatomySystem>) -> Result<Self, AnatomyServiceError> {
        let first = systems.first().ok_or(AnatomyServiceError::NoSystems)?;
        let selection = AnatomySelection::new(first.id().clone());
        Ok(Self {
            systems,
            current: 0,
            selection,
        })
    }

    #[must_use]
    pub fn systems(&self) -> &[AnatomySystem] {
        &self.systems
    }

    #[must_use]
    pub fn selection(&self) -> &AnatomySelection {
        &self.selection
    }

    #[must_use]
    pub fn current_system(&self) -> &AnatomySystem {
        &self.systems[self.current]
    }

    #[must_use]
    pub fn current_structure(&self) -> Option<&Structure> {
        let name = self.selection.structure()?;
        self.current_system().structure(name)
    }

    /// # Errors
    ///
    /// Returns `AnatomyServiceError::Content` for an id not in the viewer.
    pub fn select_system(&mut self, id: &SystemId) -> Result<(), AnatomyServiceError> {
        let index = self
            .systems
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| content::ContentError::NotFound {
                kind: "anatomy system",
                id: id.to_string(),
            })?;
        self.current = index;
        self.selection.select_system(id.clone());
        debug!(system = %id, "anatomy system selected");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AnatomyServiceError::UnknownStructure` if the current system has
    /// no structure by that name.
    pub fn select_structure(&mut self, name: &str) -> Result<(), AnatomyServiceError> {
        let system = self.current_system();
        let structure = system
            .structure(name)
            .ok_or_else(|| AnatomyServiceError::UnknownStructure {
                system: system.id().clone(),
                name: name.to_owned(),
            })?;
        let canonical = structure.name.clone();
        self.selection.select_structure(canonical);
        Ok(())
    }

    pub fn toggle_rotation(&mut self) {
        self.selection.toggle_rotation();
    }
}

#[derive(Clone)]
pub struct AnatomyService {
    anatomy: Arc<dyn AnatomyRepository>,
}

impl AnatomyService {
    #[must_use]
    pub fn new(anatomy: Arc<dyn AnatomyRepository>) -> Self {
        Self { anatomy }
    }

    #[must_use]
    pub fn systems(&self) -> Vec<AnatomySystem> {
        self.anatomy.systems()
    }

    /// # Errors
    ///
    /// Returns `AnatomyServiceError::NoSystems` when there is nothing to browse.
    pub fn viewer(&self) -> Result<AnatomyViewer, AnatomyServiceError> {
        AnatomyViewer::new(self.anatomy.systems())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(id: &str, structures: &[&str]) -> AnatomySystem {
        AnatomySystem::new(
            SystemId::new(id).unwrap(),
            id,
            structures
                .iter()
                .map(|n| Structure {
                    name: (*n).to_owned(),
                    description: String::new(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn viewer() -> AnatomyViewer {
        AnatomyViewer::new(vec![
            system("cardiovascular", &["Heart", "Aorta"]),
            system("respiratory", &["Lungs"]),
        ])
        .unwrap()
    }

    #[test]
    fn starts_on_first_system() {
        let v = viewer();
        assert_eq!(v.current_system().id().as_str(), "cardiovascular");
        assert!(v.current_structure().is_none());
    }

    #[test]
    fn structure_selection_uses_canonical_name() {
        let mut v = viewer();
        v.select_structure("aorta").unwrap();
        assert_eq!(v.selection().structure(), Some("Aorta"));
        assert_eq!(v.current_structure().unwrap().name, "Aorta");
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut v = viewer();
        assert!(matches!(
            v.select_structure("Lungs"),
            Err(AnatomyServiceError::UnknownStructure { .. })
        ));
        assert!(v.select_system(&SystemId::new("skeletal").unwrap()).is_err());
        assert_eq!(v.current_system().id().as_str(), "cardiovascular");
    }

    #[test]
    fn switching_system_drops_structure() {
        let mut v = viewer();
        v.select_structure("Heart").unwrap();
        v.select_system(&SystemId::new("respiratory").unwrap()).unwrap();
        assert!(v.current_structure().is_none());
    }

    #[test]
    fn current_system_tracks_selection() {
        let mut v = viewer();
        let respiratory = SystemId::new("respiratory").unwrap();
        v.select_system(&respiratory).unwrap();
        assert_eq!(v.current_system().id(), &respiratory);
        assert_eq!(v.selection().system(), &respiratory);
        v.select_structure("lungs").unwrap();
        assert_eq!(v.current_structure().unwrap().name, "Lungs");

        assert!(v.select_system(&SystemId::new("skeletal").unwrap()).is_err());
        assert_eq!(v.current_system().id(), &respiratory);

        v.select_system(&SystemId::new("cardiovascular").unwrap()).unwrap();
        assert_eq!(v.current_system().id().as_str(), "cardiovascular");
    }

    #[test]
    fn no_systems_is_an_error() {
        assert!(matches!(
            AnatomyViewer::new(Vec::new()),
            Err(AnatomyServiceError::NoSystems)
        ));
    }
}
