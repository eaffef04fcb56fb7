use std::collections::BTreeMap;
use std::sync::Arc;

use content::HospitalRepository;
use study_core::model::{
    ClinicalReferences, LabPanel, LabValue, Medication, ProcedureLog, ProcedureRole,
};

use crate::error::HospitalServiceError;

/// An out-of-range lab value together with the panel it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AbnormalLab {
    pub panel: String,
    pub value: LabValue,
}

/// Result of checking a medication against another substance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionCheck {
    pub medication: String,
    pub substance: String,
    pub interacts: bool,
    pub contraindications: Vec<String>,
}

/// Read-only access to rotation reference data.
#[derive(Clone)]
pub struct HospitalService {
    hospital: Arc<dyn HospitalRepository>,
}

impl HospitalService {
    #[must_use]
    pub fn new(hospital: Arc<dyn HospitalRepository>) -> Self {
        Self { hospital }
    }

    #[must_use]
    pub fn lab_panels(&self) -> Vec<LabPanel> {
        self.hospital.lab_panels()
    }

    #[must_use]
    pub fn abnormal_values(&self) -> Vec<AbnormalLab> {
        self.hospital
            .lab_panels()
            .iter()
            .flat_map(|panel| {
                panel.abnormal().map(|value| AbnormalLab {
                    panel: panel.test().to_owned(),
                    value: value.clone(),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn medications(&self) -> Vec<Medication> {
        self.hospital.medications()
    }

    /// Case-insensitive lookup by medication name.
    ///
    /// # Errors
    ///
    /// Returns `HospitalServiceError::UnknownMedication` if nothing matches.
    pub fn medication(&self, name: &str) -> Result<Medication, HospitalServiceError> {
        let needle = name.trim();
        self.hospital
            .medications()
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| HospitalServiceError::UnknownMedication(needle.to_owned()))
    }

    /// # Errors
    ///
    /// Returns `HospitalServiceError::UnknownMedication` for an unknown name.
    pub fn check_interaction(
        &self,
        medication: &str,
        substance: &str,
    ) -> Result<InteractionCheck, HospitalServiceError> {
        let med = self.medication(medication)?;
        Ok(InteractionCheck {
            medication: med.name().to_owned(),
            substance: substance.trim().to_owned(),
            interacts: med.interacts_with(substance),
            contraindications: med.contraindications().to_vec(),
        })
    }

    /// Procedures, most recent first.
    #[must_use]
    pub fn procedures(&self) -> Vec<ProcedureLog> {
        let mut logs = self.hospital.procedures();
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        logs
    }

    #[must_use]
    pub fn procedure_counts(&self) -> BTreeMap<ProcedureRole, usize> {
        let mut counts = BTreeMap::new();
        for log in self.hospital.procedures() {
            *counts.entry(log.role).or_insert(0) += 1;
        }
        counts
    }

    /// Vital sign norms, the SOAP note template and common abbreviations.
    #[must_use]
    pub fn references(&self) -> ClinicalReferences {
        self.hospital.references()
    }
}
