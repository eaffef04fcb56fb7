use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum HospitalError {
    #[error("reference range low ({low}) is above high ({high})")]
    InvertedRange { low: f64, high: f64 },

    #[error("lab value for {0} is not finite")]
    NonFiniteValue(String),

    #[error("lab panel {0} has no values")]
    EmptyPanel(String),

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
}

/// Inclusive normal range for a lab parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    low: f64,
    high: f64,
}

impl ReferenceRange {
    /// # Errors
    ///
    /// Returns `HospitalError::InvertedRange` if `low > high` or either bound is NaN.
    pub fn new(low: f64, high: f64) -> Result<Self, HospitalError> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(HospitalError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn classify(&self, value: f64) -> LabStatus {
        if value < self.low {
            LabStatus::Low
        } else if value > self.high {
            LabStatus::High
        } else {
            LabStatus::Normal
        }
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    Low,
    Normal,
    High,
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LabStatus::Low => "low",
            LabStatus::Normal => "normal",
            LabStatus::High => "high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabValue {
    parameter: String,
    value: f64,
    range: ReferenceRange,
    unit: String,
}

impl LabValue {
    /// # Errors
    ///
    /// Returns `HospitalError` for a blank parameter or a non-finite value.
    pub fn new(
        parameter: impl Into<String>,
        value: f64,
        range: ReferenceRange,
        unit: impl Into<String>,
    ) -> Result<Self, HospitalError> {
        let parameter = non_empty(parameter.into(), "lab parameter")?;
        if !value.is_finite() {
            return Err(HospitalError::NonFiniteValue(parameter));
        }
        Ok(Self {
            parameter,
            value,
            range,
            unit: unit.into(),
        })
    }

    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn range(&self) -> ReferenceRange {
        self.range
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Derived from the value and the reference range, never stored.
    #[must_use]
    pub fn status(&self) -> LabStatus {
        self.range.classify(self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabPanel {
    test: String,
    values: Vec<LabValue>,
}

impl LabPanel {
    /// # Errors
    ///
    /// Returns `HospitalError` for a blank test name or an empty panel.
    pub fn new(test: impl Into<String>, values: Vec<LabValue>) -> Result<Self, HospitalError> {
        let test = non_empty(test.into(), "lab test")?;
        if values.is_empty() {
            return Err(HospitalError::EmptyPanel(test));
        }
        Ok(Self { test, values })
    }

    #[must_use]
    pub fn test(&self) -> &str {
        &self.test
    }

    #[must_use]
    pub fn values(&self) -> &[LabValue] {
        &self.values
    }

    pub fn abnormal(&self) -> impl Iterator<Item = &LabValue> {
        self.values
            .iter()
            .filter(|v| v.status() != LabStatus::Normal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medication {
    name: String,
    dosage: String,
    indication: String,
    interactions: Vec<String>,
    contraindications: Vec<String>,
}

impl Medication {
    /// # Errors
    ///
    /// Returns `HospitalError::EmptyField` for a blank name or dosage.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        indication: impl Into<String>,
        interactions: Vec<String>,
        contraindications: Vec<String>,
    ) -> Result<Self, HospitalError> {
        Ok(Self {
            name: non_empty(name.into(), "medication name")?,
            dosage: non_empty(dosage.into(), "medication dosage")?,
            indication: indication.into(),
            interactions,
            contraindications,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn dosage(&self) -> &str {
        &self.dosage
    }

    #[must_use]
    pub fn indication(&self) -> &str {
        &self.indication
    }

    #[must_use]
    pub fn interactions(&self) -> &[String] {
        &self.interactions
    }

    #[must_use]
    pub fn contraindications(&self) -> &[String] {
        &self.contraindications
    }

    /// Case-insensitive match against the listed interactions.
    #[must_use]
    pub fn interacts_with(&self, substance: &str) -> bool {
        let needle = substance.trim();
        !needle.is_empty()
            && self
                .interactions
                .iter()
                .any(|i| i.eq_ignore_ascii_case(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureRole {
    Observer,
    Assistant,
    Performed,
}

impl fmt::Display for ProcedureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProcedureRole::Observer => "Observer",
            ProcedureRole::Assistant => "Assistant",
            ProcedureRole::Performed => "Performed",
        };
        f.write_str(label)
    }
}

/// A procedure the student took part in during a rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureLog {
    pub date: NaiveDate,
    pub procedure: String,
    pub role: ProcedureRole,
    pub supervisor: String,
}

/// One line of bedside reference material, such as `HR` / `Heart Rate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    term: String,
    detail: String,
}

impl ReferenceEntry {
    /// # Errors
    ///
    /// Returns `HospitalError::EmptyField` if either side is blank.
    pub fn new(term: impl Into<String>, detail: impl Into<String>) -> Result<Self, HospitalError> {
        Ok(Self {
            term: non_empty(term.into(), "reference term")?,
            detail: non_empty(detail.into(), "reference detail")?,
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Quick references carried into hospital mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicalReferences {
    /// Vital sign and its normal adult range.
    pub vital_signs: Vec<ReferenceEntry>,
    /// SOAP note headings with what belongs under each.
    pub note_template: Vec<ReferenceEntry>,
    pub abbreviations: Vec<ReferenceEntry>,
}

impl ClinicalReferences {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vital_signs.is_empty() && self.note_template.is_empty() && self.abbreviations.is_empty()
    }

    /// Case-insensitive lookup of an abbreviation's meaning.
    #[must_use]
    pub fn expand(&self, short: &str) -> Option<&str> {
        let needle = short.trim();
        self.abbreviations
            .iter()
            .find(|a| a.term.eq_ignore_ascii_case(needle))
            .map(ReferenceEntry::detail)
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, HospitalError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(HospitalError::EmptyField { field })
    } else {
        Ok(trimmed.to_owned())
    }
}
