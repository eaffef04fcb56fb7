use std::collections::BTreeMap;
use std::fmt::Write as _;

use comfy_table::{Cell, CellAlignment, Color};

use services::{AbnormalLab, InteractionCheck};
use study_core::model::{
    ClinicalReferences, LabPanel, Medication, ProcedureLog, ProcedureRole, ReferenceEntry,
};

use crate::views::table::{align_column, dim_cell, lab_status_cell, new_table};
use crate::vm::{HospitalVm, format_short_date};

/// Reference data shown in hospital mode.
#[derive(Debug, Clone, Copy)]
pub struct HospitalData<'a> {
    pub lab_panels: &'a [LabPanel],
    pub abnormal: &'a [AbnormalLab],
    pub medications: &'a [Medication],
    pub procedures: &'a [ProcedureLog],
    pub procedure_counts: &'a BTreeMap<ProcedureRole, usize>,
    pub references: &'a ClinicalReferences,
}

#[must_use]
pub fn render_hospital(vm: &HospitalVm, data: HospitalData<'_>) -> String {
    let mut out = format!("Hospital Mode [{}]\n", vm.status_label());

    for panel in data.lab_panels {
        let mut table = new_table(&["Parameter", "Value", "Reference", "Unit", "Status"]);
        align_column(&mut table, 1, CellAlignment::Right);
        for value in panel.values() {
            table.add_row(vec![
                Cell::new(value.parameter()),
                Cell::new(value.value()),
                Cell::new(value.range()),
                Cell::new(value.unit()),
                lab_status_cell(value.status()),
            ]);
        }
        let _ = write!(out, "\n{}\n{table}\n", panel.test());
    }
    if !data.lab_panels.is_empty() {
        render_abnormal(&mut out, data.abnormal);
    }

    if !data.medications.is_empty() {
        let mut table = new_table(&[
            "Medication",
            "Dosage",
            "Indication",
            "Interactions",
            "Contraindications",
        ]);
        for med in data.medications {
            table.add_row(vec![
                Cell::new(med.name()),
                Cell::new(med.dosage()),
                Cell::new(med.indication()),
                Cell::new(med.interactions().join(", ")),
                Cell::new(med.contraindications().join(", ")).fg(Color::Red),
            ]);
        }
        let _ = write!(out, "\nMedications\n{table}\n");
    }

    if !data.procedures.is_empty() {
        let mut table = new_table(&["Date", "Procedure", "Role", "Supervisor"]);
        for log in data.procedures {
            table.add_row(vec![
                Cell::new(format_short_date(log.date)),
                Cell::new(&log.procedure),
                Cell::new(log.role),
                Cell::new(&log.supervisor),
            ]);
        }
        let _ = write!(out, "\nProcedure log\n{table}\n");
        let counts: Vec<String> = data
            .procedure_counts
            .iter()
            .map(|(role, count)| format!("{role}: {count}"))
            .collect();
        let _ = writeln!(out, "{}", counts.join(" | "));
    }

    render_references(&mut out, data.references);
    out
}

fn render_abnormal(out: &mut String, abnormal: &[AbnormalLab]) {
    if abnormal.is_empty() {
        out.push_str("\nAll lab values within reference range.\n");
        return;
    }
    out.push_str("\nAbnormal results\n");
    for lab in abnormal {
        let value = &lab.value;
        let _ = writeln!(
            out,
            "  {} {} {} ({}, ref {}) [{}]",
            value.parameter(),
            value.value(),
            value.unit(),
            value.status(),
            value.range(),
            lab.panel
        );
    }
}

fn render_references(out: &mut String, references: &ClinicalReferences) {
    if !references.vital_signs.is_empty() {
        let table = entry_table(&["Vital sign", "Normal range"], &references.vital_signs);
        let _ = write!(out, "\nVital Signs Reference\n{table}\n");
    }
    if !references.note_template.is_empty() {
        out.push_str("\nSOAP Note Template\n");
        for section in &references.note_template {
            let _ = writeln!(out, "  {}: {}", section.term(), section.detail());
        }
    }
    if !references.abbreviations.is_empty() {
        let table = entry_table(&["Abbreviation", "Meaning"], &references.abbreviations);
        let _ = write!(out, "\nCommon Medical Abbreviations\n{table}\n");
    }
}

fn entry_table(headers: &[&str], entries: &[ReferenceEntry]) -> comfy_table::Table {
    let mut table = new_table(headers);
    for entry in entries {
        table.add_row(vec![Cell::new(entry.term()), Cell::new(entry.detail())]);
    }
    table
}

/// Detail card for a single medication.
#[must_use]
pub fn render_medication(med: &Medication) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "none listed".to_owned()
        } else {
            items.join(", ")
        }
    };
    let mut table = new_table(&["Field", "Value"]);
    table.add_row(vec![dim_cell("Dosage"), Cell::new(med.dosage())]);
    table.add_row(vec![dim_cell("Indication"), Cell::new(med.indication())]);
    table.add_row(vec![
        dim_cell("Interactions"),
        Cell::new(list(med.interactions())),
    ]);
    table.add_row(vec![
        dim_cell("Contraindications"),
        Cell::new(list(med.contraindications())).fg(Color::Red),
    ]);
    format!("{}\n{table}\n", med.name())
}

#[must_use]
pub fn render_interaction(check: &InteractionCheck) -> String {
    let verdict = if check.interacts {
        "Known interaction"
    } else {
        "No listed interaction"
    };
    let mut out = format!("{} + {}: {verdict}\n", check.medication, check.substance);
    if !check.contraindications.is_empty() {
        let _ = writeln!(
            out,
            "Contraindicated in: {}",
            check.contraindications.join(", ")
        );
    }
    out
}
