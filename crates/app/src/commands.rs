use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use services::AppServices;
use study_core::model::{DeckId, ExamId, SystemId};
use ui::Section;
use ui::views::{
    HospitalData, ProgressData, ScheduleData, render_anatomy, render_catalogue, render_dashboard,
    render_decks, render_hospital, render_interaction, render_medication, render_progress,
    render_schedule,
};
use ui::vm::{ExamVm, FlashcardVm, HospitalVm, ScheduleView, ScheduleVm};

use crate::cli::{Command, ScheduleViewArg};
use crate::interactive;

/// Runs one subcommand against the loaded services.
pub fn dispatch<R: BufRead, W: Write>(
    services: &AppServices,
    command: Command,
    input: R,
    mut out: W,
) -> Result<()> {
    let section = section_of(&command);
    debug!(section = section.slug(), "navigate");
    writeln!(out, "{}", ui::render_nav(section))?;

    match command {
        Command::Dashboard => show_dashboard(services, out),
        Command::Flashcards { deck, shuffle } => {
            run_flashcards(services, deck.as_ref(), shuffle, input, out)
        }
        Command::Exams => show_exams(services, out),
        Command::Exam { id } => run_exam(services, &id, input, out),
        Command::Anatomy {
            system,
            structure,
            rotate,
        } => show_anatomy(services, system.as_ref(), structure.as_deref(), rotate, out),
        Command::Hospital {
            offline,
            medication: None,
            ..
        } => show_hospital(services, offline, out),
        Command::Hospital {
            medication: Some(name),
            interaction,
            ..
        } => show_medication(services, &name, interaction.as_deref(), out),
        Command::Progress => show_progress(services, out),
        Command::Schedule { view } => show_schedule(services, view, out),
    }
}

fn section_of(command: &Command) -> Section {
    match command {
        Command::Dashboard => Section::Dashboard,
        Command::Flashcards { .. } => Section::Flashcards,
        Command::Exams | Command::Exam { .. } => Section::Exams,
        Command::Anatomy { .. } => Section::Anatomy,
        Command::Hospital { .. } => Section::Hospital,
        Command::Progress => Section::Progress,
        Command::Schedule { .. } => Section::Schedule,
    }
}

fn show_dashboard(services: &AppServices, mut out: impl Write) -> Result<()> {
    let dashboard = services.dashboard().dashboard();
    write!(out, "{}", render_dashboard(&dashboard, services.clock().now()))?;
    Ok(())
}

fn run_flashcards<R: BufRead, W: Write>(
    services: &AppServices,
    deck: Option<&DeckId>,
    shuffle: bool,
    input: R,
    mut out: W,
) -> Result<()> {
    let flashcards = services.flashcards();
    write!(out, "{}", render_decks(&flashcards.list_decks()))?;
    let mut vm = FlashcardVm::open(&flashcards, deck).context("cannot open flashcard deck")?;
    if shuffle {
        vm.shuffle(&mut rand::rng());
    }
    info!(deck = vm.deck_name(), shuffle, "flashcard review started");
    interactive::run_flashcards(&mut vm, input, out)?;
    Ok(())
}

fn show_exams(services: &AppServices, mut out: impl Write) -> Result<()> {
    let exams = services.exams();
    let items = exams.list_exams().context("cannot list exams")?;
    write!(out, "{}", render_catalogue(&items, &exams.recent_scores()))?;
    Ok(())
}

fn run_exam<R: BufRead, W: Write>(
    services: &AppServices,
    id: &ExamId,
    input: R,
    out: W,
) -> Result<()> {
    let mut vm = ExamVm::new();
    vm.start(&services.exams(), id)
        .with_context(|| format!("cannot start exam {id}"))?;
    interactive::run_exam(&mut vm, input, out)?;
    Ok(())
}

fn show_anatomy(
    services: &AppServices,
    system: Option<&SystemId>,
    structure: Option<&str>,
    rotate: bool,
    mut out: impl Write,
) -> Result<()> {
    let mut viewer = services.anatomy().viewer()?;
    if let Some(system) = system {
        viewer.select_system(system)?;
    }
    if let Some(structure) = structure {
        viewer.select_structure(structure)?;
    }
    if rotate {
        viewer.toggle_rotation();
    }
    write!(out, "{}", render_anatomy(&viewer))?;
    Ok(())
}

fn show_hospital(services: &AppServices, offline: bool, mut out: impl Write) -> Result<()> {
    let hospital = services.hospital();
    let lab_panels = hospital.lab_panels();
    let abnormal = hospital.abnormal_values();
    let medications = hospital.medications();
    let procedures = hospital.procedures();
    let procedure_counts = hospital.procedure_counts();
    let references = hospital.references();
    debug!(abnormal = abnormal.len(), "hospital data loaded");
    let data = HospitalData {
        lab_panels: &lab_panels,
        abnormal: &abnormal,
        medications: &medications,
        procedures: &procedures,
        procedure_counts: &procedure_counts,
        references: &references,
    };
    write!(out, "{}", render_hospital(&HospitalVm::new(offline), data))?;
    Ok(())
}

fn show_medication(
    services: &AppServices,
    name: &str,
    interaction: Option<&str>,
    mut out: impl Write,
) -> Result<()> {
    let hospital = services.hospital();
    let medication = hospital.medication(name)?;
    write!(out, "{}", render_medication(&medication))?;
    if let Some(substance) = interaction {
        let check = hospital.check_interaction(medication.name(), substance)?;
        info!(
            medication = %check.medication,
            substance = %check.substance,
            interacts = check.interacts,
            "interaction checked"
        );
        write!(out, "\n{}", render_interaction(&check))?;
    }
    Ok(())
}

fn show_progress(services: &AppServices, mut out: impl Write) -> Result<()> {
    let progress = services.progress();
    let subjects = progress.subjects();
    let weekly = progress.weekly_activity();
    let achievements = progress.achievements();
    let data = ProgressData {
        overall_percent: progress.overall_percent(),
        total_hours: progress.total_hours(),
        subjects: &subjects,
        weekly: &weekly,
        weekly_totals: progress.weekly_totals(),
        achievements: &achievements,
        achievement_counts: progress.achievement_counts(),
    };
    write!(out, "{}", render_progress(data, services.clock().now()))?;
    Ok(())
}

fn show_schedule(services: &AppServices, view: ScheduleViewArg, mut out: impl Write) -> Result<()> {
    let schedule = services.schedule();
    let vm = ScheduleVm::new(match view {
        ScheduleViewArg::Week => ScheduleView::Week,
        ScheduleViewArg::Month => ScheduleView::Month,
    });
    let blocks = schedule.today_blocks();
    let week = schedule.week_overview();
    let month = schedule.month_overview();
    let deadlines = schedule.upcoming_deadlines();
    let data = ScheduleData {
        today: schedule.today(),
        blocks: &blocks,
        progress: schedule.day_progress(),
        week: &week,
        month: &month,
        deadlines: &deadlines,
    };
    write!(out, "{}", render_schedule(&vm, data))?;
    Ok(())
}
