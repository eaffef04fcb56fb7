//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use study_core::model::{DeckId, ExamId, SystemId};

#[derive(Debug, Parser)]
#[command(
    name = "medstudy",
    version,
    about = "Medical study companion: flashcards, practice exams, anatomy and ward reference",
    long_about = "Study medicine from the terminal.\n\n\
                  Content is bundled with the binary; point --content at a directory of\n\
                  JSON files to study your own material."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Directory holding exams.json, flashcards.json and the other content files.
    #[arg(long, value_name = "DIR", global = true)]
    pub content: Option<PathBuf>,

    /// Pretend today is this date.
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Today's stats, recent subjects and upcoming exams.
    Dashboard,

    /// Review a flashcard deck.
    Flashcards {
        /// Deck id; defaults to the first deck.
        #[arg(long)]
        deck: Option<DeckId>,

        #[arg(long)]
        shuffle: bool,
    },

    /// List practice exams with best and recent scores.
    Exams,

    /// Take a practice exam.
    Exam {
        #[arg(value_name = "ID")]
        id: ExamId,
    },

    /// Browse body systems and structures.
    Anatomy {
        #[arg(long)]
        system: Option<SystemId>,

        #[arg(long, value_name = "NAME")]
        structure: Option<String>,

        /// Start the model rotating.
        #[arg(long)]
        rotate: bool,
    },

    /// Lab values, medications, procedure log and quick references.
    Hospital {
        #[arg(long)]
        offline: bool,

        /// Show one medication instead of the full screen.
        #[arg(long, value_name = "NAME")]
        medication: Option<String>,

        /// Check the medication against another drug or substance.
        #[arg(long, value_name = "SUBSTANCE", requires = "medication")]
        interaction: Option<String>,
    },

    /// Subject progress, weekly activity and achievements.
    Progress,

    /// Today's plan, the week or month, and deadlines.
    Schedule {
        #[arg(long, value_enum, default_value = "week")]
        view: ScheduleViewArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScheduleViewArg {
    Week,
    Month,
}
