mod anatomy;
mod dashboard;
mod exams;
mod flashcards;
mod hospital;
mod progress;
mod schedule;
mod state;
mod table;

pub use anatomy::render_anatomy;
pub use dashboard::render_dashboard;
pub use exams::{render_catalogue, render_question, render_result};
pub use flashcards::{render_card, render_decks};
pub use hospital::{HospitalData, render_hospital, render_interaction, render_medication};
pub use progress::{ProgressData, render_progress};
pub use schedule::{ScheduleData, render_schedule};
pub use state::ViewError;
