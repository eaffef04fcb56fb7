//! Line-driven loops for the flashcard and exam screens.
//!
//! Both loops read one command per line and redraw after every command, so
//! they run the same against a terminal or a scripted buffer.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use study_core::model::ExamState;
use ui::views::{render_card, render_question, render_result};
use ui::vm::{ExamOutcome, ExamVm, FlashcardIntent, FlashcardVm};

fn read_command(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Commands: `n`ext, `p`rev, `f`lip, `r`eset, `q`uit. End of input quits.
///
/// # Errors
///
/// Propagates I/O errors from `input` or `out`.
pub fn run_flashcards<R: BufRead, W: Write>(
    vm: &mut FlashcardVm,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    loop {
        write!(out, "{}", render_card(vm))?;
        out.flush()?;
        let Some(command) = read_command(&mut input)? else {
            break;
        };
        let intent = match command.to_ascii_lowercase().as_str() {
            "n" | "next" => FlashcardIntent::Next,
            "p" | "prev" | "previous" => FlashcardIntent::Previous,
            "f" | "flip" | "" => FlashcardIntent::Flip,
            "r" | "reset" => FlashcardIntent::Reset,
            "q" | "quit" => break,
            other => {
                writeln!(out, "Unknown command {other:?}.")?;
                continue;
            }
        };
        debug!(?intent, "flashcard command");
        vm.apply(intent);
    }
    Ok(())
}

/// While answering: an option letter selects, an empty line submits, `q` abandons.
/// On the result screen: `r` retakes, anything else quits.
///
/// # Errors
///
/// Propagates I/O errors from `input` or `out`.
pub fn run_exam<R: BufRead, W: Write>(vm: &mut ExamVm, mut input: R, mut out: W) -> io::Result<()> {
    loop {
        match vm.phase() {
            ExamState::NotStarted => break,
            ExamState::InProgress => {
                write!(out, "{}", render_question(vm))?;
                out.flush()?;
                let Some(command) = read_command(&mut input)? else {
                    vm.back();
                    break;
                };
                match command.as_str() {
                    "" => match vm.submit() {
                        Ok(ExamOutcome::Completed) => {
                            if let Some(run) = vm.run() {
                                info!(exam = %run.exam().id(), "exam finished");
                            }
                        }
                        Ok(ExamOutcome::Continue) => {}
                        Err(err) => writeln!(out, "{}", err.message())?,
                    },
                    "q" | "Q" => {
                        vm.back();
                        break;
                    }
                    other => {
                        let mut chars = other.chars();
                        let result = match (chars.next(), chars.next()) {
                            (Some(label), None) => vm.select_label(label).map_err(|e| e.message()),
                            _ => Err(format!("Unknown command {other:?}.")),
                        };
                        if let Err(message) = result {
                            writeln!(out, "{message}")?;
                        }
                    }
                }
            }
            ExamState::Complete => {
                let Some(name) = vm.run().map(|run| run.exam().name().to_owned()) else {
                    break;
                };
                match vm.result() {
                    Ok(result) => write!(out, "{}", render_result(&name, &result))?,
                    Err(err) => writeln!(out, "{}", err.message())?,
                }
                writeln!(out, "[r]etake  [q]uit")?;
                out.flush()?;
                match read_command(&mut input)?.as_deref() {
                    Some("r" | "R") => {
                        info!("exam retaken");
                        vm.retake();
                    }
                    _ => break,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use services::AppServices;
    use study_core::model::{DeckId, ExamId};
    use study_core::time::fixed_clock;

    fn exam_vm(id: &str) -> ExamVm {
        let services = AppServices::embedded(fixed_clock()).unwrap();
        let mut vm = ExamVm::new();
        vm.start(&services.exams(), &ExamId::new(id).unwrap())
            .unwrap();
        vm
    }

    fn run_exam_script(vm: &mut ExamVm, script: &str) -> String {
        let mut out = Vec::new();
        run_exam(vm, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exam_scores_scripted_answers() {
        let mut vm = exam_vm("cardiology-mcq");
        let text = run_exam_script(&mut vm, "a\n\nb\n\na\n\nq\n");
        assert!(text.contains("Question 1 of 3"));
        assert!(text.contains("[Enter] Finish Exam"));
        assert!(text.contains("Score: 2/3 (67%) Needs work"));
        assert_eq!(vm.phase(), ExamState::Complete);
    }

    #[test]
    fn submit_without_answer_prompts_and_stays() {
        let mut vm = exam_vm("cardiology-mcq");
        let text = run_exam_script(&mut vm, "\nz\n");
        assert!(text.contains("Select an answer to continue."));
        assert!(text.contains("no option labelled 'z'"));
        assert_eq!(vm.phase(), ExamState::NotStarted);
    }

    #[test]
    fn retake_starts_over() {
        let mut vm = exam_vm("cardiology-mcq");
        let text = run_exam_script(&mut vm, "a\n\nb\n\nb\n\nr\nc\n");
        assert!(text.contains("Score: 3/3 (100%) Strong"));
        let retaken = text.split("(100%) Strong").nth(1).unwrap();
        assert!(retaken.contains("Question 1 of 3"));
        assert!(retaken.contains("> C. "));
        // input ran out mid-retake
        assert_eq!(vm.phase(), ExamState::NotStarted);
    }

    #[test]
    fn flashcards_follow_commands() {
        let services = AppServices::embedded(fixed_clock()).unwrap();
        let deck = DeckId::new("cardiology").unwrap();
        let mut vm = FlashcardVm::open(&services.flashcards(), Some(&deck)).unwrap();
        let mut out = Vec::new();
        run_flashcards(&mut vm, Cursor::new("f\nn\nx\nn\n"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Answer:"));
        assert!(text.contains("Card 2 of 3"));
        assert!(text.contains("Unknown command \"x\"."));
        assert_eq!(vm.position_label(), "Card 3 of 3");
        assert!(!vm.can_go_next());
    }
}
