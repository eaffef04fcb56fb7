use std::fmt::Write as _;

use comfy_table::{Cell, CellAlignment};

use study_core::model::FlashcardDeck;

use crate::views::table::{align_column, new_table, progress_bar};
use crate::vm::FlashcardVm;

#[must_use]
pub fn render_decks(decks: &[FlashcardDeck]) -> String {
    let mut table = new_table(&["Id", "Deck", "Cards", "Mastered", "Mastery"]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for deck in decks {
        table.add_row(vec![
            Cell::new(deck.id()),
            Cell::new(deck.name()),
            Cell::new(deck.card_count()),
            Cell::new(deck.mastered()),
            Cell::new(progress_bar(deck.mastery_percent(), 20)),
        ]);
    }
    format!("Flashcard decks\n{table}\n")
}

#[must_use]
pub fn render_card(vm: &FlashcardVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} | {}", vm.deck_name(), vm.position_label());
    let _ = writeln!(out, "{}", progress_bar(vm.progress_percent(), 30));
    let _ = writeln!(out, "[{}] {}", vm.category(), vm.difficulty());
    let _ = writeln!(out, "\n{}:\n  {}\n", vm.face().label(), vm.text());
    let mut controls = Vec::new();
    if vm.can_go_previous() {
        controls.push("[p]rev");
    }
    controls.push("[f]lip");
    if vm.can_go_next() {
        controls.push("[n]ext");
    }
    controls.extend(["[r]eset", "[q]uit"]);
    let _ = writeln!(out, "{}", controls.join("  "));
    out
}
