use std::fmt::Write as _;

use services::AnatomyViewer;

#[must_use]
pub fn render_anatomy(viewer: &AnatomyViewer) -> String {
    let mut out = String::from("Body systems\n");
    let current = viewer.current_system();
    for system in viewer.systems() {
        let marker = if system.id() == current.id() { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {} ({})", system.name(), system.id());
    }

    let rotation = if viewer.selection().is_rotating() {
        "rotating"
    } else {
        "paused"
    };
    let _ = writeln!(out, "\n{} [{rotation}]", current.name());
    for structure in current.structures() {
        let marker = if viewer.selection().structure() == Some(structure.name.as_str()) {
            '*'
        } else {
            '-'
        };
        let _ = writeln!(out, "  {marker} {}", structure.name);
    }

    match viewer.current_structure() {
        Some(structure) => {
            let _ = writeln!(out, "\n{}\n  {}", structure.name, structure.description);
        }
        None => out.push_str("\nSelect a structure to see its details.\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::AppServices;
    use study_core::model::SystemId;
    use study_core::time::fixed_clock;

    #[test]
    fn shows_selected_structure_details() {
        let services = AppServices::embedded(fixed_clock()).unwrap();
        let mut viewer = services.anatomy().viewer().unwrap();
        let text = render_anatomy(&viewer);
        assert!(text.contains("> Cardiovascular System"));
        assert!(text.contains("Select a structure"));

        viewer.select_structure("heart").unwrap();
        viewer.toggle_rotation();
        let text = render_anatomy(&viewer);
        assert!(text.contains("* Heart"));
        assert!(text.contains("Four-chambered"));
        assert!(text.contains("[rotating]"));

        viewer
            .select_system(&SystemId::new("nervous").unwrap())
            .unwrap();
        assert!(render_anatomy(&viewer).contains("Select a structure"));
    }
}
