use std::fmt;
use std::str::FromStr;

/// Top-level sections of the study companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Flashcards,
    Exams,
    Anatomy,
    Hospital,
    Progress,
    Schedule,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Flashcards,
        Section::Exams,
        Section::Anatomy,
        Section::Hospital,
        Section::Progress,
        Section::Schedule,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Flashcards => "Flashcards",
            Section::Exams => "Practice Exams",
            Section::Anatomy => "3D Anatomy",
            Section::Hospital => "Hospital Mode",
            Section::Progress => "Progress",
            Section::Schedule => "Study Schedule",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Flashcards => "flashcards",
            Section::Exams => "exams",
            Section::Anatomy => "anatomy",
            Section::Hospital => "hospital",
            Section::Progress => "progress",
            Section::Schedule => "schedule",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section {:?}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownSection(needle.to_owned()))
    }
}

/// One-line navigation bar; the active section is bracketed.
#[must_use]
pub fn render_nav(active: Section) -> String {
    Section::ALL
        .iter()
        .map(|section| {
            if *section == active {
                format!("[{}]", section.label())
            } else {
                section.label().to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.slug().parse::<Section>().unwrap(), section);
        }
        assert_eq!(" Exams ".parse::<Section>().unwrap(), Section::Exams);
        assert!("billing".parse::<Section>().is_err());
    }

    #[test]
    fn nav_marks_active_section() {
        let nav = render_nav(Section::Hospital);
        assert!(nav.contains("[Hospital Mode]"));
        assert!(nav.starts_with("Dashboard | Flashcards"));
        assert!(!nav.contains('\n'));
    }
}
