use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScheduleView {
    #[default]
    Week,
    Month,
}

impl fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScheduleView::Week => "Week View",
            ScheduleView::Month => "Month View",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScheduleVm {
    view: ScheduleView,
}

impl ScheduleVm {
    #[must_use]
    pub fn new(view: ScheduleView) -> Self {
        Self { view }
    }

    #[must_use]
    pub fn view(&self) -> ScheduleView {
        self.view
    }
}
