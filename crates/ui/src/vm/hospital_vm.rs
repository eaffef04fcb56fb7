/// Hospital mode screen state.
///
/// Offline mode only changes the status banner; the reference data is bundled
/// either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HospitalVm {
    offline: bool,
}

impl HospitalVm {
    #[must_use]
    pub fn new(offline: bool) -> Self {
        Self { offline }
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.offline {
            "Offline Mode"
        } else {
            "Online"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_offline_flag() {
        assert_eq!(HospitalVm::default().status_label(), "Online");
        assert_eq!(HospitalVm::new(true).status_label(), "Offline Mode");
    }
}
