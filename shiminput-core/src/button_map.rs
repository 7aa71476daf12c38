use hashbrown::HashMap;
use shiminput_types::{ButtonStatus, SButton};

/// The frame's button statuses, keyed by button. Only buttons that are
/// Pressed, Held, or Released are stored; absence is the None status, which
/// keeps the map proportional to the handful of active inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveButtonMap(HashMap<SButton, ButtonStatus>);

impl ActiveButtonMap {
    pub fn status(&self, button: SButton) -> ButtonStatus {
        self.0.get(&button).copied().unwrap_or(ButtonStatus::None)
    }

    pub fn is_down(&self, button: SButton) -> bool {
        self.status(button).is_down()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SButton, ButtonStatus)> + '_ {
        self.0.iter().map(|(button, status)| (*button, *status))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, button: SButton, status: ButtonStatus) {
        debug_assert_ne!(status, ButtonStatus::None);
        self.0.insert(button, status);
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    pub(crate) fn contains(&self, button: SButton) -> bool {
        self.0.contains_key(&button)
    }
}

impl FromIterator<(SButton, ButtonStatus)> for ActiveButtonMap {
    fn from_iter<T: IntoIterator<Item = (SButton, ButtonStatus)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
