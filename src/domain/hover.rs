// Hover tracker - highlighted point under the pointer
use super::sample::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Highlighted(Sample),
}

/// Highlight state owned by a single chart view.
///
/// Every transition returns `true` when the state actually changed, which is
/// the signal to re-render the tooltip. Repeating a transition is a no-op.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn highlight(&self) -> Option<Sample> {
        match self.state() {
            HoverState::Idle => None,
            HoverState::Highlighted(sample) => Some(sample),
        }
    }

    /// Store whatever the nearest-point resolution reported; `None` clears.
    pub fn on_nearest_xy(&mut self, resolved: Option<Sample>) -> bool {
        let next = match resolved {
            Some(sample) => HoverState::Highlighted(sample),
            None => HoverState::Idle,
        };
        self.transition(next)
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        self.transition(HoverState::Idle)
    }

    fn transition(&mut self, next: HoverState) -> bool {
        if self.state == next {
            return false;
        }
        self.state = next;
        true
    }
}
