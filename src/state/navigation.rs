// Navigation state - active section and the transition cool-down
use super::CoolDownTimer;
use crate::model::{SectionCatalog, SectionDescriptor, SectionId};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub const DEFAULT_COOL_DOWN_MS: u64 = 800;
pub const DEFAULT_INITIAL_SECTION: &str = "hero";

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationSettings {
    pub cool_down: Duration,
    /// Not required to exist in the catalog
    pub initial_section: SectionId,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            cool_down: Duration::from_millis(DEFAULT_COOL_DOWN_MS),
            initial_section: SectionId::from(DEFAULT_INITIAL_SECTION),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Cooling,
}

/// Result of a section change request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOutcome {
    Accepted,
    AlreadyCurrent,
    DroppedWhileCooling,
}

impl ChangeOutcome {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

/// Which portfolio section is active, and whether a transition is cooling down.
///
/// Accepted changes take effect immediately; the cool-down only gates the
/// next change. Requests arriving while cooling are dropped, not queued.
/// The pending reset is delivered by [`NavigationState::poll`], which the UI
/// loop calls every frame.
#[derive(Debug)]
pub struct NavigationState {
    sections: SectionCatalog,
    current_section: SectionId,
    is_transitioning: bool,
    cool_down: Duration,
    reset_timer: CoolDownTimer,
}

impl NavigationState {
    pub fn new(sections: SectionCatalog, settings: NavigationSettings) -> Self {
        Self {
            sections,
            current_section: settings.initial_section,
            is_transitioning: false,
            cool_down: settings.cool_down,
            reset_timer: CoolDownTimer::new(),
        }
    }

    pub fn portfolio() -> Self {
        Self::new(SectionCatalog::portfolio(), NavigationSettings::default())
    }

    /// Starts at `section` without going through the transition guard.
    pub fn with_current_section(mut self, section: impl Into<SectionId>) -> Self {
        self.current_section = section.into();
        self
    }

    pub fn sections(&self) -> &SectionCatalog {
        &self.sections
    }

    pub fn current_section(&self) -> &SectionId {
        &self.current_section
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn phase(&self) -> TransitionPhase {
        if self.is_transitioning {
            TransitionPhase::Cooling
        } else {
            TransitionPhase::Idle
        }
    }

    pub fn request_section_change(&mut self, target: impl Into<SectionId>) -> ChangeOutcome {
        self.request_section_change_at(target, Instant::now())
    }

    /// The target id is stored as given; it is not checked against the catalog.
    pub fn request_section_change_at(
        &mut self,
        target: impl Into<SectionId>,
        now: Instant,
    ) -> ChangeOutcome {
        let target = target.into();

        if target == self.current_section {
            trace!(section = %target, "section already active");
            return ChangeOutcome::AlreadyCurrent;
        }
        if self.is_transitioning {
            trace!(section = %target, current = %self.current_section, "request dropped while cooling");
            return ChangeOutcome::DroppedWhileCooling;
        }

        debug!(from = %self.current_section, to = %target, "section change accepted");
        self.is_transitioning = true;
        self.current_section = target;
        self.reset_timer.schedule(now, self.cool_down);
        ChangeOutcome::Accepted
    }

    /// Delivers the pending cool-down reset if it is due.
    /// Returns `true` when the state went back to idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.reset_timer.fire_if_due(now) {
            self.is_transitioning = false;
            debug!(section = %self.current_section, "transition cool-down elapsed");
            return true;
        }
        false
    }

    /// Descriptor of the active section, `None` when the id is not in the catalog.
    pub fn current_section_data(&self) -> Option<&SectionDescriptor> {
        self.sections.find(&self.current_section)
    }

    pub fn reset_due_in(&self, now: Instant) -> Option<Duration> {
        self.reset_timer.remaining(now)
    }

    /// Cancels the pending reset. Nothing fires after this.
    pub fn dispose(&mut self) {
        if self.reset_timer.cancel() {
            debug!("pending cool-down reset cancelled");
        }
    }
}

impl Drop for NavigationState {
    fn drop(&mut self) {
        self.dispose();
    }
}
