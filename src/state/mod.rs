pub mod cooldown;
pub mod navigation;
pub mod ui;

pub use cooldown::CoolDownTimer;
pub use navigation::{ChangeOutcome, NavigationSettings, NavigationState, TransitionPhase};
pub use ui::UIState;
