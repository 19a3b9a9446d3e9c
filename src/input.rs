// Input handling for folio-nav
// Keyboard shortcuts map to section change requests

use crate::app::FolioNav;
use crate::model::SectionId;
use crate::state::NavigationState;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    /// Zero-based catalog position
    Jump(usize),
    Home,
}

pub fn intent_for_key(key: egui::Key) -> Option<NavIntent> {
    use egui::Key;
    let intent = match key {
        Key::ArrowDown | Key::J => NavIntent::Next,
        Key::ArrowUp | Key::K => NavIntent::Previous,
        Key::Home => NavIntent::Home,
        Key::Num1 => NavIntent::Jump(0),
        Key::Num2 => NavIntent::Jump(1),
        Key::Num3 => NavIntent::Jump(2),
        Key::Num4 => NavIntent::Jump(3),
        Key::Num5 => NavIntent::Jump(4),
        Key::Num6 => NavIntent::Jump(5),
        Key::Num7 => NavIntent::Jump(6),
        Key::Num8 => NavIntent::Jump(7),
        Key::Num9 => NavIntent::Jump(8),
        _ => return None,
    };
    Some(intent)
}

/// Section an intent points at, if any.
pub fn resolve_intent(
    intent: NavIntent,
    navigation: &NavigationState,
    home: &SectionId,
) -> Option<SectionId> {
    let sections = navigation.sections();
    let current = navigation.current_section();
    let target = match intent {
        NavIntent::Next => sections.neighbor(current, 1)?.id.clone(),
        NavIntent::Previous => sections.neighbor(current, -1)?.id.clone(),
        NavIntent::Jump(index) => sections.get(index)?.id.clone(),
        NavIntent::Home => home.clone(),
    };
    Some(target)
}

impl FolioNav {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        let intents: Vec<NavIntent> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if modifiers.is_none() => intent_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for intent in intents {
            if let Some(target) = resolve_intent(intent, &self.navigation, &self.home_section) {
                // Anything after an accepted change would only be dropped
                if self.request_section(target).is_accepted() {
                    break;
                }
            }
        }
    }
}
