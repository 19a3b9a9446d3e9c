use crate::model::SectionId;
use crate::state::{ChangeOutcome, NavigationState, UIState};
use crate::style::{self, Theme};
use eframe::egui;
use std::cell::RefCell;
use std::time::Instant;

pub struct FolioNav {
    pub navigation: NavigationState,
    pub ui: UIState,
    /// Section the Home key returns to
    pub home_section: SectionId,
}

impl FolioNav {
    pub fn new(navigation: NavigationState, theme: Theme) -> Self {
        let home_section = navigation.current_section().clone();
        Self {
            navigation,
            ui: UIState::new(theme),
            home_section,
        }
    }

    /// Routes every UI-originated change through the transition guard.
    pub fn request_section(&mut self, target: SectionId) -> ChangeOutcome {
        let outcome = self.navigation.request_section_change(target.clone());
        if outcome == ChangeOutcome::DroppedWhileCooling {
            self.ui.set_info(format!("Still switching, '{}' ignored", target));
        }
        outcome
    }
}

impl eframe::App for FolioNav {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.navigation.poll(now);
        self.ui.clear_expired_messages(now, style::MESSAGE_TIMEOUT);
        ctx.set_visuals(self.ui.theme.visuals());

        self.handle_input(ctx);

        // Deferred actions
        let next_section = RefCell::new(None);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .exact_width(style::NAV_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.render_nav_panel(ui, &next_section);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_section_pane(ui);
        });

        if let Some(target) = next_section.into_inner() {
            self.request_section(target);
        }

        // Wake up when the cool-down ends so the reset is seen without input
        if let Some(remaining) = self.navigation.reset_due_in(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
        if self.ui.info_message.is_some() {
            ctx.request_repaint_after(style::MESSAGE_TIMEOUT);
        }
    }
}
