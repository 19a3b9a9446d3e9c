// Panel rendering for folio-nav

use crate::app::FolioNav;
use crate::model::SectionId;
use crate::state::TransitionPhase;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl FolioNav {
    pub(crate) fn render_nav_panel(
        &self,
        ui: &mut egui::Ui,
        next_section: &RefCell<Option<SectionId>>,
    ) {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.heading("Sections");
        });
        ui.separator();

        let current = self.navigation.current_section();
        let default_color = ui.visuals().text_color();

        for (index, section) in self.navigation.sections().iter().enumerate() {
            let is_active = &section.id == current;
            let color = if is_active { style::ACCENT } else { default_color };

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&section.icon)
                        .size(style::NAV_ICON_SIZE)
                        .color(color),
                );
                let label = egui::RichText::new(&section.title).color(color);
                let response = ui
                    .selectable_label(is_active, label)
                    .on_hover_text(format!("{} ({})", section.id, index + 1));
                if response.clicked() {
                    *next_section.borrow_mut() = Some(section.id.clone());
                }
            });
            ui.add_space(style::NAV_ROW_SPACING);
        }
    }

    pub(crate) fn render_section_pane(&self, ui: &mut egui::Ui) {
        match self.navigation.current_section_data() {
            Some(section) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    ui.label(egui::RichText::new(&section.icon).size(style::HERO_ICON_SIZE));
                    ui.label(
                        egui::RichText::new(&section.title)
                            .size(style::HERO_TITLE_SIZE)
                            .strong(),
                    );
                });
            }
            None => {
                // Hero or an id missing from the catalog
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(self.navigation.current_section().as_str())
                            .size(style::HERO_TITLE_SIZE)
                            .weak(),
                    );
                });
            }
        }
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Section: {}", self.navigation.current_section()));
            if self.navigation.phase() == TransitionPhase::Cooling {
                ui.label(egui::RichText::new(" | switching…").color(style::ACCENT));
            }
            if let Some((message, _)) = &self.ui.info_message {
                ui.label(format!(" | {}", message));
            }
        });
    }
}
