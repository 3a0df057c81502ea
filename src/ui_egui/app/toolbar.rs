use super::SchedulerApp;
use crate::models::ui::ViewType;
use crate::utils::date::NavigationDirection;
use egui::RichText;

impl SchedulerApp {
    pub(super) fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Facility Scheduler");
            ui.separator();

            if ui.button("Today").clicked() {
                self.jump_to_today();
            }
            if ui.button("◀").on_hover_text("Previous").clicked() {
                self.navigate(NavigationDirection::Previous);
            }
            if ui.button("▶").on_hover_text("Next").clicked() {
                self.navigate(NavigationDirection::Next);
            }

            ui.label(RichText::new(self.period_label()).strong().size(15.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // right-to-left, so iterate in reverse to keep Day/Week/Month order
                for view in ViewType::ALL.iter().rev() {
                    let selected = self.state.current_view == *view;
                    if ui.selectable_label(selected, view.label()).clicked() {
                        self.set_view(*view);
                    }
                }
            });
        });
    }
}
