//! Profile input form screen.

use egui::{Grid, RichText, TextEdit, Ui};

use crate::input::{FormState, KeyAction};

/// Button presses reported by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// "Generate Input Fields" was clicked
    GenerateFields,
    /// "Generate Profile" was clicked
    GenerateProfile,
}

/// Input form UI.
pub struct ProfileFormScreen;

impl ProfileFormScreen {
    /// Render the form for `form` and return the requested action, if any.
    pub fn show(ui: &mut Ui, form: &mut FormState) -> Option<FormAction> {
        let mut action = None;

        ui.label(RichText::new("Session").size(18.0).strong());
        ui.add_space(8.0);

        Grid::new("profile_form_labels")
            .num_columns(3)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Action Name:");
                ui.add(TextEdit::singleline(&mut form.action_name).desired_width(160.0));
                ui.end_row();

                ui.label("Time:");
                ui.add(TextEdit::singleline(&mut form.time).desired_width(160.0));
                ui.end_row();

                ui.label("Number of Points:");
                ui.add(TextEdit::singleline(&mut form.num_points).desired_width(60.0));
                if ui
                    .button("Generate Input Fields")
                    .on_hover_text(shortcut_hint(KeyAction::GenerateFields))
                    .clicked()
                {
                    action = Some(FormAction::GenerateFields);
                }
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        if form.entries().is_empty() {
            ui.label(RichText::new("No points yet. Set a count and generate the fields.").weak());
        } else {
            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - 60.0).max(120.0))
                .show(ui, |ui| {
                    Grid::new("profile_form_points")
                        .num_columns(4)
                        .spacing([10.0, 6.0])
                        .striped(true)
                        .show(ui, |ui| {
                            for (i, entry) in form.entries_mut().iter_mut().enumerate() {
                                ui.label(format!("Load {}:", i + 1));
                                ui.add(TextEdit::singleline(&mut entry.load).desired_width(80.0));
                                ui.label(format!("Velocity {}:", i + 1));
                                ui.add(
                                    TextEdit::singleline(&mut entry.velocity).desired_width(80.0),
                                );
                                ui.end_row();
                            }
                        });
                });
        }

        ui.add_space(12.0);
        if ui
            .button(RichText::new("Generate Profile").size(16.0))
            .on_hover_text(shortcut_hint(KeyAction::GenerateProfile))
            .clicked()
        {
            action = Some(FormAction::GenerateProfile);
        }

        action
    }
}

/// Hover text naming an action and its shortcut.
fn shortcut_hint(action: KeyAction) -> String {
    format!(
        "{} ({})",
        action.description(),
        action.default_shortcut().display()
    )
}
