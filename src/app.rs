//! Main application state and egui integration.

use eframe::egui;

use lvprofile::input::{
    form::today, on_generate, on_submit, FormState, KeyAction, KeyboardHandler, SubmitError,
    MAX_POINTS,
};
use lvprofile::metrics::profile::{ProfileFitter, ProfileReport};
use lvprofile::storage::config::AppConfig;
use lvprofile::ui::screens::{FormAction, ProfileFormScreen};
use lvprofile::ui::theme::{chart_colors, Theme};
use lvprofile::ui::widgets::ProfileChart;

/// A blocking error notification.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ErrorDialog {
    title: &'static str,
    message: String,
}

impl From<&SubmitError> for ErrorDialog {
    fn from(err: &SubmitError) -> Self {
        let message = match err {
            SubmitError::Input(e) => format!("Please enter valid numeric values.\n{}", e),
            SubmitError::Fit(e) => e.to_string(),
        };
        Self {
            title: err.title(),
            message,
        }
    }
}

/// Main application state.
pub struct ProfileApp {
    /// UI theme
    theme: Theme,
    /// Application configuration
    config: AppConfig,
    /// Current form snapshot
    form: FormState,
    fitter: ProfileFitter,
    /// Last successfully generated profile
    report: Option<ProfileReport>,
    /// Pending error notification
    error_dialog: Option<ErrorDialog>,
    keyboard: KeyboardHandler,
    /// Outcome of the last action for the status bar
    status: String,
}

impl ProfileApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.zoom_factor());

        if config.form.default_points > MAX_POINTS {
            tracing::warn!(
                "default_points {} exceeds the limit, using {}",
                config.form.default_points,
                MAX_POINTS
            );
        }
        let form = FormState::with_points(
            config.form.default_action_name.clone(),
            today(),
            config.form.default_points,
        );

        Self {
            theme,
            config,
            form,
            fitter: ProfileFitter::new(),
            report: None,
            error_dialog: None,
            keyboard: KeyboardHandler::new(),
            status: "Enter your sets and generate a profile".to_string(),
        }
    }

    fn handle(&mut self, action: FormAction) {
        if self.error_dialog.is_some() {
            return;
        }

        match action {
            FormAction::GenerateFields => match on_generate(&self.form) {
                Ok(form) => {
                    self.status = format!("{} point fields ready", form.entries().len());
                    self.form = form;
                }
                Err(e) => {
                    self.error_dialog = Some(ErrorDialog::from(&SubmitError::from(e)));
                }
            },
            FormAction::GenerateProfile => match on_submit(&self.form, &self.fitter) {
                Ok(report) => {
                    self.status = format!("Profile generated from {} points", report.samples.len());
                    self.report = Some(report);
                }
                Err(e) => {
                    self.status = e.title().to_string();
                    self.report = None;
                    self.error_dialog = Some(ErrorDialog::from(&e));
                }
            },
        }
    }

    /// Toggle the theme between dark and light.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
    }

    /// Render the error dialog on top of everything.
    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.error_dialog else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(dialog.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("⚠")
                            .size(24.0)
                            .color(chart_colors::ERROR),
                    );
                    ui.label(egui::RichText::new(&dialog.message).size(15.0));
                });
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.error_dialog = None;
        }
    }
}

impl eframe::App for ProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in self.keyboard.poll(ctx) {
            match action {
                KeyAction::GenerateFields => self.handle(FormAction::GenerateFields),
                KeyAction::GenerateProfile => self.handle(FormAction::GenerateProfile),
                KeyAction::ToggleTheme => self.toggle_theme(ctx),
                KeyAction::Dismiss => self.error_dialog = None,
            }
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Velocity-Load and Power Profile Generator");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.icon()).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(&self.status);
            });
        });

        let blocked = self.error_dialog.is_some();

        let mut requested = None;
        egui::SidePanel::left("form_panel")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    requested = ProfileFormScreen::show(ui, &mut self.form);
                });
            });
        if let Some(action) = requested {
            self.handle(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.report {
            Some(report) => {
                let chart = &self.config.chart;
                ProfileChart::new(report)
                    .height(chart.height)
                    .allow_zoom(chart.allow_zoom)
                    .allow_drag(chart.allow_drag)
                    .show_legend(chart.show_legend)
                    .show(ui);
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("No profile generated yet").weak());
                });
            }
        });

        self.render_error_dialog(ctx);
    }
}
