/*!
 * Desktop application for etp-report - ETP recovery chart viewer
 *
 * A cross-platform desktop application providing:
 * - Loading measurements from the store (in the background)
 * - Per-series axis selection and benchmark entry
 * - Exporting the chart image and the chart specification
 *
 * Usage: etp-report-gui [config.toml]
 */

use anyhow::Result;
use eframe::egui;
use etp_report::benchmark::BenchmarkForm;
use etp_report::config::ReportConfig;
use etp_report::storage::{self, SpecFormat};
use etp_report::{AxisAssignment, Benchmarks, Measurement, ReportSession, render};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match ReportConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{:#}; falling back to defaults", err);
            ReportConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 640.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("ETP Recovery Report"),
        ..Default::default()
    };

    eframe::run_native(
        "ETP Recovery Report",
        options,
        Box::new(|_cc| Ok(Box::new(ReportApp::new(config)))),
    )
}

#[derive(Debug, Clone, PartialEq)]
enum PlotFormat {
    Png,
    Svg,
}

/// What the benchmark dialog asked for this frame.
enum DialogAction {
    None,
    Submit,
    Cancel,
}

/// Main application state
struct ReportApp {
    config: ReportConfig,
    session: ReportSession,

    // Source
    source_url: String,

    // Benchmark dialog; `Some` while open
    benchmark_dialog: Option<BenchmarkForm>,
    benchmark_error: String,

    // Export options
    output_path: String,
    plot_format: PlotFormat,
    plot_width: u32,
    plot_height: u32,

    // UI state
    is_loading: bool,
    status_message: String,
    error_message: String,

    // Background fetch
    load_receiver: Option<mpsc::Receiver<Result<Vec<Measurement>>>>,
}

impl ReportApp {
    fn new(config: ReportConfig) -> Self {
        // Default to user's home directory for output
        let home_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .to_string_lossy()
            .to_string();

        let mut app = Self {
            session: ReportSession::new().with_title(config.chart.title.clone()),
            source_url: config.source.base_url.clone(),

            benchmark_dialog: None,
            benchmark_error: String::new(),

            output_path: home_dir,
            plot_format: PlotFormat::Png,
            plot_width: config.chart.width,
            plot_height: config.chart.height,

            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            load_receiver: None,
            config,
        };
        app.start_load();
        app
    }

    fn start_load(&mut self) {
        if self.source_url.trim().is_empty() {
            self.error_message = "Please enter the measurement store URL".to_string();
            return;
        }

        self.is_loading = true;
        self.error_message.clear();
        self.status_message = "Loading measurements...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.load_receiver = Some(receiver);

        let mut config = self.config.clone();
        config.source.base_url = self.source_url.trim().to_string();

        // Spawn background thread for the fetch
        thread::spawn(move || {
            let result = config.client().fetch_measurements();
            let _ = sender.send(result);
        });
    }

    fn check_load_result(&mut self) {
        if let Some(receiver) = &self.load_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_loading = false;
            self.load_receiver = None;

            match self.session.load(result) {
                Ok(()) => {
                    self.status_message =
                        format!("Loaded {} measurements", self.session.measurements().len());
                    self.error_message.clear();
                }
                Err(err) => {
                    self.error_message = format!("Failed to load measurements: {:#}", err);
                    self.status_message.clear();
                }
            }
        }
    }

    fn validate_export(&self) -> Result<PathBuf> {
        if self.output_path.trim().is_empty() {
            anyhow::bail!("Please specify an output directory");
        }
        if self.plot_width < 200 || self.plot_width > 3000 {
            anyhow::bail!("Plot width must be between 200 and 3000 pixels");
        }
        if self.plot_height < 200 || self.plot_height > 3000 {
            anyhow::bail!("Plot height must be between 200 and 3000 pixels");
        }
        Ok(PathBuf::from(self.output_path.trim()))
    }

    fn export_chart(&mut self) {
        let result = self.validate_export().and_then(|dir| {
            let ext = match self.plot_format {
                PlotFormat::Png => "png",
                PlotFormat::Svg => "svg",
            };
            let path = dir.join(format!("etp_chart.{}", ext));
            render::plot_spec(
                self.session.chart_spec(),
                &path,
                self.plot_width,
                self.plot_height,
                &self.config.chart.locale,
            )?;
            Ok(path)
        });
        self.report(result, "chart");
    }

    fn export_spec(&mut self, format: SpecFormat) {
        let result = self.validate_export().and_then(|dir| {
            let name = match format {
                SpecFormat::Native => "etp_chart_spec.json",
                SpecFormat::Echarts => "etp_chart_echarts.json",
            };
            let path = dir.join(name);
            storage::save_spec_json(self.session.chart_spec(), &path, format)?;
            Ok(path)
        });
        self.report(result, "chart spec");
    }

    fn report(&mut self, result: Result<PathBuf>, what: &str) {
        match result {
            Ok(path) => {
                self.status_message = format!("Saved {} to {}", what, path.display());
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("Failed to save {}: {:#}", what, err);
                self.status_message.clear();
            }
        }
    }

    fn axis_section(&mut self, ui: &mut egui::Ui) {
        let current = self.session.axis_assignment();
        let mut total_etp = current.total_etp;
        let mut etp_ro = current.etp_ro;
        let mut changed = false;

        ui.label("Axes");
        ui.add_space(5.0);
        changed |= ui
            .checkbox(&mut total_etp, "Total ETP on its own axis")
            .changed();
        changed |= ui.checkbox(&mut etp_ro, "ETP RO on its own axis").changed();

        if changed {
            self.session
                .set_axis_assignment(AxisAssignment { total_etp, etp_ro });
        }
    }

    fn benchmark_section(&mut self, ui: &mut egui::Ui) {
        let current = self.session.benchmarks();
        let show = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_else(|| "none".into());

        ui.label("Benchmarks");
        ui.add_space(5.0);
        ui.label(format!(
            "Total ETP: {}    ETP RO: {}",
            show(current.total_etp),
            show(current.etp_ro)
        ));
        ui.horizontal(|ui| {
            if ui.button("Set benchmarks...").clicked() {
                self.benchmark_dialog = Some(BenchmarkForm::from_benchmarks(&current));
                self.benchmark_error.clear();
            }
            if ui.button("Clear benchmarks").clicked() {
                self.session.set_benchmarks(Benchmarks::default());
            }
        });
    }

    fn spec_section(&self, ui: &mut egui::Ui) {
        let spec = self.session.chart_spec();
        ui.label(format!("Chart ({} dates)", spec.categories.len()));
        ui.add_space(5.0);

        egui::Grid::new("axes_grid").striped(true).show(ui, |ui| {
            ui.strong("Axis");
            ui.strong("Range");
            ui.strong("Position");
            ui.end_row();
            for (i, axis) in spec.axes.iter().enumerate() {
                ui.label(axis.name.clone().unwrap_or_else(|| format!("shared #{}", i)));
                ui.label(format!("{} .. {} (step {})", axis.min, axis.max, axis.tick_interval));
                ui.label(format!("{:?} +{}px", axis.position, axis.offset));
                ui.end_row();
            }
        });

        ui.add_space(5.0);
        egui::Grid::new("series_grid").striped(true).show(ui, |ui| {
            ui.strong("Series");
            ui.strong("Axis");
            ui.strong("Benchmark");
            ui.end_row();
            for s in &spec.series {
                let c = s.color;
                ui.colored_label(egui::Color32::from_rgb(c.r, c.g, c.b), &s.name);
                ui.label(s.axis_index.to_string());
                ui.label(s.benchmark_line.map(|b| b.to_string()).unwrap_or_default());
                ui.end_row();
            }
        });
    }

    fn benchmark_dialog(&mut self, ctx: &egui::Context) {
        let Some(form) = self.benchmark_dialog.as_mut() else {
            return;
        };
        let mut action = DialogAction::None;
        let error = &self.benchmark_error;

        egui::Window::new("Set benchmarks")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("benchmark_form").show(ui, |ui| {
                    ui.label("Total ETP (%):");
                    ui.text_edit_singleline(&mut form.total_etp);
                    ui.end_row();
                    ui.label("ETP RO (%):");
                    ui.text_edit_singleline(&mut form.etp_ro);
                    ui.end_row();
                });
                ui.label("Leave a field empty for no benchmark line.");
                if !error.is_empty() {
                    ui.colored_label(egui::Color32::RED, error);
                }
                ui.horizontal(|ui| {
                    if ui.button("Submit").clicked() {
                        action = DialogAction::Submit;
                    }
                    if ui.button("Cancel").clicked() {
                        action = DialogAction::Cancel;
                    }
                });
            });

        match action {
            DialogAction::None => {}
            DialogAction::Cancel => {
                self.benchmark_dialog = None;
            }
            DialogAction::Submit => match form.submit() {
                Ok(benchmarks) => {
                    self.session.set_benchmarks(benchmarks);
                    self.benchmark_dialog = None;
                }
                Err(err) => self.benchmark_error = err.to_string(),
            },
        }
    }
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a completed background fetch
        self.check_load_result();

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("ETP Recovery Report");
                ui.add_space(10.0);

                ui.group(|ui| {
                    ui.label("Data Source");
                    ui.add_space(5.0);
                    ui.horizontal(|ui| {
                        ui.label("Store URL:");
                        ui.text_edit_singleline(&mut self.source_url).on_hover_text(
                            "Base URL of the measurement store (e.g., http://localhost:3000)",
                        );
                        if ui
                            .add_enabled(!self.is_loading, egui::Button::new("Reload"))
                            .clicked()
                        {
                            self.start_load();
                        }
                        if self.is_loading {
                            ui.spinner();
                        }
                    });
                });

                ui.add_space(10.0);
                ui.group(|ui| self.axis_section(ui));
                ui.add_space(10.0);
                ui.group(|ui| self.benchmark_section(ui));
                ui.add_space(10.0);
                ui.group(|ui| self.spec_section(ui));
                ui.add_space(10.0);

                ui.group(|ui| {
                    ui.label("Export");
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        ui.label("Output path:");
                        ui.text_edit_singleline(&mut self.output_path);
                        if ui.button("Browse").clicked()
                            && let Some(path) = rfd::FileDialog::new().pick_folder()
                        {
                            self.output_path = path.to_string_lossy().to_string();
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Chart format:");
                        ui.radio_value(&mut self.plot_format, PlotFormat::Png, "PNG");
                        ui.radio_value(&mut self.plot_format, PlotFormat::Svg, "SVG");
                    });

                    ui.horizontal(|ui| {
                        ui.label("Dimensions:");
                        ui.add(egui::DragValue::new(&mut self.plot_width).range(200..=3000));
                        ui.label("×");
                        ui.add(egui::DragValue::new(&mut self.plot_height).range(200..=3000));
                        ui.label("pixels");
                    });

                    ui.horizontal(|ui| {
                        if ui.button("Save chart").clicked() {
                            self.export_chart();
                        }
                        if ui.button("Save spec (JSON)").clicked() {
                            self.export_spec(SpecFormat::Native);
                        }
                        if ui.button("Save ECharts option").clicked() {
                            self.export_spec(SpecFormat::Echarts);
                        }
                    });
                });

                ui.add_space(10.0);

                // Status messages
                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }

                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });

        self.benchmark_dialog(ctx);
    }
}
