use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::{Context, Pos2, Rect};
use egui_adjacency::{
    AdjacencyMatrix, GraphState, GraphView, MAX_RANDOM_NODES, MIN_RANDOM_NODES,
};

const EXPORT_FILE: &str = "graph_export.json";

/// Canvas guess used until the widget reports its real rect.
fn default_canvas() -> Rect {
    Rect::from_min_max(Pos2::ZERO, Pos2::new(1280., 800.))
}

pub struct DemoApp {
    state: GraphState,
    matrix_text: String,
    import_text: String,
    node_count: usize,
    error: Option<String>,
    info: Option<String>,
}

impl DemoApp {
    fn new(_: &CreationContext<'_>) -> Self {
        let sample = AdjacencyMatrix::sample();
        let matrix_text = sample.to_pretty_json();
        Self {
            state: GraphState::new(sample, default_canvas()),
            matrix_text,
            import_text: String::new(),
            node_count: 6,
            error: None,
            info: None,
        }
    }

    fn load_matrix(&mut self) {
        match GraphState::from_json(&self.matrix_text, default_canvas()) {
            Ok(state) => {
                self.state = state;
                self.matrix_text = self.state.matrix().to_pretty_json();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn randomize(&mut self) {
        match GraphState::random(self.node_count, default_canvas()) {
            Ok(state) => {
                self.state = state;
                self.matrix_text = self.state.matrix().to_pretty_json();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn export(&mut self) {
        if self.state.node_count() == 0 {
            return;
        }
        let payload = egui_adjacency::export_json(&self.state);
        match std::fs::write(EXPORT_FILE, payload) {
            Ok(()) => {
                log::info!("exported graph to {EXPORT_FILE}");
                self.info = Some(format!("Exported to {EXPORT_FILE}"));
            }
            Err(err) => self.error = Some(format!("Export failed: {err}")),
        }
    }

    fn import(&mut self) {
        // the text box takes either a pasted payload or a path to one
        let trimmed = self.import_text.trim();
        let payload = if trimmed.starts_with('[') {
            trimmed.to_string()
        } else {
            match std::fs::read_to_string(trimmed) {
                Ok(content) => content,
                Err(err) => {
                    self.error = Some(format!("Import failed: {err}"));
                    return;
                }
            }
        };

        match GraphState::import(&payload) {
            Ok(state) => {
                self.state = state;
                self.matrix_text = self.state.matrix().to_pretty_json();
            }
            Err(err) => self.error = Some(format!("Import failed: {err}")),
        }
    }

    fn side_panel(&mut self, ctx: &Context) {
        egui::SidePanel::left("controls").min_width(260.).show(ctx, |ui| {
            ui.heading("Adjacency matrix");
            ui.add(
                egui::TextEdit::multiline(&mut self.matrix_text)
                    .code_editor()
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("Go").clicked() {
                self.load_matrix();
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Nodes:");
                ui.add(egui::DragValue::new(&mut self.node_count).range(1..=40));
            });
            if ui.button("Randomize").clicked() {
                self.randomize();
            }
            ui.label(format!(
                "Random graphs take {MIN_RANDOM_NODES} to {MAX_RANDOM_NODES} nodes."
            ));

            ui.separator();
            if ui.button("Export").clicked() {
                self.export();
            }
            ui.label("Import (payload or file path):");
            ui.add(
                egui::TextEdit::multiline(&mut self.import_text)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("Import").clicked() {
                self.import();
            }

            if let Some(info) = self.info.clone() {
                ui.separator();
                ui.label(info);
            }
        });
    }

    fn error_window(&mut self, ctx: &Context) {
        let Some(message) = self.error.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.error = None;
                }
            });
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        self.side_panel(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(&mut GraphView::new(&mut self.state));
        });
        self.error_window(ctx);
    }
}

fn main() {
    env_logger::init();
    run_native(
        "egui_adjacency_demo",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
    .unwrap();
}
