use crate::canvas::CanvasController;
use crate::command::Command;
use crate::config::{PaintConfig, StrokeSettings};
use crate::file_handler::{FileHandler, SaveReport};
use crate::input::{InputHandler, route_event};
use crate::panels::{central_panel, control_panel, tools_panel};
use crate::renderer::Renderer;

pub struct PaintApp {
    canvas: CanvasController,
    input: InputHandler,
    renderer: Renderer,
    file_handler: FileHandler,
    // Result of the last save, shown as a modal until dismissed
    save_report: Option<SaveReport>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        // Settings from the previous run win over the config file defaults
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<StrokeSettings>(storage, eframe::APP_KEY))
            .unwrap_or_else(|| StrokeSettings::from(&config));

        Self::with_settings(cc.egui_ctx.clone(), &config, settings, FileHandler::default())
    }

    pub fn with_settings(
        ctx: egui::Context,
        config: &PaintConfig,
        settings: StrokeSettings,
        file_handler: FileHandler,
    ) -> Self {
        let [width, height] = config.initial_canvas_size;
        let mut canvas = CanvasController::new(width, height);
        canvas.select_tool(settings.tool);
        canvas.set_color(settings.color32());
        canvas.set_stroke_width(settings.stroke_width);

        Self {
            canvas,
            input: InputHandler::new(),
            renderer: Renderer::new(ctx),
            file_handler,
            save_report: None,
        }
    }

    pub fn canvas(&self) -> &CanvasController {
        &self.canvas
    }

    pub fn save_report(&self) -> Option<&SaveReport> {
        self.save_report.as_ref()
    }

    /// Current tool, color and size, as persisted on shutdown
    pub fn settings(&self) -> StrokeSettings {
        let color = self.canvas.color();
        StrokeSettings {
            tool: self.canvas.tool(),
            color: [color.r(), color.g(), color.b()],
            stroke_width: self.canvas.stroke_width(),
        }
    }

    pub fn execute(&mut self, command: Command) {
        self.canvas.execute(command);
    }

    pub fn save_drawing(&mut self) {
        if let Some(report) = self.file_handler.save_drawing(&self.canvas) {
            self.save_report = Some(report);
        }
    }

    /// Feed this frame's pointer input on the canvas widget to the canvas
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        // The report modal captures the pointer
        if self.save_report.is_some() {
            return;
        }
        for event in self.input.process_input(ctx, canvas) {
            route_event(&event, &mut self.canvas);
        }
    }

    pub fn render(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        self.renderer.render(painter, canvas_rect, &self.canvas);
    }

    fn show_save_report(&mut self, ctx: &egui::Context) {
        let Some(report) = &self.save_report else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(report.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(report.message());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.save_report = None;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        control_panel(self, ctx);
        central_panel(self, ctx);
        self.show_save_report(ctx);
    }
}
