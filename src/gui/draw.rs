use super::{App, Layout};
use crate::{save_csv, GridEngine, Pattern, PopulationStats};
use eframe::egui::{
    pos2, Button, Checkbox, Color32, Context, Rect, RichText, Sense, Shape, Stroke, TextEdit, Ui,
    Vec2, Window,
};

/// Maps a point relative to the field's top left corner to a cell.
///
/// The result is not wrapped; the engine reduces it onto the torus.
pub fn pixel_to_cell(offset: Vec2, cell_pixels: f32) -> (i64, i64) {
    (
        (offset.x / cell_pixels).floor() as i64,
        (offset.y / cell_pixels).floor() as i64,
    )
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Layout::TEXT_COLOR)
            .size(Layout::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Layout::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Layout::BUTTON_STROKE_WIDTH,
                Layout::BUTTON_STROKE_COLOR,
            ))
    }

    pub(super) fn draw_controls(&mut self, ui: &mut Ui) {
        let running = self.driver.is_running();
        if ui.add_enabled(!running, Self::new_button("Start")).clicked() {
            self.driver.start();
            self.status.clear();
        }
        if ui.add_enabled(running, Self::new_button("Stop")).clicked() {
            self.driver.stop();
        }
        let mut settings = self.driver.settings();
        if ui
            .add_enabled(
                !running,
                Checkbox::new(&mut settings.record_frames, Self::new_text("Save as GIF")),
            )
            .changed()
        {
            self.driver.set_settings(settings);
        }
        if ui.add(Self::new_button("Reset")).clicked() {
            self.driver.with_engine_mut(GridEngine::reset);
        }
        if ui.add(Self::new_button("Random")).clicked() {
            self.driver.with_engine_mut(GridEngine::randomize_default);
        }
        for pattern in Pattern::ALL_NAMED {
            let text = format!("Add {}", pattern);
            if ui.add(Self::new_button(&text)).clicked() {
                let (x, y) = pattern.default_origin();
                self.driver
                    .with_engine_mut(|engine| engine.seed_pattern(&pattern, x, y));
            }
        }

        ui.add_space(Layout::WIDGET_GAP);

        if ui.add(Self::new_button("Show stats")).clicked() {
            self.show_stats = true;
        }
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.stats_filename)
                    .desired_width(Layout::FILENAME_INPUT_WIDTH),
            );
            if ui.add(Self::new_button("Save stats")).clicked() {
                self.save_stats();
            }
        });

        ui.add_space(Layout::WIDGET_GAP);

        let (generation, population) = self
            .driver
            .with_engine(|engine| (engine.generation(), engine.population()));
        ui.label(Self::new_text(&format!(
            "Generation: {} | Alive: {}",
            generation, population
        )));
        if !self.status.is_empty() {
            ui.label(Self::new_text(&self.status));
        }
    }

    fn save_stats(&mut self) {
        let history = self.driver.with_engine(|engine| engine.history().to_vec());
        self.status = match save_csv(&history, &self.stats_filename) {
            Ok(()) => format!("Saved {}", self.stats_filename),
            Err(err) => {
                tracing::error!(%err, "saving population failed");
                err.to_string()
            }
        };
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui) {
        let n = self.driver.with_engine(GridEngine::side_length);
        let side = n as f32 * self.cell_pixels;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        let origin = response.rect.min;

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = pixel_to_cell(pos - origin, self.cell_pixels);
                self.driver.with_engine_mut(|engine| engine.toggle(x, y));
            }
        }

        painter.rect_filled(response.rect, 0., Layout::DEAD_COLOR);
        let cell = Vec2::splat(self.cell_pixels);
        self.driver.with_engine(|engine| {
            for (x, y) in engine.grid().alive_cells() {
                let min = origin + Vec2::new(x as f32, y as f32) * self.cell_pixels;
                painter.rect_filled(Rect::from_min_size(min, cell), 0., Layout::ALIVE_COLOR);
            }
        });
    }

    pub(super) fn draw_stats_window(&mut self, ctx: &Context) {
        let history = self.driver.with_engine(|engine| engine.history().to_vec());
        let mut open = self.show_stats;
        Window::new("Alive cells per generation")
            .open(&mut open)
            .show(ctx, |ui| match PopulationStats::from_history(&history) {
                None => {
                    ui.label("No simulation data to show.");
                }
                Some(stats) => {
                    ui.label(stats.to_string());
                    let (response, painter) = ui.allocate_painter(Layout::PLOT_SIZE, Sense::hover());
                    let rect = response.rect;
                    painter.rect_filled(rect, 0., Color32::WHITE);

                    let top = stats.max.max(1) as f32;
                    let last = (history.len() - 1).max(1) as f32;
                    let points = history
                        .iter()
                        .enumerate()
                        .map(|(i, &population)| {
                            pos2(
                                rect.left() + rect.width() * i as f32 / last,
                                rect.bottom() - rect.height() * population as f32 / top,
                            )
                        })
                        .collect();
                    painter.add(Shape::line(
                        points,
                        Stroke::new(Layout::PLOT_STROKE_WIDTH, Layout::PLOT_COLOR),
                    ));
                }
            });
        self.show_stats = open;
    }
}
