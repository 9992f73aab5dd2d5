use super::Layout;
use crate::{save_gif, Config, Driver, GridEngine, Result, RunSettings};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Margin, SidePanel};
use std::time::Duration;

pub struct App {
    pub(super) driver: Driver,          // Engine shared with the run thread.
    pub(super) cell_pixels: f32,        // Side of a drawn cell.
    pub(super) show_stats: bool,        // Whether the population window is open.
    pub(super) stats_filename: String,  // Where "Save stats" writes the CSV.
    pub(super) status: String,          // Last message shown under the controls.
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let engine = GridEngine::from_config(config)?;
        Ok(Self {
            driver: Driver::new(engine, RunSettings::from(config)),
            cell_pixels: Layout::CELL_PIXELS,
            show_stats: false,
            stats_filename: Layout::STATS_FILENAME.to_string(),
            status: String::new(),
        })
    }

    fn collect_finished_run(&mut self) {
        if let Some(summary) = self.driver.poll_finished() {
            self.status = if summary.stopped_early {
                format!("Stopped after {} generations", summary.steps)
            } else {
                format!("Finished {} generations", summary.steps)
            };
            self.show_stats = summary.stats.is_some();

            if !summary.frames.is_empty() {
                let delay = self.driver.settings().delay;
                match save_gif(&summary.frames, Layout::GIF_FILENAME, delay) {
                    Ok(()) => self.status += &format!("\nSaved {}", Layout::GIF_FILENAME),
                    Err(err) => {
                        tracing::error!(%err, "saving animation failed");
                        self.status += &format!("\n{}", err);
                    }
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.collect_finished_run();

        SidePanel::right("controls")
            .exact_width(Layout::CONTROL_PANEL_WIDTH)
            .show(ctx, |ui| self.draw_controls(ui));

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Layout::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| self.draw_field(ui));

        if self.show_stats {
            self.draw_stats_window(ctx);
        }

        if self.driver.run_pending() {
            ctx.request_repaint_after(Duration::from_millis(Layout::REPAINT_MS));
        }
    }
}
