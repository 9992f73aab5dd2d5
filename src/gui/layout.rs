use eframe::egui::{Color32, Vec2};

pub struct Layout;

impl Layout {
    /// Side of one cell on screen, in points.
    pub const CELL_PIXELS: f32 = 10.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const FILENAME_INPUT_WIDTH: f32 = 120.;
    pub const WIDGET_GAP: f32 = 20.;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0xfd, 0xe7, 0x25);
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(0x44, 0x01, 0x54);

    pub const PLOT_SIZE: Vec2 = Vec2::new(480., 280.);
    pub const PLOT_STROKE_WIDTH: f32 = 2.;
    pub const PLOT_COLOR: Color32 = Color32::BLUE;

    pub const REPAINT_MS: u64 = 16;
    pub const STATS_FILENAME: &str = "population.csv";
    pub const GIF_FILENAME: &str = "conway_simulation.gif";
}
