mod app;
mod draw;
mod layout;

pub use app::App;
use layout::Layout;
