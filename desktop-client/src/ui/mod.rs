mod app;
mod board;

pub use app::SnakeApp;
pub use board::{FOOTER_HEIGHT, HEADER_HEIGHT};
