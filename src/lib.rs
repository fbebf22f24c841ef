#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod bitmap;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod tools;

pub use app::PaintApp;
pub use bitmap::Bitmap;
pub use canvas::CanvasController;
pub use command::Command;
pub use config::{PaintConfig, StrokeSettings};
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use stroke::{StrokeStyle, StrokeWidth};
pub use tools::{ShapePreview, Tool};
