pub mod args;
pub use args::*;

pub mod console;
pub use console::*;

pub mod controller;
pub use controller::*;

pub mod lines;
pub use lines::*;

pub mod prompt;
pub use prompt::*;

pub mod render;
