//! TUI view components
//!
//! This module contains all the rendering components of the window. Each
//! component is responsible for rendering a specific part of the interface.

mod color_dialog;
mod footer;
pub mod helpers;
mod home;
mod info_bar;
mod navigation;
mod settings;
mod title_bar;

pub use color_dialog::*;
pub use footer::*;
pub use home::*;
pub use info_bar::*;
pub use navigation::*;
pub use settings::*;
pub use title_bar::*;
