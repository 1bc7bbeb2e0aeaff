pub mod alert;
pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod home;
pub mod keybindings;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::App;
pub use home::{Home, TaskHandlers};
