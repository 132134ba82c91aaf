pub mod daisy_ui;
pub mod ui;
