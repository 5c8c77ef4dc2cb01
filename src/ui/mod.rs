/// Presentation layer: egui widgets only, no fitting logic.

pub mod panels;
pub mod plot;
