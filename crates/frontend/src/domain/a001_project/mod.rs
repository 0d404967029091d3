pub mod submission;
pub mod ui;
