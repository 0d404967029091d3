//! Submit page UI module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (submit)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::SubmitProjectPage;
pub use view_model::SubmitProjectViewModel;
