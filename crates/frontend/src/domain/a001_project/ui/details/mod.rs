//! Project details page (the navigation target after a submission)

mod model;
mod view;

pub use view::ProjectDetailsPage;
