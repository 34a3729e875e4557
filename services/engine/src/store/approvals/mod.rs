mod actor;
mod api;
mod commands;
mod helpers;
mod snapshot;

pub use actor::spawn_approvals_actor;
pub use api::Approvals;
