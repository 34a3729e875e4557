pub mod roles;
pub mod transitions;
