pub mod approvals;
pub mod staff;
