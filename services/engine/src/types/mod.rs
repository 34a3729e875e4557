pub mod approval_types;
pub mod errors;
pub mod expense_types;
pub mod proposal_types;
pub mod series_types;
pub mod staff_types;
