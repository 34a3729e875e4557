pub mod expense_controller;
pub mod history_controller;
pub mod proposal_controller;
pub mod series_controller;
pub mod staff_controller;
