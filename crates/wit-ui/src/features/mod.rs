//! Feature slices. Each slice owns its state, logic, API calls and views.

pub mod labels;
pub mod reset_password;
