pub mod dashboard_controller;
pub mod drafts;
pub mod mount;
pub mod panel;
pub mod profile_form;
