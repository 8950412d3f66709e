pub mod detect_project;
pub mod init;
pub mod list_models;
pub mod reset_project;
pub mod switch_model;
pub mod track_tasks;
