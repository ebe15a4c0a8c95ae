pub mod admin;
pub mod applications;
pub mod auth;
pub mod internships;
pub mod portfolio;
pub mod public;
pub mod submissions;
pub mod tasks;
pub mod themes;
