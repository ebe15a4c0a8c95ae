//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod feedback_repo;
pub mod internship_repo;
pub mod portfolio_repo;
pub mod portfolio_section_repo;
pub mod role_repo;
pub mod session_repo;
pub mod submission_repo;
pub mod task_repo;
pub mod theme_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepo;
pub use feedback_repo::FeedbackRepo;
pub use internship_repo::InternshipRepo;
pub use portfolio_repo::PortfolioRepo;
pub use portfolio_section_repo::{ButtonRepo, CardRepo, PortfolioSectionRepo};
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::SubmissionRepo;
pub use task_repo::TaskRepo;
pub use theme_repo::ThemeRepo;
pub use user_repo::UserRepo;
