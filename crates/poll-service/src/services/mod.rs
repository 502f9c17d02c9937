//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates
//! repository calls for one area of the application.

pub mod admin;
pub mod context;
pub mod error;
pub mod question;
pub mod seed;
pub mod vote;

pub use admin::{AdminBootstrap, AdminService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use question::QuestionService;
pub use seed::{SeedReport, SeedService};
pub use vote::VoteService;
