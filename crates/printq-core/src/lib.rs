pub mod auth;
pub mod error;
pub mod io;
pub mod order;
pub mod paths;
pub mod queue;
pub mod repo;
pub mod session;
pub mod store;
pub mod types;

pub use error::{QueueError, Result};
