//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared by all handlers - no Arc<Mutex<Connection>>
//! - One transaction per mutating operation; dropped transactions roll back
//! - Rely on DB constraints, handle violations - no check-then-insert

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::{DbError, IntegrityKind};
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
