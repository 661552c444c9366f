//! stockctl-server: inventory tracking over HTTP
//!
//! CRUD endpoints for products, their priced models, and stock receipts,
//! backed by PostgreSQL. Foreign keys and unique indexes in the store are
//! the only business rules; handlers validate input and translate
//! constraint failures into client errors.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use sqlx::PgPool;
