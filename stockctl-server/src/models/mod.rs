//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod product;
pub mod model;
pub mod receipt;

pub use validation::ValidationError;
pub use product::ProductName;
pub use model::{ModelName, Price};
pub use receipt::{AcceptorName, Quantity};
