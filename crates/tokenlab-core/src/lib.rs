pub mod catalog;
pub mod projection;
pub mod schema;

pub use catalog::*;
pub use projection::*;
pub use schema::*;
