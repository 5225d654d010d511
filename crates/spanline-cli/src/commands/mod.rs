//! Command implementations.

pub mod connection;
pub mod dates;

pub use self::connection::execute_connection;
pub use self::dates::execute_dates;
