pub mod sqlite;

pub use sqlite::{Db, DbError};
