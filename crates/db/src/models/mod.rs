//! Domain model structs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` DTO carrying the client-supplied fields
pub mod movie;
