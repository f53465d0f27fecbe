//! Generators layered on the entropy sources: byte identifiers, UUIDs,
//! bounded integers and hashed passwords.

pub mod id;
pub mod integer;
pub mod password;
pub mod uuid4;

pub use id::{random_id, IdOptions, RandomId};
pub use integer::{random_integer, random_integer_with, IntegerOptions};
pub use password::{random_password, random_password_with_cost, Password};
pub use uuid4::random_uuid;
