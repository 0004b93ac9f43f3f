//! Entity store: the `user`, `order` and `offer` tables and the record-level
//! operations on them (insert, find, list, replace, delete).
//!
//! Every mutation runs in its own transaction. Non-null foreign keys are checked
//! inside that transaction, so a record never points at a row that did not
//! exist when it was written.

pub mod errors;
pub mod db;
pub mod user;
pub mod order;
pub mod offer;

#[cfg(test)]
mod tests;
