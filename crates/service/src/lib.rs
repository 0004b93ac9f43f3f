//! Record service: entity-specific operations on top of the `models` store.
//! - Turns flat JSON field-mappings into typed field sets (exact key set required).
//! - Produces the confirmation messages returned by write operations.
//! - Seeds the store at startup.

pub mod errors;
pub mod fields;
pub mod record;
pub mod user_service;
pub mod order_service;
pub mod offer_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;

pub use record::{Created, RecordService};
pub use user_service::Users;
pub use order_service::Orders;
pub use offer_service::Offers;
