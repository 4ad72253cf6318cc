//! Plain SQL access to the `events`, `users` and `bookings` tables.
//!
//! Inventory changes never go through these repositories; see
//! [`crate::ledger::BookingLedger`].

pub mod booking_repo;
pub mod event_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use event_repo::EventRepo;
pub use user_repo::UserRepo;
