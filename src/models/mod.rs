pub mod booking;
pub mod event;
pub mod user;

pub use booking::{Booking, CreateBooking, CreateGuestBooking};
pub use event::{CreateEvent, Event};
pub use user::{CreateUser, User};
