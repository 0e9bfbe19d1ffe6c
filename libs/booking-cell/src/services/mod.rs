pub mod desk;
pub mod gateway;
pub mod submitter;
pub mod validation;

pub use desk::BookingDesk;
pub use gateway::{BookingGateway, BOOKING_PATH};
pub use submitter::{demo_response, BookingSubmitter};
pub use validation::FormValidator;
