pub mod error;
pub mod response;
pub mod session;
pub mod status;

pub use error::AppError;
pub use response::ApiResponse;
pub use session::{Session, SessionStore, UserType};
pub use status::{AppointmentStatus, BookingRequestStatus, Tone};
