pub mod api;
pub mod queue;
pub mod workflow;

pub use api::{AssignmentApi, HttpAssignmentApi};
pub use queue::{AssignmentQueue, BookingRequestRow, QueueView};
pub use workflow::{AssignmentPhase, AssignmentWorkflow, NO_DOCTORS_MESSAGE};
