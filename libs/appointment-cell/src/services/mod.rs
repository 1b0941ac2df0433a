pub mod api;
pub mod cancel;
pub mod lifecycle;
pub mod partition;
pub mod reschedule;
pub mod store;
pub mod views;

pub use api::{AppointmentApi, HttpAppointmentApi};
pub use cancel::{CancelPhase, CancelWorkflow, CANCELLATION_FEE_NOTICE};
pub use lifecycle::{AppointmentLifecycleService, Audience, RowAction};
pub use partition::{partition_by_date, DateBucket, DatePartition, ScheduleRange};
pub use reschedule::{ReschedulePhase, RescheduleWorkflow};
pub use store::{AppointmentStore, ListSource, RequestState};
pub use views::{AppointmentRow, DashboardView, DoctorDashboard, SectionState};
