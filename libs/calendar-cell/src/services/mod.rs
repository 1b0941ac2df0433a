pub mod google;

pub use google::GoogleCalendarService;
