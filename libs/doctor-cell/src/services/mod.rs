pub mod day_tabs;
pub mod slot_browser;
pub mod slot_display;
pub mod slots;
pub mod working_hours;

pub use day_tabs::{generate_day_tabs, DayTab};
pub use slot_browser::SlotBrowser;
pub use slot_display::{SlotCard, SlotDetail, SlotDisplay, SlotIcon};
pub use slots::{HttpSlotApi, SlotApi};
pub use working_hours::WorkingHoursService;
