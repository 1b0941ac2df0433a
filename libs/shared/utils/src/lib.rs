pub mod time;
pub mod test_utils;

pub use time::{
    format_date_local, format_display_date, format_time, format_time_range,
    parse_date_local, today_local,
};
