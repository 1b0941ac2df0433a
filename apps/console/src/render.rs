use appointment_cell::services::{AppointmentRow, DashboardView, DoctorDashboard, SectionState};
use doctor_cell::services::SlotBrowser;

fn print_row(row: &AppointmentRow) {
    println!(
        "  {} {}  {:<16} {}  {}",
        row.date_label,
        row.time_label,
        row.status_label,
        row.counterpart.as_deref().unwrap_or("-"),
        row.service.as_deref().unwrap_or(""),
    );
}

fn print_section(title: &str, state: &SectionState) {
    println!("{}", title);
    match state {
        SectionState::Loading => println!("  Loading..."),
        SectionState::Error(message) => println!("  {}", message),
        SectionState::Empty(message) => println!("  {}", message),
        SectionState::Ready(rows) => rows.iter().for_each(print_row),
    }
    println!();
}

pub fn print_dashboard(view: &DashboardView) {
    print_section("Today", &view.today);
    print_section("Upcoming", &view.upcoming);
    print_section("Past", &view.past);
}

pub fn print_doctor_dashboard(dashboard: &DoctorDashboard) {
    print_section(dashboard.range.label(), &dashboard.schedule);

    println!("Next 7 days");
    if dashboard.upcoming.is_empty() {
        println!("  No upcoming appointments");
    }
    dashboard.upcoming.iter().for_each(print_row);
    println!();
}

pub fn print_slots(browser: &SlotBrowser) {
    println!("Slots");
    if let Some(message) = browser.error() {
        println!("  {}", message);
        return;
    }
    if browser.is_empty_day() {
        println!("  No slots for this day");
        return;
    }

    for card in browser.cards() {
        println!(
            "  {:<9} {:<10} {}",
            card.time_label,
            card.display.label,
            card.patient_name.as_deref().unwrap_or(""),
        );
    }
}
