/// today - current BS date from a controlled clock
use chrono::{Duration, TimeZone, Utc};
use sambat_interest_rs::{CalendarTable, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = CalendarTable::standard();

    // system clock
    let system = SafeTimeProvider::new(TimeSource::System);
    match table.today_with(&system) {
        Ok(date) => println!("today: {} ({})", date, date.month_name().unwrap_or("?")),
        Err(e) if e.is_out_of_range() => println!("today is outside the calendar table: {}", e),
        Err(e) => return Err(e.into()),
    }

    // controlled clock across new year
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 4, 11, 12, 0, 0).unwrap()
    ));
    let control = time.test_control().unwrap();

    for _ in 0..4 {
        let now = time.now();
        println!("{} UTC -> {} BS", now.format("%Y-%m-%d %H:%M"), table.today_with(&time)?);
        control.advance(Duration::days(1));
    }

    Ok(())
}
