/// transaction history - bucket timestamps by BS day
use chrono::{TimeZone, Utc};
use sambat_interest_rs::{CalendarTable, Money};

struct Transaction {
    customer: &'static str,
    amount: Money,
    at: chrono::DateTime<Utc>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let history = vec![
        Transaction { customer: "Ram", amount: Money::from_major(5_000), at: Utc.with_ymd_and_hms(2024, 4, 12, 9, 30, 0).unwrap() },
        Transaction { customer: "Sita", amount: Money::from_major(1_200), at: Utc.with_ymd_and_hms(2024, 4, 12, 18, 20, 0).unwrap() },
        Transaction { customer: "Hari", amount: Money::from_major(800), at: Utc.with_ymd_and_hms(2024, 4, 13, 4, 0, 0).unwrap() },
    ];

    let groups = CalendarTable::standard().group_by_bs_day(history, |t| t.at)?;

    // newest first
    for (day, txns) in groups.iter().rev() {
        let total: Money = txns.iter().map(|t| t.amount).sum();
        println!("{} {} - total {}", day, day.month_name().unwrap_or("?"), total);
        for t in txns {
            println!("    {:<6} {}", t.customer, t.amount);
        }
    }

    Ok(())
}
