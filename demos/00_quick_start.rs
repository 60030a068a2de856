/// quick start - interest on a loan between two BS dates
use sambat_interest_rs::{accrue, BsDate, InterestView, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sambat_interest_rs=debug")),
        )
        .init();

    // Rs 50,000 at 1% a month
    let start: BsDate = "2080-01-01".parse()?;
    let end: BsDate = "2081-03-11".parse()?;

    let result = accrue(Money::from_major(50_000), dec!(1), &start, &end)?;
    let view = InterestView::from_result(&start, &end, &result);

    println!("{}", view.to_json_pretty()?);

    Ok(())
}
