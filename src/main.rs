use chrono::{NaiveDate, Utc};
use tracing_subscriber::EnvFilter;

use volunteer_roster::display::{print_lookup, print_reserves, print_schedule};
use volunteer_roster::export::write_roster_csv;
use volunteer_roster::roster::{build_schedule, find_volunteer, DEFAULT_VOLUNTEERS, MIN_VOLUNTEERS};
use volunteer_roster::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Web mode
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        tracing::info!(port, "starting roster web server");
        println!("Access the roster at http://localhost:{}", port);

        web::start_server(port).await?;
        return Ok(());
    }

    // Lookup mode: volunteer-roster find QUERY [DATE] [VOLUNTEERS]
    if args.len() > 1 && args[1] == "find" {
        let query = args.get(2).cloned().unwrap_or_default();
        let (date, volunteers) = parse_roster_args(&args[3..])?;

        let schedule = build_schedule(volunteers, date);
        println!("Schedule for '{}' on {}", query, date);
        print_lookup(&query, &find_volunteer(&schedule, &query));
        return Ok(());
    }

    // CLI mode: volunteer-roster [DATE] [VOLUNTEERS]
    let (date, volunteers) = parse_roster_args(&args[1..])?;
    tracing::info!(%date, volunteers, "building roster");

    let schedule = build_schedule(volunteers, date);
    print_schedule(date, &schedule);
    print_reserves(&schedule);

    let out_path = "sequential_roster.csv";
    write_roster_csv(&schedule, out_path)?;
    println!("\nRoster saved to {}", out_path);

    Ok(())
}

/// Parses the optional [DATE] [VOLUNTEERS] positional arguments, defaulting
/// to today and the standard roster size. The staffing floor applies here;
/// the core itself would happily roster a single volunteer.
fn parse_roster_args(args: &[String]) -> Result<(NaiveDate, u32), Box<dyn std::error::Error>> {
    let date = match args.first() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")?,
        None => Utc::now().date_naive(),
    };

    let volunteers = match args.get(1) {
        Some(s) => s.parse::<u32>()?,
        None => DEFAULT_VOLUNTEERS,
    };
    if volunteers < MIN_VOLUNTEERS {
        return Err(format!(
            "at least {} volunteers are required, got {}",
            MIN_VOLUNTEERS, volunteers
        )
        .into());
    }

    Ok((date, volunteers))
}
