use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use wbflat::{Client, Observation, models};

#[derive(Parser, Debug)]
#[command(
    name = "wbflat",
    version,
    about = "Fetch World Bank indicator series and print them as flat rows"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an arbitrary indicator code.
    Get(GetArgs),
    /// Imports of goods and services (NE.IMP.GNFS.CD).
    Imports(PresetArgs),
    /// Exports of goods and services (NE.EXP.GNFS.CD).
    Exports(PresetArgs),
    /// GDP in current US$ (NY.GDP.MKTP.CD).
    Gdp(PresetArgs),
}

#[derive(Args, Debug)]
struct GetArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Indicator code (e.g., NY.GDP.MKTP.CD)
    #[arg(short, long)]
    indicator: String,
}

#[derive(Args, Debug)]
struct PresetArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Override the preset indicator code.
    #[arg(short, long)]
    indicator: Option<String>,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Country/region code (e.g., FR, DEU, EUU)
    #[arg(short, long)]
    country: String,
    /// Year (YYYY) or inclusive range (YYYY:YYYY)
    #[arg(short = 'd', long)]
    date: String,
    /// Emit CSV to stdout instead of an aligned table.
    #[arg(long, default_value_t = false)]
    csv: bool,
    /// Print at most this many rows.
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => run(args.common, &args.indicator),
        Command::Imports(args) => {
            let code = args.indicator.as_deref().unwrap_or(models::IMPORTS);
            run(args.common, code)
        }
        Command::Exports(args) => {
            let code = args.indicator.as_deref().unwrap_or(models::EXPORTS);
            run(args.common, code)
        }
        Command::Gdp(args) => {
            let code = args.indicator.as_deref().unwrap_or(models::GDP);
            run(args.common, code)
        }
    }
}

fn run(common: CommonArgs, indicator: &str) -> Result<()> {
    // A bare year means a single-year range; anything else passes through
    // to the API untouched.
    let (start, end) = match common.date.split_once(':') {
        Some((a, b)) => (a, b),
        None => (common.date.as_str(), common.date.as_str()),
    };

    let client = Client::default();
    let mut rows = client.fetch_indicator(&common.country, start, end, indicator)?;
    if let Some(n) = common.limit {
        rows.truncate(n);
    }

    if common.csv {
        print_csv(&rows)?;
    } else {
        print_table(&rows);
    }
    Ok(())
}

fn print_csv(rows: &[Observation]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout().lock());
    wtr.serialize((
        "countryiso3code",
        "date",
        "value",
        "unit",
        "obs_status",
        "decimal",
        "country_name",
        "country_code",
        "indicator_name",
        "indicator_code",
    ))?;
    for r in rows {
        wtr.serialize((
            &r.countryiso3code,
            &r.date,
            r.value,
            &r.unit,
            &r.obs_status,
            r.decimal,
            &r.country_name,
            &r.country_code,
            &r.indicator_name,
            &r.indicator_code,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

fn fmt_value(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn print_table(rows: &[Observation]) {
    if rows.is_empty() {
        println!("no observations");
        return;
    }
    println!(
        "{:<6} {:<6} {:<22} {:<24} {:<6} indicator",
        "date", "iso3", "value", "country", "code"
    );
    for r in rows {
        println!(
            "{:<6} {:<6} {:<22} {:<24} {:<6} {}",
            r.date,
            r.countryiso3code,
            fmt_value(r.value),
            r.country_name.as_deref().unwrap_or("NA"),
            r.country_code.as_deref().unwrap_or("NA"),
            r.indicator_code.as_deref().unwrap_or("NA"),
        );
    }
}
