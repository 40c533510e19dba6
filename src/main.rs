use clap::Parser;
use divider_calc::*;

/// Pick standard resistors for a voltage divider
#[derive(Parser, Debug)]
#[command(name = "divider-calc", version)]
struct Args {
    /// Supply voltage
    #[arg(long)]
    vin: f64,

    /// Wanted output voltage
    #[arg(long)]
    vout: f64,

    /// Allowed error in percent
    #[arg(short, long, default_value_t = 5.0)]
    tolerance: f64,

    /// Resistor series: E6, E12 or E24
    #[arg(short, long, default_value = "E12")]
    series: String,

    /// Smallest resistor value in ohms
    #[arg(long, default_value_t = 100.0)]
    r_min: f64,

    /// Largest resistor value in ohms
    #[arg(long, default_value_t = 100_000.0)]
    r_max: f64,

    /// Only search networks with this many resistors (2, 3 or 4)
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=4))]
    size: Vec<u8>,

    /// Print each match over several lines
    #[arg(long)]
    long: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let series: SeriesName = args.series.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let mut search = DividerSearch::new(series).range(args.r_min, args.r_max);
    if !args.size.is_empty() {
        let sizes: Vec<NetworkSize> = args
            .size
            .iter()
            .filter_map(|n| NetworkSize::from_count(*n as usize))
            .collect();
        search = search.sizes(&sizes);
    }

    println!("Number of combinations: {}", search.combinations());

    let res = search
        .search(args.vin, args.vout, args.tolerance)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    if res.is_empty() {
        println!("No values satisfy requirements");
        return;
    }

    for (idx, sol) in res.iter().enumerate() {
        if args.long {
            println!("Match {}:\n{}\n", idx + 1, sol.describe());
        } else {
            println!("Match {}: {:#}", idx + 1, sol);
        }
    }
}
