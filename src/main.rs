use std::process;

use clap::Parser;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use datis::airports;
use datis::display;
use datis::error::AtisError;
use datis::fetch::{FetchOptions, DEFAULT_BASE_URL};
use datis::model::AtisData;
use datis::parse;

#[derive(Parser)]
#[command(
    name = "datis",
    about = "View Japanese D-ATIS broadcasts from the terminal",
    version,
    after_help = "\
Examples:
  datis view
  datis view RJAA
  datis view RJBB --json --pretty
  datis view RJFF --decoded
  datis airports

ATIS data provided by atis.guru"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Fetch and display ATIS for an airport",
        long_about = "Fetch the latest D-ATIS broadcasts, METAR and TAF for an \
            airport and display them.\n\
            The airport must be one of the supported ICAO codes (see `datis airports`).",
        after_help = "\
Examples:
  Default airport:  datis view
  Narita:           datis view RJAA
  JSON output:      datis view RJBB --json --pretty
  Decoded fields:   datis view RJFF --decoded"
    )]
    View(ViewArgs),
    #[command(about = "List supported airports")]
    Airports {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(clap::Args)]
struct ViewArgs {
    #[arg(
        value_name = "ICAO",
        help = "Airport ICAO code",
        long_help = "Airport ICAO code (4 letters, e.g. RJTT, RJAA). \
            Defaults to RJTT (Tokyo Haneda). Run `datis airports` for the full list."
    )]
    code: Option<String>,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[arg(long, help = "Show decoded broadcast fields instead of raw transcripts")]
    decoded: bool,

    #[arg(
        long,
        default_value = DEFAULT_BASE_URL,
        value_name = "URL",
        help = "ATIS service base URL"
    )]
    base_url: String,

    #[arg(long, value_name = "URL", help = "HTTP or SOCKS5 proxy")]
    proxy: Option<String>,

    #[arg(long, default_value = "30", value_name = "SECS", help = "Request timeout")]
    timeout: u64,
}

fn is_json(args: &ViewArgs) -> bool {
    args.json || args.pretty
}

fn error_code(err: &AtisError) -> i32 {
    match err {
        AtisError::InvalidAirport(_) => 2,
        AtisError::Timeout
        | AtisError::ConnectionFailed(_)
        | AtisError::DnsResolution(_)
        | AtisError::TlsError(_)
        | AtisError::ProxyError(_) => 3,
        AtisError::HttpStatus(_) => 5,
        AtisError::Decode(_) => 6,
    }
}

fn error_kind(err: &AtisError) -> &'static str {
    match err {
        AtisError::InvalidAirport(_) => "invalid_airport",
        AtisError::Timeout => "timeout",
        AtisError::ConnectionFailed(_) => "connection_failed",
        AtisError::DnsResolution(_) => "dns_error",
        AtisError::TlsError(_) => "tls_error",
        AtisError::ProxyError(_) => "proxy_error",
        AtisError::HttpStatus(_) => "http_error",
        AtisError::Decode(_) => "decode_error",
    }
}

fn die(err: &AtisError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{}", serde_json::to_string(&json).unwrap());
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn print_decoded(data: &AtisData) {
    let mut printed = false;
    if let Some(ref info) = data.arrival_atis {
        let parsed = parse::parse_broadcast(&info.raw);
        print!("{}", display::render_decoded("Arrival ATIS", &parsed));
        printed = true;
    }
    if let Some(ref info) = data.departure_atis {
        let parsed = parse::parse_broadcast(&info.raw);
        print!("{}", display::render_decoded("Departure ATIS", &parsed));
        printed = true;
    }
    if !printed {
        println!("No broadcasts published for {}.", data.airport);
    }
}

fn print_result(data: &AtisData, args: &ViewArgs) {
    if is_json(args) {
        let output = if args.pretty {
            serde_json::to_string_pretty(data).unwrap()
        } else {
            serde_json::to_string(data).unwrap()
        };
        println!("{output}");
    } else if args.decoded {
        print_decoded(data);
    } else {
        println!("{}", display::render(data));
    }
}

fn print_airports(json: bool) {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = airports::AIRPORTS
            .iter()
            .map(|(code, name)| ((*code).to_string(), serde_json::json!(name)))
            .collect();
        println!("{}", serde_json::Value::Object(map));
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ICAO", "Airport"]);
        for (code, name) in airports::AIRPORTS {
            table.add_row(vec![code, name]);
        }
        println!("{table}");
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Airports { json } => print_airports(json),
        Commands::View(args) => {
            let json_mode = is_json(&args);

            let code = args
                .code
                .as_deref()
                .unwrap_or(airports::DEFAULT_AIRPORT)
                .to_uppercase();

            if let Err(e) = airports::validate(&code) {
                die(&e, json_mode);
            }

            let options = FetchOptions {
                base_url: args.base_url.clone(),
                proxy: args.proxy.clone(),
                timeout: args.timeout,
            };

            match datis::fetch(&code, &options).await {
                Ok(data) => print_result(&data, &args),
                Err(e) => die(&e, json_mode),
            }
        }
    }
}
