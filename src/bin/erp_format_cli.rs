use std::{env, path::PathBuf, process};

use erp_format::{
    config::{Config, ConfigManager},
    format_percentage, init, DateFormatter, FormatOptions, NumberFormatter,
};

const CONFIG_ENV: &str = "ERP_FORMAT_CONFIG";

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| usage_exit());

    let config = load_config()?;
    let numbers = NumberFormatter::from_config(&config)?;
    let dates = DateFormatter::from_config(&config)?;

    let output = match command.as_str() {
        "currency" => {
            let value = args.next().unwrap_or_else(|| usage_exit());
            let mut options = config.format_options();
            if args.next().as_deref() == Some("--no-symbol") {
                options = FormatOptions {
                    show_symbol: false,
                    ..options
                };
            }
            numbers.format_currency(value, &options)
        }
        "number" => {
            let value = args.next().unwrap_or_else(|| usage_exit());
            let decimals = parse_decimals(args.next())?;
            numbers.format_number(value, decimals)
        }
        "percent" => {
            let value = args.next().unwrap_or_else(|| usage_exit());
            let decimals = parse_decimals(args.next())?;
            format_percentage(value, decimals)
        }
        "date" => {
            let value = args.next().unwrap_or_else(|| usage_exit());
            let pattern = args.next().unwrap_or_else(|| config.date_pattern.clone());
            dates.format_date(value, pattern.as_str())
        }
        "datetime" => {
            let value = args.next().unwrap_or_else(|| usage_exit());
            let pattern = args
                .next()
                .unwrap_or_else(|| config.date_time_pattern.clone());
            dates.format_date_time(value, pattern.as_str())
        }
        "month" => {
            let value = args.next().unwrap_or_else(|| usage_exit());
            dates.format_month(value)
        }
        "parse" => {
            let value = args.next().unwrap_or_else(|| usage_exit());
            numbers.parse_currency(&value).to_string()
        }
        "period" => {
            let period = dates.current_period();
            format!(
                "{} - {}",
                dates.format_date(period.start, config.date_pattern.as_str()),
                dates.format_date(period.end, config.date_pattern.as_str())
            )
        }
        _ => usage_exit(),
    };

    println!("{output}");
    Ok(())
}

fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let path = env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(ConfigManager::default_location);
    Ok(ConfigManager::new(path).load()?)
}

fn parse_decimals(arg: Option<String>) -> Result<u32, Box<dyn std::error::Error>> {
    match arg {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(2),
    }
}

fn usage_exit() -> ! {
    print_usage();
    process::exit(2);
}

fn print_usage() {
    eprintln!(
        "Usage: erp_format_cli <command> [args]\n\
         Commands:\n  \
         currency <amount> [--no-symbol]\n  \
         number <value> [decimals]\n  \
         percent <value> [decimals]\n  \
         date <date> [pattern]\n  \
         datetime <date> [pattern]\n  \
         month <date>\n  \
         parse <text>\n  \
         period"
    );
}
