use clap::{ArgAction, Args, Parser, Subcommand};
use random_values::utils::config::Config;
use random_values::utils::serialization::{load_json, save_json, to_json};
use random_values::values::random_password_with_cost;
use random_values::{
    generate_string, random_id, random_integer, random_uuid, shuffle, IdOptions, IntegerOptions,
    PermutationSpec, SecureSource, StringOptions,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Synthetic configuration values: strings, passwords, ids, uuids, integers and shuffles", long_about = None)]
struct Cli {
    /// TOML file providing default options
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Write the JSON result to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random string honoring per-class minimums
    String {
        #[command(flatten)]
        options: StringArgs,
    },
    /// Generate a random password together with its bcrypt hash
    Password {
        #[command(flatten)]
        options: StringArgs,
        #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
        cost: u32,
    },
    /// Shuffle a list of values; a seed makes the order reproducible
    Shuffle {
        values: Vec<String>,
        /// JSON array of strings to shuffle instead of positional values
        #[arg(long, value_name = "FILE", conflicts_with = "values")]
        input: Option<PathBuf>,
        #[arg(long)]
        result_count: Option<usize>,
        #[arg(long)]
        seed: Option<String>,
    },
    /// Generate random bytes rendered as hex, base64 and decimal
    Id {
        #[arg(long)]
        byte_length: Option<usize>,
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Generate a version 4 UUID
    Uuid,
    /// Generate an integer within an inclusive range
    Integer {
        #[arg(long, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, allow_negative_numbers = true)]
        max: i64,
        #[arg(long)]
        seed: Option<String>,
    },
}

#[derive(Args)]
struct StringArgs {
    #[arg(long)]
    length: Option<usize>,
    #[arg(long)]
    no_upper: bool,
    #[arg(long)]
    no_lower: bool,
    #[arg(long)]
    no_numeric: bool,
    #[arg(long)]
    no_special: bool,
    #[arg(long)]
    min_upper: Option<usize>,
    #[arg(long)]
    min_lower: Option<usize>,
    #[arg(long)]
    min_numeric: Option<usize>,
    #[arg(long)]
    min_special: Option<usize>,
    /// Replaces the default special characters verbatim
    #[arg(long, allow_hyphen_values = true)]
    override_special: Option<String>,
}

impl StringArgs {
    fn apply(&self, base: &StringOptions) -> StringOptions {
        let mut options = base.clone();
        if let Some(length) = self.length {
            options.length = length;
        }
        options.upper &= !self.no_upper;
        options.lower &= !self.no_lower;
        options.numeric &= !self.no_numeric;
        options.special &= !self.no_special;
        options.min_upper = self.min_upper.unwrap_or(options.min_upper);
        options.min_lower = self.min_lower.unwrap_or(options.min_lower);
        options.min_numeric = self.min_numeric.unwrap_or(options.min_numeric);
        options.min_special = self.min_special.unwrap_or(options.min_special);
        if self.override_special.is_some() {
            options.override_special = self.override_special.clone();
        }
        options
    }
}

struct OutputSettings {
    json: bool,
    file: Option<PathBuf>,
}

#[derive(Serialize)]
struct ValueOutput<T: Serialize> {
    result: T,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_ref())?;
    init_tracing(cli.verbose, &config.output.log_level);
    debug!(config = ?cli.config, "configuration loaded");

    let output = OutputSettings {
        json: cli.json || config.output.json,
        file: cli.output,
    };

    match cli.command {
        Commands::String { options } => run_string(&options.apply(&config.string), &output)?,
        Commands::Password { options, cost } => {
            run_password(&options.apply(&config.string), cost, &output)?
        }
        Commands::Shuffle {
            values,
            input,
            result_count,
            seed,
        } => run_shuffle(values, input, result_count, seed, &output)?,
        Commands::Id {
            byte_length,
            prefix,
        } => {
            let options = IdOptions {
                byte_length: byte_length.unwrap_or(config.id.byte_length),
                prefix: prefix.or(config.id.prefix),
            };
            run_id(&options, &output)?
        }
        Commands::Uuid => run_uuid(&output)?,
        Commands::Integer { min, max, seed } => run_integer(
            &IntegerOptions { min, max, seed },
            &output,
        )?,
    }
    Ok(())
}

fn init_tracing(verbose: u8, configured: &str) {
    let level = match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize>(output: &OutputSettings, value: &T, plain: String) -> CliResult<()> {
    if let Some(path) = &output.file {
        save_json(path, value)?;
        eprintln!("Result saved to {}", path.display());
    } else if output.json {
        println!("{}", to_json(value)?);
    } else {
        println!("{plain}");
    }
    Ok(())
}

fn run_string(options: &StringOptions, output: &OutputSettings) -> CliResult<()> {
    let result = generate_string(options, &mut SecureSource::os())?;
    let plain = result.to_string();
    emit(output, &ValueOutput { result }, plain)
}

fn run_password(options: &StringOptions, cost: u32, output: &OutputSettings) -> CliResult<()> {
    let password = random_password_with_cost(options, &mut SecureSource::os(), cost)?;
    let plain = password.result.to_string();
    emit(output, &password, plain)
}

fn run_shuffle(
    values: Vec<String>,
    input: Option<PathBuf>,
    result_count: Option<usize>,
    seed: Option<String>,
    output: &OutputSettings,
) -> CliResult<()> {
    let input = match input {
        Some(path) => load_json::<_, Vec<String>>(&path)?,
        None => values,
    };
    let spec = PermutationSpec {
        input,
        result_count,
        seed,
    };
    let result = shuffle(&spec)?;
    let plain = result.join("\n");
    emit(output, &result, plain)
}

fn run_id(options: &IdOptions, output: &OutputSettings) -> CliResult<()> {
    let id = random_id(options, &mut SecureSource::os())?;
    let plain = format!(
        "hex     = {}\nb64_std = {}\nb64_url = {}\ndec     = {}",
        id.hex, id.b64_std, id.b64_url, id.dec
    );
    emit(output, &id, plain)
}

fn run_uuid(output: &OutputSettings) -> CliResult<()> {
    let uuid = random_uuid(&mut SecureSource::os())?;
    emit(output, &ValueOutput { result: uuid }, uuid.to_string())
}

fn run_integer(options: &IntegerOptions, output: &OutputSettings) -> CliResult<()> {
    let value = random_integer(options)?;
    emit(output, &ValueOutput { result: value }, value.to_string())
}
