use anyhow::Result;
use argh::FromArgs;

mod convert;
mod simulate;

/// Build Faker configuration tool
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    /// Convert a system.prop file to TOML configuration
    Convert(ConvertArgs),
    /// Show the resolved build identity and spoof policy
    Show(ShowArgs),
    /// Simulate the overrides applied for a package
    Simulate(SimulateArgs),
}

/// Convert a system.prop file to TOML configuration
#[derive(FromArgs)]
#[argh(subcommand, name = "convert")]
struct ConvertArgs {
    /// input system.prop path
    #[argh(option, short = 'i', long = "input")]
    input: String,

    /// output config path
    #[argh(option, short = 'o', long = "output")]
    output: String,
}

/// Show the resolved build identity and spoof policy
#[derive(FromArgs)]
#[argh(subcommand, name = "show")]
struct ShowArgs {
    /// config path (.toml config or system.prop)
    #[argh(option, short = 'c', long = "config")]
    config: String,
}

/// Simulate the overrides applied for a package
#[derive(FromArgs)]
#[argh(subcommand, name = "simulate")]
struct SimulateArgs {
    /// config path (.toml config or system.prop)
    #[argh(option, short = 'c', long = "config")]
    config: String,

    /// package name to evaluate
    #[argh(option, short = 'p', long = "package")]
    package: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli: Cli = argh::from_env();
    match cli.command {
        Command::Convert(args) => convert::run(&args.input, &args.output),
        Command::Show(args) => simulate::show(&args.config),
        Command::Simulate(args) => simulate::run(&args.config, &args.package),
    }
}
