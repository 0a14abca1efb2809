//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// License : MIT
//
// Command-line interface

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use passforge::PasswordKind;
use passforge::commands;

#[derive(Debug, Parser)]
#[command(name = "passforge")]
#[command(version)]
#[command(about = "Generate random passwords with an unbiased sampler and rate their strength", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Rate a password policy without generating a password
    Classify(ClassifyArgs),

    /// Show or change the stored defaults
    Config(ConfigArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Password kind (stored default if omitted)
    #[arg(short, long, value_enum)]
    kind: Option<PasswordKind>,

    /// Password length in characters (stored default if omitted)
    #[arg(short, long)]
    length: Option<usize>,

    /// Also write the password and its strength summary to a text file
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("alphabet").required(true)))]
struct ClassifyArgs {
    /// Password kind whose alphabet to rate
    #[arg(short, long, value_enum, group = "alphabet")]
    kind: Option<PasswordKind>,

    /// Rate a raw alphabet size instead of a kind
    #[arg(short = 'n', long, group = "alphabet", value_parser = clap::value_parser!(u16).range(1..=256))]
    alphabet_size: Option<u16>,

    /// Password length in characters
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    length: u32,
}

#[derive(Debug, Parser)]
struct ConfigArgs {
    /// Store a new default password kind
    #[arg(short, long, value_enum)]
    kind: Option<PasswordKind>,

    /// Store a new default password length
    #[arg(short, long)]
    length: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse() {
        Cli::Gen(args) => commands::generate::run(args.kind, args.length, args.out.as_deref()),
        Cli::Classify(args) => commands::classify::run(
            args.kind,
            args.alphabet_size.map(usize::from),
            args.length as usize,
        ),
        Cli::Config(args) => commands::config::run(args.kind, args.length),
    }
}
