use std::fmt::Display;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};
use num_bigint::BigUint;

use recursive_sequences::decimals::get_sorted_dict_by_decimals;
use recursive_sequences::fibonacci::{
    fibonacci_numbers, get_fibonacci_number, get_fibonacci_sequence,
};
use recursive_sequences::sequences::{self, Rule};
use recursive_sequences::{build_recursive_sequence_generator, SequenceError, SequenceGenerator};

#[derive(Parser)]
#[command(author, about, version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every demonstration in turn
    Demo,
    /// F(index) by naive recursion
    Number { index: u32 },
    /// The first `count` Fibonacci numbers, computed eagerly
    Fibonacci { count: usize },
    Sequence(SequenceArgs),
    /// Sort KEY=VALUE entries by the decimals of their value
    Decimals {
        #[arg(value_parser = parse_entry)]
        entries: Vec<(String, f64)>,
    },
}

/// A named recursive sequence
#[derive(Args)]
struct SequenceArgs {
    #[arg(value_enum)]
    kind: SequenceKind,
    #[arg(allow_negative_numbers = true)]
    count: i64,
}

#[derive(Clone, Copy, ValueEnum)]
enum SequenceKind {
    Fibonacci,
    Lucas,
    Perrin,
    HofstadterQ,
}

impl SequenceKind {
    fn generator(self) -> SequenceGenerator<BigUint, Rule<BigUint>> {
        match self {
            SequenceKind::Fibonacci => sequences::fibonacci(),
            SequenceKind::Lucas => sequences::lucas(),
            SequenceKind::Perrin => sequences::perrin(),
            SequenceKind::HofstadterQ => sequences::hofstadter_q(),
        }
    }
}

fn parse_entry(entry: &str) -> Result<(String, f64), String> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{entry}'"))?;
    let value = value
        .parse::<f64>()
        .map_err(|err| format!("invalid value '{value}': {err}"))?;
    Ok((key.to_string(), value))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command.unwrap_or(Commands::Demo)) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), SequenceError> {
    match command {
        Commands::Demo => demo()?,
        Commands::Number { index } => println!("{}", get_fibonacci_number(index)),
        Commands::Fibonacci { count } => print_list(get_fibonacci_sequence(count)),
        Commands::Sequence(args) => {
            info!("Generating {} values", args.count);
            let generator = args.kind.generator();
            let values = generator
                .try_generate(args.count)?
                .collect::<Result<Vec<_>, _>>()?;
            print_list(values);
        }
        Commands::Decimals { entries } => {
            for (key, value) in get_sorted_dict_by_decimals(entries) {
                println!("{key}: {value}");
            }
        }
    }
    Ok(())
}

fn demo() -> Result<(), SequenceError> {
    print_list((0..3).map(get_fibonacci_number));
    print_list((0..10).map(get_fibonacci_number));
    println!();

    for count in [1, 2, 10] {
        print_list(get_fibonacci_sequence(count));
    }
    println!();

    let spam = vec![(2, 2.1), (3, 3.3), (1, 1.4), (4, 4.2)];
    let eggs = vec![
        ("foo", 42.6942),
        ("bar", 42.9000),
        ("qux", 69.4269),
        ("yeet", 420.1337),
    ];
    print_entries(get_sorted_dict_by_decimals(spam));
    print_entries(get_sorted_dict_by_decimals(eggs));
    println!();

    print_list(fibonacci_numbers(10));
    println!();

    let fibo = build_recursive_sequence_generator(
        [0u64, 1].as_slice(),
        sequences::fibonacci_rule::<u64> as Rule<u64>,
        false,
    );
    print_list(fibo.generate(10)?.collect::<Result<Vec<_>, _>>()?);

    for kind in SequenceKind::value_variants() {
        let name = kind
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        let values = kind
            .generator()
            .generate(10)?
            .collect::<Result<Vec<_>, _>>()?;
        print!("{name} : ");
        print_list(values);
    }

    Ok(())
}

fn print_list<T: Display>(values: impl IntoIterator<Item = T>) {
    let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    println!("[{}]", values.join(", "));
}

fn print_entries<K: Display>(entries: Vec<(K, f64)>) {
    let entries: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    println!("{{{}}}", entries.join(", "));
}
