#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use arith::{Calculator, Operation};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Arith CLI - Evaluate one arithmetic operation per invocation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Add two numbers
    Add { a: f64, b: f64 },
    /// Subtract the second number from the first
    Subtract { a: f64, b: f64 },
    /// Multiply two numbers
    Multiply { a: f64, b: f64 },
    /// Divide the first number by the second
    Divide { a: f64, b: f64 },
    /// Raise the first number to the power of the second
    Power { base: f64, exponent: f64 },
    /// Take the principal square root of a number
    Sqrt { n: f64 },
    /// Evaluate an operation given by symbol or name
    Eval {
        /// Operation symbol ("+", "-", "*", "/", "^", "sqrt") or name
        operation: String,

        /// Operands, one per argument
        operands: Vec<f64>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let calc = Calculator::new();

    let result = match &cli.command {
        Commands::Add { a, b } => calc.add(*a, *b),
        Commands::Subtract { a, b } => calc.subtract(*a, *b),
        Commands::Multiply { a, b } => calc.multiply(*a, *b),
        Commands::Divide { a, b } => calc.divide(*a, *b)?,
        Commands::Power { base, exponent } => calc.power(*base, *exponent),
        Commands::Sqrt { n } => calc.square_root(*n)?,
        Commands::Eval {
            operation,
            operands,
        } => {
            let operation = Operation::parse(operation)?;
            calc.evaluate(operation, operands)?
        }
    };

    println!("{result}");

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example calc_cli");
    std::process::exit(1);
}
