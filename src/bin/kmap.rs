//! kmap - terminal front-end for the K-map solver.
//!
//! Thin glue over the library's single solve entry point.

use clap::Parser;
use kmap_solver::{ascii_map, solve_with_capacity, TruthTable, MAX_EXPRESSION_LEN, VARIABLE_NAMES};
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Fast terminal-based Karnaugh map solver", long_about = None)]
#[command(version)]
struct Args {
    /// Truth table: pattern string ("10X1") or minterm list ("0,1,3")
    input: String,

    /// Show a Gray-ordered ASCII map of the input (2-4 variables)
    #[arg(short, long)]
    visualize: bool,

    /// Show solve statistics alongside the expression
    #[arg(short, long)]
    explain: bool,

    /// Capacity of the output expression, in bytes
    #[arg(long, default_value_t = MAX_EXPRESSION_LEN)]
    capacity: usize,
}

fn main() {
    let args = Args::parse();

    if args.visualize {
        match TruthTable::parse(&args.input) {
            Ok(table) => match ascii_map(&table) {
                Some(grid) => println!("{}", grid),
                None => eprintln!(
                    "ASCII visualization not supported for {} variables (>4)",
                    table.num_vars()
                ),
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    let start = Instant::now();
    let expression = match solve_with_capacity(&args.input, args.capacity) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!("Minimal Expression: {}", expression);

    if args.explain {
        // The parse is cheap; redo it for the stats rather than threading
        // the table through the solve call.
        if let Ok(table) = TruthTable::parse(&args.input) {
            let num_vars = usize::from(table.num_vars());
            println!();
            println!("Solution found in {:.3}ms", elapsed.as_secs_f64() * 1000.0);
            println!(
                "Input format: {}",
                if args.input.contains(',') {
                    "Minterm list"
                } else {
                    "Pattern string"
                }
            );
            println!(
                "Variables: {} ({})",
                num_vars,
                &VARIABLE_NAMES[..num_vars]
            );
            println!("Expression type: SOP (Sum of Products)");
        }
    }
}
