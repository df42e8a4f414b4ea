use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use sparsemat::constants::DEFAULT_INITIAL_CAPACITY;
use sparsemat::{triplet_io, EntryOrder, MatrixConfig, Operation, RemovalPolicy, SparseMatrix};

/// Add, subtract or multiply two sparse matrices stored as (row, col, value) triples.
///
/// Any input not given on the command line is prompted for on stdin.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the first matrix file
    first: Option<PathBuf>,

    /// Path of the second matrix file
    second: Option<PathBuf>,

    /// Operation: 1 = addition, 2 = subtraction, 3 = multiplication
    #[arg(long)]
    op: Option<u8>,

    /// Print result entries sorted by row, then column
    #[arg(long)]
    sorted: bool,

    /// Keep entry order when cells are zeroed (slower removal)
    #[arg(long)]
    stable_removal: bool,

    /// Initial entry capacity of each matrix
    #[arg(long, default_value_t = DEFAULT_INITIAL_CAPACITY)]
    initial_capacity: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = MatrixConfig::default()
        .with_initial_capacity(cli.initial_capacity)
        .with_removal(if cli.stable_removal {
            RemovalPolicy::Stable
        } else {
            RemovalPolicy::SwapRemove
        });

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let first = match cli.first {
        Some(path) => path,
        None => PathBuf::from(prompt(&mut input, "Enter the path of the first matrix file: ")?),
    };
    let a = load(&first, &config)?;

    let second = match cli.second {
        Some(path) => path,
        None => PathBuf::from(prompt(&mut input, "Enter the path of the second matrix file: ")?),
    };
    let b = load(&second, &config)?;

    let op = match cli.op {
        Some(selector) => Operation::from_selector(selector)
            .ok_or_else(|| anyhow!("Invalid choice: {}", selector))?,
        None => {
            let menu = "Choose an operation:\n1. Addition\n2. Subtraction\n3. Multiplication\n";
            parse_selector(&prompt(&mut input, menu)?)?
        }
    };

    let result = op
        .apply(&a, &b)
        .with_context(|| format!("Error in matrix {}", op))?;
    info!("{} produced {} entries", op, result.nnz());

    let order = if cli.sorted {
        EntryOrder::RowMajor
    } else {
        EntryOrder::Storage
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Result:")?;
    for line in result.lines_ordered(order) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

fn load(path: &Path, config: &MatrixConfig) -> Result<SparseMatrix> {
    triplet_io::read_matrix_with_config(path, config.clone())
        .with_context(|| format!("Could not load matrix from {}", path.display()))
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("Unexpected end of input"));
    }
    Ok(line.trim().to_string())
}

fn parse_selector(raw: &str) -> Result<Operation> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(Operation::from_selector)
        .ok_or_else(|| anyhow!("Invalid choice: {:?}", raw.trim()))
}
