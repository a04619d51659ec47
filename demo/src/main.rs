use std::fmt::Debug;

use clap::{Parser, ValueEnum};
use csr_matrix::{CsrMatrix, MatrixResult};
use tracing::{error, info, info_span};
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

mod samples;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Compress the sample matrices and print them.
    Construct,
    /// Add two compatible matrices.
    Add,
    /// Transpose a sparse and a dense matrix.
    Transpose,
    /// Multiply two compatible matrices.
    Multiply,
    /// Show the shape errors raised by incompatible operands.
    Mismatch,
    /// Everything above, in order.
    All,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Which demonstration to run.
    #[arg(short, long, ignore_case = true, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,
}

fn main() -> Result<(), impl Debug> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();

    let result = match args.scenario {
        Scenario::Construct => construct(),
        Scenario::Add => add(),
        Scenario::Transpose => transpose(),
        Scenario::Multiply => multiply(),
        Scenario::Mismatch => mismatch(),
        Scenario::All => construct()
            .and_then(|()| add())
            .and_then(|()| transpose())
            .and_then(|()| multiply())
            .and_then(|()| mismatch()),
    };
    if let Err(err) = &result {
        error!(%err, "demo failed");
    }
    result
}

fn construct() -> MatrixResult<()> {
    let _span = info_span!("construct").entered();
    println!("{}", CsrMatrix::from_dense(&samples::DIAGONAL_ISH)?);
    println!("{}", CsrMatrix::from_dense(&samples::WIDE)?);
    Ok(())
}

fn add() -> MatrixResult<()> {
    let _span = info_span!("add").entered();
    let lhs = CsrMatrix::from_dense(&samples::LHS)?;
    let rhs = CsrMatrix::from_dense(&samples::RHS)?;
    println!("{lhs}");
    println!("{rhs}");
    println!("{}", lhs.add(&rhs)?);
    Ok(())
}

fn transpose() -> MatrixResult<()> {
    let _span = info_span!("transpose").entered();
    let rhs = CsrMatrix::from_dense(&samples::RHS)?;
    println!("{}", rhs.transpose());
    let tall = CsrMatrix::from_dense(&samples::DENSE_TALL)?;
    let t = tall.transpose();
    info!(
        declared_rows = t.row_count(),
        declared_cols = t.column_count(),
        "transposed dense sample"
    );
    println!("{t}");
    Ok(())
}

fn multiply() -> MatrixResult<()> {
    let _span = info_span!("multiply").entered();
    let lhs = CsrMatrix::from_dense(&samples::LHS)?;
    let rhs = CsrMatrix::from_dense(&samples::RHS)?;
    println!("{}", lhs.multiply(&rhs)?);
    Ok(())
}

fn mismatch() -> MatrixResult<()> {
    let _span = info_span!("mismatch").entered();
    let square = CsrMatrix::from_dense(&samples::DIAGONAL_ISH)?;
    let wide = CsrMatrix::from_dense(&samples::WIDE)?;
    let short = CsrMatrix::from_dense(&samples::WIDE[..3])?;

    let outcomes: [(&str, MatrixResult<CsrMatrix<i32>>); 3] = [
        ("4x4 + 3x6", square.add(&short)),
        ("4x4 + 4x6", square.add(&wide)),
        ("4x4 * 3x6", square.multiply(&short)),
    ];
    for (label, outcome) in outcomes {
        match outcome {
            Ok(m) => println!("{label}:\n{m}"),
            Err(err) => println!("{label}: {err}"),
        }
    }
    println!();
    Ok(())
}
