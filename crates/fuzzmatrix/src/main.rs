//! fuzzmatrix: emit the Go fuzz tests of a module as a CI job matrix
//!
//! Intended for a GitHub Actions step such as:
//!
//! ```yaml
//! - name: Make Fuzz Matrix
//!   id: matrix
//!   run: echo "matrix=$(fuzzmatrix)" >> $GITHUB_OUTPUT
//! ```
//!
//! whose output then feeds `strategy.matrix.include: ${{ fromJSON(...) }}`.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use fuzzmatrix::config::Config;
use fuzzmatrix::pipeline::run_pipeline;
use fuzzmatrix_gotest::render_matrix;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout is reserved for the matrix
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;

    let command = config.list_command();
    debug!(?command, "Resolved test listing command");

    let matrix = run_pipeline(|| command.run())?;
    let rendered = render_matrix(&matrix)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write matrix to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
