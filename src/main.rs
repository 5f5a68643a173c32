//! cueimports - CUE Import Lister CLI
use cueimports::{find_imports, render_template, ScanResult};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{error, Level};

#[derive(Parser)]
#[command(name = "cueimports")]
#[command(version, about = "List the packages imported by the CUE files in the current directory", long_about = None)]
struct Options {
    #[arg(
        long,
        value_name = "PATH",
        help = "Render this template, replacing {{imports}} with the comma-separated import list"
    )]
    template: Option<String>,
}

impl Options {
    /// Template path, treating an empty argument as absent.
    fn template(&self) -> Option<&Path> {
        self.template
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(Path::new)
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn format_listing(imports: &[String]) -> String {
    let mut output = String::from("Detected imports:\n");
    for import in imports {
        output.push_str(&format!("- {}\n", import));
    }
    output
}

fn write_output(content: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()
}

/// Scan `dir` and produce the text to print.
fn run(options: &Options, dir: &Path) -> ScanResult<String> {
    let imports = find_imports(dir)?;
    match options.template() {
        Some(path) => render_template(&imports, path),
        None => Ok(format_listing(&imports)),
    }
}

fn main() {
    let options = Options::parse();
    init_logging();

    let output = match run(&options, Path::new(".")) {
        Ok(output) => output,
        Err(e) => {
            error!(path = %e.path().display(), "{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&output) {
        error!("Failed to write output: {}", e);
        process::exit(1);
    }
}
