//! CLI entry point for dirtree

use std::ffi::OsString;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dirtree::{Config, Request};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `DIRTREE_LOG=debug`.
const LOG_ENV: &str = "DIRTREE_LOG";

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Render a directory tree as a collapsible HTML page")]
#[command(version)]
struct Args {
    /// Directory to render
    // Raw OsString so an empty argument reaches validation as a usage error
    #[arg(value_parser = clap::value_parser!(OsString), allow_hyphen_values = true)]
    path: Option<OsString>,

    /// HTML file to write [default: directory_structure.html]
    #[arg(short, long, value_name = "FILE", overrides_with = "output")]
    output: Option<PathBuf>,
}

/// Decide on color for a stream, honouring NO_COLOR and TERM=dumb.
fn color_choice(is_terminal: bool) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return ColorChoice::Never;
    }
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Print `dirtree: <message>` to stderr with a red prefix.
fn report_error(message: &str) {
    let mut stderr = StandardStream::stderr(color_choice(std::io::stderr().is_terminal()));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "dirtree:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

fn print_usage() {
    eprintln!("{}", Args::command().render_usage());
}

fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                process::exit(0);
            }
            _ => {
                // Rendered clap errors already carry a usage line
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    let request = Request {
        path: args.path.map(PathBuf::from),
        output: args.output,
    };

    match dirtree::run(&request, &Config::default()) {
        Ok(report) => {
            let mut stdout =
                StandardStream::stdout(color_choice(std::io::stdout().is_terminal()));
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
            let _ = write!(stdout, "HTML file generated:");
            let _ = stdout.reset();
            let _ = writeln!(stdout, " {}", report.output.display());
        }
        Err(e) => {
            report_error(&e.to_string());
            if e.wants_usage() {
                print_usage();
            }
            process::exit(e.exit_code());
        }
    }
}
