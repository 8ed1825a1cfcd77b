use clap::Parser;
use pathrex::cli::Cli;
use pathrex::error::Error;
use pathrex::input::read_paths;
use pathrex::output::Output;
use pathrex::runner::{all_matched, match_paths};
use pathrex::{compile_matcher, CaseSensitivity};

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();

    let sensitivity = if cli.ignore_case {
        CaseSensitivity::Insensitive
    } else {
        CaseSensitivity::Sensitive
    };

    let matcher = compile_matcher(&cli.template, sensitivity)
        .map_err(Error::from)
        .unwrap_or_else(|e| fail(&e));

    let mut paths = cli.paths.clone();
    if let Some(file) = &cli.file {
        paths.extend(read_paths(file).unwrap_or_else(|e| fail(&e)));
    }

    let use_color = !cli.no_color && !cli.json && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    if cli.show_regex {
        output.print_regex(&matcher)?;
    }

    if paths.is_empty() {
        if cli.show_regex {
            return Ok(());
        }
        eprintln!("No paths given");
        std::process::exit(2);
    }

    let outcomes = match_paths(&matcher, &paths, cli.sequential);

    for outcome in &outcomes {
        if cli.json {
            output.print_json(outcome)?;
        } else {
            output.print_outcome(outcome)?;
        }
    }
    if !cli.json && outcomes.len() > 1 {
        output.print_summary(&outcomes)?;
    }
    output.flush()?;

    std::process::exit(if all_matched(&outcomes) { 0 } else { 1 });
}

/// Reports a setup error with its causes and exits with status 2.
fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
    std::process::exit(2);
}
