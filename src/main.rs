// bitscope: terminal bit-level inspector for numeric representations

mod inspect;
mod parse;
mod pattern;
mod report;
mod ui;

use std::io;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use parse::Subject;
use pattern::Width;
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [options] <literal>", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --report         print plain-text reports instead of opening the TUI");
    eprintln!("  --demo <name>    run a canned demonstration (see --list)");
    eprintln!("  --extend <bits>  sign-extension target width (8, 16, 32, or 64)");
    eprintln!("  --list           list the canned demonstrations");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 6.5f32              # IEEE-754 decomposition in the TUI", program_name);
    eprintln!("  {} --report -- -10i8   # sign-extension contrast as plain text", program_name);
    eprintln!("  {} --demo byte-swap    # the classic 0x1A2B3C4D swap", program_name);
}

struct Options {
    plain_report: bool,
    subject: Option<Subject>,
    extend_target: Option<Width>,
}

/// Parse command-line arguments into options, or exit with usage.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut plain_report = false;
    let mut subject = None;
    let mut extend_target = None;
    let mut demo_name: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--report" => plain_report = true,
            "--list" => {
                println!("Available demonstrations:");
                for demo in report::demos() {
                    println!("  {:<16} {}", demo.name, demo.description);
                }
                std::process::exit(0);
            }
            "--demo" => {
                i += 1;
                let name = args
                    .get(i)
                    .ok_or_else(|| "--demo requires a name".to_string())?;
                demo_name = Some(name.clone());
            }
            "--extend" => {
                i += 1;
                let bits = args
                    .get(i)
                    .ok_or_else(|| "--extend requires a bit count".to_string())?;
                let bits: u32 = bits
                    .parse()
                    .map_err(|_| format!("Invalid bit count '{}'", bits))?;
                extend_target = Some(Width::from_bits(bits).map_err(|e| e.to_string())?);
            }
            "--" => {
                // everything after -- is a literal (allows negative numbers)
                i += 1;
                if let Some(literal) = args.get(i) {
                    subject = Some(parse::parse_literal(literal).map_err(|e| e.to_string())?);
                }
            }
            literal => {
                subject = Some(parse::parse_literal(literal).map_err(|e| e.to_string())?);
            }
        }
        i += 1;
    }

    if let Some(name) = demo_name {
        let registry = report::demo_registry();
        let demo = registry
            .get(name.as_str())
            .ok_or_else(|| format!("Unknown demo '{}' (try --list)", name))?;
        subject = Some(demo.subject);
        if extend_target.is_none() {
            extend_target = demo.extend_target;
        }
    }

    Ok(Options {
        plain_report,
        subject,
        extend_target,
    })
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("bitscope")
        .to_string();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(&program_name);
            return ExitCode::FAILURE;
        }
    };

    let Some(subject) = options.subject else {
        eprintln!("Error: No input value provided");
        eprintln!();
        print_usage(&program_name);
        return ExitCode::FAILURE;
    };

    let reports = report::build_reports(&subject, options.extend_target);

    if options.plain_report {
        for (i, r) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("--- {} ---", r.title);
            for line in &r.lines {
                println!("{}", line);
            }
        }
        return ExitCode::SUCCESS;
    }

    if let Err(e) = run_tui(subject, reports) {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Set up the terminal, run the app, and restore the terminal.
fn run_tui(subject: Subject, reports: Vec<report::Report>) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(subject, reports);
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
