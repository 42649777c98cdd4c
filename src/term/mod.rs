extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Terminal};
use stackvm::lang::Error;
use stackvm::mach::{Event, Listing, Runtime};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "stackvm", version, about = "Run a stack machine program.")]
struct Args {
    /// Program file, one instruction per line. Without it the
    /// program is typed in at the terminal.
    file: Option<PathBuf>,

    /// Save the program to this file before running it.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Instructions executed between checks for CTRL-C.
    #[arg(long, env = "STACKVM_CYCLES", default_value = "5000")]
    cycles: usize,
}

pub fn main() {
    setup_logger();
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(args, interrupted) {
        eprintln!("{}", error);
    }
}

/// Set `RUST_LOG` to `debug` or `trace` to follow execution.
fn setup_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
        .init();
}

fn main_loop(args: Args, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("stackvm")?;
    interface.set_report_signal(linefeed::Signal::Interrupt, true);

    let listing = match &args.file {
        Some(path) => match Listing::load(path) {
            Ok(listing) => listing,
            Err(error) => return print_error(&interface, &error),
        },
        None => match enter(&interface)? {
            Some(listing) => listing,
            None => return interface.write_fmt(format_args!("^C\n")),
        },
    };

    if let Some(path) = &args.save {
        save(&interface, &listing, path)?;
    } else if args.file.is_none()
        && ask(&interface, "Save program to file (yes/no)? ")?.eq_ignore_ascii_case("yes")
    {
        let filename = ask(&interface, "Enter filename: ")?;
        save(&interface, &listing, Path::new(&filename))?;
    }

    let mut runtime = Runtime::new(&listing);
    loop {
        if interrupted.load(Ordering::SeqCst) {
            interface.write_fmt(format_args!("^C\n"))?;
            break;
        }
        match runtime.execute(args.cycles) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => print_error(&interface, &error)?,
        }
    }
    Ok(())
}

/// Reads instructions until a line reading `END` in any case or the
/// end of input. `None` when the user interrupts entry.
fn enter<T: Terminal>(interface: &Interface<T>) -> std::io::Result<Option<Listing>> {
    interface.write_fmt(format_args!(
        "Enter instructions for the VM (type 'END' to finish):\n"
    ))?;
    interface.set_prompt("> ")?;
    let mut listing = Listing::new();
    loop {
        let result = interface.read_line()?;
        if let ReadResult::Input(input) = &result {
            interface.add_history_unique(input.trim().to_string());
        }
        match accept(&mut listing, result) {
            Entry::More => {}
            Entry::Done => return Ok(Some(listing)),
            Entry::Abort => return Ok(None),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Entry {
    More,
    Done,
    Abort,
}

fn accept(listing: &mut Listing, result: ReadResult) -> Entry {
    match result {
        ReadResult::Input(input) => {
            let line = input.trim();
            if line.eq_ignore_ascii_case("END") {
                Entry::Done
            } else {
                listing.push(line);
                Entry::More
            }
        }
        ReadResult::Eof => Entry::Done,
        ReadResult::Signal(_) => Entry::Abort,
    }
}

fn ask<T: Terminal>(interface: &Interface<T>, prompt: &str) -> std::io::Result<String> {
    interface.set_prompt(prompt)?;
    Ok(match interface.read_line()? {
        ReadResult::Input(input) => input.trim().to_string(),
        ReadResult::Signal(_) | ReadResult::Eof => String::new(),
    })
}

fn save<T: Terminal>(
    interface: &Interface<T>,
    listing: &Listing,
    filename: &Path,
) -> std::io::Result<()> {
    match listing.save(filename) {
        Ok(()) => {
            interface.write_fmt(format_args!("Program saved to {}\n", filename.display()))
        }
        Err(error) => print_error(interface, &error),
    }
}

fn print_error<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linefeed::Signal;

    fn input(s: &str) -> ReadResult {
        ReadResult::Input(s.to_string())
    }

    #[test]
    fn test_entry_until_end() {
        let mut listing = Listing::new();
        assert_eq!(accept(&mut listing, input("  PUSH 1 ")), Entry::More);
        assert_eq!(accept(&mut listing, input("PRINT")), Entry::More);
        assert_eq!(accept(&mut listing, input("end")), Entry::Done);
        assert_eq!(listing.lines().collect::<Vec<_>>(), ["PUSH 1", "PRINT"]);
    }

    #[test]
    fn test_entry_eof_finishes() {
        let mut listing = Listing::new();
        assert_eq!(accept(&mut listing, input("PUSH 1")), Entry::More);
        assert_eq!(accept(&mut listing, ReadResult::Eof), Entry::Done);
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn test_entry_interrupt_aborts() {
        let mut listing = Listing::new();
        assert_eq!(accept(&mut listing, input("PUSH 1")), Entry::More);
        let result = ReadResult::Signal(Signal::Interrupt);
        assert_eq!(accept(&mut listing, result), Entry::Abort);
    }
}
