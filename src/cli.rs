// src/cli.rs
//! Headless variant of the button: one fetch-and-save, dialogs on stderr.

use color_eyre::eyre::{eyre, Result};

use crate::{
    browser::ChromeSource,
    config::options::AppOptions,
    notify::StderrNotifier,
    progress::Progress,
    scrape,
};

pub const USAGE: &str = "\
Usage: cli [-h | --help]

Fetches the current Embu das Artes forecast once and appends it to
the spreadsheet in the documents folder. Takes no other arguments.";

/// Prints stages to stderr as `[n/total] message`.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, msg);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Fetch,
    Help,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut cmd = Command::Fetch;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => cmd = Command::Help,
            _ => return Err(eyre!("Unknown arg: {a}\n\n{USAGE}")),
        }
    }
    Ok(cmd)
}

pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    if parse_args(args)? == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let opts = AppOptions::default();
    let mut prog = CliProgress::default();
    let mut rng = rand::rng();

    let report = scrape::fetch_and_save(&opts, &ChromeSource, &StderrNotifier, &mut rng, &mut prog)
        .map_err(|e| eyre!("Could not save {}: {e}", opts.sheet.out_path().display()))?;

    let r = &report.reading;
    println!(
        "{}\t{}\t{}\t{}\t{}",
        r.timestamp(),
        r.temperature(),
        r.humidity(),
        r.city(),
        if report.outcome.is_simulated() { "simulated" } else { "live" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_fetches() {
        assert_eq!(parse_args(Vec::<String>::new()).unwrap(), Command::Fetch);
    }

    #[test]
    fn help_flag() {
        assert_eq!(parse_args(vec![s!("--help")]).unwrap(), Command::Help);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse_args(vec![s!("--out")]).unwrap_err();
        assert!(err.to_string().contains("Unknown arg: --out"));
    }
}
