//! Terminal demo for the typing sequencer.
//!
//! Rewrites one line with a trailing caret on every emission, the way the
//! original display surface renders. Runs until Ctrl-C.
//!
//! Run with: cargo run --features cli -- "First phrase" "Second phrase"

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use typecycle::{TimingConfig, TypingDriver, TypingSequencer};

/// Phrases shown when none are given on the command line.
const DEMO_PHRASES: [&str; 4] = [
    "All Mobile Services & Bill Payments",
    "Instant Money Transfer & Recharges",
    "Premium Mobile Accessories",
    "Trusted Local Mobile Repair",
];

#[derive(Parser, Debug)]
#[command(name = "typecycle", about = "Animate a phrase list as typewriter text")]
struct Args {
    /// Phrases to cycle through (falls back to a built-in demo set)
    phrases: Vec<String>,

    /// Delay between typed characters, in milliseconds
    #[arg(long, default_value_t = 60)]
    typing_ms: i64,

    /// Delay between deleted characters, in milliseconds
    #[arg(long, default_value_t = 30)]
    deleting_ms: i64,

    /// Hold duration once a phrase is fully typed, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pause_ms: i64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let phrases = if args.phrases.is_empty() {
        DEMO_PHRASES.iter().map(|s| s.to_string()).collect()
    } else {
        args.phrases
    };

    let config = TimingConfig::new()
        .with_typing_interval_ms(args.typing_ms)
        .with_deleting_interval_ms(args.deleting_ms)
        .with_pause_duration_ms(args.pause_ms);
    let sequencer = TypingSequencer::with_config(phrases, config)?;

    let driver = TypingDriver::new(sequencer);
    let mut rx = driver.subscribe();
    driver.start();

    let mut stdout = io::stdout();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let text = rx.borrow_and_update().clone();
                // \x1b[K clears the rest of the line after a deletion.
                write!(stdout, "\r\x1b[K{text}|")?;
                stdout.flush()?;
            }
        }
    }

    driver.stop();
    writeln!(stdout)?;
    Ok(())
}
