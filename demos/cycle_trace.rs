//! Prints the tick-by-tick transition trace for a phrase list, without
//! timers: each line shows the mode, the visible text, and the delay the
//! sequencer asks for before the next tick.
//!
//! Run with: cargo run --example cycle_trace

use typecycle::{TimingConfig, TypingSequencer};

fn main() {
    let config = TimingConfig::new()
        .with_typing_interval_ms(10)
        .with_deleting_interval_ms(5)
        .with_pause_duration_ms(100);
    let mut seq =
        TypingSequencer::with_config(["Hi", "Bye"], config).expect("valid demo config");

    // Two full passes over the list, plus one tick into the third.
    let ticks: usize = 2 * (2 * 2 + 3 + 2 * 3 + 3) + 1;

    println!("{:<4} {:>8} {:>12} {:>6}  text", "tick", "mode", "next_delay", "emit");
    for i in 1..=ticks {
        let mode = seq.mode();
        let out = seq.tick();
        println!(
            "{:<4} {:>8} {:>9} ms {:>6}  {:?}",
            i,
            format!("{mode:?}"),
            out.next_delay_ms(),
            out.emit,
            out.text,
        );
    }
}
