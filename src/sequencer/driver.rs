//! Timer-driven runner for the typing sequencer.
//!
//! The driver owns exactly one pending sleep at a time: it computes a
//! delay, sleeps, applies one tick under the state lock, publishes the
//! emission, and only then arms the next delay. `stop()` flips the run
//! flag under that same lock, so a timer already in flight when `stop()`
//! executes wakes, observes the flag, and exits without producing a
//! transition or an emission.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::manager::TypingSequencer;
use super::model::SequencerState;

struct DriverInner {
    sequencer: TypingSequencer,
    running: bool,
    /// Bumped on every start/stop; a tick task exits when its epoch is stale.
    epoch: u64,
    task: Option<JoinHandle<()>>,
}

/// Runs a [`TypingSequencer`] on the tokio timer and publishes every
/// emission through a watch channel.
///
/// `start()` is idempotent and never resets the cycle position; a fresh
/// construction is the only way back to phrase 0. Each display surface
/// should own its own driver — sequencer state is never shared between
/// instances.
pub struct TypingDriver {
    inner: Arc<Mutex<DriverInner>>,
    text_tx: watch::Sender<String>,
}

impl TypingDriver {
    /// Wraps a sequencer in a stopped driver.
    pub fn new(sequencer: TypingSequencer) -> Self {
        let (text_tx, _) = watch::channel(sequencer.current_text());
        Self {
            inner: Arc::new(Mutex::new(DriverInner {
                sequencer,
                running: false,
                epoch: 0,
                task: None,
            })),
            text_tx,
        }
    }

    /// Begins (or resumes) the timer-driven cycle. No-op if already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let mut inner = self.inner.lock().expect("driver state lock poisoned");
        if inner.running {
            return;
        }
        inner.running = true;
        inner.epoch += 1;
        let epoch = inner.epoch;

        let shared = Arc::clone(&self.inner);
        let tx = self.text_tx.clone();
        inner.task = Some(tokio::spawn(async move {
            loop {
                let delay = {
                    let inner = shared.lock().expect("driver state lock poisoned");
                    if !inner.running || inner.epoch != epoch {
                        break;
                    }
                    inner.sequencer.next_delay()
                };

                tokio::time::sleep(delay).await;

                let inner = &mut *shared.lock().expect("driver state lock poisoned");
                if !inner.running || inner.epoch != epoch {
                    break;
                }
                let outcome = inner.sequencer.tick();
                if outcome.emit {
                    // Published under the lock so no emission can be ordered
                    // after a completed stop(). send_replace stores the value
                    // even while no subscriber is attached.
                    tx.send_replace(outcome.text);
                }
            }
        }));
        debug!(epoch, "typing driver started");
    }

    /// Halts the cycle. Safe to call repeatedly; position is retained so a
    /// later `start()` resumes where the sequencer left off.
    pub fn stop(&self) {
        let mut inner = self.inner.lock().expect("driver state lock poisoned");
        if !inner.running {
            return;
        }
        inner.running = false;
        inner.epoch += 1;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
        debug!(epoch = inner.epoch, "typing driver stopped");
    }

    /// Whether the tick task is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.inner
            .lock()
            .expect("driver state lock poisoned")
            .running
    }

    /// Subscribes to emitted text. The receiver always holds the most
    /// recently emitted value.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text_tx.subscribe()
    }

    /// The currently visible text.
    pub fn current_text(&self) -> String {
        self.inner
            .lock()
            .expect("driver state lock poisoned")
            .sequencer
            .current_text()
    }

    /// Snapshot of the underlying sequencer's position.
    pub fn state(&self) -> SequencerState {
        self.inner
            .lock()
            .expect("driver state lock poisoned")
            .sequencer
            .state()
    }
}

impl Drop for TypingDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::sequencer::model::{Mode, TimingConfig};

    fn fast_driver(phrases: &[&str]) -> TypingDriver {
        let config = TimingConfig::new()
            .with_typing_interval_ms(10)
            .with_deleting_interval_ms(5)
            .with_pause_duration_ms(100);
        let sequencer =
            TypingSequencer::with_config(phrases.iter().copied(), config).unwrap();
        TypingDriver::new(sequencer)
    }

    #[tokio::test(start_paused = true)]
    async fn test_types_on_the_typing_interval() {
        let driver = fast_driver(&["Hi"]);
        driver.start();

        // Ticks land at t=10 and t=20.
        tokio::time::sleep(Duration::from_millis(15)).await;
        assert_eq!(driver.current_text(), "H");

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(driver.current_text(), "Hi");
        assert_eq!(driver.state().mode, Mode::Typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_holds_then_pauses_then_deletes() {
        let driver = fast_driver(&["Hi"]);
        driver.start();

        // Pause entry at t=30; the pause timer runs until t=130.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(driver.state().mode, Mode::Pausing);
        assert_eq!(driver.current_text(), "Hi");

        // Deleting ticks at t=135 and t=140.
        tokio::time::sleep(Duration::from_millis(92)).await;
        assert_eq!(driver.current_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_wraps_through_phrase_list() {
        let driver = fast_driver(&["Hi", "Bye"]);
        driver.start();

        // "Hi" cycle: type to t=30, pause to t=130, delete to t=140,
        // wrap at t=145, then "B" lands at t=155.
        tokio::time::sleep(Duration::from_millis(160)).await;
        assert_eq!(driver.state().phrase_index, 1);
        assert_eq!(driver.current_text(), "B");
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let driver = fast_driver(&["Hi"]);
        driver.start();
        driver.start();

        // A duplicate tick task would have typed twice as fast.
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert_eq!(driver.current_text(), "Hi");
        assert_eq!(driver.state().mode, Mode::Typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_suppresses_in_flight_timer() {
        let driver = fast_driver(&["Hi"]);
        let rx = driver.subscribe();
        driver.start();

        tokio::time::sleep(Duration::from_millis(15)).await;
        assert_eq!(driver.current_text(), "H");

        // A sleep armed at t=10 is in flight for t=20. Stopping now must
        // swallow it: no transition, no emission, ever again.
        driver.stop();
        let frozen = driver.state();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(driver.state(), frozen);
        assert_eq!(*rx.borrow(), "H");
        assert!(!driver.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resumes_without_reset() {
        let driver = fast_driver(&["Hi"]);
        driver.start();

        // Run into the pause, then stop mid-hold.
        tokio::time::sleep(Duration::from_millis(50)).await;
        driver.stop();
        assert_eq!(driver.state().mode, Mode::Pausing);

        // Restart: the pause re-arms from here; no reset to phrase 0 chars.
        driver.start();
        tokio::time::sleep(Duration::from_millis(101)).await;
        assert_eq!(driver.state().mode, Mode::Deleting);
        assert_eq!(driver.current_text(), "Hi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_twice_is_harmless() {
        let driver = fast_driver(&["Hi"]);
        driver.stop();
        driver.start();
        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_emissions() {
        let driver = fast_driver(&["Hi"]);
        let mut rx = driver.subscribe();
        assert_eq!(*rx.borrow(), "");

        driver.start();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "H");
    }
}
