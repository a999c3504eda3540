//! Cosmetic placeholder animation for the search input.
//!
//! A fixed list of hint words is typed out one character at a time, held,
//! erased, then cycled to the next word forever. The animation is an explicit
//! state machine advanced by `tick`; `CyclerHandle` drives it on a background
//! thread with a cancellable wait so teardown can never leave a live timer
//! behind.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, RwLock};
use std::thread::JoinHandle;
use std::time::Duration;

/// Hint words shown by the listing view's search box.
pub const HINT_WORDS: [&str; 3] = ["File Title", "First Name", "Last Name"];

/// Delay between typed or erased characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(150);
/// Hold time after a word is fully typed.
pub const PAUSE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAfterType,
    Erasing,
    AdvanceWord,
}

/// What to display after a tick, and how long to wait before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug)]
pub struct PlaceholderCycler {
    words: Vec<String>,
    word: usize,
    shown: usize,
    phase: Phase,
    type_delay: Duration,
    pause_delay: Duration,
}

impl Default for PlaceholderCycler {
    fn default() -> Self {
        Self::new(HINT_WORDS.iter().map(ToString::to_string).collect())
    }
}

impl PlaceholderCycler {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self::with_delays(words, TYPE_DELAY, PAUSE_DELAY)
    }

    /// Same machine with custom delays; the short-delay variant keeps the
    /// thread-handle tests fast.
    #[must_use]
    pub fn with_delays(words: Vec<String>, type_delay: Duration, pause_delay: Duration) -> Self {
        let mut words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        if words.is_empty() {
            words = HINT_WORDS.iter().map(ToString::to_string).collect();
        }
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            type_delay,
            pause_delay,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances the machine by one step.
    pub fn tick(&mut self) -> Frame {
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown == self.word_len() {
                    self.phase = Phase::PausedAfterType;
                    return self.frame(self.pause_delay);
                }
                self.frame(self.type_delay)
            }
            Phase::PausedAfterType | Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                self.phase = if self.shown == 0 {
                    Phase::AdvanceWord
                } else {
                    Phase::Erasing
                };
                self.frame(self.type_delay)
            }
            Phase::AdvanceWord => {
                self.word = (self.word + 1) % self.words.len();
                self.shown = 1;
                if self.shown == self.word_len() {
                    self.phase = Phase::PausedAfterType;
                    return self.frame(self.pause_delay);
                }
                self.phase = Phase::Typing;
                self.frame(self.type_delay)
            }
        }
    }

    fn word_len(&self) -> usize {
        self.words[self.word].chars().count()
    }

    fn frame(&self, delay: Duration) -> Frame {
        Frame {
            text: self.words[self.word].chars().take(self.shown).collect(),
            delay,
        }
    }
}

/// Owns the animation thread. The loop waits on a channel with a timeout, so
/// `stop` (or dropping the handle) wakes it immediately and joins it; no
/// callback can fire after teardown.
#[derive(Debug)]
pub struct CyclerHandle {
    text: Arc<RwLock<String>>,
    stop_tx: mpsc::Sender<()>,
    join: Option<JoinHandle<()>>,
}

impl CyclerHandle {
    #[must_use]
    pub fn spawn() -> Self {
        Self::spawn_cycler(PlaceholderCycler::default())
    }

    #[must_use]
    pub fn spawn_cycler(mut cycler: PlaceholderCycler) -> Self {
        let text = Arc::new(RwLock::new(String::new()));
        let shared = Arc::clone(&text);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let join = std::thread::spawn(move || {
            let mut delay = cycler.type_delay;
            loop {
                match stop_rx.recv_timeout(delay) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        let frame = cycler.tick();
                        if let Ok(mut current) = shared.write() {
                            *current = frame.text;
                        }
                        delay = frame.delay;
                    }
                }
            }
        });

        Self {
            text,
            stop_tx,
            join: Some(join),
        }
    }

    /// Current placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> String {
        self.text
            .read()
            .map(|current| current.clone())
            .unwrap_or_default()
    }

    /// Stops the animation and waits for the thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for CyclerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
