//! A single-slot background narrator for advice
//!
//! Starting a new narration cancels the one in flight; nothing is ever
//! queued and the caller never waits for a narration to finish.

use log::info;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Something that can read text aloud
///
/// Implementations should check `cancelled` regularly and return early
/// once it is set.
pub trait Speak: Send + Sync + 'static {
    fn speak(&self, text: &str, cancelled: &AtomicBool);
}

struct Job {
    cancelled: Arc<AtomicBool>,
    // detached on replacement, the job winds down on its own
    _handle: JoinHandle<()>,
}

pub struct Narrator {
    speaker: Arc<dyn Speak>,
    current: Option<Job>,
    last_spoken: Option<String>,
}

impl Narrator {
    pub fn new<S: Speak>(speaker: S) -> Self {
        Self {
            speaker: Arc::new(speaker),
            current: None,
            last_spoken: None,
        }
    }

    /// Cancels any narration in flight and starts narrating `text`
    pub fn say<T: Into<String>>(&mut self, text: T) {
        self.stop();

        let text = text.into();
        let cancelled = Arc::new(AtomicBool::new(false));
        let speaker = self.speaker.clone();
        let flag = cancelled.clone();
        let spoken = text.clone();
        let handle = thread::spawn(move || speaker.speak(&spoken, &flag));

        self.last_spoken = Some(text);
        self.current = Some(Job {
            cancelled,
            _handle: handle,
        });
    }

    /// Narrates `text` unless it is what was narrated last
    ///
    /// Returns whether a narration was started.
    pub fn say_if_changed<T: Into<String>>(&mut self, text: T) -> bool {
        let text = text.into();
        if self.last_spoken.as_deref() == Some(text.as_str()) {
            return false;
        }
        self.say(text);
        true
    }

    /// Cancels the narration in flight, if any
    pub fn stop(&mut self) {
        if let Some(job) = self.current.take() {
            job.cancelled.store(true, Ordering::Relaxed);
        }
    }
}

impl Drop for Narrator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Narrates into the log, one sentence at a time at a reading pace
pub struct LogSpeaker {
    word_delay: Duration,
}

impl LogSpeaker {
    pub fn new(word_delay: Duration) -> Self {
        Self { word_delay }
    }
}

impl Default for LogSpeaker {
    fn default() -> Self {
        // roughly 150 words per minute
        Self::new(Duration::from_millis(400))
    }
}

impl Speak for LogSpeaker {
    fn speak(&self, text: &str, cancelled: &AtomicBool) {
        for sentence in text.split_inclusive(|c: char| c == '.' || c == '!' || c == '?') {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            if cancelled.load(Ordering::Relaxed) {
                return;
            }
            info!("narrator: {}", sentence);
            for _ in sentence.split_whitespace() {
                if cancelled.load(Ordering::Relaxed) {
                    return;
                }
                thread::sleep(self.word_delay);
            }
        }
    }
}
