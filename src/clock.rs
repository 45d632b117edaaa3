//! Scheduled callbacks driving the quiz: a repeating countdown tick and the
//! one-shot delay between a timeout and the next question.

use crate::logger;
use std::fmt;
use std::future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior, Sleep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Tick,
    /// The auto-advance armed for this question index is due.
    AutoAdvance(usize),
}

struct PendingAdvance {
    question_index: usize,
    sleep: Pin<Box<Sleep>>,
}

pub struct QuizClock {
    ticker: Option<Interval>,
    pending_advance: Option<PendingAdvance>,
}

impl fmt::Debug for QuizClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizClock")
            .field("ticking", &self.is_ticking())
            .field("pending_advance", &self.pending_advance())
            .finish()
    }
}

impl QuizClock {
    /// Starts ticking every `period`, first tick one period from now.
    pub fn start(period: Duration) -> Self {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            ticker: Some(ticker),
            pending_advance: None,
        }
    }

    /// Re-phases the ticker so the next tick is a full period away.
    pub fn restart_tick(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.reset();
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn pending_advance(&self) -> Option<usize> {
        self.pending_advance.as_ref().map(|p| p.question_index)
    }

    /// Arms the one-shot auto-advance, replacing any pending one.
    pub fn schedule_advance(&mut self, question_index: usize, delay: Duration) {
        logger::log(&format!(
            "Auto-advance for question {} in {:?}",
            question_index + 1,
            delay
        ));
        self.pending_advance = Some(PendingAdvance {
            question_index,
            sleep: Box::pin(time::sleep(delay)),
        });
    }

    pub fn cancel_advance(&mut self) {
        if let Some(pending) = self.pending_advance.take() {
            logger::log(&format!(
                "Cancelled auto-advance for question {}",
                pending.question_index + 1
            ));
        }
    }

    /// Stops everything; `next_event` never resolves afterwards.
    pub fn stop(&mut self) {
        self.ticker = None;
        self.pending_advance = None;
    }

    pub async fn next_event(&mut self) -> ClockEvent {
        let event = tokio::select! {
            () = wait_tick(self.ticker.as_mut()) => ClockEvent::Tick,
            index = wait_advance(self.pending_advance.as_mut()) => ClockEvent::AutoAdvance(index),
        };
        if let ClockEvent::AutoAdvance(_) = event {
            self.pending_advance = None;
        }
        event
    }
}

async fn wait_tick(ticker: Option<&mut Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => future::pending().await,
    }
}

async fn wait_advance(pending: Option<&mut PendingAdvance>) -> usize {
    match pending {
        Some(pending) => {
            pending.sleep.as_mut().await;
            pending.question_index
        }
        None => future::pending().await,
    }
}
