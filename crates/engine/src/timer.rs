use tokio::time::{self, Duration, Interval, MissedTickBehavior};

//
// ─── COUNTDOWN EVENTS ──────────────────────────────────────────────────────────
//

/// Event produced by a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One more second of budget is available; carries the seconds left.
    Tick(u32),
    /// The budget is exhausted. Produced exactly once.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Stopped,
    Expired,
}

//
// ─── COUNTDOWN ─────────────────────────────────────────────────────────────────
//

/// Per-question countdown: one tick per second, then a single expiry.
///
/// Each question gets a fresh countdown with a fresh budget; instances are
/// never shared or reused. The first tick is due immediately so the full
/// budget is shown as soon as a question appears.
#[derive(Debug)]
pub struct Countdown {
    interval: Interval,
    remaining: u32,
    state: State,
}

impl Countdown {
    /// Arms a countdown with the given budget in seconds.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        let mut interval = time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            remaining: seconds,
            state: State::Running,
        }
    }

    /// Waits for the next countdown event.
    ///
    /// Yields `Tick` once per second while budget remains, counting down
    /// from the full budget to 1, then `Expired` exactly once. A stopped or
    /// expired countdown yields `None` immediately.
    ///
    /// Cancellation-safe: dropping the returned future before it resolves
    /// leaves the budget untouched, so the countdown can lose a `select!`
    /// race and pick up where it left off.
    pub async fn next(&mut self) -> Option<CountdownEvent> {
        if self.state != State::Running {
            return None;
        }
        self.interval.tick().await;
        if self.remaining == 0 {
            self.state = State::Expired;
            return Some(CountdownEvent::Expired);
        }
        let seconds_left = self.remaining;
        self.remaining -= 1;
        Some(CountdownEvent::Tick(seconds_left))
    }

    /// Runs the countdown to exhaustion, reporting each tick.
    ///
    /// Completes only when the budget expires, which makes it the timeout
    /// side of a `select!` race: being dropped cancels the countdown, and a
    /// stopped countdown never completes.
    pub async fn tick_until_expired<F>(&mut self, mut on_tick: F)
    where
        F: FnMut(u32),
    {
        while let Some(event) = self.next().await {
            match event {
                CountdownEvent::Tick(seconds_left) => on_tick(seconds_left),
                CountdownEvent::Expired => return,
            }
        }
        // A silenced countdown must not resolve as an expiry.
        std::future::pending::<()>().await;
    }

    /// Silences the countdown.
    ///
    /// Safe to call repeatedly; once stopped (or expired) no further events
    /// are produced.
    pub fn stop(&mut self) {
        if self.state == State::Running {
            self.state = State::Stopped;
        }
    }

    /// Seconds of budget not yet consumed by ticks.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns true while the countdown can still produce events.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn ten_second_budget_yields_ten_ticks_then_expiry() {
        let mut countdown = Countdown::new(10);
        let mut ticks = Vec::new();
        let mut expiries = 0;

        while let Some(event) = countdown.next().await {
            match event {
                CountdownEvent::Tick(seconds_left) => ticks.push(seconds_left),
                CountdownEvent::Expired => expiries += 1,
            }
        }

        assert_eq!(ticks, [10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(expiries, 1);
        assert!(!countdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_is_yielded_only_once() {
        let mut countdown = Countdown::new(1);

        assert_eq!(countdown.next().await, Some(CountdownEvent::Tick(1)));
        assert_eq!(countdown.next().await, Some(CountdownEvent::Expired));
        assert_eq!(countdown.next().await, None);
        assert_eq!(countdown.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_budget_expires_on_the_first_poll() {
        let mut countdown = Countdown::new(0);

        assert_eq!(countdown.next().await, Some(CountdownEvent::Expired));
        assert_eq!(countdown.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_silences_all_future_events() {
        let mut countdown = Countdown::new(5);

        assert_eq!(countdown.next().await, Some(CountdownEvent::Tick(5)));
        countdown.stop();
        assert_eq!(countdown.next().await, None);

        countdown.stop();
        assert_eq!(countdown.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn losing_a_race_does_not_consume_budget() {
        let mut countdown = Countdown::new(5);

        // Consume the immediate first tick, then drop a poll mid-wait.
        assert_eq!(countdown.next().await, Some(CountdownEvent::Tick(5)));
        let lost = timeout(Duration::from_millis(1), countdown.next()).await;
        assert!(lost.is_err());

        assert_eq!(countdown.remaining(), 4);
        assert_eq!(countdown.next().await, Some(CountdownEvent::Tick(4)));
    }

    #[tokio::test(start_paused = true)]
    async fn tick_until_expired_reports_every_second() {
        let mut countdown = Countdown::new(3);
        let mut seen = Vec::new();

        countdown
            .tick_until_expired(|seconds_left| seen.push(seconds_left))
            .await;

        assert_eq!(seen, [3, 2, 1]);
        assert!(!countdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_until_expired_never_completes_once_stopped() {
        let mut countdown = Countdown::new(3);
        countdown.stop();

        let outcome = timeout(Duration::from_secs(60), countdown.tick_until_expired(|_| {})).await;

        assert!(outcome.is_err());
    }
}
