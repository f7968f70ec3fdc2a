use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::Instant;

type Callback = Box<dyn FnOnce() + Send>;

/// One-shot delayed callbacks tied to the lifetime of their owner.
///
/// Each callback runs at most once, no earlier than its delay, against the
/// state it was scheduled for. Callbacks run one at a time on a single driver
/// task, ordered by deadline and then by scheduling order, so two callbacks
/// with the same delay fire in the order they were scheduled on any runtime
/// flavor.
///
/// Callbacks hold only a weak reference to their state, and dropping the
/// `TimerSet` aborts the driver, so a torn-down component never sees a late
/// update.
pub struct TimerSet {
    runtime: Handle,
    next_seq: u64,
    driver: Option<Driver>,
}

struct Driver {
    queue: mpsc::UnboundedSender<(Instant, u64, Callback)>,
    pending: Arc<AtomicUsize>,
    task: AbortHandle,
}

impl Driver {
    fn spawn(runtime: &Handle) -> Self {
        let (queue, mut incoming) = mpsc::unbounded_channel::<(Instant, u64, Callback)>();
        let pending = Arc::new(AtomicUsize::new(0));
        let remaining = Arc::clone(&pending);

        let task = runtime.spawn(async move {
            let mut due: BTreeMap<(Instant, u64), Callback> = BTreeMap::new();
            loop {
                let next = due.keys().next().map(|(deadline, _)| *deadline);
                tokio::select! {
                    received = incoming.recv() => match received {
                        Some((deadline, seq, callback)) => {
                            due.insert((deadline, seq), callback);
                        }
                        None => break,
                    },
                    _ = sleep_until_or_forever(next) => {
                        let now = Instant::now();
                        while let Some(entry) = due.first_entry() {
                            if entry.key().0 > now {
                                break;
                            }
                            let callback = entry.remove();
                            callback();
                            remaining.fetch_sub(1, Ordering::SeqCst);
                        }
                    }
                }
            }
        });

        Self {
            queue,
            pending,
            task: task.abort_handle(),
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn sleep_until_or_forever(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

impl TimerSet {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_seq: 0,
            driver: None,
        }
    }

    pub fn schedule<S, F>(&mut self, delay: Duration, target: &Arc<Mutex<S>>, callback: F)
    where
        S: Send + 'static,
        F: FnOnce(&mut S) + Send + 'static,
    {
        // The deadline is fixed now, not when the driver first sees the entry.
        let deadline = {
            let _entered = self.runtime.enter();
            Instant::now() + delay
        };
        let target = Arc::downgrade(target);
        let callback: Callback = Box::new(move || {
            let Some(state) = target.upgrade() else {
                return;
            };
            let mut guard = lock(&state);
            callback(&mut *guard);
        });

        let seq = self.next_seq;
        self.next_seq += 1;

        let runtime = &self.runtime;
        let driver = self.driver.get_or_insert_with(|| Driver::spawn(runtime));
        driver.pending.fetch_add(1, Ordering::SeqCst);
        if driver.queue.send((deadline, seq, callback)).is_err() {
            driver.pending.fetch_sub(1, Ordering::SeqCst);
            tracing::warn!("timer driver stopped, callback dropped");
        }
    }

    /// Number of callbacks that have not fired yet.
    pub fn outstanding(&self) -> usize {
        self.driver
            .as_ref()
            .map_or(0, |driver| driver.pending.load(Ordering::SeqCst))
    }

    pub fn cancel_all(&mut self) {
        self.driver = None;
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Lock component state, recovering it if a callback panicked mid-update.
pub(crate) fn lock<S>(state: &Mutex<S>) -> MutexGuard<'_, S> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;

    /// Let the paused clock run forward and give woken tasks a chance to finish.
    pub async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::advance;
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn callback_fires_after_delay() {
        let state = Arc::new(Mutex::new(0u32));
        let mut timers = TimerSet::new(Handle::current());

        timers.schedule(Duration::from_millis(500), &state, |n| *n += 1);
        assert_eq!(timers.outstanding(), 1);

        advance(499).await;
        assert_eq!(*lock(&state), 0);

        advance(1).await;
        assert_eq!(*lock(&state), 1);
        assert_eq!(timers.outstanding(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn same_delay_fires_in_scheduling_order() {
        let order = Arc::new(Mutex::new(Vec::<usize>::new()));
        let mut timers = TimerSet::new(Handle::current());
        for i in 0..5 {
            timers.schedule(Duration::from_millis(100), &order, move |o| o.push(i));
        }

        advance(100).await;
        assert_eq!(*lock(&order), [0, 1, 2, 3, 4]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn same_delay_order_holds_on_worker_threads() {
        for _ in 0..20 {
            let order = Arc::new(Mutex::new(Vec::<usize>::new()));
            let mut timers = TimerSet::new(Handle::current());
            for i in 0..8 {
                timers.schedule(Duration::from_millis(5), &order, move |o| o.push(i));
            }

            while timers.outstanding() > 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            assert_eq!(*lock(&order), (0..8).collect::<Vec<_>>());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn shorter_delay_scheduled_later_fires_first() {
        let order = Arc::new(Mutex::new(Vec::<&'static str>::new()));
        let mut timers = TimerSet::new(Handle::current());
        timers.schedule(Duration::from_millis(300), &order, |o| o.push("slow"));
        timers.schedule(Duration::from_millis(100), &order, |o| o.push("fast"));

        advance(100).await;
        assert_eq!(*lock(&order), ["fast"]);
        advance(200).await;
        assert_eq!(*lock(&order), ["fast", "slow"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_set_cancels_outstanding_callbacks() {
        let state = Arc::new(Mutex::new(false));
        let mut timers = TimerSet::new(Handle::current());
        timers.schedule(Duration::from_millis(100), &state, |fired| *fired = true);

        drop(timers);
        advance(200).await;
        assert!(!*lock(&state));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_target_is_never_touched() {
        let state = Arc::new(Mutex::new(0u32));
        let observer = Arc::downgrade(&state);
        let mut timers = TimerSet::new(Handle::current());
        timers.schedule(Duration::from_millis(100), &state, |n| *n += 1);

        drop(state);
        advance(200).await;
        assert!(observer.upgrade().is_none());
        assert_eq!(timers.outstanding(), 0);
    }
}
