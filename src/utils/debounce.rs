//! Debounce with an owned, cancellable timer.
//!
//! The timer source is a [`Scheduler`]. In the browser that is
//! [`BrowserScheduler`] on top of `gloo_timers`, tests drive a logical clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Something that can run a task once after a delay.
///
/// Dropping the returned handle must cancel the task if it has not fired.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Collapses bursts of calls into one call carrying the latest arguments.
pub struct Debouncer<A, S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
    armed: Rc<Cell<bool>>,
}

impl<A: 'static, S: Scheduler> Debouncer<A, S> {
    pub fn new<F>(scheduler: S, wait_ms: u32, callback: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            scheduler,
            wait_ms,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self, args: A) {
        // Dropping the previous handle cancels its timer.
        self.pending.borrow_mut().take();

        let callback = Rc::clone(&self.callback);
        let armed = Rc::clone(&self.armed);
        armed.set(true);
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                armed.set(false);
                callback(args);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
        self.armed.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    struct Task {
        id: u64,
        due: u64,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Logical clock; nothing runs until [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Ok(mut clock) = self.clock.try_borrow_mut() {
                clock.tasks.retain(|task| task.id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.tasks.push(Task { id, due, run: task });
            ManualHandle { id, clock: Rc::clone(&self.clock) }
        }
    }

    impl ManualScheduler {
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let ready = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| task.due)
                        .map(|(idx, _)| idx);
                    match ready {
                        Some(idx) => {
                            let task = clock.tasks.remove(idx);
                            clock.now = task.due;
                            Some(task.run)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(run) => run(),
                    None => break,
                }
            }
        }

        pub fn queued(&self) -> usize {
            self.clock.borrow().tasks.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    type Calls = Rc<RefCell<Vec<u32>>>;

    fn recording(scheduler: &ManualScheduler, wait_ms: u32) -> (Debouncer<u32, ManualScheduler>, Calls) {
        let calls = Calls::default();
        let sink = Rc::clone(&calls);
        let debouncer = Debouncer::new(scheduler.clone(), wait_ms, move |value: u32| {
            sink.borrow_mut().push(value)
        });
        (debouncer, calls)
    }

    #[test]
    fn burst_collapses_into_final_call() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler, 200);

        for value in 1..=5 {
            debouncer.call(value);
            scheduler.advance(50);
        }
        assert!(calls.borrow().is_empty());
        assert_eq!(scheduler.queued(), 1);

        scheduler.advance(200);
        assert_eq!(*calls.borrow(), vec![5]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn quiet_gaps_let_each_call_through() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler, 100);

        debouncer.call(1);
        scheduler.advance(150);
        debouncer.call(2);
        scheduler.advance(150);

        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn fires_exactly_at_the_deadline() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler, 200);

        debouncer.call(7);
        scheduler.advance(199);
        assert!(calls.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*calls.borrow(), vec![7]);
    }

    #[test]
    fn cancel_discards_pending_call() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler, 200);

        debouncer.call(9);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        scheduler.advance(500);

        assert!(calls.borrow().is_empty());
        assert_eq!(scheduler.queued(), 0);
    }
}
