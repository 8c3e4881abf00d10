//! One-shot task scheduling with handles that cancel on drop.
//!
//! UI code that owns a timer keeps the handle and lets it go when the timer
//! is no longer wanted (dismissal, unmount). Nothing here is `Send`: every
//! callback runs on the browser event loop.

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Dropping the handle before the task ran cancels it.
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub mod manual {
    use super::{Scheduler, Task};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Pending {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        seq: u64,
        pending: Vec<Pending>,
    }

    /// Virtual clock. Tasks only run inside `advance`.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .pending
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                // Pop the earliest due task without holding the borrow while it runs.
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let earliest = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    earliest.map(|i| {
                        let p = clock.pending.remove(i);
                        clock.now = p.due;
                        p
                    })
                };
                match next {
                    Some(p) if !p.cancelled.get() => (p.task)(),
                    Some(_) => {}
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Task) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let cancelled = Rc::new(Cell::new(false));
            clock.seq += 1;
            let due = clock.now + u64::from(delay_ms);
            let seq = clock.seq;
            clock.pending.push(Pending {
                due,
                seq,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn tasks_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (label, delay) in [("slow", 300), ("fast", 100), ("mid", 200)] {
            let fired = fired.clone();
            handles.push(scheduler.schedule(delay, Box::new(move || fired.borrow_mut().push(label))));
        }

        scheduler.advance(150);
        assert_eq!(*fired.borrow(), vec!["fast"]);
        scheduler.advance(200);
        assert_eq!(*fired.borrow(), vec!["fast", "mid", "slow"]);
    }

    #[test]
    fn dropped_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        let handle = scheduler.schedule(50, Box::new(move || *flag.borrow_mut() = true));
        assert_eq!(scheduler.pending(), 1);

        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(100);
        assert!(!*fired.borrow());
    }
}
