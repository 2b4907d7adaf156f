//! Puts the viewport back at the top after every navigation.
//!
//! Late layout shifts (images, fonts, lazily mounted sections) can push the
//! page down again after the first reset, so the reset is repeated at two
//! fixed delays. This is a best-effort correction, not a guarantee: content
//! that settles after the last attempt can still leave the page offset.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

pub const SHORT_DELAY_MS: u32 = 100;
pub const LONG_DELAY_MS: u32 = 500;
const RETRY_DELAYS_MS: [u32; 2] = [SHORT_DELAY_MS, LONG_DELAY_MS];

/// Runs a task later. Dropping the returned handle must cancel the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Scheduled { generation: u64, pending: usize },
}

pub struct ScrollResetController<S: Scheduler> {
    scheduler: S,
    scroll: Rc<dyn Fn()>,
    generation: Rc<Cell<u64>>,
    pending: Rc<Cell<usize>>,
    handles: Vec<S::Handle>,
}

impl<S: Scheduler> ScrollResetController<S> {
    pub fn new(scheduler: S, scroll: Rc<dyn Fn()>) -> Self {
        ScrollResetController {
            scheduler,
            scroll,
            generation: Rc::new(Cell::new(0)),
            pending: Rc::new(Cell::new(0)),
            handles: Vec::new(),
        }
    }

    /// Supersedes whatever the previous navigation scheduled, resets now and
    /// queues the delayed attempts. Returns the new generation.
    pub fn navigate(&mut self) -> u64 {
        self.cancel();
        let generation = self.generation.get();

        (self.scroll)();

        for delay in RETRY_DELAYS_MS {
            let current = self.generation.clone();
            let pending = self.pending.clone();
            let scroll = self.scroll.clone();
            let handle = self.scheduler.schedule(
                delay,
                Box::new(move || {
                    // a handle that outlived its navigation must not act
                    if current.get() != generation {
                        return;
                    }
                    pending.set(pending.get().saturating_sub(1));
                    scroll();
                }),
            );
            self.handles.push(handle);
        }
        self.pending.set(RETRY_DELAYS_MS.len());

        generation
    }

    pub fn cancel(&mut self) {
        self.generation.set(self.generation.get() + 1);
        self.pending.set(0);
        self.handles.clear();
    }

    pub fn phase(&self) -> Phase {
        match self.pending.get() {
            0 => Phase::Idle,
            pending => Phase::Scheduled {
                generation: self.generation.get(),
                pending,
            },
        }
    }
}

impl<S: Scheduler> Drop for ScrollResetController<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn scroll_to_origin() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// One controller per mounted layout; a change of path or query is a new
/// navigation. Unmounting cancels whatever is still queued.
#[hook]
pub fn use_scroll_reset() {
    let key = use_location()
        .map(|location| (location.path().to_string(), location.query_str().to_string()))
        .unwrap_or_default();
    let controller = use_mut_ref(|| {
        ScrollResetController::new(TimeoutScheduler, Rc::new(scroll_to_origin))
    });

    use_effect_with_deps(
        move |(path, _query)| {
            let generation = controller.borrow_mut().navigate();
            let phase = controller.borrow().phase();
            log::debug!("Scroll reset #{} for {}: {:?}", generation, path, phase);
            move || controller.borrow_mut().cancel()
        },
        key,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Queue = Rc<RefCell<Vec<(u64, u32, Option<Box<dyn FnOnce()>>)>>>;

    /// Manual clock; tasks run only when `advance` passes their due time.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        now: Rc<Cell<u32>>,
        next_id: Rc<Cell<u64>>,
        queue: Queue,
        cancel_on_drop: bool,
    }

    struct ManualHandle {
        id: u64,
        queue: Queue,
        cancel_on_drop: bool,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if self.cancel_on_drop {
                self.queue.borrow_mut().retain(|(id, _, _)| *id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue
                .borrow_mut()
                .push((id, self.now.get() + delay_ms, Some(task)));
            ManualHandle {
                id,
                queue: self.queue.clone(),
                cancel_on_drop: self.cancel_on_drop,
            }
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u32) {
            let target = self.now.get() + ms;
            loop {
                let due = {
                    let mut queue = self.queue.borrow_mut();
                    queue.sort_by_key(|(_, at, _)| *at);
                    match queue.iter_mut().find(|(_, at, task)| *at <= target && task.is_some()) {
                        Some((_, at, task)) => {
                            self.now.set(*at);
                            task.take()
                        }
                        None => None,
                    }
                };
                match due {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    fn recorder(scheduler: &ManualScheduler) -> (Rc<dyn Fn()>, Rc<RefCell<Vec<u32>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let now = scheduler.now.clone();
        let sink = log.clone();
        (Rc::new(move || sink.borrow_mut().push(now.get())), log)
    }

    #[test]
    fn resets_immediately_then_at_both_delays() {
        let scheduler = ManualScheduler { cancel_on_drop: true, ..Default::default() };
        let (scroll, log) = recorder(&scheduler);
        let mut controller = ScrollResetController::new(scheduler.clone(), scroll);

        controller.navigate();
        assert_eq!(*log.borrow(), vec![0]);
        assert!(matches!(controller.phase(), Phase::Scheduled { pending: 2, .. }));

        scheduler.advance(1_000);
        assert_eq!(*log.borrow(), vec![0, SHORT_DELAY_MS, LONG_DELAY_MS]);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn rapid_second_navigation_cancels_the_first() {
        let scheduler = ManualScheduler { cancel_on_drop: true, ..Default::default() };
        let (scroll, log) = recorder(&scheduler);
        let mut controller = ScrollResetController::new(scheduler.clone(), scroll);

        controller.navigate();
        scheduler.advance(50);
        controller.navigate();
        scheduler.advance(2_000);

        // 0 and 50 are the immediate resets; the rest belong to the second navigation only
        assert_eq!(*log.borrow(), vec![0, 50, 50 + SHORT_DELAY_MS, 50 + LONG_DELAY_MS]);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn stale_tasks_are_no_ops_even_if_the_timer_still_fires() {
        let scheduler = ManualScheduler { cancel_on_drop: false, ..Default::default() };
        let (scroll, log) = recorder(&scheduler);
        let mut controller = ScrollResetController::new(scheduler.clone(), scroll);

        controller.navigate();
        scheduler.advance(150);
        controller.navigate();
        scheduler.advance(2_000);

        assert_eq!(
            *log.borrow(),
            vec![0, SHORT_DELAY_MS, 150, 150 + SHORT_DELAY_MS, 150 + LONG_DELAY_MS]
        );
    }

    #[test]
    fn cancel_and_drop_leave_nothing_behind() {
        let scheduler = ManualScheduler { cancel_on_drop: true, ..Default::default() };
        let (scroll, log) = recorder(&scheduler);

        let mut controller = ScrollResetController::new(scheduler.clone(), scroll.clone());
        controller.navigate();
        controller.cancel();
        assert_eq!(controller.phase(), Phase::Idle);
        scheduler.advance(1_000);
        assert_eq!(log.borrow().len(), 1);

        let mut controller = ScrollResetController::new(scheduler.clone(), scroll);
        controller.navigate();
        drop(controller);
        scheduler.advance(1_000);
        assert_eq!(log.borrow().len(), 2);
        assert!(scheduler.queue.borrow().is_empty());
    }
}
