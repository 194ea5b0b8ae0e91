//! Scroll-driven animation engine: tweens, scroll triggers, a registry of
//! live handles and the per-section lifecycle guard around it.
//!
//! Nothing in here touches the DOM. Elements are reached through [`Target`]
//! and timers through [`guard::Scheduler`], so the browser glue in
//! `app::motion` is the only place that knows about `web_sys`.

pub mod context;
pub mod ease;
pub mod follower;
pub mod guard;
pub mod progress;
pub mod style;
pub mod trigger;
pub mod tween;

pub use context::{Animation, AnimationContext, HandleId, Registry, Stats, Ticker};
pub use ease::Ease;
pub use guard::{GuardState, Scheduler, ScopedAnimation, SetupError, SetupScope};
pub use style::{Color, StyleFrame};
pub use trigger::{Anchor, Distance, Edge, Scrub, ScrollTrigger, ToggleActions};
pub use tween::{Timeline, Tween};

/// Scroll position and window size, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    /// Full scrollable height of the document.
    pub doc_height: f64,
}

/// Untransformed layout of an element, relative to the top of the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
    pub scroll_width: f64,
}

/// An element animations can write to.
pub trait Target: Clone {
    /// Overlays `frame` onto whatever was applied before.
    fn apply(&self, frame: &StyleFrame);
    fn bounds(&self) -> Bounds;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::{guard::Scheduler, Bounds, StyleFrame, Target};

    #[derive(Debug, Default)]
    struct FakeElement {
        bounds: Bounds,
        style: Option<StyleFrame>,
    }

    /// An in-memory element that records the merged style written to it.
    #[derive(Debug, Clone, Default)]
    pub struct FakeTarget(Rc<RefCell<FakeElement>>);

    impl FakeTarget {
        pub fn at(top: f64, height: f64) -> Self {
            Self(Rc::new(RefCell::new(FakeElement {
                bounds: Bounds {
                    top,
                    height,
                    scroll_width: 0.0,
                },
                style: None,
            })))
        }

        pub fn with_scroll_width(self, scroll_width: f64) -> Self {
            self.0.borrow_mut().bounds.scroll_width = scroll_width;
            self
        }

        pub fn set_scroll_width(&self, scroll_width: f64) {
            self.0.borrow_mut().bounds.scroll_width = scroll_width;
        }

        pub fn set_top(&self, top: f64) {
            self.0.borrow_mut().bounds.top = top;
        }

        /// Everything applied so far, or `None` if nothing was ever written.
        pub fn last(&self) -> Option<StyleFrame> {
            self.0.borrow().style
        }
    }

    impl PartialEq for FakeTarget {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Target for FakeTarget {
        fn apply(&self, frame: &StyleFrame) {
            let mut el = self.0.borrow_mut();
            el.style.get_or_insert_with(StyleFrame::default).merge(frame);
        }

        fn bounds(&self) -> Bounds {
            self.0.borrow().bounds
        }
    }

    struct Task {
        due: Duration,
        id: u64,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// A timer queue that only moves when told to.
    #[derive(Clone, Default)]
    pub struct ManualScheduler(Rc<RefCell<Clock>>);

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Runs every task falling due within `by`, in due order.
        pub fn advance(&self, by: Duration) {
            let until = self.0.borrow().now + by;
            loop {
                let task = {
                    let mut clock = self.0.borrow_mut();
                    let next = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= until)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            let task = clock.tasks.remove(i);
                            clock.now = task.due;
                            task
                        }
                        None => break,
                    }
                };
                (task.run)();
            }
            self.0.borrow_mut().now = until;
        }

        pub fn pending(&self) -> usize {
            self.0.borrow().tasks.len()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<u64> {
            let mut clock = self.0.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(Task { due, id, run: task });
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.0.borrow_mut().tasks.retain(|t| t.id != handle);
        }
    }
}
