use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use thiserror::Error;

use super::{
    context::{Animation, AnimationContext, HandleId, Registry, Ticker},
    Target, Viewport,
};
use crate::config::{RELEASE_DELAY, SETUP_DELAY};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{section}: element `{element}` is not mounted")]
    MissingElement {
        section: &'static str,
        element: &'static str,
    },
}

/// Deferred one-shot tasks. The browser uses `setTimeout`; tests drive a manual clock.
pub trait Scheduler: 'static {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Uninitialized,
    /// Setup timer is pending.
    Scheduled,
    /// Setup ran; these are the handles it created.
    Ready(Vec<HandleId>),
    Released,
}

/// What a setup closure gets to build animations with. Everything created
/// through it is recorded for the owning section.
pub struct SetupScope<'a, T> {
    section: &'static str,
    registry: &'a mut Registry<T>,
    created: Vec<HandleId>,
}

impl<'a, T: Target> SetupScope<'a, T> {
    pub fn new(section: &'static str, registry: &'a mut Registry<T>) -> Self {
        Self {
            section,
            registry,
            created: Vec::new(),
        }
    }

    pub fn require<U>(&self, element: &'static str, target: Option<U>) -> Result<U, SetupError> {
        target.ok_or(SetupError::MissingElement {
            section: self.section,
            element,
        })
    }

    pub fn animate(&mut self, animation: Animation<T>) -> HandleId {
        let id = self.registry.create(animation);
        self.created.push(id);
        id
    }

    pub fn ticker(&mut self, ticker: impl Ticker<T> + 'static) -> HandleId {
        let id = self.registry.add_ticker(ticker);
        self.created.push(id);
        id
    }

    pub fn viewport(&self) -> Viewport {
        self.registry.viewport()
    }

    fn finish(self) -> Vec<HandleId> {
        self.created
    }
}

type SetupFn<T> = Box<dyn Fn(&mut SetupScope<'_, T>) -> Result<(), SetupError>>;

struct Inner<T, S: Scheduler> {
    section: &'static str,
    ctx: AnimationContext<T>,
    scheduler: S,
    setup: SetupFn<T>,
    state: RefCell<GuardState>,
    pending: RefCell<Option<S::Handle>>,
}

/// The lifecycle of one section's animations: deferred setup after mount,
/// idempotent under repeated mounts, deferred release of exactly the handles
/// it created after unmount.
pub struct ScopedAnimation<T, S: Scheduler> {
    inner: Rc<Inner<T, S>>,
}

impl<T: Target + 'static, S: Scheduler> ScopedAnimation<T, S> {
    pub fn new(
        section: &'static str,
        ctx: AnimationContext<T>,
        scheduler: S,
        setup: impl Fn(&mut SetupScope<'_, T>) -> Result<(), SetupError> + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                section,
                ctx,
                scheduler,
                setup: Box::new(setup),
                state: RefCell::new(GuardState::Uninitialized),
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn state(&self) -> GuardState {
        self.inner.state.borrow().clone()
    }

    /// Schedules setup once the DOM has settled. A no-op while setup is
    /// pending or while the handles of a previous run are still live.
    pub fn mount(&self) {
        let inner = &self.inner;
        let skip = match &*inner.state.borrow() {
            GuardState::Scheduled => true,
            GuardState::Ready(ids) => {
                let live = ids.first().is_some_and(|id| inner.ctx.with(|r| r.is_live(*id)));
                if live {
                    log::debug!("{}: animations already initialized", inner.section);
                }
                live
            }
            GuardState::Uninitialized | GuardState::Released => false,
        };
        if skip {
            return;
        }

        let weak: Weak<Inner<T, S>> = Rc::downgrade(inner);
        let handle = inner.scheduler.schedule(
            SETUP_DELAY,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::run_setup(&inner);
                }
            }),
        );
        match handle {
            Some(handle) => {
                *inner.pending.borrow_mut() = Some(handle);
                *inner.state.borrow_mut() = GuardState::Scheduled;
            }
            None => {
                log::warn!("{}: could not defer setup, running it now", inner.section);
                *inner.state.borrow_mut() = GuardState::Scheduled;
                Inner::run_setup(inner);
            }
        }
    }

    /// Cancels a pending setup, or schedules release of every handle the last
    /// setup created.
    pub fn unmount(&self) {
        let inner = &self.inner;
        if let Some(handle) = inner.pending.borrow_mut().take() {
            inner.scheduler.cancel(handle);
        }
        let previous = std::mem::replace(&mut *inner.state.borrow_mut(), GuardState::Released);
        let GuardState::Ready(ids) = previous else {
            log::debug!("{}: unmounted before setup, nothing to release", inner.section);
            return;
        };
        if ids.is_empty() {
            return;
        }

        let release = {
            let ctx = inner.ctx.clone();
            let section = inner.section;
            move || {
                let released = ctx.with(|r| ids.iter().filter(|id| r.release(**id)).count());
                log::debug!("{section}: released {released} animation handles");
            }
        };
        if inner
            .scheduler
            .schedule(RELEASE_DELAY, Box::new(release.clone()))
            .is_none()
        {
            release();
        }
    }
}

impl<T: Target + 'static, S: Scheduler> Inner<T, S> {
    fn run_setup(inner: &Rc<Self>) {
        inner.pending.borrow_mut().take();
        if *inner.state.borrow() != GuardState::Scheduled {
            return;
        }
        log::debug!("{}: initializing animations", inner.section);

        let (result, created) = inner.ctx.with(|registry| {
            let mut scope = SetupScope::new(inner.section, registry);
            let result = (inner.setup)(&mut scope);
            let created = scope.finish();
            match &result {
                Ok(()) => registry.refresh(),
                Err(_) => {
                    for id in &created {
                        registry.release(*id);
                    }
                }
            }
            (result, created)
        });

        let ids = match result {
            Ok(()) => {
                log::debug!("{}: created {} animation handles", inner.section, created.len());
                created
            }
            Err(err) => {
                log::warn!("skipping animation setup: {err}");
                Vec::new()
            }
        };
        *inner.state.borrow_mut() = GuardState::Ready(ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{
        style::StyleFrame,
        testing::{FakeTarget, ManualScheduler},
        trigger::{Anchor, Edge, ScrollTrigger, ToggleActions},
        tween::Tween,
    };

    fn reveal_setup(
        root: Option<FakeTarget>,
        items: Vec<FakeTarget>,
    ) -> impl Fn(&mut SetupScope<'_, FakeTarget>) -> Result<(), SetupError> {
        move |scope| {
            let root = scope.require("section", root.clone())?;
            for item in &items {
                scope.animate(
                    Animation::tween(
                        item.clone(),
                        Tween::from_to(StyleFrame::new().opacity(0.0), StyleFrame::new().opacity(1.0)),
                    )
                    .trigger(
                        ScrollTrigger::new(Anchor::Element(root.clone()))
                            .start(Edge::Top, Edge::Percent(40.0))
                            .actions(ToggleActions::PLAY_REVERSE),
                    ),
                );
            }
            Ok(())
        }
    }

    fn section(
        ctx: &AnimationContext<FakeTarget>,
        clock: &ManualScheduler,
        items: usize,
    ) -> ScopedAnimation<FakeTarget, ManualScheduler> {
        let items = (0..items).map(|i| FakeTarget::at(i as f64 * 100.0, 100.0)).collect();
        ScopedAnimation::new(
            "about",
            ctx.clone(),
            clock.clone(),
            reveal_setup(Some(FakeTarget::at(1000.0, 800.0)), items),
        )
    }

    #[test]
    fn test_unmount_before_delay_creates_nothing() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let scope = section(&ctx, &clock, 3);

        scope.mount();
        clock.advance(Duration::from_millis(50));
        scope.unmount();
        clock.advance(Duration::from_secs(5));

        assert_eq!(scope.state(), GuardState::Released);
        assert_eq!(ctx.with(|r| r.stats().created), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_setup_runs_after_delay() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let scope = section(&ctx, &clock, 3);

        scope.mount();
        clock.advance(SETUP_DELAY - Duration::from_millis(1));
        assert_eq!(scope.state(), GuardState::Scheduled);
        clock.advance(Duration::from_millis(1));
        match scope.state() {
            GuardState::Ready(ids) => assert_eq!(ids.len(), 3),
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn test_release_matches_latest_setup() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let scope = section(&ctx, &clock, 4);

        scope.mount();
        clock.advance(SETUP_DELAY);
        scope.unmount();
        // release is deferred
        assert_eq!(ctx.with(|r| r.stats().released), 0);
        clock.advance(RELEASE_DELAY);

        let stats = ctx.with(|r| r.stats());
        assert_eq!(stats.created, 4);
        assert_eq!(stats.released, 4);
        assert_eq!(stats.live, 0);
    }

    #[test]
    fn test_duplicate_mounts_do_not_duplicate_handles() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let scope = section(&ctx, &clock, 2);

        scope.mount();
        scope.mount();
        clock.advance(SETUP_DELAY);
        scope.mount();
        clock.advance(SETUP_DELAY);

        assert_eq!(ctx.with(|r| r.stats().created), 2);
    }

    #[test]
    fn test_strict_remount_cycle() {
        // mount, unmount, mount again immediately: only the second mount's
        // handles survive and nothing leaks
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let scope = section(&ctx, &clock, 2);

        scope.mount();
        scope.unmount();
        scope.mount();
        clock.advance(SETUP_DELAY);
        assert_eq!(ctx.with(|r| r.stats()).live, 2);

        scope.unmount();
        clock.advance(RELEASE_DELAY);
        let stats = ctx.with(|r| r.stats());
        assert_eq!(stats.created, stats.released);
        assert_eq!(stats.live, 0);
    }

    #[test]
    fn test_teardown_leaves_other_sections_alone() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let about = section(&ctx, &clock, 2);
        let projects = section(&ctx, &clock, 3);

        about.mount();
        projects.mount();
        clock.advance(SETUP_DELAY);
        about.unmount();
        clock.advance(RELEASE_DELAY);

        assert_eq!(ctx.with(|r| r.stats()).live, 3);
        let GuardState::Ready(ids) = projects.state() else {
            panic!("projects should be ready");
        };
        assert!(ids.iter().all(|id| ctx.with(|r| r.is_live(*id))));
    }

    #[test]
    fn test_missing_element_skips_setup() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let items = vec![FakeTarget::at(0.0, 10.0)];
        let scope = ScopedAnimation::new("about", ctx.clone(), clock.clone(), reveal_setup(None, items));

        scope.mount();
        clock.advance(SETUP_DELAY);

        assert_eq!(scope.state(), GuardState::Ready(Vec::new()));
        assert_eq!(ctx.with(|r| r.stats()).live, 0);
        // unmount is still safe
        scope.unmount();
        clock.advance(RELEASE_DELAY);
        assert_eq!(ctx.with(|r| r.stats().released), 0);
    }

    #[test]
    fn test_partial_setup_is_rolled_back() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let item = FakeTarget::at(0.0, 10.0);
        let scope = ScopedAnimation::new("projects", ctx.clone(), clock.clone(), move |scope| {
            scope.animate(Animation::tween(
                item.clone(),
                Tween::to(StyleFrame::new().opacity(1.0)),
            ));
            scope.require("track", None)?;
            Ok(())
        });

        scope.mount();
        clock.advance(SETUP_DELAY);

        let stats = ctx.with(|r| r.stats());
        assert_eq!(stats.created, 1);
        assert_eq!(stats.released, 1);
        assert_eq!(stats.live, 0);
    }

    #[test]
    fn test_setup_refreshes_triggers() {
        let ctx = AnimationContext::new();
        let clock = ManualScheduler::new();
        let scope = section(&ctx, &clock, 1);
        scope.mount();
        clock.advance(SETUP_DELAY);
        // refresh is consumed by the next tick
        let GuardState::Ready(ids) = scope.state() else {
            panic!("should be ready");
        };
        ctx.with(|r| {
            r.tick(
                0.0,
                Viewport {
                    scroll_y: 900.0,
                    width: 1000.0,
                    height: 800.0,
                    doc_height: 4000.0,
                },
            );
            // start: 1000 - 0.4 * 800 = 680
            assert!(r.is_active(ids[0]));
        });
    }
}
