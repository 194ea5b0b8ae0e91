use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use super::{
    style::StyleFrame,
    trigger::{Action, Anchor, Scrub, ScrollTrigger},
    tween::{Timeline, Tween},
    Bounds, Target, Viewport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A per-frame observer living in the registry next to animations. Released
/// like any other handle; `release` runs once when that happens.
pub trait Ticker<T> {
    fn tick(&mut self, registry: &mut Registry<T>);
    fn release(&mut self, _registry: &mut Registry<T>) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy)]
struct Playhead {
    time: f64,
    playing: bool,
    direction: Direction,
}

impl Playhead {
    fn apply(&mut self, action: Action, duration: f64) {
        match action {
            Action::Play => {
                self.playing = true;
                self.direction = Direction::Forward;
            }
            Action::Pause => self.playing = false,
            Action::Resume => self.playing = true,
            Action::Reverse => {
                self.playing = true;
                self.direction = Direction::Reverse;
            }
            Action::Restart => {
                self.time = 0.0;
                self.playing = true;
                self.direction = Direction::Forward;
            }
            Action::Reset => {
                self.time = 0.0;
                self.playing = false;
            }
            Action::Complete => {
                self.time = duration;
                self.playing = false;
            }
            Action::None => {}
        }
    }

    fn advance(&mut self, dt: f64, duration: f64) {
        if !self.playing {
            return;
        }
        match self.direction {
            Direction::Forward => {
                self.time = (self.time + dt).min(duration);
                if self.time >= duration {
                    self.playing = false;
                }
            }
            Direction::Reverse => {
                self.time = (self.time - dt).max(0.0);
                if self.time <= 0.0 {
                    self.playing = false;
                }
            }
        }
    }
}

/// A timeline, optionally driven by a scroll trigger.
pub struct Animation<T> {
    timeline: Timeline<T>,
    trigger: Option<ScrollTrigger<T>>,
    playhead: Playhead,
    last_frames: Vec<Option<StyleFrame>>,
    last_pin: Option<StyleFrame>,
}

impl<T> Animation<T> {
    /// Without a trigger the animation starts playing as soon as it is created.
    pub fn new(timeline: Timeline<T>) -> Self {
        let tracks = timeline.tracks().len();
        Self {
            timeline,
            trigger: None,
            playhead: Playhead {
                time: 0.0,
                playing: true,
                direction: Direction::Forward,
            },
            last_frames: vec![None; tracks],
            last_pin: None,
        }
    }

    pub fn tween(target: T, tween: Tween) -> Self {
        Self::new(Timeline::single(target, tween))
    }

    /// Hands playback over to `trigger`; the animation waits for its toggle actions or scrub.
    pub fn trigger(mut self, trigger: ScrollTrigger<T>) -> Self {
        self.playhead.playing = false;
        self.trigger = Some(trigger);
        self
    }

    pub fn duration(&self) -> f64 {
        self.timeline.duration()
    }

    pub fn progress(&self) -> f64 {
        match &self.trigger {
            Some(trigger) => trigger.progress(),
            None => {
                let duration = self.duration();
                if duration > 0.0 {
                    self.playhead.time / duration
                } else {
                    1.0
                }
            }
        }
    }

    fn invalidate(&mut self, viewport: &Viewport) {
        self.timeline.invalidate(viewport);
        if let Some(trigger) = &mut self.trigger {
            trigger.invalidate();
        }
    }
}

impl<T: Target> Animation<T> {
    /// Returns `true` when a pin changed the space it reserves, which moves
    /// everything laid out after the pinned element.
    fn step(&mut self, dt: f64, viewport: &Viewport) -> bool {
        let duration = self.duration();
        let mut relayout = false;
        if let Some(trigger) = &mut self.trigger {
            if !trigger.is_resolved() {
                let bounds = match &trigger.anchor {
                    Anchor::Document => Bounds {
                        top: 0.0,
                        height: viewport.doc_height,
                        scroll_width: viewport.width,
                    },
                    Anchor::Element(el) => el.bounds(),
                };
                trigger.resolve(&bounds, viewport);
            }
            for action in trigger.update(viewport.scroll_y) {
                self.playhead.apply(action, duration);
            }
            let target_time = trigger.progress() * duration;
            match trigger.scrub {
                Scrub::Off => self.playhead.advance(dt, duration),
                Scrub::Immediate => self.playhead.time = target_time,
                Scrub::Lag(lag) => {
                    let catch_up = if lag > 0.0 { (dt / lag).min(1.0) } else { 1.0 };
                    self.playhead.time += (target_time - self.playhead.time) * catch_up;
                }
            }
            if let (Some(pin), Anchor::Element(el)) =
                (trigger.pin_frame(viewport.scroll_y), &trigger.anchor)
            {
                if self.last_pin != Some(pin) {
                    relayout = self.last_pin.and_then(|last| last.pin_spacing) != pin.pin_spacing;
                    el.apply(&pin);
                    self.last_pin = Some(pin);
                }
            }
        } else {
            self.playhead.advance(dt, duration);
        }
        self.render();
        relayout
    }

    fn render(&mut self) {
        let time = self.playhead.time;
        for (i, target, frame) in self.timeline.sample(time) {
            let last = &mut self.last_frames[i];
            if last.as_ref() != Some(&frame) {
                target.apply(&frame);
                *last = Some(frame);
            }
        }
    }
}

enum Entry<T> {
    Animation(Animation<T>),
    Ticker(Box<dyn Ticker<T>>),
}

/// Counters for leak checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub created: usize,
    pub released: usize,
    pub live: usize,
}

/// Every live animation and ticker on the page, keyed by the handle that created it.
pub struct Registry<T> {
    next_id: u64,
    entries: BTreeMap<HandleId, Entry<T>>,
    viewport: Viewport,
    last_time: Option<f64>,
    needs_refresh: bool,
    created: usize,
    released: usize,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: BTreeMap::new(),
            viewport: Viewport::default(),
            last_time: None,
            needs_refresh: false,
            created: 0,
            released: 0,
        }
    }
}

impl<T: Target> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&mut self) -> HandleId {
        let id = HandleId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        id
    }

    /// Registers `animation` and renders its starting frame right away.
    pub fn create(&mut self, mut animation: Animation<T>) -> HandleId {
        animation.invalidate(&self.viewport);
        animation.render();
        let id = self.next_handle();
        self.entries.insert(id, Entry::Animation(animation));
        id
    }

    pub fn add_ticker(&mut self, ticker: impl Ticker<T> + 'static) -> HandleId {
        let id = self.next_handle();
        self.entries.insert(id, Entry::Ticker(Box::new(ticker)));
        id
    }

    pub fn is_live(&self, id: HandleId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Kills the handle and its trigger binding. Returns `false` if it was already gone.
    pub fn release(&mut self, id: HandleId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.released += 1;
                if let Entry::Ticker(mut ticker) = entry {
                    ticker.release(self);
                }
                true
            }
            None => false,
        }
    }

    /// Trigger progress for scroll-bound animations, playhead progress otherwise.
    pub fn progress(&self, id: HandleId) -> Option<f64> {
        match self.entries.get(&id)? {
            Entry::Animation(animation) => Some(animation.progress()),
            Entry::Ticker(_) => None,
        }
    }

    /// Whether the handle's scroll trigger currently spans the scroll position.
    pub fn is_active(&self, id: HandleId) -> bool {
        match self.entries.get(&id) {
            Some(Entry::Animation(Animation {
                trigger: Some(trigger),
                ..
            })) => trigger.is_active(),
            _ => false,
        }
    }

    /// Recomputes every trigger range and computed value on the next tick.
    pub fn refresh(&mut self) {
        self.needs_refresh = true;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stats(&self) -> Stats {
        Stats {
            created: self.created,
            released: self.released,
            live: self.entries.len(),
        }
    }

    /// Advances every animation to `now` (seconds) and runs tickers.
    pub fn tick(&mut self, now: f64, viewport: Viewport) {
        let dt = self.last_time.map_or(0.0, |last| (now - last).max(0.0));
        self.last_time = Some(now);
        if viewport.width != self.viewport.width || viewport.height != self.viewport.height {
            self.needs_refresh = true;
        }
        self.viewport = viewport;

        let refresh = std::mem::take(&mut self.needs_refresh);
        let mut relayout = false;
        for entry in self.entries.values_mut() {
            if let Entry::Animation(animation) = entry {
                if refresh {
                    animation.invalidate(&viewport);
                }
                relayout |= animation.step(dt, &viewport);
            }
        }
        // triggers resolved before the pin spacing changed measured a stale layout
        if relayout {
            log::debug!("pin spacing changed, refreshing triggers");
            self.needs_refresh = true;
        }

        let tickers: Vec<HandleId> = self
            .entries
            .iter()
            .filter(|(_, e)| matches!(e, Entry::Ticker(_)))
            .map(|(id, _)| *id)
            .collect();
        for id in tickers {
            let Some(Entry::Ticker(mut ticker)) = self.entries.remove(&id) else {
                continue;
            };
            ticker.tick(self);
            self.entries.insert(id, Entry::Ticker(ticker));
        }
    }
}

/// Shared handle to the page's animation registry, owned by the top-level view
/// and handed to every section.
pub struct AnimationContext<T>(Rc<RefCell<Registry<T>>>);

impl<T> Clone for AnimationContext<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Target> Default for AnimationContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Target> AnimationContext<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Registry::new())))
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Registry<T>) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{
        testing::FakeTarget,
        trigger::{Distance, Edge, ToggleActions},
        Ease,
    };

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            width: 1000.0,
            height: 800.0,
            doc_height: 4000.0,
        }
    }

    fn reveal(target: &FakeTarget) -> Animation<FakeTarget> {
        Animation::tween(
            target.clone(),
            Tween::from_to(
                StyleFrame::new().y(100.0).opacity(0.0),
                StyleFrame::new().y(0.0).opacity(1.0),
            )
            .duration(1.0),
        )
        .trigger(
            ScrollTrigger::new(Anchor::Element(target.clone()))
                .start(Edge::Top, Edge::Percent(80.0))
                .actions(ToggleActions::PLAY_REVERSE),
        )
    }

    #[test]
    fn test_create_renders_starting_frame() {
        let mut registry = Registry::new();
        let target = FakeTarget::at(2000.0, 400.0);
        registry.create(reveal(&target));
        assert_eq!(target.last().and_then(|f| f.opacity), Some(0.0));
        assert_eq!(registry.stats().created, 1);
    }

    #[test]
    fn test_untriggered_animation_plays_immediately() {
        let mut registry = Registry::new();
        let target = FakeTarget::at(0.0, 100.0);
        let id = registry.create(Animation::tween(
            target.clone(),
            Tween::from_to(StyleFrame::new().opacity(0.0), StyleFrame::new().opacity(1.0))
                .duration(1.0)
                .ease(Ease::None),
        ));
        registry.tick(0.0, viewport(0.0));
        registry.tick(0.5, viewport(0.0));
        assert_eq!(target.last().and_then(|f| f.opacity), Some(0.5));
        registry.tick(2.0, viewport(0.0));
        assert_eq!(registry.progress(id), Some(1.0));
    }

    #[test]
    fn test_toggle_actions_play_and_reverse() {
        let mut registry = Registry::new();
        // start: 2000 - 0.8 * 800 = 1360
        let target = FakeTarget::at(2000.0, 400.0);
        registry.create(reveal(&target));

        registry.tick(0.0, viewport(0.0));
        registry.tick(1.0, viewport(0.0));
        assert_eq!(target.last().and_then(|f| f.opacity), Some(0.0));

        registry.tick(2.0, viewport(1400.0));
        registry.tick(3.5, viewport(1400.0));
        assert_eq!(target.last().and_then(|f| f.opacity), Some(1.0));

        registry.tick(4.0, viewport(0.0));
        registry.tick(6.0, viewport(0.0));
        assert_eq!(target.last().and_then(|f| f.opacity), Some(0.0));
    }

    #[test]
    fn test_immediate_scrub_tracks_scroll() {
        let mut registry = Registry::new();
        let fill = FakeTarget::at(0.0, 5.0);
        let id = registry.create(
            Animation::tween(
                fill.clone(),
                Tween::from_to(StyleFrame::new().width_pct(0.0), StyleFrame::new().width_pct(100.0))
                    .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Document)
                    .start(Edge::Top, Edge::Top)
                    .end(Edge::Bottom, Edge::Bottom)
                    .scrub(Scrub::Immediate),
            ),
        );
        // scrollable distance: 4000 - 800
        registry.tick(0.0, viewport(1600.0));
        assert_eq!(registry.progress(id), Some(0.5));
        assert_eq!(fill.last().and_then(|f| f.width_pct), Some(50.0));
    }

    #[test]
    fn test_lagged_scrub_catches_up() {
        let mut registry = Registry::new();
        let fill = FakeTarget::at(0.0, 5.0);
        registry.create(
            Animation::tween(
                fill.clone(),
                Tween::from_to(StyleFrame::new().width_pct(0.0), StyleFrame::new().width_pct(100.0))
                    .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Document)
                    .start(Edge::Top, Edge::Top)
                    .end(Edge::Bottom, Edge::Bottom)
                    .scrub(Scrub::Lag(0.3)),
            ),
        );
        registry.tick(0.0, viewport(3200.0));
        registry.tick(0.15, viewport(3200.0));
        let halfway = fill.last().and_then(|f| f.width_pct).expect("rendered");
        assert!((halfway - 50.0).abs() < 1e-9);
        registry.tick(1.0, viewport(3200.0));
        let done = fill.last().and_then(|f| f.width_pct).expect("rendered");
        assert!((done - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_is_exactly_once() {
        let mut registry = Registry::new();
        let target = FakeTarget::at(0.0, 100.0);
        let id = registry.create(reveal(&target));
        assert!(registry.is_live(id));
        assert!(registry.release(id));
        assert!(!registry.release(id));
        assert_eq!(
            registry.stats(),
            Stats {
                created: 1,
                released: 1,
                live: 0
            }
        );
    }

    #[test]
    fn test_refresh_reresolves_triggers() {
        let mut registry = Registry::new();
        let target = FakeTarget::at(2000.0, 400.0);
        let id = registry.create(reveal(&target));
        registry.tick(0.0, viewport(1400.0));
        assert!(registry.is_active(id));

        // content above grew: the section moved down out of range
        target.set_top(3000.0);
        registry.tick(0.1, viewport(1400.0));
        assert!(registry.is_active(id));
        registry.refresh();
        registry.tick(0.2, viewport(1400.0));
        assert!(!registry.is_active(id));
    }

    /// Page 1800px tall plus whatever a pin reserves, in an 800px window.
    fn page(scroll_y: f64, pin_spacing: f64) -> Viewport {
        Viewport {
            scroll_y,
            width: 1000.0,
            height: 800.0,
            doc_height: 1800.0 + pin_spacing,
        }
    }

    #[test]
    fn test_pin_spacing_refreshes_earlier_triggers() {
        let mut registry = Registry::new();
        let fill = FakeTarget::at(0.0, 5.0);
        let bar = registry.create(
            Animation::tween(
                fill.clone(),
                Tween::from_to(StyleFrame::new().width_pct(0.0), StyleFrame::new().width_pct(100.0))
                    .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Document)
                    .start(Edge::Top, Edge::Top)
                    .end(Edge::Bottom, Edge::Bottom)
                    .scrub(Scrub::Immediate),
            ),
        );
        let section = FakeTarget::at(1000.0, 800.0);
        registry.create(
            Animation::tween(
                section.clone(),
                Tween::from_to(StyleFrame::new().opacity(0.0), StyleFrame::new().opacity(1.0))
                    .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Element(section.clone()))
                    .start(Edge::Top, Edge::Top)
                    .end_after(Distance::ViewportPct(200.0))
                    .scrub(Scrub::Immediate)
                    .pin(),
            ),
        );
        registry.refresh();
        registry.tick(0.0, page(0.0, 0.0));
        let spacing = section.last().and_then(|f| f.pin_spacing);
        assert_eq!(spacing, Some(1600.0));

        // the document grew by the spacing: max scroll is 1800 + 1600 - 800
        registry.tick(0.1, page(1300.0, 1600.0));
        assert_eq!(registry.progress(bar), Some(0.5));
        assert_eq!(fill.last().and_then(|f| f.width_pct), Some(50.0));
    }

    #[test]
    fn test_refresh_remeasures_horizontal_track() {
        let mut registry = Registry::new();
        let track = FakeTarget::at(1000.0, 800.0).with_scroll_width(3000.0);
        let overflow = |track: &FakeTarget, viewport: &Viewport| {
            (track.bounds().scroll_width - viewport.width).max(0.0)
        };
        let (slide, distance) = (track.clone(), track.clone());
        let id = registry.create(
            Animation::tween(
                track.clone(),
                Tween::computed(move |vp| StyleFrame::new().x(-overflow(&slide, vp)))
                    .from(StyleFrame::new().x(0.0))
                    .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Element(track.clone()))
                    .start(Edge::Top, Edge::Top)
                    .end_after(Distance::computed(move |vp| overflow(&distance, vp)))
                    .scrub(Scrub::Immediate)
                    .pin(),
            ),
        );
        registry.tick(0.0, viewport(3000.0));
        assert_eq!(registry.progress(id), Some(1.0));
        assert_eq!(track.last().and_then(|f| f.x), Some(-2000.0));
        // settles the refresh requested by the first pin spacing
        registry.tick(0.05, viewport(3000.0));

        // cards loaded and widened the track
        track.set_scroll_width(5000.0);
        registry.tick(0.1, viewport(3000.0));
        assert_eq!(registry.progress(id), Some(1.0));

        registry.refresh();
        registry.tick(0.2, viewport(3000.0));
        assert_eq!(registry.progress(id), Some(0.5));
        assert_eq!(track.last().and_then(|f| f.pin_spacing), Some(4000.0));
        registry.tick(0.3, viewport(5000.0));
        assert_eq!(registry.progress(id), Some(1.0));
        assert_eq!(track.last().and_then(|f| f.x), Some(-4000.0));
    }

    struct Counter {
        ticks: Rc<RefCell<usize>>,
        released: Rc<RefCell<bool>>,
    }

    impl Ticker<FakeTarget> for Counter {
        fn tick(&mut self, _registry: &mut Registry<FakeTarget>) {
            *self.ticks.borrow_mut() += 1;
        }

        fn release(&mut self, _registry: &mut Registry<FakeTarget>) {
            *self.released.borrow_mut() = true;
        }
    }

    #[test]
    fn test_tickers_run_each_frame_until_released() {
        let mut registry = Registry::<FakeTarget>::new();
        let ticks = Rc::new(RefCell::new(0));
        let released = Rc::new(RefCell::new(false));
        let id = registry.add_ticker(Counter {
            ticks: ticks.clone(),
            released: released.clone(),
        });
        registry.tick(0.0, viewport(0.0));
        registry.tick(0.1, viewport(0.0));
        assert_eq!(*ticks.borrow(), 2);

        registry.release(id);
        registry.tick(0.2, viewport(0.0));
        assert_eq!(*ticks.borrow(), 2);
        assert!(*released.borrow());
    }
}
