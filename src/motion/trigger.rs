use std::rc::Rc;

use super::{style::StyleFrame, Bounds, Viewport};

/// What a trigger measures its start and end against.
#[derive(Debug, Clone)]
pub enum Anchor<T> {
    /// The whole scrollable document.
    Document,
    Element(T),
}

/// A point along an element or the viewport, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Percent(f64),
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
            Edge::Percent(p) => p / 100.0,
        }
    }
}

/// "When `element` edge of the anchor meets `viewport` edge of the screen".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub element: Edge,
    pub viewport: Edge,
}

impl Edges {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    fn resolve(&self, bounds: &Bounds, viewport: &Viewport) -> f64 {
        bounds.top + self.element.fraction() * bounds.height
            - self.viewport.fraction() * viewport.height
    }
}

/// A scroll distance measured from the trigger start.
#[derive(Clone)]
pub enum Distance {
    Px(f64),
    /// Percentage of the viewport height, so `200.0` is two screens.
    ViewportPct(f64),
    /// Measured at refresh time, e.g. the overflow width of a horizontal track.
    Computed(Rc<dyn Fn(&Viewport) -> f64>),
}

impl std::fmt::Debug for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Px(px) => write!(f, "Px({px})"),
            Distance::ViewportPct(pct) => write!(f, "ViewportPct({pct})"),
            Distance::Computed(_) => write!(f, "Computed"),
        }
    }
}

impl Distance {
    pub fn computed(f: impl Fn(&Viewport) -> f64 + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }

    fn resolve(&self, viewport: &Viewport) -> f64 {
        match self {
            Distance::Px(px) => *px,
            Distance::ViewportPct(pct) => viewport.height * pct / 100.0,
            Distance::Computed(f) => f(viewport),
        }
        .max(0.0)
    }
}

#[derive(Debug, Clone)]
pub enum End {
    At(Edges),
    After(Distance),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

/// Actions for onEnter, onLeave, onEnterBack and onLeaveBack, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions(pub [Action; 4]);

impl ToggleActions {
    /// "play none none reverse": reveal when entering, undo when scrolling back above.
    pub const PLAY_REVERSE: Self = Self([Action::Play, Action::None, Action::None, Action::Reverse]);
    /// "play none none none": reveal once and stay.
    pub const ONCE: Self = Self([Action::Play, Action::None, Action::None, Action::None]);

    fn on_enter(self) -> Action {
        self.0[0]
    }
    fn on_leave(self) -> Action {
        self.0[1]
    }
    fn on_enter_back(self) -> Action {
        self.0[2]
    }
    fn on_leave_back(self) -> Action {
        self.0[3]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scrub {
    Off,
    /// Playhead follows scroll position exactly.
    Immediate,
    /// Playhead catches up with scroll position over this many seconds.
    Lag(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Before,
    Active,
    After,
}

#[derive(Debug, Clone)]
pub struct ScrollTrigger<T> {
    pub anchor: Anchor<T>,
    pub start: Edges,
    pub end: End,
    pub actions: ToggleActions,
    pub scrub: Scrub,
    pub pin: bool,
    range: Option<(f64, f64)>,
    zone: Zone,
    progress: f64,
}

impl<T> ScrollTrigger<T> {
    /// Defaults to "top bottom" → "bottom top" with "play none none none".
    pub fn new(anchor: Anchor<T>) -> Self {
        Self {
            anchor,
            start: Edges::new(Edge::Top, Edge::Bottom),
            end: End::At(Edges::new(Edge::Bottom, Edge::Top)),
            actions: ToggleActions::ONCE,
            scrub: Scrub::Off,
            pin: false,
            range: None,
            zone: Zone::Before,
            progress: 0.0,
        }
    }

    pub fn start(mut self, element: Edge, viewport: Edge) -> Self {
        self.start = Edges::new(element, viewport);
        self
    }

    pub fn end(mut self, element: Edge, viewport: Edge) -> Self {
        self.end = End::At(Edges::new(element, viewport));
        self
    }

    pub fn end_after(mut self, distance: Distance) -> Self {
        self.end = End::After(distance);
        self
    }

    pub fn actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }

    pub fn scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = scrub;
        self
    }

    pub fn pin(mut self) -> Self {
        self.pin = true;
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.range.is_some()
    }

    pub fn invalidate(&mut self) {
        self.range = None;
    }

    /// Computes scroll offsets for start and end from the anchor's layout.
    pub fn resolve(&mut self, bounds: &Bounds, viewport: &Viewport) -> (f64, f64) {
        let start = self.start.resolve(bounds, viewport);
        let end = match &self.end {
            End::At(edges) => edges.resolve(bounds, viewport),
            End::After(distance) => start + distance.resolve(viewport),
        };
        let range = (start, end.max(start));
        self.range = Some(range);
        range
    }

    #[cfg(test)]
    fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    #[cfg(test)]
    fn zone(&self) -> Zone {
        self.zone
    }

    pub fn is_active(&self) -> bool {
        self.zone == Zone::Active
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Moves the trigger to `scroll_y`, returning the toggle actions fired on the way.
    pub fn update(&mut self, scroll_y: f64) -> Vec<Action> {
        let Some((start, end)) = self.range else {
            return Vec::new();
        };
        self.progress = if end > start {
            ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
        } else if scroll_y >= start {
            1.0
        } else {
            0.0
        };
        let zone = if scroll_y < start {
            Zone::Before
        } else if scroll_y > end || (end == start && scroll_y >= end) {
            Zone::After
        } else {
            Zone::Active
        };
        let actions = self.actions;
        let fired = match (self.zone, zone) {
            (Zone::Before, Zone::Active) => vec![actions.on_enter()],
            (Zone::Before, Zone::After) => vec![actions.on_enter(), actions.on_leave()],
            (Zone::Active, Zone::After) => vec![actions.on_leave()],
            (Zone::After, Zone::Active) => vec![actions.on_enter_back()],
            (Zone::After, Zone::Before) => {
                vec![actions.on_enter_back(), actions.on_leave_back()]
            }
            (Zone::Active, Zone::Before) => vec![actions.on_leave_back()],
            _ => Vec::new(),
        };
        self.zone = zone;
        fired.into_iter().filter(|a| *a != Action::None).collect()
    }

    /// Offset and spacing holding a pinned element in place over its scroll range.
    pub fn pin_frame(&self, scroll_y: f64) -> Option<StyleFrame> {
        if !self.pin {
            return None;
        }
        let (start, end) = self.range?;
        Some(StyleFrame {
            pin_offset: Some((scroll_y - start).clamp(0.0, end - start)),
            pin_spacing: Some(end - start),
            ..StyleFrame::default()
        })
    }
}
