use super::{ease::Ease, style::StyleFrame};
use crate::config::MOBILE_BREAKPOINT_PX;

const DOT_SECS: f64 = 0.2;
const RING_SECS: f64 = 0.5;
const PRESS_SECS: f64 = 0.2;
const PRESSED_SCALE: f64 = 0.6;

/// Whether a viewport this wide gets the custom cursor.
pub fn cursor_enabled(width: f64) -> bool {
    width > MOBILE_BREAKPOINT_PX
}

/// A single value that eases toward whatever it was last pointed at. Retargeting
/// mid-flight starts from the current value, so motion never jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickTo {
    from: f64,
    to: f64,
    started: f64,
    duration: f64,
    ease: Ease,
}

impl QuickTo {
    pub fn new(value: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            started: 0.0,
            duration,
            ease,
        }
    }

    pub fn set(&mut self, target: f64, now: f64) {
        self.from = self.value(now);
        self.to = target;
        self.started = now;
    }

    #[cfg(test)]
    fn target(&self) -> f64 {
        self.to
    }

    pub fn value(&self, now: f64) -> f64 {
        let t = if self.duration > 0.0 {
            ((now - self.started) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

#[derive(Debug, Clone, Copy)]
struct Point {
    x: QuickTo,
    y: QuickTo,
}

impl Point {
    fn new(duration: f64) -> Self {
        Self {
            x: QuickTo::new(0.0, duration, Ease::Power3Out),
            y: QuickTo::new(0.0, duration, Ease::Power3Out),
        }
    }

    fn set(&mut self, x: f64, y: f64, now: f64) {
        self.x.set(x, now);
        self.y.set(y, now);
    }

    fn frame(&self, scale: f64, now: f64) -> StyleFrame {
        StyleFrame::new()
            .x_percent(-50.0)
            .y_percent(-50.0)
            .x(self.x.value(now))
            .y(self.y.value(now))
            .scale(scale)
    }
}

/// The two-element cursor: a dot that tracks the pointer closely and a ring
/// that trails behind it. Both shrink while a button is held.
#[derive(Debug, Clone, Copy)]
pub struct CursorFollower {
    dot: Point,
    ring: Point,
    scale: QuickTo,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            dot: Point::new(DOT_SECS),
            ring: Point::new(RING_SECS),
            scale: QuickTo::new(1.0, PRESS_SECS, Ease::None),
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, now: f64) {
        self.dot.set(x, y, now);
        self.ring.set(x, y, now);
    }

    pub fn pointer_down(&mut self, now: f64) {
        self.scale.set(PRESSED_SCALE, now);
    }

    pub fn pointer_up(&mut self, now: f64) {
        self.scale.set(1.0, now);
    }

    /// Frames for the dot and the ring at `now`.
    pub fn frames(&self, now: f64) -> (StyleFrame, StyleFrame) {
        let scale = self.scale.value(now);
        (self.dot.frame(scale, now), self.ring.frame(scale, now))
    }
}

/// Where pointer listeners get attached. The browser binds window events;
/// tests count attachments.
pub trait ListenerHost {
    type Listener;

    fn attach(&mut self) -> Self::Listener;
    fn detach(&mut self, listener: Self::Listener);
}

/// Keeps at most one set of pointer listeners attached, following the
/// desktop/mobile state.
pub struct PointerBinding<H: ListenerHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H: ListenerHost> PointerBinding<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            listener: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    pub fn sync(&mut self, enabled: bool) {
        match (enabled, self.listener.take()) {
            (true, None) => {
                log::debug!("attaching cursor listeners");
                self.listener = Some(self.host.attach());
            }
            (false, Some(listener)) => {
                log::debug!("detaching cursor listeners");
                self.host.detach(listener);
            }
            (_, current) => self.listener = current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        attached: usize,
        live: usize,
    }

    impl ListenerHost for CountingHost {
        type Listener = ();

        fn attach(&mut self) {
            self.attached += 1;
            self.live += 1;
        }

        fn detach(&mut self, _listener: ()) {
            self.live -= 1;
        }
    }

    #[test]
    fn test_breakpoint() {
        assert!(!cursor_enabled(375.0));
        assert!(!cursor_enabled(768.0));
        assert!(cursor_enabled(769.0));
        assert!(cursor_enabled(1440.0));
    }

    #[test]
    fn test_mobile_attaches_nothing() {
        let mut binding = PointerBinding::new(CountingHost::default());
        binding.sync(cursor_enabled(400.0));
        binding.sync(cursor_enabled(400.0));
        assert!(!binding.is_attached());
        assert_eq!(binding.host.attached, 0);
    }

    #[test]
    fn test_desktop_attaches_exactly_once() {
        let mut binding = PointerBinding::new(CountingHost::default());
        for _ in 0..3 {
            binding.sync(cursor_enabled(1280.0));
        }
        assert_eq!(binding.host.attached, 1);
        assert_eq!(binding.host.live, 1);

        // shrink below the breakpoint, then grow back
        binding.sync(cursor_enabled(600.0));
        assert_eq!(binding.host.live, 0);
        binding.sync(cursor_enabled(1280.0));
        assert_eq!(binding.host.attached, 2);
        assert_eq!(binding.host.live, 1);

        binding.sync(false);
        assert_eq!(binding.host.live, 0);
    }

    #[test]
    fn test_quick_to_retargets_from_current_value() {
        let mut value = QuickTo::new(0.0, 1.0, Ease::None);
        value.set(100.0, 0.0);
        assert_eq!(value.value(0.5), 50.0);
        value.set(0.0, 0.5);
        assert_eq!(value.value(0.5), 50.0);
        assert_eq!(value.value(1.5), 0.0);
        assert_eq!(value.target(), 0.0);
    }

    #[test]
    fn test_ring_trails_dot() {
        let mut cursor = CursorFollower::new();
        cursor.pointer_move(200.0, 100.0, 0.0);
        let (dot, ring) = cursor.frames(0.1);
        let (dot_x, ring_x) = (dot.x.unwrap_or_default(), ring.x.unwrap_or_default());
        assert!(dot_x > ring_x);
        assert!(dot_x < 200.0);

        let (dot, ring) = cursor.frames(1.0);
        assert_eq!(dot.x, Some(200.0));
        assert_eq!(ring.y, Some(100.0));
        assert_eq!(dot.x_percent, Some(-50.0));
    }

    #[test]
    fn test_press_scales_both_elements() {
        let mut cursor = CursorFollower::new();
        cursor.pointer_down(0.0);
        let (dot, ring) = cursor.frames(0.2);
        assert_eq!(dot.scale, Some(PRESSED_SCALE));
        assert_eq!(ring.scale, Some(PRESSED_SCALE));
        cursor.pointer_up(0.2);
        assert_eq!(cursor.frames(0.4).0.scale, Some(1.0));
    }
}
