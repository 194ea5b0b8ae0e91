use std::rc::Rc;

use super::{ease::Ease, style::StyleFrame, Viewport};

/// A `to` value computed from the current layout; re-evaluated on every refresh.
pub type FrameFn = Rc<dyn Fn(&Viewport) -> StyleFrame>;

#[derive(Clone)]
pub enum Destination {
    Fixed(StyleFrame),
    Computed(FrameFn),
}

#[derive(Clone)]
pub struct Tween {
    pub from: StyleFrame,
    to: Destination,
    resolved_to: StyleFrame,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    /// Whether the start frame is shown before the tween begins.
    pub immediate: bool,
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("from", &self.from)
            .field("to", &self.resolved_to)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("ease", &self.ease)
            .field("immediate", &self.immediate)
            .finish()
    }
}

impl Tween {
    pub fn to(to: StyleFrame) -> Self {
        Self {
            from: StyleFrame::default(),
            to: Destination::Fixed(to),
            resolved_to: to,
            duration: 0.5,
            delay: 0.0,
            ease: Ease::default(),
            immediate: true,
        }
    }

    pub fn from_to(from: StyleFrame, to: StyleFrame) -> Self {
        Self::to(to).from(from)
    }

    /// A tween whose destination depends on layout, like a horizontal track
    /// slid by its own overflow width.
    pub fn computed(f: impl Fn(&Viewport) -> StyleFrame + 'static) -> Self {
        let mut tween = Self::to(StyleFrame::default());
        tween.to = Destination::Computed(Rc::new(f));
        tween
    }

    pub fn from(mut self, from: StyleFrame) -> Self {
        self.from = from;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Leaves the target alone until the tween starts. Needed when an earlier
    /// tween on the same timeline animates the same properties.
    pub fn deferred(mut self) -> Self {
        self.immediate = false;
        self
    }

    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }

    pub fn invalidate(&mut self, viewport: &Viewport) {
        if let Destination::Computed(f) = &self.to {
            self.resolved_to = f(viewport);
        }
    }

    /// Samples the tween `time` seconds after it was started (delay included).
    pub fn sample(&self, time: f64) -> StyleFrame {
        let local = time - self.delay;
        let t = if self.duration <= 0.0 {
            if local >= 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            (local / self.duration).clamp(0.0, 1.0)
        };
        StyleFrame::lerp(&self.from, &self.resolved_to, self.ease.apply(t))
    }
}

#[derive(Debug, Clone)]
pub struct Track<T> {
    pub target: T,
    pub tween: Tween,
    pub offset: f64,
}

/// One or more tweens laid out on a shared clock.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    tracks: Vec<Track<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { tracks: Vec::new() }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(target: T, tween: Tween) -> Self {
        Self::new().at(0.0, target, tween)
    }

    /// Places `tween` on `target` starting `offset` seconds into the timeline.
    pub fn at(mut self, offset: f64, target: T, tween: Tween) -> Self {
        self.tracks.push(Track {
            target,
            tween,
            offset: offset.max(0.0),
        });
        self
    }

    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(|t| t.offset + t.tween.total())
            .fold(0.0, f64::max)
    }

    pub fn tracks(&self) -> &[Track<T>] {
        &self.tracks
    }

    pub fn invalidate(&mut self, viewport: &Viewport) {
        for track in &mut self.tracks {
            track.tween.invalidate(viewport);
        }
    }

    /// Frames at `time` for every track that should render, with the track
    /// index and target.
    pub fn sample(&self, time: f64) -> impl Iterator<Item = (usize, &T, StyleFrame)> + '_ {
        self.tracks
            .iter()
            .enumerate()
            .filter(move |(_, track)| {
                track.tween.immediate || time >= track.offset + track.tween.delay
            })
            .map(move |(i, track)| (i, &track.target, track.tween.sample(time - track.offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_sampling_with_delay() {
        let tween = Tween::from_to(StyleFrame::new().opacity(0.0), StyleFrame::new().opacity(1.0))
            .duration(1.0)
            .delay(0.5);
        assert_eq!(tween.sample(0.0).opacity, Some(0.0));
        assert_eq!(tween.sample(0.5).opacity, Some(0.0));
        assert_eq!(tween.sample(1.0).opacity, Some(0.5));
        assert_eq!(tween.sample(10.0).opacity, Some(1.0));
        assert_eq!(tween.total(), 1.5);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = Tween::to(StyleFrame::new().x(5.0)).duration(0.0);
        assert_eq!(tween.sample(0.0).x, Some(5.0));
    }

    #[test]
    fn test_timeline_offsets_and_duration() {
        let timeline = Timeline::new()
            .at(0.0, "circle", Tween::to(StyleFrame::new().scale(5.0)).duration(0.5))
            .at(0.5, "circle", Tween::to(StyleFrame::new().scale(17.0)).duration(0.5))
            .at(0.7, "text", Tween::to(StyleFrame::new().opacity(1.0)).duration(0.2));
        assert!((timeline.duration() - 1.0).abs() < 1e-9);

        let frames: Vec<_> = timeline.sample(0.25).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(*frames[0].1, "circle");
        assert_eq!(frames[0].2.scale, Some(3.0));
    }

    #[test]
    fn test_deferred_track_waits_for_its_start() {
        let timeline = Timeline::new()
            .at(
                0.0,
                "circle",
                Tween::from_to(StyleFrame::new().scale(1.0), StyleFrame::new().scale(5.0))
                    .duration(0.5),
            )
            .at(
                0.5,
                "circle",
                Tween::from_to(StyleFrame::new().scale(5.0), StyleFrame::new().scale(17.0))
                    .duration(0.5)
                    .deferred(),
            );
        let early: Vec<_> = timeline.sample(0.25).collect();
        assert_eq!(early.len(), 1);
        assert_eq!(early[0].2.scale, Some(3.0));

        let late: Vec<_> = timeline.sample(0.75).collect();
        assert_eq!(late.len(), 2);
        assert_eq!(late[0].2.scale, Some(5.0));
        assert_eq!(late[1].0, 1);
        assert_eq!(late[1].2.scale, Some(11.0));
    }

    #[test]
    fn test_computed_destination_follows_viewport() {
        let mut tween = Tween::computed(|vp| StyleFrame::new().x(-vp.width)).duration(1.0);
        let viewport = Viewport {
            width: 800.0,
            ..Viewport::default()
        };
        tween.invalidate(&viewport);
        assert_eq!(tween.sample(1.0).x, Some(-800.0));

        let wider = Viewport {
            width: 1200.0,
            ..Viewport::default()
        };
        tween.invalidate(&wider);
        assert_eq!(tween.sample(1.0).x, Some(-1200.0));
    }
}
