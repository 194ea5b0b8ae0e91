use super::{
    context::{Animation, HandleId, Registry, Ticker},
    guard::SetupScope,
    style::{Color, StyleFrame},
    trigger::{Anchor, Edge, Scrub, ScrollTrigger},
    tween::Tween,
    Target,
};

const COLOR_TRANSITION_SECS: f64 = 0.5;
const FILL_SCRUB_LAG_SECS: f64 = 0.3;

/// Colour bands of the page progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Start,
    Early,
    Middle,
    Late,
}

impl ColorBand {
    /// Progress is rounded to two decimals before comparing against the
    /// 0.10, 0.50 and 0.75 thresholds.
    pub fn for_progress(progress: f64) -> Self {
        let progress = (progress * 100.0).round() / 100.0;
        if progress > 0.75 {
            ColorBand::Late
        } else if progress > 0.50 {
            ColorBand::Middle
        } else if progress > 0.10 {
            ColorBand::Early
        } else {
            ColorBand::Start
        }
    }

    pub fn color(self) -> Color {
        match self {
            ColorBand::Start => Color::rgb(0xc5, 0x4b, 0xbc),
            ColorBand::Early => Color::rgb(0xb5, 0x33, 0x89),
            ColorBand::Middle => Color::rgb(0xa8, 0x55, 0xf7),
            ColorBand::Late => Color::rgb(0x7e, 0x22, 0xce),
        }
    }
}

/// Recolours the progress fill whenever scroll progress crosses into a new band.
pub struct ProgressIndicator<T> {
    fill: T,
    bar: HandleId,
    from: Color,
    applied: Color,
    transition: Option<HandleId>,
}

impl<T: Target + 'static> ProgressIndicator<T> {
    /// Binds the fill width to document scroll and registers the colour ticker.
    /// Both handles are recorded on `scope`, so the section's teardown
    /// releases them together with any in-flight colour transition.
    pub fn install(scope: &mut SetupScope<'_, T>, fill: T) -> (HandleId, HandleId) {
        let bar = scope.animate(
            Animation::tween(
                fill.clone(),
                Tween::from_to(
                    StyleFrame::new().width_pct(0.0),
                    StyleFrame::new().width_pct(100.0),
                )
                .duration(1.0),
            )
            .trigger(
                ScrollTrigger::new(Anchor::Document)
                    .start(Edge::Top, Edge::Top)
                    .end(Edge::Bottom, Edge::Bottom)
                    .scrub(Scrub::Lag(FILL_SCRUB_LAG_SECS)),
            ),
        );
        let start = ColorBand::Start.color();
        let ticker = scope.ticker(ProgressIndicator {
            fill,
            bar,
            from: start,
            applied: start,
            transition: None,
        });
        (bar, ticker)
    }

    /// The colour currently on screen, part way through any running transition.
    fn visible_color(&self, registry: &Registry<T>) -> Color {
        match self.transition.and_then(|id| registry.progress(id)) {
            Some(t) => self.from.lerp(self.applied, t),
            None => self.applied,
        }
    }

    fn update(&mut self, registry: &mut Registry<T>, progress: f64) {
        let color = ColorBand::for_progress(progress).color();
        if color == self.applied {
            return;
        }
        let from = self.visible_color(registry);
        if let Some(running) = self.transition.take() {
            registry.release(running);
        }
        self.transition = Some(registry.create(Animation::tween(
            self.fill.clone(),
            Tween::from_to(StyleFrame::new().background(from), StyleFrame::new().background(color))
                .duration(COLOR_TRANSITION_SECS),
        )));
        self.from = from;
        self.applied = color;
    }
}

impl<T: Target + 'static> Ticker<T> for ProgressIndicator<T> {
    fn tick(&mut self, registry: &mut Registry<T>) {
        if let Some(progress) = registry.progress(self.bar) {
            self.update(registry, progress);
        }
    }

    fn release(&mut self, registry: &mut Registry<T>) {
        if let Some(running) = self.transition.take() {
            registry.release(running);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{testing::FakeTarget, Viewport};

    fn at_progress(progress: f64) -> Viewport {
        // 4000px document, 800px viewport: 3200px of scroll
        Viewport {
            scroll_y: progress * 3200.0,
            width: 1000.0,
            height: 800.0,
            doc_height: 4000.0,
        }
    }

    fn installed() -> (Registry<FakeTarget>, FakeTarget, HandleId, HandleId) {
        let mut registry = Registry::new();
        let fill = FakeTarget::at(0.0, 5.0);
        let mut scope = SetupScope::new("progress", &mut registry);
        let (bar, ticker) = ProgressIndicator::install(&mut scope, fill.clone());
        (registry, fill, bar, ticker)
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ColorBand::for_progress(0.0), ColorBand::Start);
        assert_eq!(ColorBand::for_progress(0.10), ColorBand::Start);
        assert_eq!(ColorBand::for_progress(0.104), ColorBand::Start);
        assert_eq!(ColorBand::for_progress(0.11), ColorBand::Early);
        assert_eq!(ColorBand::for_progress(0.50), ColorBand::Early);
        assert_eq!(ColorBand::for_progress(0.51), ColorBand::Middle);
        assert_eq!(ColorBand::for_progress(0.75), ColorBand::Middle);
        assert_eq!(ColorBand::for_progress(0.76), ColorBand::Late);
        assert_eq!(ColorBand::for_progress(1.0), ColorBand::Late);
        assert_eq!(ColorBand::Late.color().to_string(), "#7e22ce");
    }

    #[test]
    fn test_same_band_starts_no_transition() {
        let (mut registry, _, _, _) = installed();
        registry.tick(0.0, at_progress(0.2));
        let after_first = registry.stats().created;
        for (i, p) in [0.25, 0.3, 0.4, 0.45, 0.5].iter().enumerate() {
            registry.tick(0.1 * (i + 1) as f64, at_progress(*p));
        }
        assert_eq!(registry.stats().created, after_first);
    }

    #[test]
    fn test_crossing_thresholds_replaces_transition() {
        let (mut registry, fill, _, _) = installed();
        // bar + ticker
        assert_eq!(registry.stats().created, 2);

        registry.tick(0.0, at_progress(0.05));
        assert_eq!(registry.stats().created, 2);

        registry.tick(0.1, at_progress(0.3));
        assert_eq!(registry.stats().created, 3);

        registry.tick(0.2, at_progress(0.6));
        registry.tick(0.3, at_progress(0.9));
        let stats = registry.stats();
        assert_eq!(stats.created, 5);
        // each new transition cancels the one before it
        assert_eq!(stats.released, 2);
        assert_eq!(stats.live, 3);

        registry.tick(5.0, at_progress(0.9));
        registry.tick(6.0, at_progress(0.9));
        assert_eq!(
            fill.last().and_then(|f| f.background),
            Some(ColorBand::Late.color())
        );
    }

    #[test]
    fn test_release_cancels_in_flight_transition() {
        let (mut registry, _, bar, ticker) = installed();
        registry.tick(0.0, at_progress(0.6));
        assert_eq!(registry.stats().live, 3);

        registry.release(bar);
        registry.release(ticker);
        let stats = registry.stats();
        assert_eq!(stats.live, 0);
        assert_eq!(stats.created, stats.released);
    }
}
