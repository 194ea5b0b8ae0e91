/// Easing curves used by tweens, named after the power family they come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    None,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power1In => ease_in(t, 2),
            Ease::Power1Out => ease_out(t, 2),
            Ease::Power1InOut => ease_in_out(t, 2),
            Ease::Power2In => ease_in(t, 3),
            Ease::Power2Out => ease_out(t, 3),
            Ease::Power2InOut => ease_in_out(t, 3),
            Ease::Power3In => ease_in(t, 4),
            Ease::Power3Out => ease_out(t, 4),
            Ease::Power3InOut => ease_in_out(t, 4),
        }
    }
}

fn ease_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn ease_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        ease_in(t * 2.0, power) / 2.0
    } else {
        1.0 - ease_in((1.0 - t) * 2.0, power) / 2.0
    }
}
