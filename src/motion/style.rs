use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(self, to: Color, t: f64) -> Color {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::rgb(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A partial set of animatable properties. `None` means "not touched by this frame".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleFrame {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub x_percent: Option<f64>,
    pub y_percent: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub blur: Option<f64>,
    pub width_pct: Option<f64>,
    pub background: Option<Color>,
    pub bg_pos_y: Option<f64>,
    /// Vertical offset keeping a pinned element in place while the page scrolls.
    pub pin_offset: Option<f64>,
    /// Extra space reserved after a pinned element for its scroll distance.
    pub pin_spacing: Option<f64>,
}

macro_rules! setters {
    ($($field:ident),*) => {
        $(
            pub fn $field(mut self, value: f64) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl StyleFrame {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(x, y, x_percent, y_percent, scale, rotation, opacity, blur, width_pct, bg_pos_y);

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Interpolates every property `to` sets. Properties missing from `from`
    /// start at their identity value (scale and opacity 1, everything else 0).
    pub fn lerp(from: &StyleFrame, to: &StyleFrame, t: f64) -> StyleFrame {
        fn mix(from: Option<f64>, to: Option<f64>, identity: f64, t: f64) -> Option<f64> {
            let to = to?;
            let from = from.unwrap_or(identity);
            Some(from + (to - from) * t)
        }
        StyleFrame {
            x: mix(from.x, to.x, 0.0, t),
            y: mix(from.y, to.y, 0.0, t),
            x_percent: mix(from.x_percent, to.x_percent, 0.0, t),
            y_percent: mix(from.y_percent, to.y_percent, 0.0, t),
            scale: mix(from.scale, to.scale, 1.0, t),
            rotation: mix(from.rotation, to.rotation, 0.0, t),
            opacity: mix(from.opacity, to.opacity, 1.0, t),
            blur: mix(from.blur, to.blur, 0.0, t),
            width_pct: mix(from.width_pct, to.width_pct, 0.0, t),
            background: to
                .background
                .map(|c| from.background.map_or(c, |f| f.lerp(c, t))),
            bg_pos_y: mix(from.bg_pos_y, to.bg_pos_y, 0.0, t),
            pin_offset: mix(from.pin_offset, to.pin_offset, 0.0, t),
            pin_spacing: mix(from.pin_spacing, to.pin_spacing, 0.0, t),
        }
    }

    /// Overlays every property set in `other` onto `self`.
    pub fn merge(&mut self, other: &StyleFrame) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            x, y, x_percent, y_percent, scale, rotation, opacity, blur, width_pct, background,
            bg_pos_y, pin_offset, pin_spacing
        );
    }

    fn has_transform(&self) -> bool {
        self.x.is_some()
            || self.y.is_some()
            || self.x_percent.is_some()
            || self.y_percent.is_some()
            || self.scale.is_some()
            || self.rotation.is_some()
            || self.pin_offset.is_some()
    }

    /// Renders the frame as CSS `(property, value)` pairs.
    pub fn to_css(&self) -> Vec<(&'static str, String)> {
        let mut css = Vec::new();
        if self.has_transform() {
            let mut transform = String::new();
            if self.x_percent.is_some() || self.y_percent.is_some() {
                transform.push_str(&format!(
                    "translate({}%, {}%) ",
                    fmt_num(self.x_percent.unwrap_or(0.0)),
                    fmt_num(self.y_percent.unwrap_or(0.0))
                ));
            }
            let y = self.y.unwrap_or(0.0) + self.pin_offset.unwrap_or(0.0);
            transform.push_str(&format!(
                "translate3d({}px, {}px, 0px)",
                fmt_num(self.x.unwrap_or(0.0)),
                fmt_num(y)
            ));
            if let Some(rotation) = self.rotation {
                transform.push_str(&format!(" rotate({}deg)", fmt_num(rotation)));
            }
            if let Some(scale) = self.scale {
                transform.push_str(&format!(" scale({})", fmt_num(scale)));
            }
            css.push(("transform", transform));
        }
        if let Some(opacity) = self.opacity {
            css.push(("opacity", fmt_num(opacity)));
        }
        if let Some(blur) = self.blur {
            css.push(("filter", format!("blur({}px)", fmt_num(blur))));
        }
        if let Some(width) = self.width_pct {
            css.push(("width", format!("{}%", fmt_num(width))));
        }
        if let Some(color) = self.background {
            css.push(("background-color", color.to_string()));
        }
        if let Some(pos) = self.bg_pos_y {
            css.push(("background-position", format!("50% {}%", fmt_num(pos))));
        }
        if let Some(spacing) = self.pin_spacing {
            css.push(("margin-bottom", format!("{}px", fmt_num(spacing))));
        }
        css
    }
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}
