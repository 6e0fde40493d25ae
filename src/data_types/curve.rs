use gpui::{rgb, Hsla};

/// Named entries of the ten-color tab palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TabColor {
    Blue,
    Orange,
    Green,
    Red,
    Purple,
    Brown,
    Pink,
    Gray,
    Olive,
    Cyan,
}

impl TabColor {
    pub fn hsla(self) -> Hsla {
        let hex = match self {
            TabColor::Blue => 0x1f77b4,
            TabColor::Orange => 0xff7f0e,
            TabColor::Green => 0x2ca02c,
            TabColor::Red => 0xd62728,
            TabColor::Purple => 0x9467bd,
            TabColor::Brown => 0x8c564b,
            TabColor::Pink => 0xe377c2,
            TabColor::Gray => 0x7f7f7f,
            TabColor::Olive => 0xbcbd22,
            TabColor::Cyan => 0x17becf,
        };
        Hsla::from(rgb(hex))
    }

    /// Parses tokens such as `"tab:blue"` or `"red"`.
    pub fn from_token(token: &str) -> Option<Self> {
        let name = token.strip_prefix("tab:").unwrap_or(token);
        Some(match name.to_ascii_lowercase().as_str() {
            "blue" => TabColor::Blue,
            "orange" => TabColor::Orange,
            "green" => TabColor::Green,
            "red" => TabColor::Red,
            "purple" => TabColor::Purple,
            "brown" => TabColor::Brown,
            "pink" => TabColor::Pink,
            "gray" | "grey" => TabColor::Gray,
            "olive" => TabColor::Olive,
            "cyan" => TabColor::Cyan,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CurveColor {
    /// Picked from the theme palette by the curve's position in its panel.
    #[default]
    Auto,
    Tab(TabColor),
    Custom(Hsla),
}

impl From<TabColor> for CurveColor {
    fn from(color: TabColor) -> Self {
        CurveColor::Tab(color)
    }
}

impl From<Hsla> for CurveColor {
    fn from(color: Hsla) -> Self {
        CurveColor::Custom(color)
    }
}

/// One labeled series sampled on its panel's axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub label: String,
    pub color: CurveColor,
    pub series: Vec<f64>,
    pub visible: bool,
}

impl Curve {
    pub fn new(label: impl Into<String>, series: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            color: CurveColor::Auto,
            series,
            visible: true,
        }
    }

    pub fn with_color(mut self, color: impl Into<CurveColor>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Finite (min, max) of the samples, if any.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
