//! The ANGEL color palette used by PHITS graphical output, with RGB values
//! for visualization.

use serde::{Deserialize, Serialize};

/// An RGB triple, components 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0.0..=1.0, the convention most renderers expect.
    pub fn to_unit(&self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 128, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const GRAY: Rgb = Rgb::new(169, 169, 169);

/// A color name recognized by the ANGEL plotter.
///
/// Each name maps to a display RGB for visualization; the exporter writes the
/// lowercase name into the `[ Mat Name Color ]` legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngelColor {
    White,
    LightGray,
    Gray,
    DarkGray,
    MatBlack,
    Black,
    DarkRed,
    Red,
    Pink,
    PastelPink,
    Orange,
    Brown,
    DarkBrown,
    PastelBrown,
    OrangeYellow,
    Camel,
    PastelYellow,
    Yellow,
    PastelGreen,
    YellowGreen,
    Green,
    DarkGreen,
    MossGreen,
    BlueGreen,
    PastelCyan,
    PastelBlue,
    Cyan,
    CyanBlue,
    Blue,
    Violet,
    Purple,
    Magenta,
    WineRed,
    PastelMagenta,
    PastelPurple,
    PastelViolet,
}

impl AngelColor {
    /// Every palette entry, in ANGEL table order.
    pub const ALL: [AngelColor; 36] = [
        AngelColor::White,
        AngelColor::LightGray,
        AngelColor::Gray,
        AngelColor::DarkGray,
        AngelColor::MatBlack,
        AngelColor::Black,
        AngelColor::DarkRed,
        AngelColor::Red,
        AngelColor::Pink,
        AngelColor::PastelPink,
        AngelColor::Orange,
        AngelColor::Brown,
        AngelColor::DarkBrown,
        AngelColor::PastelBrown,
        AngelColor::OrangeYellow,
        AngelColor::Camel,
        AngelColor::PastelYellow,
        AngelColor::Yellow,
        AngelColor::PastelGreen,
        AngelColor::YellowGreen,
        AngelColor::Green,
        AngelColor::DarkGreen,
        AngelColor::MossGreen,
        AngelColor::BlueGreen,
        AngelColor::PastelCyan,
        AngelColor::PastelBlue,
        AngelColor::Cyan,
        AngelColor::CyanBlue,
        AngelColor::Blue,
        AngelColor::Violet,
        AngelColor::Purple,
        AngelColor::Magenta,
        AngelColor::WineRed,
        AngelColor::PastelMagenta,
        AngelColor::PastelPurple,
        AngelColor::PastelViolet,
    ];

    /// The lowercase name ANGEL expects in input decks.
    pub fn name(&self) -> &'static str {
        match self {
            AngelColor::White => "white",
            AngelColor::LightGray => "lightgray",
            AngelColor::Gray => "gray",
            AngelColor::DarkGray => "darkgray",
            AngelColor::MatBlack => "matblack",
            AngelColor::Black => "black",
            AngelColor::DarkRed => "darkred",
            AngelColor::Red => "red",
            AngelColor::Pink => "pink",
            AngelColor::PastelPink => "pastelpink",
            AngelColor::Orange => "orange",
            AngelColor::Brown => "brown",
            AngelColor::DarkBrown => "darkbrown",
            AngelColor::PastelBrown => "pastelbrown",
            AngelColor::OrangeYellow => "orangeyellow",
            AngelColor::Camel => "camel",
            AngelColor::PastelYellow => "pastelyellow",
            AngelColor::Yellow => "yellow",
            AngelColor::PastelGreen => "pastelgreen",
            AngelColor::YellowGreen => "yellowgreen",
            AngelColor::Green => "green",
            AngelColor::DarkGreen => "darkgreen",
            AngelColor::MossGreen => "mossgreen",
            AngelColor::BlueGreen => "bluegreen",
            AngelColor::PastelCyan => "pastelcyan",
            AngelColor::PastelBlue => "pastelblue",
            AngelColor::Cyan => "cyan",
            AngelColor::CyanBlue => "cyanblue",
            AngelColor::Blue => "blue",
            AngelColor::Violet => "violet",
            AngelColor::Purple => "purple",
            AngelColor::Magenta => "magenta",
            AngelColor::WineRed => "winered",
            AngelColor::PastelMagenta => "pastelmagenta",
            AngelColor::PastelPurple => "pastelpurple",
            AngelColor::PastelViolet => "pastelviolet",
        }
    }

    /// Look a palette entry up by its ANGEL name.
    pub fn from_name(name: &str) -> Option<AngelColor> {
        AngelColor::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Display RGB for visualization. Some ANGEL names intentionally map to
    /// a nearby displayable shade (e.g. `matblack` renders as dim gray so it
    /// stays distinguishable from `black`).
    pub fn rgb(&self) -> Rgb {
        match self {
            AngelColor::White => Rgb::new(255, 255, 255),
            AngelColor::LightGray => Rgb::new(211, 211, 211),
            AngelColor::Gray => Rgb::new(169, 169, 169),
            AngelColor::DarkGray => Rgb::new(128, 128, 128),
            AngelColor::MatBlack => Rgb::new(105, 105, 105),
            AngelColor::Black => Rgb::new(0, 0, 0),
            AngelColor::DarkRed => Rgb::new(139, 0, 0),
            AngelColor::Red => RED,
            AngelColor::Pink => Rgb::new(219, 112, 147),
            AngelColor::PastelPink => Rgb::new(255, 222, 173),
            AngelColor::Orange => Rgb::new(255, 140, 0),
            AngelColor::Brown => Rgb::new(139, 69, 19),
            AngelColor::DarkBrown => Rgb::new(51, 25, 0),
            AngelColor::PastelBrown => Rgb::new(131, 105, 83),
            AngelColor::OrangeYellow => Rgb::new(255, 215, 0),
            AngelColor::Camel => Rgb::new(128, 128, 0),
            AngelColor::PastelYellow => Rgb::new(255, 255, 153),
            AngelColor::Yellow => Rgb::new(255, 255, 0),
            AngelColor::PastelGreen => Rgb::new(204, 255, 153),
            AngelColor::YellowGreen => Rgb::new(178, 255, 102),
            AngelColor::Green => GREEN,
            AngelColor::DarkGreen => Rgb::new(0, 102, 0),
            AngelColor::MossGreen => Rgb::new(0, 51, 0),
            AngelColor::BlueGreen => Rgb::new(0, 255, 128),
            AngelColor::PastelCyan => Rgb::new(153, 255, 255),
            AngelColor::PastelBlue => Rgb::new(153, 204, 255),
            AngelColor::Cyan => Rgb::new(0, 255, 255),
            AngelColor::CyanBlue => Rgb::new(0, 102, 102),
            AngelColor::Blue => BLUE,
            AngelColor::Violet => Rgb::new(148, 0, 211),
            AngelColor::Purple => Rgb::new(128, 0, 128),
            AngelColor::Magenta => Rgb::new(255, 0, 255),
            AngelColor::WineRed => Rgb::new(128, 0, 0),
            AngelColor::PastelMagenta => Rgb::new(238, 130, 238),
            AngelColor::PastelPurple => Rgb::new(75, 0, 130),
            AngelColor::PastelViolet => Rgb::new(204, 153, 255),
        }
    }

    /// Deterministic default for the n-th created material. Cycles through
    /// the palette so consecutive materials get distinct colors.
    pub fn cycle(index: usize) -> AngelColor {
        AngelColor::ALL[index % AngelColor::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for color in AngelColor::ALL {
            assert_eq!(AngelColor::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn unit_components_scale_to_one() {
        assert_eq!(BLUE.to_unit(), [0.0, 0.0, 1.0]);
        assert_eq!(Rgb::new(255, 255, 255).to_unit(), [1.0, 1.0, 1.0]);
        let [r, g, b] = AngelColor::Gray.rgb().to_unit();
        assert!(r == g && g == b && r > 0.0 && r < 1.0);
    }

    #[test]
    fn cycle_wraps_around() {
        assert_eq!(AngelColor::cycle(0), AngelColor::White);
        assert_eq!(AngelColor::cycle(36), AngelColor::White);
        assert_eq!(AngelColor::cycle(37), AngelColor::LightGray);
    }
}
