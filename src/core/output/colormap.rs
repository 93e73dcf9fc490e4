use clap::ValueEnum;
use strum::{Display, EnumString};

/// Colormaps for colored LaTeX cells. Anchor tables are evenly spaced
/// samples of the matplotlib maps of the same name, interpolated linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Colormap {
    Viridis,
    Plasma,
    Magma,
    Inferno,
}

const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: [[u8; 3]; 10] = [
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

const MAGMA: [[u8; 3]; 10] = [
    [0x00, 0x00, 0x04],
    [0x18, 0x0f, 0x3d],
    [0x44, 0x0f, 0x76],
    [0x72, 0x1f, 0x81],
    [0x9e, 0x2f, 0x7f],
    [0xcd, 0x40, 0x71],
    [0xf1, 0x60, 0x5d],
    [0xfd, 0x96, 0x68],
    [0xfe, 0xca, 0x8d],
    [0xfc, 0xfd, 0xbf],
];

const INFERNO: [[u8; 3]; 10] = [
    [0x00, 0x00, 0x04],
    [0x1b, 0x0c, 0x41],
    [0x4a, 0x0c, 0x6b],
    [0x78, 0x1c, 0x6d],
    [0xa5, 0x2c, 0x60],
    [0xcf, 0x44, 0x46],
    [0xed, 0x69, 0x25],
    [0xfb, 0x9b, 0x06],
    [0xf7, 0xd0, 0x3c],
    [0xfc, 0xff, 0xa4],
];

impl Colormap {
    fn anchors(self) -> &'static [[u8; 3]; 10] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Plasma => &PLASMA,
            Colormap::Magma => &MAGMA,
            Colormap::Inferno => &INFERNO,
        }
    }

    /// RGB at t in [0, 1], interpolated between anchors. Out-of-range t is
    /// clamped.
    pub fn sample(self, t: f64) -> [f64; 3] {
        let anchors = self.anchors();
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (anchors.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        let hi = scaled.ceil() as usize;
        let frac = scaled - lo as f64;

        let mut rgb = [0.0; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            let a = anchors[lo][i] as f64 / 255.0;
            let b = anchors[hi][i] as f64 / 255.0;
            *channel = a + (b - a) * frac;
        }
        rgb
    }

    /// Hex color (no leading '#', uppercase) for a table cell background.
    /// Channels are pulled 30% toward white so black cell text stays
    /// readable on the dark end of the map.
    pub fn light_hex(self, t: f64) -> String {
        let [r, g, b] = self.sample(t).map(|c| 1.0 - ((1.0 - c) * 0.3));
        format!(
            "{:02X}{:02X}{:02X}",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn endpoints_hit_the_anchor_colors() {
        assert_eq!(Colormap::Viridis.sample(0.0), [
            0x44 as f64 / 255.0,
            0x01 as f64 / 255.0,
            0x54 as f64 / 255.0
        ]);
        assert_eq!(Colormap::Viridis.sample(1.0), [
            0xfd as f64 / 255.0,
            0xe7 as f64 / 255.0,
            0x25 as f64 / 255.0
        ]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(
            Colormap::Plasma.sample(-1.0),
            Colormap::Plasma.sample(0.0)
        );
        assert_eq!(Colormap::Plasma.sample(2.0), Colormap::Plasma.sample(1.0));
    }

    #[test]
    fn light_hex_is_lighter_than_the_raw_sample() {
        // The darkest magma anchor is near-black; the lightened version
        // must keep each channel at >= 70% of full white.
        let hex = Colormap::Magma.light_hex(0.0);
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap();
        assert!(r >= 178, "red channel {r} too dark in {hex}");
    }

    #[test]
    fn hex_output_is_six_uppercase_digits() {
        let hex = Colormap::Inferno.light_hex(0.5);
        assert_eq!(hex.len(), 6);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hex, hex.to_uppercase());
    }

    #[test]
    fn colormaps_parse_by_name() {
        assert_eq!("viridis".parse::<Colormap>().unwrap(), Colormap::Viridis);
        assert_eq!("magma".parse::<Colormap>().unwrap(), Colormap::Magma);
    }
}
