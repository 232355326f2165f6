use vitaline_common::error::HealthError;

/// One colour channel triple, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn from_hex(hex: &str) -> Result<Self, HealthError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix alone would let signs like "+1F" through.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HealthError::InvalidColour(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| HealthError::InvalidColour(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    fn lerp(self, other: Self, ratio: f32) -> Self {
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * ratio).round() as u8;

        Self::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
        )
    }
}

/// One anchor of a multi-colour gradient: a colour pinned at a normalized
/// position along the track.
#[derive(Debug, Clone, Copy)]
pub struct GradientStop {
    pub position: f32,
    pub color: Rgb,
}

/// An ordered list of gradient stops. Supports any number of stops >= 2;
/// callers must supply them sorted by ascending position.
#[derive(Debug, Clone)]
pub struct GradientScale {
    stops: Vec<GradientStop>,
}

impl GradientScale {
    pub fn new(stops: Vec<GradientStop>) -> Self {
        debug_assert!(stops.len() >= 2, "a gradient needs at least two stops");
        debug_assert!(
            stops
                .windows(2)
                .all(|pair| pair[0].position <= pair[1].position),
            "gradient stops must be sorted by position"
        );

        Self { stops }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Colour of the scale at a normalized position in [0, 1].
    ///
    /// Finds the pair of stops bracketing the position and interpolates each
    /// channel independently between them. Positions outside the first/last
    /// stop clamp to that stop's colour, so the pointer always agrees with
    /// the rendered track fill.
    pub fn color_at(&self, position: f32) -> Rgb {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];

        if position <= first.position {
            return first.color;
        }
        if position >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            // Strict bound so a position sitting on a stop resolves to the
            // segment starting there; with coincident stops the later one
            // wins.
            if position < upper.position {
                let span = upper.position - lower.position;
                // Coincident stops would divide by zero; the later stop wins.
                if span <= f32::EPSILON {
                    return upper.color;
                }
                let ratio = (position - lower.position) / span;
                return lower.color.lerp(upper.color, ratio);
            }
        }

        last.color
    }
}

/// The stops used for the health-score track: red through amber to green.
pub fn health_scale() -> GradientScale {
    GradientScale::new(vec![
        GradientStop {
            position: 0.0224,
            color: Rgb::new(0xFF, 0x80, 0x90),
        },
        GradientStop {
            position: 0.5137,
            color: Rgb::new(0xFF, 0xDA, 0x68),
        },
        GradientStop {
            position: 0.9582,
            color: Rgb::new(0x75, 0xDE, 0x8D),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three_stop_scale() -> GradientScale {
        GradientScale::new(vec![
            GradientStop {
                position: 0.0,
                color: Rgb::from_hex("#FF8090").unwrap(),
            },
            GradientStop {
                position: 0.5,
                color: Rgb::from_hex("#FFDA68").unwrap(),
            },
            GradientStop {
                position: 1.0,
                color: Rgb::from_hex("#75DE8D").unwrap(),
            },
        ])
    }

    #[test]
    fn endpoints_return_stop_colors() {
        let scale = three_stop_scale();
        assert_eq!(scale.color_at(0.0), Rgb::new(0xFF, 0x80, 0x90));
        assert_eq!(scale.color_at(1.0), Rgb::new(0x75, 0xDE, 0x8D));
    }

    #[test]
    fn quarter_is_exact_midpoint_of_first_segment() {
        // ratio = (0.25 - 0.0) / (0.5 - 0.0) = 0.5, per channel:
        // R: 255 + (255 - 255) * 0.5 = 255
        // G: 128 + (218 - 128) * 0.5 = 173
        // B: 144 + (104 - 144) * 0.5 = 124
        let scale = three_stop_scale();
        assert_eq!(scale.color_at(0.25), Rgb::new(255, 173, 124));
        assert_eq!(scale.color_at(0.25).to_hex(), "#FFAD7C");
    }

    #[test]
    fn positions_outside_range_clamp_to_end_stops() {
        let scale = health_scale();
        assert_eq!(scale.color_at(-0.5), scale.stops()[0].color);
        assert_eq!(scale.color_at(0.0), scale.stops()[0].color);
        assert_eq!(scale.color_at(0.01), scale.stops()[0].color);
        assert_eq!(scale.color_at(1.0), scale.stops()[2].color);
        assert_eq!(scale.color_at(2.0), scale.stops()[2].color);
    }

    #[test]
    fn coincident_stops_return_later_color() {
        let scale = GradientScale::new(vec![
            GradientStop {
                position: 0.0,
                color: Rgb::new(10, 10, 10),
            },
            GradientStop {
                position: 0.5,
                color: Rgb::new(100, 100, 100),
            },
            GradientStop {
                position: 0.5,
                color: Rgb::new(200, 200, 200),
            },
            GradientStop {
                position: 1.0,
                color: Rgb::new(250, 250, 250),
            },
        ]);

        assert_eq!(scale.color_at(0.5), Rgb::new(200, 200, 200));
    }

    #[test]
    fn position_on_a_stop_returns_that_stop_color() {
        let scale = three_stop_scale();
        assert_eq!(scale.color_at(0.5), Rgb::new(0xFF, 0xDA, 0x68));
    }

    #[test]
    fn scale_is_continuous_between_samples() {
        let scale = health_scale();
        let steps = 256;
        for i in 1..steps {
            let previous = scale.color_at((i - 1) as f32 / (steps - 1) as f32);
            let current = scale.color_at(i as f32 / (steps - 1) as f32);
            for (a, b) in [
                (previous.red, current.red),
                (previous.green, current.green),
                (previous.blue, current.blue),
            ] {
                assert!((a as i32 - b as i32).abs() <= 5);
            }
        }
    }

    #[test]
    fn hex_parsing_round_trips() {
        let color = Rgb::from_hex("#FFDA68").unwrap();
        assert_eq!(color, Rgb::new(0xFF, 0xDA, 0x68));
        assert_eq!(color.to_hex(), "#FFDA68");
        assert_eq!(Rgb::from_hex("75DE8D").unwrap(), Rgb::new(0x75, 0xDE, 0x8D));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("#+1+2+3").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    proptest! {
        #[test]
        fn color_at_matches_clamped_position(position in -1.0f32..2.0) {
            let scale = health_scale();
            let clamped = position.clamp(0.0224, 0.9582);
            prop_assert_eq!(scale.color_at(position), scale.color_at(clamped));
        }

        #[test]
        fn interpolation_stays_within_bracket_channels(position in 0.0f32..=1.0) {
            let scale = three_stop_scale();
            let color = scale.color_at(position);
            let (lo, hi) = if position <= 0.5 {
                (scale.stops()[0].color, scale.stops()[1].color)
            } else {
                (scale.stops()[1].color, scale.stops()[2].color)
            };
            for (c, a, b) in [
                (color.red, lo.red, hi.red),
                (color.green, lo.green, hi.green),
                (color.blue, lo.blue, hi.blue),
            ] {
                prop_assert!(c >= a.min(b) && c <= a.max(b));
            }
        }
    }
}
