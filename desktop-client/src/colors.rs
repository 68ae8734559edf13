use eframe::egui;

/// Tail end of the body gradient: light green, fully transparent.
pub const GRADIENT_TAIL_COLOR: &str = "#3fff3f00";
pub const APPLE_COLOR: egui::Color32 = egui::Color32::RED;

const FALLBACK_COLOR: Rgba = Rgba {
    r: 0,
    g: 255,
    b: 0,
    a: 1.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn to_color32(self) -> egui::Color32 {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

/// Accepts `#RRGGBB` and `#RRGGBBAA`, the leading `#` is optional.
pub fn parse_hex_color(text: &str) -> Option<Rgba> {
    let hex = text.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        6 => Some(Rgba {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: 1.0,
        }),
        8 => Some(Rgba {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: channel(6)? as f32 / 255.0,
        }),
        _ => None,
    }
}

pub fn parse_hex_color_or_default(text: &str) -> Rgba {
    parse_hex_color(text).unwrap_or(FALLBACK_COLOR)
}

/// Linear blend from `from` (t = 0) to `to` (t = 1). Color channels are rounded, alpha is not.
pub fn blend(from: Rgba, to: Rgba, t: f32) -> Rgba {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgba {
        r: mix(from.r, to.r),
        g: mix(from.g, to.g),
        b: mix(from.b, to.b),
        a: from.a + (to.a - from.a) * t,
    }
}

pub fn segment_color(index: usize, len: usize, gradient: bool, accent: Rgba) -> Rgba {
    if !gradient {
        return accent;
    }
    let t = if len <= 1 {
        1.0
    } else {
        index as f32 / (len - 1) as f32
    };
    blend(parse_hex_color_or_default(GRADIENT_TAIL_COLOR), accent, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(
            parse_hex_color("#00ff00"),
            Some(Rgba {
                r: 0,
                g: 255,
                b: 0,
                a: 1.0
            })
        );
    }

    #[test]
    fn test_parse_rgba() {
        let color = parse_hex_color("#3fff3f00").unwrap();
        assert_eq!((color.r, color.g, color.b), (0x3f, 0xff, 0x3f));
        assert_eq!(color.a, 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hex_color("green"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color_or_default("nope"), FALLBACK_COLOR);
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let tail = parse_hex_color("#00000000").unwrap();
        let head = parse_hex_color("#ff6400").unwrap();

        assert_eq!(blend(tail, head, 0.0), tail);
        assert_eq!(blend(tail, head, 1.0), head);

        let mid = blend(tail, head, 0.5);
        assert_eq!((mid.r, mid.g, mid.b), (128, 50, 0));
        assert!((mid.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_gradient_runs_tail_to_head() {
        let accent = parse_hex_color("#00ff00").unwrap();
        let tail = segment_color(0, 5, true, accent);
        let head = segment_color(4, 5, true, accent);

        assert_eq!(tail.a, 0.0);
        assert_eq!(head, accent);
        assert_eq!(segment_color(0, 5, false, accent), accent);
        assert_eq!(segment_color(0, 1, true, accent), accent);
    }
}
