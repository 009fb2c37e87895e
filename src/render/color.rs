const SATURATION: f64 = 0.8;
const BRIGHTNESS: f64 = 0.9;

/// Stroke colour for an iteration: the hue advances 60 degrees per step.
pub fn iteration_color(iteration: usize) -> String {
    let hue = ((iteration as f64 * 60.0) % 360.0) / 360.0;
    let (r, g, b) = hsb_to_rgb(hue, SATURATION, BRIGHTNESS);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// HSB (all components in `[0, 1]`) to 8-bit RGB.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> (u8, u8, u8) {
    let to_byte = |v: f64| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

    if saturation == 0.0 {
        let v = to_byte(brightness);
        return (v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    (to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), (0, 0, 255));
        assert_eq!(hsb_to_rgb(0.5, 0.0, 0.5), (128, 128, 128));
    }

    #[test]
    fn test_iteration_colors_cycle() {
        assert_eq!(iteration_color(0), "#e62e2e");
        assert_eq!(iteration_color(6), iteration_color(0));
        assert_ne!(iteration_color(1), iteration_color(0));
    }
}
