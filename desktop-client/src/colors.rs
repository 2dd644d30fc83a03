use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::BLACK;
pub const FOOD: egui::Color32 = egui::Color32::from_rgb(0xE0, 0x30, 0x30);
pub const SCORE_TEXT: egui::Color32 = egui::Color32::GREEN;
pub const GAME_OVER_TEXT: egui::Color32 = egui::Color32::RED;
pub const WIN_TEXT: egui::Color32 = egui::Color32::GOLD;

const SNAKE_HUE: f32 = 120.0;

/// Green shade for the `index`-th segment of a snake of `len` cells; the head is brightest.
pub fn segment_color(index: usize, len: usize) -> egui::Color32 {
    let fade = if len > 1 {
        index as f32 / (len - 1) as f32
    } else {
        0.0
    };
    hsl_to_color(SNAKE_HUE, 0.8, 0.55 - 0.25 * fade)
}

pub fn hsl_to_color(hue: f32, saturation: f32, lightness: f32) -> egui::Color32 {
    let hue = hue.rem_euclid(360.0);
    let c = (1.0_f32 - (2.0_f32 * lightness - 1.0_f32).abs()) * saturation;
    let x = c * (1.0_f32 - ((hue / 60.0_f32) % 2.0_f32 - 1.0_f32).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    egui::Color32::from_rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_green() {
        assert_eq!(hsl_to_color(120.0, 1.0, 0.5), egui::Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn test_head_is_brighter_than_tail() {
        let head = segment_color(0, 10);
        let tail = segment_color(9, 10);
        assert!(head.g() > tail.g());
        assert_eq!(segment_color(0, 1), head);
    }
}
