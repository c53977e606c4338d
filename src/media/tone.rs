// SPDX-License-Identifier: GPL-3.0-only

//! Exposure compensation and white balance
//!
//! Both adjustments are gains in linear light. They are folded into one
//! lookup table per channel so a full-resolution capture costs a single pass.

use image::RgbaImage;

/// Reference temperature that maps to neutral gains
pub const REFERENCE_KELVIN: u32 = 5500;

/// Approximate sRGB color of a black body at `kelvin`, channels in 0..1
pub fn kelvin_to_rgb(kelvin: u32) -> [f32; 3] {
    let t = kelvin.clamp(1000, 40000) as f32 / 100.0;

    let r = if t <= 66.0 {
        255.0
    } else {
        329.698_73 * (t - 60.0).powf(-0.133_204_76)
    };
    let g = if t <= 66.0 {
        99.470_8 * t.ln() - 161.119_57
    } else {
        288.122_16 * (t - 60.0).powf(-0.075_514_846)
    };
    let b = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.517_73 * (t - 10.0).ln() - 305.044_8
    };

    [
        (r / 255.0).clamp(0.0, 1.0),
        (g / 255.0).clamp(0.0, 1.0),
        (b / 255.0).clamp(0.0, 1.0),
    ]
}

/// Channel gains that neutralize a light source at `kelvin`, green normalized to 1
pub fn white_balance_gains(kelvin: u32) -> [f32; 3] {
    let reference = kelvin_to_rgb(REFERENCE_KELVIN);
    let source = kelvin_to_rgb(kelvin);

    let mut gains = [1.0f32; 3];
    for c in 0..3 {
        gains[c] = reference[c] / source[c].max(1e-3);
    }
    let green = gains[1];
    gains.map(|g| g / green)
}

fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Per-channel lookup tables for a combined exposure and white balance gain
#[derive(Debug, Clone)]
pub struct ToneTables {
    tables: [[u8; 256]; 3],
    identity: bool,
}

impl ToneTables {
    /// Build tables for `2^ev` exposure compensation combined with `gains`
    pub fn new(ev: f32, gains: [f32; 3]) -> Self {
        let exposure = 2f32.powf(ev);
        let identity = ev == 0.0 && gains.iter().all(|g| (g - 1.0).abs() < 1e-6);

        let mut tables = [[0u8; 256]; 3];
        for (c, table) in tables.iter_mut().enumerate() {
            let gain = exposure * gains[c];
            for (i, out) in table.iter_mut().enumerate() {
                let linear = srgb_to_linear(i as f32 / 255.0) * gain;
                *out = (linear_to_srgb(linear.clamp(0.0, 1.0)) * 255.0).round() as u8;
            }
        }

        Self { tables, identity }
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn map(&self, rgb: [u8; 3]) -> [u8; 3] {
        [
            self.tables[0][rgb[0] as usize],
            self.tables[1][rgb[1] as usize],
            self.tables[2][rgb[2] as usize],
        ]
    }

    pub fn apply(&self, image: &mut RgbaImage) {
        if self.identity {
            return;
        }
        for pixel in image.pixels_mut() {
            let [r, g, b] = self.map([pixel[0], pixel[1], pixel[2]]);
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_temperature_is_neutral() {
        let gains = white_balance_gains(REFERENCE_KELVIN);
        for g in gains {
            assert!((g - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn tungsten_boosts_blue() {
        let gains = white_balance_gains(3200);
        assert!(gains[2] > 1.2);
        assert!(gains[0] < 1.0);
        assert_eq!(gains[1], 1.0);
    }

    #[test]
    fn cloudy_warms_the_image() {
        let gains = white_balance_gains(6500);
        assert!(gains[0] > gains[2]);
    }

    #[test]
    fn zero_ev_neutral_gains_is_identity() {
        let tables = ToneTables::new(0.0, [1.0; 3]);
        assert!(tables.is_identity());
        assert_eq!(tables.map([0, 128, 255]), [0, 128, 255]);
    }

    #[test]
    fn positive_ev_brightens() {
        let tables = ToneTables::new(1.0, [1.0; 3]);
        let [r, _, _] = tables.map([100, 100, 100]);
        assert!(r > 100);
        assert_eq!(tables.map([255, 255, 255]), [255, 255, 255]);
    }

    #[test]
    fn negative_ev_darkens() {
        let tables = ToneTables::new(-1.0, [1.0; 3]);
        let [r, _, _] = tables.map([200, 200, 200]);
        assert!(r < 200);
    }
}
