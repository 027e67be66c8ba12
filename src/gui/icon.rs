// src/gui/icon.rs
//
// Window icon painted in code: a tiny field with end zones and yard lines.

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 32;

const TURF: Rgba<u8> = Rgba([46, 125, 50, 255]);
const HOME_ENDZONE: Rgba<u8> = Rgba([21, 101, 192, 255]);
const AWAY_ENDZONE: Rgba<u8> = Rgba([198, 40, 40, 255]);
const LINE: Rgba<u8> = Rgba([240, 240, 240, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub fn field_image(size: u32) -> RgbaImage {
    let band = size / 10; // 10% end zones
    let top = size / 4;
    let bottom = size - size / 4;

    RgbaImage::from_fn(size, size, |x, y| {
        if y < top || y >= bottom {
            CLEAR
        } else if x < band {
            HOME_ENDZONE
        } else if x >= size - band {
            AWAY_ENDZONE
        } else if band > 0 && (x - band) % band == 0 {
            LINE
        } else {
            TURF
        }
    })
}

pub fn app_icon() -> IconData {
    let img = field_image(SIZE);
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}
