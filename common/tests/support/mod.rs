#![allow(dead_code)]

use std::io::Cursor;

use common::model::BusinessCard;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};

/// Pixels per QR module in generated fixtures.
const MODULE_PX: u32 = 8;
/// Quiet zone around the symbol, in modules.
const QUIET_ZONE: u32 = 4;

pub fn sample_card(id: i64, name: &str, gender: &str) -> BusinessCard {
    BusinessCard {
        id: Some(id),
        name: name.to_string(),
        gender: gender.to_string(),
        date_of_birth: "1990-01-31T00:00:00".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "0790000000".to_string(),
        address: "Amman".to_string(),
        photo_base64: "iVBORw0KGgo=".to_string(),
    }
}

/// Renders `data` as a QR code and returns the PNG bytes.
pub fn qr_png(data: &str) -> Vec<u8> {
    let code = QrCode::new(data.as_bytes()).expect("QR data should fit");
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * MODULE_PX;

    let img = GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / MODULE_PX) as i64 - QUIET_ZONE as i64;
        let my = (y / MODULE_PX) as i64 - QUIET_ZONE as i64;
        let inside = (0..modules as i64).contains(&mx) && (0..modules as i64).contains(&my);
        if inside && colors[(my as u32 * modules + mx as u32) as usize] == Color::Dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    encode_png(DynamicImage::ImageLuma8(img))
}

/// A plain white PNG with nothing to detect.
pub fn blank_png() -> Vec<u8> {
    encode_png(DynamicImage::ImageLuma8(GrayImage::from_pixel(
        120,
        120,
        Luma([255u8]),
    )))
}

fn encode_png(img: DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding should not fail");
    bytes
}
