//! services/pixel.rs
//! GIF transparente de 1x1 que se devuelve en cada descarga del pixel.

use bytes::Bytes;

pub const PIXEL_CONTENT_TYPE: &str = "image/gif";

const TRANSPARENT_GIF: [u8; 43] = [
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0xFF, 0xFF,
    0xFF, 0x00, 0x00, 0x00, 0x21, 0xF9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2C, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3B,
];

pub fn transparent_pixel() -> Bytes {
    Bytes::from_static(&TRANSPARENT_GIF)
}
