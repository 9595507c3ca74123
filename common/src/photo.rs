//! Photo handling: upload validation, data URIs and QR extraction from images.

use base64::{engine::general_purpose, Engine as _};

use crate::error::{CardError, Result};

/// Largest accepted photo upload (1 MiB, inclusive).
pub const MAX_PHOTO_BYTES: u64 = 1_048_576;

pub const ACCEPTED_PHOTO_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

const JPEG_MIME: &str = "image/jpeg";
const BASE64_MARKER: &str = ";base64,";

/// Checks a selected photo before anything is read. Size is checked first.
pub fn validate_photo(size: u64, mime: &str) -> Result<()> {
    if size > MAX_PHOTO_BYTES {
        return Err(CardError::OversizeFile { size });
    }
    if !ACCEPTED_PHOTO_TYPES.contains(&mime) {
        return Err(CardError::UnsupportedType(mime.to_string()));
    }
    Ok(())
}

/// Validates the photo and encodes it as a data URI with its own MIME type.
pub fn encode_photo(mime: &str, bytes: &[u8]) -> Result<String> {
    validate_photo(bytes.len() as u64, mime)?;
    Ok(to_data_uri(mime, &general_purpose::STANDARD.encode(bytes)))
}

pub fn to_data_uri(mime: &str, base64: &str) -> String {
    format!("data:{}{}{}", mime, BASE64_MARKER, base64)
}

/// Imported and listed photos are always presented as JPEG.
pub fn jpeg_data_uri(base64: &str) -> String {
    to_data_uri(JPEG_MIME, base64)
}

/// Returns the raw base64 of a data URI. Values without a `data:...;base64,`
/// prefix come back unchanged.
pub fn strip_data_uri(value: &str) -> &str {
    if !value.starts_with("data:") {
        return value;
    }
    match value.find(BASE64_MARKER) {
        Some(pos) => &value[pos + BASE64_MARKER.len()..],
        None => value,
    }
}

/// Looks for a QR code in an uploaded image.
///
/// `Ok(None)` means the image was readable but carried no decodable code.
pub fn decode_qr_image(bytes: &[u8]) -> Result<Option<String>> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| CardError::UnsupportedType(e.to_string()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            luma.get_pixel(x as u32, y as u32).0[0]
        });

    Ok(prepared
        .detect_grids()
        .iter()
        .find_map(|grid| grid.decode().ok().map(|(_, content)| content)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate_photo(MAX_PHOTO_BYTES, "image/png").is_ok());
        assert_eq!(
            validate_photo(MAX_PHOTO_BYTES + 1, "image/png"),
            Err(CardError::OversizeFile {
                size: MAX_PHOTO_BYTES + 1
            })
        );
    }

    #[test]
    fn size_is_checked_before_type() {
        assert!(matches!(
            validate_photo(MAX_PHOTO_BYTES + 1, "image/gif"),
            Err(CardError::OversizeFile { .. })
        ));
    }

    #[test]
    fn only_jpeg_and_png_are_accepted() {
        assert!(validate_photo(10, "image/jpeg").is_ok());
        assert_eq!(
            validate_photo(10, "image/gif"),
            Err(CardError::UnsupportedType("image/gif".into()))
        );
        assert!(validate_photo(10, "").is_err());
    }

    #[test]
    fn encodes_with_the_upload_mime_type() {
        assert_eq!(
            encode_photo("image/png", b"abc").unwrap(),
            "data:image/png;base64,YWJj"
        );
    }

    #[test]
    fn strip_handles_any_image_prefix() {
        assert_eq!(strip_data_uri("data:image/png;base64,YWJj"), "YWJj");
        assert_eq!(strip_data_uri(&jpeg_data_uri("QUJD")), "QUJD");
        assert_eq!(strip_data_uri("YWJj"), "YWJj");
        assert_eq!(strip_data_uri("data:text/plain,hello"), "data:text/plain,hello");
    }

    #[test]
    fn garbage_bytes_are_not_an_image() {
        assert!(matches!(
            decode_qr_image(b"definitely not a png"),
            Err(CardError::UnsupportedType(_))
        ));
    }
}
