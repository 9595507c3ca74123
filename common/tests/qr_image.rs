mod support;

use common::form::apply_import;
use common::import::parse_qr_json;
use common::model::FormState;
use common::photo::decode_qr_image;

use support::{blank_png, qr_png};

#[test]
fn reads_text_from_a_generated_code() {
    let text = r#"{"Name":"Ana","Email":"ana@example.com"}"#;
    let decoded = decode_qr_image(&qr_png(text)).unwrap();
    assert_eq!(decoded.as_deref(), Some(text));
}

#[test]
fn image_without_code_is_not_an_error() {
    assert_eq!(decode_qr_image(&blank_png()).unwrap(), None);
}

#[test]
fn scanned_code_feeds_the_form() {
    let text = r#"{"Name":"Ana","Phone":"0790000000"}"#;
    let decoded = decode_qr_image(&qr_png(text)).unwrap().unwrap();

    let mut form = FormState::default();
    apply_import(&mut form, parse_qr_json(&decoded)).unwrap();
    assert_eq!(form.name, "Ana");
    assert_eq!(form.phone, "0790000000");
    assert_eq!(form.email, "");
    assert_eq!(form.qr_code_data, text);
}
