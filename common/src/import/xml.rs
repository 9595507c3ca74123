use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{CardError, Result};
use crate::model::ImportPayload;
use crate::photo::jpeg_data_uri;

/// Reads the first occurrence of each card tag anywhere in the document.
pub fn parse_xml(content: &str) -> Result<ImportPayload> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options)
        .map_err(|e| CardError::MalformedImport(format!("unreadable XML: {}", e)))?;

    let text_of = |tag: &str| -> Result<String> {
        doc.descendants()
            .find(|node| node.has_tag_name(tag))
            .map(text_content)
            .ok_or_else(|| CardError::MalformedImport(format!("missing <{}> element", tag)))
    };

    Ok(ImportPayload {
        name: Some(text_of("name")?),
        gender: Some(text_of("gender")?),
        date_of_birth: Some(text_of("dateOfBirth")?),
        email: Some(text_of("email")?),
        phone: Some(text_of("phone")?),
        address: Some(text_of("address")?),
        photo: Some(jpeg_data_uri(&text_of("photo")?)),
        qr_code_data: None,
    })
}

/// Concatenated text of every descendant text node, like DOM `textContent`.
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
