use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use thiserror::Error;

/// A response body decoded to UTF-8, with the encoding that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("could not decode page as {0}")]
    Garbled(String),
}

/// Decode raw response bytes into UTF-8.
///
/// Encoding precedence: BOM, then the Content-Type charset parameter, then
/// `chardetng` detection over the full body.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedPage, DecodeError> {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return decode_as(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(header_charset) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return decode_as(bytes, encoding);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_as(bytes, detector.guess(None, true))
}

/// Pulls the `charset` parameter out of a Content-Type header value.
fn header_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches(|c| c == '"' || c == '\''))
        } else {
            None
        }
    })
}

fn decode_as(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedPage, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Garbled(encoding.name().to_string()));
    }
    Ok(DecodedPage {
        html: text.into_owned(),
        encoding: encoding.name().to_string(),
    })
}
