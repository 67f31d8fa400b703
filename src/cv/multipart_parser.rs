use actix_multipart::{Field, Multipart};
use futures::StreamExt;
use log::{debug, warn};

use crate::cv::image::{resolve_mime, CvImages, ImageAsset, ImageSlot};
use crate::cv::models::CandidateRecord;

#[derive(Debug)]
pub struct ParsedCvRequest {
    pub record: CandidateRecord,
    pub images: CvImages,
}

#[derive(Debug, thiserror::Error)]
pub enum MultipartParseError {
    #[error("Multipart field error: {0}")]
    FieldError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Invalid UTF-8 data: {0}")]
    Utf8Error(String),
    #[error("Invalid candidate data: {0}")]
    SerializationError(String),
}

pub struct MultipartParser;

impl MultipartParser {
    /// Read the `data` JSON field and the three image slots.
    ///
    /// Uploads that are not JPEG/PNG or exceed `max_file_bytes` leave their slot
    /// empty. A missing `data` field parses as `{}`; one longer than
    /// `max_data_bytes` fails the request.
    pub async fn parse_cv_multipart(
        mut multipart: Multipart,
        max_file_bytes: usize,
        max_data_bytes: usize,
    ) -> Result<ParsedCvRequest, MultipartParseError> {
        let mut data_json: Option<String> = None;
        let mut images = CvImages::default();

        while let Some(item) = multipart.next().await {
            let mut field = item.map_err(|e| MultipartParseError::FieldError(e.to_string()))?;
            let content_disposition = field
                .content_disposition()
                .ok_or_else(|| MultipartParseError::FieldError("Content disposition not found".to_string()))?;
            let name = content_disposition
                .get_name()
                .ok_or_else(|| MultipartParseError::FieldError("Field name not found".to_string()))?
                .to_string();
            let filename = content_disposition.get_filename().map(|s| s.to_string());

            if name == "data" {
                let (buffer, truncated) = read_field(&mut field, max_data_bytes).await?;
                if truncated {
                    return Err(MultipartParseError::SerializationError(format!(
                        "data field too large (limit {} bytes)",
                        max_data_bytes
                    )));
                }
                let value = String::from_utf8(buffer)
                    .map_err(|e| MultipartParseError::Utf8Error(e.to_string()))?;
                data_json = Some(value);
            } else if let Some(slot) = ImageSlot::from_field_name(&name) {
                let declared = field.content_type().map(|m| m.essence_str().to_string());
                let mime = resolve_mime(declared.as_deref(), filename.as_deref());
                let (buffer, truncated) = read_field(&mut field, max_file_bytes).await?;

                let image = if truncated {
                    None
                } else {
                    ImageAsset::accept(&mime, buffer, max_file_bytes)
                };

                match &image {
                    Some(img) => debug!("Accepted {} ({}, {} bytes)", name, img.mime_type, img.data.len()),
                    None => warn!("Rejected upload for {} (type {}); using placeholder", name, mime),
                }
                images.set(slot, image);
            } else {
                // Drain unknown fields so the stream can advance.
                read_field(&mut field, 0).await?;
            }
        }

        let record = parse_record(data_json.as_deref())?;
        Ok(ParsedCvRequest { record, images })
    }
}

/// Parse the `data` field, treating an absent or blank field as `{}`.
pub fn parse_record(data: Option<&str>) -> Result<CandidateRecord, MultipartParseError> {
    let json = match data {
        Some(s) if !s.trim().is_empty() => s,
        _ => "{}",
    };
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| MultipartParseError::SerializationError(e.to_string()))?;
    if !value.is_object() {
        return Err(MultipartParseError::SerializationError("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| MultipartParseError::SerializationError(e.to_string()))
}

/// Read a field to the end, keeping at most `limit` bytes.
///
/// Returns the buffer and whether the field was longer than `limit`.
async fn read_field(field: &mut Field, limit: usize) -> Result<(Vec<u8>, bool), MultipartParseError> {
    let mut buffer = Vec::new();
    let mut truncated = false;
    while let Some(chunk) = field.next().await {
        let data_chunk = chunk.map_err(|e| MultipartParseError::IoError(e.to_string()))?;
        if truncated {
            continue;
        }
        if buffer.len() + data_chunk.len() > limit {
            truncated = true;
            buffer.clear();
            continue;
        }
        buffer.extend_from_slice(&data_chunk);
    }
    Ok((buffer, truncated))
}
