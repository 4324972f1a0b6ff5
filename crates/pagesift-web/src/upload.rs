use axum::extract::Multipart;

/// An uploaded document with its metadata.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse a multipart form upload, returning the `file` field if present.
///
/// `Ok(None)` means the form carried no `file` field at all. The document
/// bytes are passed through opaquely — whether they are a usable PDF is for
/// the extraction backends to decide.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<Option<UploadedFile>, String> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("failed to read form field: {e}"))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("failed to read file data: {e}"))?
                    .to_vec();

                file = Some(UploadedFile { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    Ok(file)
}
