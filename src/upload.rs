use rand::Rng;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Multipart field the cover image arrives under; also the filename prefix
/// for stored uploads.
pub const COVER_IMAGE_FIELD: &str = "coverImgurl";

/// Names an upload `<field>-<millis>-<random>.<ext>`, with the extension
/// taken from the declared content type's subtype.
pub fn unique_filename(field_name: &str, content_type: &str) -> String {
    let extension = content_type.split('/').nth(1).unwrap_or("bin");
    let timestamp = chrono::Utc::now().timestamp_millis();
    let unique_suffix = rand::thread_rng().gen_range(0..1_000_000_000u32);

    format!("{field_name}-{timestamp}-{unique_suffix}.{extension}")
}

pub async fn save(uploads_dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(uploads_dir).await?;

    let mut file = tokio::fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(uploads_dir.join(file_name))
        .await?;
    file.write_all(bytes).await?;
    file.flush().await?;

    Ok(())
}
