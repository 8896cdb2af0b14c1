use api::Upload;
use dioxus::prelude::*;

use crate::forms::admin::mime_from_name;

/// Read every file selected in a file `<input>`.
///
/// Files the browser cannot read are logged and skipped. A missing content
/// type is guessed from the file name.
pub async fn read_uploads(evt: FormEvent) -> Vec<Upload> {
    let mut uploads = Vec::new();
    for file in evt.files() {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let mime = file
                    .content_type()
                    .filter(|mime| !mime.is_empty())
                    .unwrap_or_else(|| mime_from_name(&name).to_string());
                uploads.push(Upload::new(name, mime, bytes.to_vec()));
            }
            Err(err) => tracing::warn!(file = %name, "could not read selected file: {err}"),
        }
    }
    uploads
}
