//! `reqwest`-backed [`Transport`]. On wasm32 reqwest rides on `fetch`.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

use crate::error::ApiError;
use crate::transport::{ApiRequest, FormPart, RawResponse, RequestBody, Transport};

/// Sends requests to a fixed base URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Transport(format!("invalid base URL {}: {e}", self.base_url)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Transport(format!("base URL cannot hold a path: {}", self.base_url)))?;
            segments.pop_if_empty();
            segments.extend(&request.segments);
        }
        Ok(url)
    }
}

fn multipart_form(parts: &[FormPart]) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
            FormPart::File { name, upload } => {
                let file = Part::bytes(upload.bytes.clone())
                    .file_name(upload.file_name.clone())
                    .mime_str(&upload.mime)
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                form.part(name.clone(), file)
            }
        };
    }
    Ok(form)
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let url = self.url(request)?;
        let mut builder = self.client.request(request.method.clone(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder = match &request.body {
            RequestBody::Empty => builder.header(CONTENT_TYPE, "application/json"),
            RequestBody::Json(body) => builder.json(body),
            // The boundary is set by the form; no explicit content type.
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_and_encodes_segments() {
        let transport = HttpTransport::new("https://api.example.com/");
        let request = ApiRequest::delete("/private/admin/hotel").segment("12 34");
        let url = transport.url(&request).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/private/admin/hotel/12%2034");
    }

    #[test]
    fn test_url_without_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:8080");
        let url = transport.url(&ApiRequest::post("/auth/login")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/auth/login");
    }

    #[test]
    fn test_invalid_base_url() {
        let transport = HttpTransport::new("not a url");
        assert!(matches!(
            transport.url(&ApiRequest::get("/hotel")),
            Err(ApiError::Transport(_))
        ));
    }
}
