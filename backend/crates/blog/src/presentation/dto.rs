//! Form Intake
//!
//! The article form is multipart (it can carry an image); the comment
//! form is ordinary urlencoded.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use serde::Deserialize;

use crate::error::{BlogError, BlogResult};

/// Comment form
#[derive(Debug, Clone, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub content: String,
}

/// Fields collected from the multipart article form
#[derive(Debug, Default)]
pub struct ArticleFormData {
    pub title: String,
    pub content: String,
    /// Raw comma-separated tag string, exactly as typed
    pub tags: String,
    /// `(original file name, bytes)`; `None` when no file was chosen
    pub image: Option<(String, Vec<u8>)>,
}

/// Drain the multipart stream into [`ArticleFormData`].
///
/// An empty file input (no file chosen) is treated as "no image".
/// Unknown fields are ignored.
pub async fn parse_article_form(mut multipart: Multipart) -> BlogResult<ArticleFormData> {
    let mut form = ArticleFormData::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => form.title = field.text().await.map_err(bad_form)?,
            "content" => form.content = field.text().await.map_err(bad_form)?,
            "tags" => form.tags = field.text().await.map_err(bad_form)?,
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(bad_form)?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    form.image = Some((file_name, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn bad_form(err: MultipartError) -> BlogError {
    BlogError::Validation(format!("Invalid form data: {err}"))
}
