//! RemoteStore client: one async function per backend operation.
//!
//! This layer is pure transport. Every response body is decoded into a typed
//! schema from `common::responses`; a transport failure, a non-2xx status, or
//! a body that does not match its schema all surface as `UiError::Network`
//! (`UiError::Auth` for the login/sign-up exchange). Callers are expected to
//! have validated their inputs already; nothing here retries or batches.

use gloo_net::http::Request;

use common::model::label::Label;
use common::model::session::Session;
use common::requests::{
    AssociateLabelsRequest, CreateLabelRequest, DeleteImagesRequest, DeleteLabelsRequest,
    LoginRequest, RegisterRequest,
};
use common::responses::{ErrorResponse, ImagesResponse, LabelsResponse, MessageResponse};

use crate::config::api_base;
use crate::error::UiError;

fn transport(err: gloo_net::Error) -> UiError {
    UiError::Network(err.to_string())
}

fn status(resp: &gloo_net::http::Response) -> UiError {
    UiError::Network(format!("server answered with status {}", resp.status()))
}

/// URL serving the raw bytes of one image, for `<img src=...>`.
pub fn image_url(name: &str) -> String {
    format!("{}/images/{}", api_base(), name)
}

pub async fn list_images() -> Result<Vec<String>, UiError> {
    let resp = Request::get(&format!("{}/images", api_base()))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status(&resp));
    }
    let body: ImagesResponse = resp.json().await.map_err(transport)?;
    Ok(body.images)
}

pub async fn list_labels() -> Result<Vec<Label>, UiError> {
    let resp = Request::get(&format!("{}/api/labels", api_base()))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status(&resp));
    }
    let body: LabelsResponse = resp.json().await.map_err(transport)?;
    Ok(body.labels)
}

pub async fn create_label(text: String) -> Result<(), UiError> {
    let resp = Request::post(&format!("{}/api/labels", api_base()))
        .json(&CreateLabelRequest { text })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status(&resp));
    }
    Ok(())
}

pub async fn delete_labels(ids: Vec<String>) -> Result<(), UiError> {
    let resp = Request::delete(&format!("{}/api/labels", api_base()))
        .json(&DeleteLabelsRequest { ids })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status(&resp));
    }
    Ok(())
}

/// Uploads one image as the multipart form field `image`. Returns the
/// server's confirmation message.
pub async fn upload_image(file: &web_sys::File) -> Result<String, UiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| UiError::Network("could not build the upload form".to_string()))?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| UiError::Network("could not attach the file".to_string()))?;

    let resp = Request::post(&format!("{}/upload", api_base()))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status(&resp));
    }
    let body: MessageResponse = resp.json().await.map_err(transport)?;
    Ok(body.message)
}

/// Deletes a set of images by filename. Returns the server's confirmation
/// message. The server treats the batch as all-or-nothing.
pub async fn delete_images(filenames: Vec<String>) -> Result<String, UiError> {
    let resp = Request::post(&format!("{}/images/delete", api_base()))
        .json(&DeleteImagesRequest { filenames })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status(&resp));
    }
    let body: MessageResponse = resp.json().await.map_err(transport)?;
    Ok(body.message)
}

pub async fn associate_labels(
    user_email: String,
    image: String,
    labels: Vec<String>,
) -> Result<(), UiError> {
    let resp = Request::post(&format!("{}/api/associateLabel", api_base()))
        .json(&AssociateLabelsRequest {
            user_email,
            image,
            labels,
        })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(status(&resp));
    }
    Ok(())
}

/// Exchanges credentials for a `Session`. Rejections carry the backend's
/// error text when it sends one.
pub async fn login(email: String, password: String) -> Result<Session, UiError> {
    let resp = Request::post(&format!("{}/auth/login", api_base()))
        .json(&LoginRequest { email, password })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        resp.json::<Session>().await.map_err(transport)
    } else {
        Err(UiError::Auth(auth_rejection(resp).await))
    }
}

pub async fn register(
    email: String,
    password: String,
    admin_id: String,
) -> Result<Session, UiError> {
    let resp = Request::post(&format!("{}/auth/register", api_base()))
        .json(&RegisterRequest {
            email,
            password,
            admin_id,
        })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        resp.json::<Session>().await.map_err(transport)
    } else {
        Err(UiError::Auth(auth_rejection(resp).await))
    }
}

async fn auth_rejection(resp: gloo_net::http::Response) -> String {
    let code = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("authentication rejected with status {code}"),
    }
}
