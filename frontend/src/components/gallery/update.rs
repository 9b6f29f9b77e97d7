//! Update function for the gallery, Elm-style: mutate state in response to a
//! message, spawn network calls as side effects, return whether to re-render.
//!
//! The synchronization protocol lives here. A user mutation (label
//! association) is validated locally first; a precondition failure surfaces
//! a `ValidationError` and no request is issued. On success the whole cache
//! is refetched; the staged state is ephemeral, so there is nothing to roll
//! back on failure. Every refetch is tagged with a sequence number from
//! `begin_fetch`, and completions for a superseded generation are dropped.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::toast;

use super::messages::Msg;
use super::state::GalleryComponent;

pub fn update(component: &mut GalleryComponent, ctx: &Context<GalleryComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Refresh => {
            let seq = component.begin_fetch();

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_images().await {
                    Ok(images) => link.send_message(Msg::ImagesLoaded { seq, images }),
                    Err(error) => link.send_message(Msg::FetchFailed { seq, error }),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_labels().await {
                    Ok(labels) => link.send_message(Msg::LabelsLoaded { seq, labels }),
                    Err(error) => link.send_message(Msg::FetchFailed { seq, error }),
                }
            });

            false
        }
        Msg::ImagesLoaded { seq, images } => component.replace_images(seq, images),
        Msg::LabelsLoaded { seq, labels } => component.replace_labels(seq, labels),
        Msg::FetchFailed { seq, error: err } => {
            if !component.is_current(seq) {
                return false;
            }
            error!(format!("fetch failed: {err}"));
            component.error = Some("Error fetching data. Please try again.".to_string());
            true
        }
        Msg::SelectImage(name) => {
            component.select_image(name);
            true
        }
        Msg::StageLabel(text) => component.stage_label(text),
        Msg::UnstageLabel(text) => {
            component.unstage_label(&text);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            match component.validate_submission() {
                Ok(draft) => {
                    component.submitting = true;
                    component.error = None;

                    let email = ctx.props().session.email.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::associate_labels(email, draft.image, draft.labels).await {
                            Ok(()) => link.send_message(Msg::SubmitSucceeded),
                            Err(error) => link.send_message(Msg::SubmitFailed(error)),
                        }
                    });
                    true
                }
                Err(err) => {
                    component.error = Some(err.to_string());
                    true
                }
            }
        }
        Msg::SubmitSucceeded => {
            component.finish_submission();
            toast("Labels associated with image");
            // Resynchronize against the authoritative server state.
            ctx.link().send_message(Msg::Refresh);
            true
        }
        Msg::SubmitFailed(err) => {
            // Staged labels are kept so the user can retry.
            component.submitting = false;
            error!(format!("label association failed: {err}"));
            component.error = Some(err.to_string());
            true
        }
        Msg::PrevPage => component.pager.prev(),
        Msg::NextPage => {
            let len = component.images.len();
            component.pager.next(len)
        }
        Msg::DismissError => {
            component.error = None;
            true
        }
    }
}
