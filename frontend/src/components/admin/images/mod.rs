//! Image set manager: list the stored images, upload one, and bulk-delete a
//! checked selection. Server confirmations surface as toasts; every
//! successful mutation triggers a full refetch of the filename list.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::error::UiError;
use crate::toast::toast;

mod state;

pub use state::ImageManagerComponent;

pub enum Msg {
    Refresh,
    Loaded(Vec<String>),
    LoadFailed(UiError),
    Toggle(String),
    FileChosen(Option<web_sys::File>),
    Upload,
    DeleteSelected,
    MutationDone(Result<String, UiError>),
    DismissError,
}

impl Component for ImageManagerComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ImageManagerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::list_images().await {
                        Ok(images) => link.send_message(Msg::Loaded(images)),
                        Err(err) => link.send_message(Msg::LoadFailed(err)),
                    }
                });
                false
            }
            Msg::Loaded(images) => {
                self.replace_images(images);
                true
            }
            Msg::LoadFailed(err) => {
                error!(format!("image fetch failed: {err}"));
                self.error = Some("Error fetching images. Please try again.".to_string());
                true
            }
            Msg::Toggle(name) => {
                self.toggle(&name);
                true
            }
            Msg::FileChosen(file) => {
                self.pending_file = file;
                true
            }
            Msg::Upload => {
                if self.busy {
                    return false;
                }
                match self.validate_upload() {
                    Ok(file) => {
                        self.busy = true;
                        self.error = None;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(Msg::MutationDone(api::upload_image(&file).await));
                        });
                        true
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                        true
                    }
                }
            }
            Msg::DeleteSelected => {
                if self.busy {
                    return false;
                }
                match self.validate_delete() {
                    Ok(filenames) => {
                        self.busy = true;
                        self.error = None;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(Msg::MutationDone(
                                api::delete_images(filenames).await,
                            ));
                        });
                        true
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                        true
                    }
                }
            }
            Msg::MutationDone(result) => {
                self.busy = false;
                match result {
                    Ok(message) => {
                        toast(&message);
                        self.finish_mutation();
                        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        ctx.link().send_message(Msg::Refresh);
                    }
                    Err(err) => {
                        error!(format!("image mutation failed: {err}"));
                        self.error = Some(err.to_string());
                    }
                }
                true
            }
            Msg::DismissError => {
                self.error = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let onchange = link.callback(|e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            Msg::FileChosen(input.files().and_then(|files| files.get(0)))
        });

        html! {
            <div class="image-manager">
                <h2>{"Image Gallery"}</h2>

                {
                    match &self.error {
                        Some(message) => html! {
                            <div class="error-banner">
                                <span>{ message }</span>
                                <button onclick={link.callback(|_| Msg::DismissError)}>{"Dismiss"}</button>
                            </div>
                        },
                        None => html! {},
                    }
                }

                <div class="upload-row">
                    <h3>{"Upload Image"}</h3>
                    <input type="file" accept="image/*" ref={self.file_input_ref.clone()} {onchange} />
                    <button onclick={link.callback(|_| Msg::Upload)} disabled={self.busy}>
                        {"Upload Image"}
                    </button>
                </div>

                <button onclick={link.callback(|_| Msg::DeleteSelected)} disabled={self.busy}>
                    {"Delete Selected Images"}
                </button>

                <div class="image-grid">
                    { for self.images.iter().map(|name| self.image_card(link, name)) }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh);
        }
    }
}

impl ImageManagerComponent {
    fn image_card(&self, link: &Scope<Self>, name: &str) -> Html {
        let toggle = {
            let name = name.to_string();
            link.callback(move |_| Msg::Toggle(name.clone()))
        };

        html! {
            <div class="image-card">
                <input
                    type="checkbox"
                    checked={self.is_selected(name)}
                    onchange={toggle}
                />
                <img src={api::image_url(name)} alt={name.to_string()} />
                <span>{ name }</span>
            </div>
        }
    }
}
