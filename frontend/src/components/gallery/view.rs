//! View rendering for the gallery: label sidebar, paged image grid, and the
//! staging panel under the selected image. Reads only from the cached state;
//! all effects go through messages.

use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::GalleryComponent;

pub fn view(component: &GalleryComponent, ctx: &Context<GalleryComponent>) -> Html {
    let link = ctx.link();
    let total_pages = component.pager.total_pages(component.images.len());
    let visible = component.pager.slice(&component.images);

    html! {
        <div class="gallery-root">
            <header class="top-bar">
                <h1>{"User Dashboard"}</h1>
                <span class="user-email">{ format!("user: {}", ctx.props().session.email) }</span>
                <button onclick={ctx.props().on_logout.reform(|_: MouseEvent| ())}>
                    {"Logout"}
                </button>
            </header>

            { error_banner(component, link) }

            <div class="layout">
                <aside class="label-pane">
                    <h2>{"Labels"}</h2>
                    <ul>
                        { for component.labels.iter().map(|label| html! {
                            <li>{ &label.text }</li>
                        }) }
                    </ul>
                </aside>

                <section class="image-pane">
                    <h2>{"Images"}</h2>
                    <div class="image-grid">
                        { for visible.iter().map(|name| image_card(component, link, name)) }
                    </div>
                    { pager_controls(component, link, total_pages) }
                </section>
            </div>
        </div>
    }
}

fn error_banner(component: &GalleryComponent, link: &Scope<GalleryComponent>) -> Html {
    match &component.error {
        Some(message) => html! {
            <div class="error-banner">
                <span>{ message }</span>
                <button onclick={link.callback(|_| Msg::DismissError)}>{"Dismiss"}</button>
            </div>
        },
        None => html! {},
    }
}

/// One grid cell: the image itself, plus the staging panel when selected.
fn image_card(component: &GalleryComponent, link: &Scope<GalleryComponent>, name: &str) -> Html {
    let selected = component.selected_image.as_deref() == Some(name);
    let select = {
        let name = name.to_string();
        link.callback(move |_| Msg::SelectImage(name.clone()))
    };

    html! {
        <div class={classes!("image-card", selected.then_some("selected"))}>
            <img
                src={api::image_url(name)}
                alt={name.to_string()}
                onclick={select}
            />
            {
                if selected {
                    staging_panel(component, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Label picker, staged chips, and the submit button for the selected image.
fn staging_panel(component: &GalleryComponent, link: &Scope<GalleryComponent>) -> Html {
    let on_pick = link.batch_callback(|e: Event| {
        let value = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();
        (!value.is_empty()).then_some(Msg::StageLabel(value))
    });

    html! {
        <div class="staging-panel">
            <select onchange={on_pick}>
                <option value="" selected=true>{"Select Label"}</option>
                { for component.labels.iter().map(|label| html! {
                    <option value={label.text.clone()}>{ &label.text }</option>
                }) }
            </select>

            <div class="staged-chips">
                { for component.staged.iter().map(|text| {
                    let unstage = {
                        let text = text.clone();
                        link.callback(move |_| Msg::UnstageLabel(text.clone()))
                    };
                    html! {
                        <span class="chip">
                            { text }
                            <button onclick={unstage}>{"\u{00d7}"}</button>
                        </span>
                    }
                }) }
            </div>

            <button onclick={link.callback(|_| Msg::Submit)} disabled={component.submitting}>
                { if component.submitting { "Associating..." } else { "Associate Labels" } }
            </button>
        </div>
    }
}

fn pager_controls(
    component: &GalleryComponent,
    link: &Scope<GalleryComponent>,
    total_pages: usize,
) -> Html {
    html! {
        <div class="pager">
            {
                if total_pages > 1 {
                    html! {
                        <span>{ format!("Page {} of {}", component.pager.current(), total_pages) }</span>
                    }
                } else {
                    html! {}
                }
            }
            <button
                onclick={link.callback(|_| Msg::PrevPage)}
                disabled={!component.pager.has_prev()}
            >
                {"Previous Page"}
            </button>
            <button
                onclick={link.callback(|_| Msg::NextPage)}
                disabled={!component.pager.has_next(component.images.len())}
            >
                {"Next Page"}
            </button>
        </div>
    }
}
