use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod error;
mod pagination;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
