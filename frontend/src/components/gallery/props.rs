use yew::prelude::*;

use common::model::session::Session;

/// Properties injected by the root component.
#[derive(Properties, PartialEq, Clone)]
pub struct GalleryProps {
    /// The authenticated identity; its email is sent with every association.
    pub session: Session,
    /// Tears down the session in the root component.
    pub on_logout: Callback<()>,
}
