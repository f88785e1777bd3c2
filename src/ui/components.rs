/// Reusable UI components

use crate::preview::PREVIEW_STYLE;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreviewImageProps {
    pub src: AttrValue,
}

/// Preview of a file picked in the admin product form
#[function_component(PreviewImage)]
pub fn preview_image(props: &PreviewImageProps) -> Html {
    html! {
        <img src={props.src.clone()} style={PREVIEW_STYLE} />
    }
}
