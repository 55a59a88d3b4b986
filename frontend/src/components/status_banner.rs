use shared::{StatusClass, StatusDisplay};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: StatusDisplay,
}

/// The `#result` element. Carries the plain `success`/`error` class the page
/// stylesheet targets, plus utility classes for color.
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let tone = match props.status.class {
        StatusClass::None => "text-gray-700",
        StatusClass::Success => "text-green-700",
        StatusClass::Error => "text-red-600",
    };

    html! {
        <div
            id="result"
            role="status"
            aria-live="polite"
            class={classes!(props.status.class.css_class(), "mt-4", "text-sm", tone)}
        >
            {&props.status.text}
        </div>
    }
}
