use yew::prelude::*;

pub const LABEL_ENABLED: &str = "Zoom Enabled";
pub const LABEL_DISABLED: &str = "Zoom Disabled";

pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled { LABEL_ENABLED } else { LABEL_DISABLED }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomToggleProps {
    pub enabled: bool,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn ZoomToggle(props: &ZoomToggleProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<button onclick={toggle_cb} style="padding:8px 14px; font-size:14px;">{ toggle_label(props.enabled) }</button>}
}
