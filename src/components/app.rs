use super::{pinch_zoom_text::PinchZoomText, zoom_toggle::ZoomToggle};
use crate::config::ZoomConfig;
use yew::prelude::*;

const SAMPLE_TEXT: &str = "Pinch this text with two fingers to make it bigger or smaller. \
Use the button below to turn zooming on and off.";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ZoomConfig::load_from_document());
    let zoom_enabled = {
        let initial = config.zoom_enabled;
        use_state(move || initial)
    };

    let on_toggle = {
        let zoom_enabled = zoom_enabled.clone();
        Callback::from(move |_: ()| zoom_enabled.set(!*zoom_enabled))
    };

    html! {<div style="display:flex; flex-direction:column; gap:16px; padding:16px; min-height:100vh; box-sizing:border-box; background:#0d1117;">
        <PinchZoomText
            text={SAMPLE_TEXT}
            config={(*config).clone()}
            zoom_enabled={*zoom_enabled}
        />
        <div style="display:flex; justify-content:center;">
            <ZoomToggle enabled={*zoom_enabled} on_toggle={on_toggle} />
        </div>
    </div>}
}
