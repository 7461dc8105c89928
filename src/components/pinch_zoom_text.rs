use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::config::ZoomConfig;
use crate::input::{TOUCH_EVENTS, pointer_event_from_touch};
use crate::state::{PinchScaler, PointerAction, TextStyle, TextSurface};

#[derive(Properties, PartialEq, Clone)]
pub struct PinchZoomTextProps {
    pub text: AttrValue,
    pub config: ZoomConfig,
    pub zoom_enabled: bool,
}

/// Text block whose font size follows two-finger pinches.
#[function_component(PinchZoomText)]
pub fn pinch_zoom_text(props: &PinchZoomTextProps) -> Html {
    let node_ref = use_node_ref();
    let scaler = {
        let cfg = props.config.clone();
        use_mut_ref(move || {
            let mut s = PinchScaler::new(TextStyle::new(cfg.base_font_size), cfg);
            s.sync_font_size();
            s
        })
    };
    let style = {
        let scaler = scaler.clone();
        use_state_eq(move || scaler.borrow().surface().clone())
    };

    // Toggle applies from the next dispatched event
    {
        let scaler = scaler.clone();
        use_effect_with(props.zoom_enabled, move |enabled| {
            scaler.borrow_mut().set_zoom_enabled(*enabled);
            log::debug!("zoom enabled: {}", enabled);
            || ()
        });
    }

    {
        let node_ref = node_ref.clone();
        let scaler = scaler.clone();
        let style = style.clone();
        use_effect_with((), move |_| {
            let el = node_ref.cast::<HtmlElement>();
            let touch_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
                let ev = pointer_event_from_touch(&e);
                if let Some(ev) = &ev {
                    log::trace!(
                        "{} -> {:?} with {} pointer(s)",
                        e.type_(),
                        PointerAction::from_code(ev.action),
                        ev.pointers.len()
                    );
                }
                let mut s = scaler.borrow_mut();
                if s.handle_touch_event(ev.as_ref()) {
                    e.prevent_default();
                }
                log::trace!("font size now {}", s.surface().font_size());
                style.set(s.surface().clone());
            }) as Box<dyn FnMut(_)>);
            if let Some(el) = &el {
                for name in TOUCH_EVENTS {
                    el.add_event_listener_with_callback(name, touch_cb.as_ref().unchecked_ref())
                        .ok();
                }
            } else {
                log::warn!("pinch text element missing, touch listeners not attached");
            }
            move || {
                if let Some(el) = &el {
                    for name in TOUCH_EVENTS {
                        let _ = el.remove_event_listener_with_callback(
                            name,
                            touch_cb.as_ref().unchecked_ref(),
                        );
                    }
                }
                let _keep_alive = &touch_cb;
            }
        });
    }

    let css = format!(
        "{} touch-action:none; user-select:none; padding:16px; line-height:1.3; color:#c9d1d9;",
        style.to_css()
    );
    html! {<div ref={node_ref} style={css}>{ props.text.clone() }</div>}
}
