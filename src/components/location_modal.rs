use crate::state::{gallery_view, ModalAction, ModalState};
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationModalProps {
    pub state: UseReducerHandle<ModalState>,
}

fn display(visible: bool) -> &'static str {
    if visible { "display:block;" } else { "display:none;" }
}

/// A click closes the modal only when it landed on the root itself, not on its content.
fn is_backdrop_click<T: PartialEq>(target: Option<&T>, root: Option<&T>) -> bool {
    matches!((target, root), (Some(t), Some(r)) if t == r)
}

/// Detail overlay. Always mounted so its element ids exist; hidden while closed.
#[function_component]
pub fn LocationModal(props: &LocationModalProps) -> Html {
    let state = &*props.state;
    let location = state.current_location();
    let gallery = gallery_view(state);
    let root_ref = use_node_ref();

    let dispatch = |action: ModalAction| {
        let handle = props.state.clone();
        Callback::from(move |_: MouseEvent| handle.dispatch(action))
    };
    let close_cb = dispatch(ModalAction::Close);
    let prev_cb = dispatch(ModalAction::PrevImage);
    let next_cb = dispatch(ModalAction::NextImage);
    // Yew delegates listeners to the app root, so compare against the modal node, not currentTarget.
    let backdrop_cb = {
        let handle = props.state.clone();
        let root_ref = root_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target: Option<JsValue> = e.target().map(Into::into);
            let root: Option<JsValue> = root_ref.get().map(Into::into);
            if is_backdrop_click(target.as_ref(), root.as_ref()) {
                handle.dispatch(ModalAction::Close);
            }
        })
    };

    let (src, alt) = gallery
        .image
        .as_ref()
        .map(|img| (img.src.clone(), img.alt.clone()))
        .unwrap_or_default();
    let nav_style = display(gallery.show_nav);

    html! {
        <div id="location-modal" class="modal" ref={root_ref} style={display(state.is_open())} onclick={backdrop_cb}>
            <div class="modal-content">
                <span class="modal-close" onclick={close_cb}>{"×"}</span>
                <div class="modal-gallery">
                    <div class="gallery-container">
                        <img id="modal-image" src={src} alt={alt} style={display(gallery.image.is_some())} />
                        if gallery.placeholder {
                            <div class="no-image-placeholder">{"No images yet"}</div>
                        }
                        <button id="prev-btn" class="gallery-nav gallery-prev" style={nav_style} onclick={prev_cb}>{"‹"}</button>
                        <button id="next-btn" class="gallery-nav gallery-next" style={nav_style} onclick={next_cb}>{"›"}</button>
                    </div>
                    <div id="gallery-counter" class="gallery-counter" style={nav_style}>{ gallery.counter.clone() }</div>
                    <p id="modal-caption" class="modal-caption">{ gallery.caption.clone() }</p>
                </div>
                <div class="modal-info">
                    <h2 id="modal-title">{ location.map(|l| l.name.clone()).unwrap_or_default() }</h2>
                    <div class="modal-meta">
                        <span id="modal-country">{ location.map(|l| l.country.clone()).unwrap_or_default() }</span>
                        <span id="modal-date">{ location.map(|l| l.visit_date.clone()).unwrap_or_default() }</span>
                    </div>
                    <p id="modal-description">{ location.map(|l| l.description.clone()).unwrap_or_default() }</p>
                    <a id="modal-link" class="modal-link" href={location.map(|l| l.post_url.clone()).unwrap_or_default()}>
                        {"Read the full post"}
                    </a>
                </div>
            </div>
        </div>
    }
}
