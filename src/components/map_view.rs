use crate::config::MapConfig;
use crate::error::{Result, TravelMapError};
use crate::leaflet;
use crate::model::{GeoBounds, TravelLocation};
use crate::util::{clog, cwarn};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement};
use yew::prelude::*;

pub const MAP_CONTAINER_ID: &str = "travel-map";

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub locations: Rc<Vec<TravelLocation>>,
    pub config: MapConfig,
    /// Fired with the dataset index when a popup's "View details" is clicked.
    pub on_open: Callback<usize>,
}

#[function_component]
pub fn MapView(props: &MapViewProps) -> Html {
    {
        let locations = props.locations.clone();
        let config = props.config.clone();
        let on_open = props.on_open.clone();
        use_effect_with((), move |_| {
            let mounted = match mount_map(&locations, &config, on_open) {
                Ok(m) => Some(m),
                Err(e) => {
                    cwarn(&format!("map setup failed: {}", e));
                    None
                }
            };
            move || {
                if let Some(m) = mounted {
                    m.map.remove();
                }
            }
        });
    }

    html! { <div id={MAP_CONTAINER_ID} class="travel-map"></div> }
}

/// Leaflet map plus the JS callbacks it holds; dropping it releases them.
struct MountedMap {
    map: leaflet::Map,
    _listeners: Vec<Closure<dyn FnMut()>>,
}

fn mount_map(
    locations: &[TravelLocation],
    config: &MapConfig,
    on_open: Callback<usize>,
) -> Result<MountedMap> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(TravelMapError::MissingDocument)?;

    let map = leaflet::map(MAP_CONTAINER_ID, config.center, config.zoom)?;
    leaflet::tile_layer(&config.tile_url, &config.tile_layer_options())?.add_to(&map);
    let icon = leaflet::div_icon(&config.marker_icon_options())?;

    let mut listeners = Vec::with_capacity(locations.len() * 2);
    for (index, location) in locations.iter().enumerate() {
        let marker = leaflet::marker(location.lat, location.lon, &icon)?;
        marker.add_to(&map);

        let (popup, details_btn) = popup_content(&document, location)?;
        let open_cb = {
            let on_open = on_open.clone();
            Closure::wrap(Box::new(move || on_open.emit(index)) as Box<dyn FnMut()>)
        };
        details_btn.add_event_listener_with_callback("click", open_cb.as_ref().unchecked_ref())?;
        marker.bind_popup(&popup);

        let click_cb = {
            let marker = marker.clone();
            Closure::wrap(Box::new(move || {
                marker.open_popup();
            }) as Box<dyn FnMut()>)
        };
        marker.on("click", click_cb.as_ref().unchecked_ref());

        listeners.push(open_cb);
        listeners.push(click_cb);
    }

    // Empty dataset keeps the configured default view.
    if let Some(bounds) = GeoBounds::enclosing(locations) {
        map.fit_bounds(
            &leaflet::lat_lng_bounds(bounds.corners())?,
            &leaflet::to_js(&config.fit_bounds_options())?,
        );
    }
    clog(&format!("map ready with {} markers", locations.len()));

    Ok(MountedMap {
        map,
        _listeners: listeners,
    })
}

/// Popup body for one marker; the returned button opens the detail modal.
fn popup_content(document: &Document, location: &TravelLocation) -> Result<(HtmlElement, Element)> {
    let root = document.create_element("div")?;
    root.set_class_name("popup-content");

    let title = document.create_element("h3")?;
    title.set_text_content(Some(&location.name));
    let meta = document.create_element("p")?;
    meta.set_text_content(Some(&format!("{} | {}", location.country, location.visit_date)));
    let description = document.create_element("p")?;
    description.set_text_content(Some(&location.description));
    let button = document.create_element("button")?;
    button.set_class_name("popup-btn");
    button.set_text_content(Some("View details"));

    for child in [&title, &meta, &description, &button] {
        root.append_child(child)?;
    }
    let root = root
        .dyn_into::<HtmlElement>()
        .map_err(|_| TravelMapError::Js("popup root is not an HTMLElement".into()))?;
    Ok((root, button))
}
