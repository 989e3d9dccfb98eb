use super::{location_modal::LocationModal, map_view::MapView, stats_panel::StatsPanel};
use crate::config::MapConfig;
use crate::data::Dataset;
use crate::model::{MapSummary, TravelLocation};
use crate::state::{KeyCommand, ModalAction, ModalState};
use crate::util::cwarn;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let dataset = use_memo((), |_| {
        Dataset::bundled()
            .map(|ds| (Rc::new(ds.locations), ds.map))
            .map_err(|e| {
                cwarn(&e.to_string());
                e.to_string()
            })
    });

    match &*dataset {
        Ok((locations, config)) => html! {
            <TravelMap locations={locations.clone()} config={config.clone()} />
        },
        Err(msg) => html! {
            <div class="travel-map-error">{ format!("Could not load travel locations: {}", msg) }</div>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TravelMapProps {
    pub locations: Rc<Vec<TravelLocation>>,
    pub config: MapConfig,
}

#[function_component]
pub fn TravelMap(props: &TravelMapProps) -> Html {
    let modal = use_reducer({
        let locations = props.locations.clone();
        move || ModalState::new(locations)
    });
    let summary = MapSummary::from_locations(&props.locations);

    // While open: lock page scroll and route Escape/arrow keys to the modal.
    {
        let dispatcher = modal.dispatcher();
        use_effect_with(modal.is_open(), move |open| {
            let window = web_sys::window();
            let body = window
                .as_ref()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            let keydown_cb = open.then(|| {
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if let Some(cmd) = KeyCommand::from_key(&e.key()) {
                        dispatcher.dispatch(cmd.action());
                    }
                }) as Box<dyn FnMut(_)>)
            });
            if let (Some(win), Some(cb)) = (&window, &keydown_cb) {
                win.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
                    .ok();
            }
            if let (true, Some(body)) = (*open, &body) {
                body.style().set_property("overflow", "hidden").ok();
            }
            move || {
                if let (Some(win), Some(cb)) = (&window, &keydown_cb) {
                    let _ = win
                        .remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
                }
                if let Some(body) = &body {
                    body.style().remove_property("overflow").ok();
                }
            }
        });
    }

    let on_open = {
        let dispatcher = modal.dispatcher();
        use_callback((), move |index: usize, _| dispatcher.dispatch(ModalAction::Open(index)))
    };

    html! {
        <div class="travel-map-page">
            <header class="travel-header">
                <h1>{"Travel Map"}</h1>
                <StatsPanel location_count={summary.location_count} country_count={summary.country_count} />
            </header>
            <MapView locations={props.locations.clone()} config={props.config.clone()} on_open={on_open} />
            <LocationModal state={modal} />
        </div>
    }
}
