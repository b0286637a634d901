use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::price::CommodityData;
use crate::services::api::fetch_commodity_by_id;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum CommodityState {
    Idle,
    Loading,
    Loaded(Rc<CommodityData>),
    Error(String),
}

impl CommodityState {
    pub fn data(&self) -> Option<&Rc<CommodityData>> {
        match self {
            CommodityState::Loaded(commodity) => Some(commodity),
            _ => None,
        }
    }
}

/// Fetches the commodity summary for the selected id. `None` keeps the
/// state idle without touching the network.
#[hook]
pub fn use_commodity(id: Option<i64>) -> UseStateHandle<CommodityState> {
    let state = use_state(|| CommodityState::Idle);

    {
        let state = state.clone();

        use_effect_with(id, move |id| {
            let aborted = Rc::new(Cell::new(false));

            match *id {
                None => state.set(CommodityState::Idle),
                Some(id) => {
                    state.set(CommodityState::Loading);
                    let aborted_check = aborted.clone();

                    spawn_local(async move {
                        let result = fetch_commodity_by_id(id).await;
                        if aborted_check.get() {
                            return;
                        }
                        match result {
                            Ok(commodity) => state.set(CommodityState::Loaded(Rc::new(commodity))),
                            Err(e) => {
                                gloo::console::warn!(format!("Commodity {id} unavailable: {e}"));
                                state.set(CommodityState::Error(e.to_string()));
                            }
                        }
                    });
                }
            }

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
