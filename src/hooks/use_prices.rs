use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::dataset::Dataset;
use crate::services::feed::{PriceFeed, load_dataset};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<Dataset>),
}

impl DataState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<Dataset>> {
        match self {
            DataState::Loaded(dataset) => Some(dataset),
            DataState::Loading => None,
        }
    }

    /// Load-failure notice to show above the fallback content
    pub fn notice(&self) -> Option<&str> {
        self.data().and_then(|dataset| dataset.notice.as_deref())
    }
}

/// Loads the price feed once, then refreshes it in the background every
/// polling interval. Failures never surface as an error state: the dataset
/// falls back to the embedded records instead.
#[hook]
pub fn use_prices() -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger
    let feed = use_memo((), |_| PriceFeed::new());

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |trigger_value| {
            let state = state.clone();
            let trigger = trigger.clone();
            let feed = feed.clone();
            // Polls after the first one always hit the network
            let force_refresh = *trigger_value > 0;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let dataset = load_dataset(Config::DATA_SOURCE, &feed, force_refresh).await;
                if aborted_check.get() {
                    return;
                }
                state.set(DataState::Loaded(Rc::new(dataset)));

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH {
                    let interval = (*feed)
                        .as_ref()
                        .map_or(Config::POLLING_INTERVAL_MS, PriceFeed::poll_interval_ms);
                    TimeoutFuture::new(interval).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
