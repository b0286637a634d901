use yew::prelude::*;

use crate::utils::debounce::Debouncer;

/// Handle returned by `use_debounced_search` hook
#[derive(Clone, PartialEq)]
pub struct SearchHandle {
    /// Text currently shown in the input
    pub value: String,
    pub on_input: Callback<String>,
}

/// Keeps the search box responsive while only forwarding the text to
/// `on_search` once typing pauses for `delay_ms`.
#[hook]
pub fn use_debounced_search(on_search: Callback<String>, delay_ms: u32) -> SearchHandle {
    let value = use_state(String::new);
    let debouncer = use_memo(delay_ms, |delay_ms| Debouncer::new(*delay_ms));

    // Cancel a pending search when the component goes away
    {
        let debouncer = debouncer.clone();
        use_effect_with((), move |_| move || debouncer.cancel());
    }

    let on_input = {
        let value = value.clone();
        Callback::from(move |text: String| {
            value.set(text.clone());
            let on_search = on_search.clone();
            debouncer.call(move || on_search.emit(text));
        })
    };

    SearchHandle {
        value: (*value).clone(),
        on_input,
    }
}
