use std::rc::Rc;
use yew::functional::UseReducerDispatcher;
use yew::prelude::*;

use crate::models::filter::{Condition, FilterState, MarketFilter};

/// Edits the dashboard can make to its filters
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    Search(String),
    Market(MarketFilter),
    Tab(MarketFilter),
    Condition(Condition),
    Page(usize),
}

impl Reducible for FilterState {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FilterAction::Search(search) => self.with_search(search),
            FilterAction::Market(market) => self.with_market(market),
            FilterAction::Tab(tab) => self.with_tab(tab),
            FilterAction::Condition(condition) => self.with_condition(condition),
            FilterAction::Page(page) => self.with_page(page),
        };
        Rc::new(next)
    }
}

/// Handle returned by `use_filters` hook
#[derive(Clone, PartialEq)]
pub struct FiltersHandle {
    pub state: FilterState,
    pub set_search: Callback<String>,
    pub set_market: Callback<MarketFilter>,
    pub set_tab: Callback<MarketFilter>,
    pub set_condition: Callback<Condition>,
    pub set_page: Callback<usize>,
}

/// Dashboard filter state. Actions are reduced against the latest state, so
/// a late debounced search never undoes a newer edit.
#[hook]
pub fn use_filters() -> FiltersHandle {
    let state = use_reducer(FilterState::default);

    let dispatcher = state.dispatcher();

    FiltersHandle {
        state: (*state).clone(),
        set_search: dispatch_with(&dispatcher, FilterAction::Search),
        set_market: dispatch_with(&dispatcher, FilterAction::Market),
        set_tab: dispatch_with(&dispatcher, FilterAction::Tab),
        set_condition: dispatch_with(&dispatcher, FilterAction::Condition),
        set_page: dispatch_with(&dispatcher, FilterAction::Page),
    }
}

fn dispatch_with<T: 'static>(
    dispatcher: &UseReducerDispatcher<FilterState>,
    wrap: fn(T) -> FilterAction,
) -> Callback<T> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |value: T| dispatcher.dispatch(wrap(value)))
}
