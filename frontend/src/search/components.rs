use crate::models::Activity;
use crate::search::cards::ActivityCard;
use crate::search::dropdowns::{ChannelLink, SelectOptions};
use crate::search::option_sorter::CATEGORY_DEFAULTS;
use crate::search::pagination::PaginationState;
use crate::search::query::{RawFilters, SortKey};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::prelude::*;

pub const INITIAL_PROMPT: &str = "検索してください";
pub const NO_RESULTS_PROMPT: &str =
    "検索結果が見つかりませんでした。検索条件を変更してお試しください。";

/// Category value that unlocks the player-count filter.
pub const VERSUS_CATEGORY: &str = CATEGORY_DEFAULTS[0];

// Helper to read "value" from any event target without casting to a concrete element.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub id: AttrValue,
    pub options: SelectOptions,
    pub value: String,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                cb.emit(value);
            }
        })
    };

    html! {
        <select id={props.id.clone()} onchange={on_change} disabled={props.disabled}>
            <option value="" selected={props.value.is_empty()}>{ props.options.placeholder }</option>
            { for props.options.options.iter().map(|option| html! {
                <option value={option.value.clone()} selected={option.value == props.value}>
                    { &option.label }
                </option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchFormProps {
    pub filters: RawFilters,
    pub categories: SelectOptions,
    pub players: SelectOptions,
    pub levels: SelectOptions,
    pub channels: SelectOptions,
    pub searching: bool,
    pub input_ref: NodeRef,
    pub on_change: Callback<RawFilters>,
    pub on_search: Callback<()>,
}

#[function_component(SearchForm)]
pub fn search_form(props: &SearchFormProps) -> Html {
    // Builds a callback that writes one field of the filter set.
    let update = |apply: fn(&mut RawFilters, String)| {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            let mut next = filters.clone();
            apply(&mut next, value);
            on_change.emit(next);
        })
    };

    let on_text = {
        let on_text = update(|f, v| f.text = v);
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                on_text.emit(value);
            }
        })
    };
    let on_limit = {
        let on_limit = update(|f, v| f.limit = v);
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                on_limit.emit(value);
            }
        })
    };
    let on_sort = {
        let on_sort = update(|f, v| f.sort = v);
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                on_sort.emit(value);
            }
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit(());
        })
    };

    let players_disabled = props.filters.category != VERSUS_CATEGORY;
    let current_sort = SortKey::from_key(&props.filters.sort);

    html! {
        <form class="search-form" onsubmit={on_submit}>
            <input
                id="search-input"
                type="text"
                ref={props.input_ref.clone()}
                placeholder="キーワードを入力"
                maxlength="200"
                value={props.filters.text.clone()}
                oninput={on_text}
            />
            <FilterSelect
                id="type-input"
                options={props.categories.clone()}
                value={props.filters.category.clone()}
                on_change={update(|f, v| f.category = v)}
            />
            <FilterSelect
                id="players-input"
                options={props.players.clone()}
                value={props.filters.players.clone()}
                disabled={players_disabled}
                on_change={update(|f, v| f.players = v)}
            />
            <FilterSelect
                id="level-input"
                options={props.levels.clone()}
                value={props.filters.level.clone()}
                on_change={update(|f, v| f.level = v)}
            />
            <FilterSelect
                id="channel-input"
                options={props.channels.clone()}
                value={props.filters.channel.clone()}
                on_change={update(|f, v| f.channel = v)}
            />
            <select id="sort-input" onchange={on_sort}>
                { for SortKey::all_variants().into_iter().map(|sort| html! {
                    <option value={sort.key()} selected={sort == current_sort}>
                        { sort.display_name() }
                    </option>
                })}
            </select>
            <input
                id="limit-input"
                type="number"
                min="1"
                max="10"
                value={props.filters.limit.clone()}
                oninput={on_limit}
            />
            <button id="search-button" type="submit" disabled={props.searching}>
                { if props.searching { "検索中..." } else { "検索" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub error: Option<(String, Option<String>)>,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some((message, details)) = &props.error else {
        return html! {};
    };

    html! {
        <div id="error-message" class="error-message">
            <p>{ message }</p>
            {
                if let Some(details) = details {
                    html! { <div class="error-details">{ details }</div> }
                } else {
                    html! {}
                }
            }
            <button class="error-dismiss" onclick={props.on_dismiss.clone()}>{ "×" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsListProps {
    pub activities: Vec<Activity>,
    pub loading: bool,
    pub prompt: Option<AttrValue>,
}

#[function_component(ResultsList)]
pub fn results_list(props: &ResultsListProps) -> Html {
    html! {
        <div class="results">
            {
                if props.loading {
                    html! { <div id="loading-indicator" class="loading">{ "検索中..." }</div> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(prompt) = &props.prompt {
                    html! { <p id="search-prompt">{ prompt.to_string() }</p> }
                } else {
                    html! {}
                }
            }
            <div class="card-container">
                { for props.activities.iter().map(|activity| html! {
                    <ActivityCard activity={activity.clone()} />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCountProps {
    pub counts: Option<(u64, u64)>,
}

#[function_component(VideoCount)]
pub fn video_count(props: &VideoCountProps) -> Html {
    match props.counts {
        Some((current, total)) => html! {
            <div id="video-count">{ format!("表示中: {} / {} 件", current, total) }</div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub state: PaginationState,
    pub visible: bool,
    pub on_page: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let current = props.state.current_page();
    let go = |target: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| {
            on_page.emit(target);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    html! {
        <div class="pagination">
            <button id="prev-page" onclick={go(current.saturating_sub(1))} disabled={props.state.prev_disabled()}>
                { "前へ" }
            </button>
            <span id="current-page">{ current }</span>
            <button id="next-page" onclick={go(current.saturating_add(1))} disabled={props.state.next_disabled()}>
                { "次へ" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelLinksProps {
    pub links: Vec<ChannelLink>,
}

#[function_component(ChannelLinks)]
pub fn channel_links(props: &ChannelLinksProps) -> Html {
    html! {
        <ul class="channel-links">
            { for props.links.iter().map(|link| html! {
                <li>
                    <a href={link.href.clone()} target="_blank" rel="noopener noreferrer">
                        { &link.name }
                    </a>
                </li>
            })}
        </ul>
    }
}
