use crate::config::DEFAULT_LIMIT;
use crate::env_variable_utils::get_app_name;
use crate::feedback::components::FeedbackPanel;
use crate::search::components::{ChannelLinks, ErrorBanner, Pagination, ResultsList, SearchForm, VideoCount};
use crate::search::controller::{SearchController, SearchUiState};
use crate::search::dropdowns::{
    populate_channels, populate_levels, populate_unique_values, ChannelLink, PopulateSchedule,
    SelectOptions, CHANNEL_PLACEHOLDER, LEVEL_PLACEHOLDER,
};
use crate::search::option_sorter::OptionContext;
use crate::search::query::{RawFilters, SortKey};
use crate::services::AppServices;
use crate::shortcuts::use_search_shortcuts;
use crate::tabs::{Tab, TabBar, TabLayout};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SearchApp /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404 - ページが見つかりません"}</h1>
                <Link<Route> to={Route::Home}>{"検索ページに戻る"}</Link<Route>>
            </div>
        },
    }
}

/// State handles the dropdown populators write into.
#[derive(Clone)]
struct DropdownHandles {
    categories: UseStateHandle<SelectOptions>,
    players: UseStateHandle<SelectOptions>,
    levels: UseStateHandle<SelectOptions>,
    channels: UseStateHandle<SelectOptions>,
    channel_links: UseStateHandle<Vec<ChannelLink>>,
}

impl DropdownHandles {
    // The four fetches are independent, so each gets its own task.
    fn spawn_populators(&self, services: &AppServices) {
        let transport = services.transport.clone();
        let categories = self.categories.clone();
        wasm_bindgen_futures::spawn_local(async move {
            categories.set(populate_unique_values(&*transport, OptionContext::Category).await);
        });

        let transport = services.transport.clone();
        let players = self.players.clone();
        wasm_bindgen_futures::spawn_local(async move {
            players.set(populate_unique_values(&*transport, OptionContext::PlayerCount).await);
        });

        let transport = services.transport.clone();
        let levels = self.levels.clone();
        wasm_bindgen_futures::spawn_local(async move {
            levels.set(populate_levels(&*transport).await);
        });

        let transport = services.transport.clone();
        let channels = self.channels.clone();
        let channel_links = self.channel_links.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let listing = populate_channels(&*transport).await;
            channels.set(listing.select);
            if let Some(links) = listing.links {
                channel_links.set(links);
            }
        });
    }
}

fn initial_filters() -> RawFilters {
    RawFilters {
        sort: SortKey::default().key().to_string(),
        limit: DEFAULT_LIMIT.to_string(),
        ..Default::default()
    }
}

#[function_component(SearchApp)]
pub fn search_app() -> Html {
    let services = use_context::<AppServices>();

    let filters = use_state(initial_filters);
    let categories =
        use_state(|| SelectOptions::placeholder_only(OptionContext::Category.placeholder()));
    let players =
        use_state(|| SelectOptions::placeholder_only(OptionContext::PlayerCount.placeholder()));
    let levels = use_state(|| SelectOptions::placeholder_only(LEVEL_PLACEHOLDER));
    let channels = use_state(|| SelectOptions::placeholder_only(CHANNEL_PLACEHOLDER));
    let channel_links = use_state(Vec::<ChannelLink>::new);
    let dropdowns = DropdownHandles {
        categories,
        players,
        levels,
        channels,
        channel_links,
    };

    let ui = use_state(SearchUiState::default);
    let tab = use_state(Tab::default);
    let input_ref = use_node_ref();

    // Prime the CSRF token, then fill the dropdowns on the populate schedule.
    {
        let services = services.clone();
        let dropdowns = dropdowns.clone();

        use_effect_with((), move |_| {
            match services {
                Some(services) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        PopulateSchedule::default()
                            .run_after_token(
                                &*services.csrf,
                                |delay| TimeoutFuture::new(delay),
                                |_| dropdowns.spawn_populators(&services),
                            )
                            .await;
                    });
                }
                None => log::error!("Search page rendered without AppServices context"),
            }
            || ()
        });
    }

    let on_search = {
        let services = services.clone();
        let filters = filters.clone();
        let ui = ui.clone();
        Callback::from(move |_: ()| {
            let Some(services) = services.clone() else {
                log::error!("Cannot search without AppServices context");
                return;
            };
            let filters = (*filters).clone();
            let start = (*ui).clone();
            let ui = ui.clone();
            wasm_bindgen_futures::spawn_local(async move {
                SearchController::new(services.transport.clone())
                    .search(start, &filters, |next| ui.set(next))
                    .await;
            });
        })
    };

    let on_page = {
        let services = services.clone();
        let filters = filters.clone();
        let ui = ui.clone();
        Callback::from(move |page: u32| {
            let Some(services) = services.clone() else {
                log::error!("Cannot search without AppServices context");
                return;
            };
            let filters = (*filters).clone();
            let start = (*ui).clone();
            let ui = ui.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let ran = SearchController::new(services.transport.clone())
                    .go_to_page(start, &filters, page, |next| ui.set(next))
                    .await;
                if !ran {
                    log::debug!("Ignoring request for page {}", page);
                }
            });
        })
    };

    let on_filters = {
        let filters = filters.clone();
        Callback::from(move |next: RawFilters| filters.set(next))
    };

    let on_clear_text = {
        let filters = filters.clone();
        Callback::from(move |_: ()| {
            let mut next = (*filters).clone();
            next.text.clear();
            filters.set(next);
        })
    };
    use_search_shortcuts(input_ref.clone(), on_clear_text);

    let on_dismiss_error = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*ui).clone();
            next.dismiss_error();
            ui.set(next);
        })
    };

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |next: Tab| tab.set(next))
    };

    let layout = TabLayout::for_tab(*tab);

    html! {
        <div class="app">
            <h1 class="title">{ get_app_name() }</h1>
            <TabBar active={*tab} on_select={on_tab} />

            <div class={classes!("main-content", layout.full_width.then_some("full-width"))}>
                <div class="left-half">
                    {
                        if layout.search_visible {
                            html! {
                                <div class="search-container">
                                    <SearchForm
                                        filters={(*filters).clone()}
                                        categories={(*dropdowns.categories).clone()}
                                        players={(*dropdowns.players).clone()}
                                        levels={(*dropdowns.levels).clone()}
                                        channels={(*dropdowns.channels).clone()}
                                        searching={ui.searching}
                                        input_ref={input_ref.clone()}
                                        on_change={on_filters}
                                        on_search={on_search}
                                    />
                                    <ErrorBanner error={ui.error.clone()} on_dismiss={on_dismiss_error} />
                                    <VideoCount counts={ui.counts} />
                                    <ResultsList
                                        activities={ui.activities.clone()}
                                        loading={ui.loading}
                                        prompt={ui.prompt.map(AttrValue::from)}
                                    />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <Pagination
                        state={ui.pagination}
                        visible={layout.pagination_visible}
                        on_page={on_page}
                    />
                    {
                        if layout.paragraph_visible {
                            html! {
                                <div class="paragraph-container">
                                    <p>
                                        { "サッカーの練習メニュー動画を、カテゴリ・人数・レベル・チャンネルで絞り込んで探せるサイトです。" }
                                    </p>
                                    <FeedbackPanel />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="right-half">
                    <h3>{ "掲載チャンネル" }</h3>
                    <ChannelLinks links={(*dropdowns.channel_links).clone()} />
                </div>
            </div>
        </div>
    }
}
