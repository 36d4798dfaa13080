//! Fetch-and-fill routines for the filter dropdowns and the channel link list.
//!
//! Every populator returns something renderable: failures are logged and
//! replaced with a fixed fallback list, never surfaced to the user.

use crate::config::{CHANNELS_PATH, LEVELS_PATH, POPULATE_OFFSETS_MS, UNIQUE_VALUES_PATH};
use crate::csrf::CsrfTokenManager;
use crate::http::{get_json, Transport};
use crate::models::{Channel, Level};
use crate::search::option_sorter::{sort_options, OptionContext};
use crate::utils::external_href;
use std::collections::HashSet;
use std::future::Future;

pub const LEVEL_PLACEHOLDER: &str = "レベルを選択";
pub const CHANNEL_PLACEHOLDER: &str = "チャンネルを選択";

pub const DEFAULT_LEVELS: [&str; 4] = ["小学生以上", "中学生", "高校生", "ユース"];
pub const DEFAULT_CHANNELS: [(&str, &str); 2] = [
    ("channel_1", "サッカーチャンネル1"),
    ("channel_2", "サッカーチャンネル2"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn same(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Contents of a `<select>`: an empty-valued placeholder, then the options.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOptions {
    pub placeholder: &'static str,
    pub options: Vec<SelectOption>,
}

impl SelectOptions {
    pub fn placeholder_only(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            options: Vec::new(),
        }
    }

    fn from_values<I, S>(placeholder: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            placeholder,
            options: values.into_iter().map(SelectOption::same).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelListing {
    pub select: SelectOptions,
    /// `None` leaves the currently shown link list alone.
    pub links: Option<Vec<ChannelLink>>,
}

/// Category or player-count options from `/get_unique_values/{column}`.
pub async fn populate_unique_values<T: Transport>(
    transport: &T,
    context: OptionContext,
) -> SelectOptions {
    let column = context.column();
    log::debug!("Fetching data for {}...", column);
    let path = format!("{}/{}", UNIQUE_VALUES_PATH, column);

    match get_json::<T, Vec<String>>(transport, &path).await {
        Ok(values) => {
            if values.is_empty() {
                log::warn!("No data received for {}, using default options", column);
            }
            let sorted = sort_options(values, context);
            log::info!("Populated {} with {} options", column, sorted.len());
            SelectOptions::from_values(context.placeholder(), sorted)
        }
        Err(e) => {
            log::error!("Failed to load {} options: {}", column, e);
            SelectOptions::from_values(context.placeholder(), context.defaults())
        }
    }
}

pub async fn populate_levels<T: Transport>(transport: &T) -> SelectOptions {
    log::debug!("Fetching levels...");
    let levels = match get_json::<T, Vec<Level>>(transport, LEVELS_PATH).await {
        Ok(levels) if levels.is_empty() => {
            log::warn!("No levels data received, using default levels");
            return SelectOptions::from_values(LEVEL_PLACEHOLDER, DEFAULT_LEVELS);
        }
        Ok(levels) => levels,
        Err(e) => {
            log::error!("Failed to load levels: {}", e);
            return SelectOptions::from_values(LEVEL_PLACEHOLDER, DEFAULT_LEVELS);
        }
    };

    // The server already orders levels; keep that order and drop repeats.
    let mut seen = HashSet::new();
    let unique: Vec<String> = levels
        .into_iter()
        .map(|l| l.level)
        .filter(|level| seen.insert(level.clone()))
        .collect();
    log::info!("Populated levels with {} unique options", unique.len());
    SelectOptions::from_values(LEVEL_PLACEHOLDER, unique)
}

pub async fn populate_channels<T: Transport>(transport: &T) -> ChannelListing {
    log::debug!("Fetching channels...");
    let channels = match get_json::<T, Vec<Channel>>(transport, CHANNELS_PATH).await {
        Ok(channels) => channels,
        Err(e) => {
            log::error!("Failed to load channels: {}", e);
            return ChannelListing {
                select: SelectOptions {
                    placeholder: CHANNEL_PLACEHOLDER,
                    options: DEFAULT_CHANNELS
                        .iter()
                        .map(|(value, label)| SelectOption {
                            value: value.to_string(),
                            label: label.to_string(),
                        })
                        .collect(),
                },
                links: None,
            };
        }
    };

    if channels.is_empty() {
        log::warn!("No channels data received");
        return ChannelListing {
            select: SelectOptions::placeholder_only(CHANNEL_PLACEHOLDER),
            links: None,
        };
    }

    let mut seen = HashSet::new();
    let options = channels
        .iter()
        .filter(|c| seen.insert(c.id.as_str()))
        .map(|c| SelectOption {
            value: c.id.clone(),
            label: c.channel_name.clone(),
        })
        .collect();

    // The link list shows every row the server sent, repeats included.
    let links = channels
        .iter()
        .map(|c| ChannelLink {
            name: c.channel_name.clone(),
            href: external_href(&c.channel_link).to_string(),
        })
        .collect();

    log::info!("Populated channels with {} options", channels.len());
    ChannelListing {
        select: SelectOptions {
            placeholder: CHANNEL_PLACEHOLDER,
            options,
        },
        links: Some(links),
    }
}

/// When to (re)populate the dropdowns, as offsets from mount. The second run
/// covers a first attempt that fired before the backend was ready.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulateSchedule {
    offsets_ms: Vec<u32>,
}

impl Default for PopulateSchedule {
    fn default() -> Self {
        Self {
            offsets_ms: POPULATE_OFFSETS_MS.to_vec(),
        }
    }
}

impl PopulateSchedule {
    pub fn runs(&self) -> usize {
        self.offsets_ms.len()
    }

    /// Sleep before each run, relative to the previous run. Offsets are ascending.
    pub fn delays(&self) -> Vec<u32> {
        let mut previous = 0;
        self.offsets_ms
            .iter()
            .map(|&offset| {
                let delay = offset - previous;
                previous = offset;
                delay
            })
            .collect()
    }

    /// Primes the CSRF token, then calls `populate` once per run after
    /// sleeping for that run's delay. A failed token fetch is logged by the
    /// manager and does not hold the dropdowns back.
    pub async fn run_after_token<T, S, F>(
        &self,
        csrf: &CsrfTokenManager<T>,
        sleep: S,
        mut populate: impl FnMut(usize),
    ) where
        T: Transport,
        S: Fn(u32) -> F,
        F: Future<Output = ()>,
    {
        csrf.acquire().await;
        for (run, delay) in self.delays().into_iter().enumerate() {
            sleep(delay).await;
            log::debug!("Populating dropdowns ({}/{})", run + 1, self.runs());
            populate(run);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CSRF_TOKEN_PATH;
    use crate::error::ApiError;
    use crate::http::mock::MockTransport;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn labels(select: &SelectOptions) -> Vec<&str> {
        select.options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn category_values_are_sorted_with_other_last() {
        let transport = MockTransport::new();
        transport.respond(
            "/get_unique_values/category_title",
            200,
            r#"["その他", "対人", "シュート", "対人"]"#,
        );

        let select = block_on(populate_unique_values(&transport, OptionContext::Category));
        assert_eq!(select.placeholder, "カテゴリを選択");
        assert_eq!(select.options.len(), 3);
        assert_eq!(select.options.last().unwrap().value, "その他");
    }

    #[test]
    fn player_counts_are_sorted_numerically() {
        let transport = MockTransport::new();
        transport.respond(
            "/get_unique_values/players",
            200,
            r#"["10人", "3対3", "9人", "1対1", "人数指定なし"]"#,
        );

        let select = block_on(populate_unique_values(&transport, OptionContext::PlayerCount));
        assert_eq!(
            labels(&select),
            vec!["1対1", "3対3", "9人", "10人", "人数指定なし"]
        );
    }

    #[test]
    fn category_failure_falls_back_to_defaults() {
        let transport = MockTransport::new();
        transport.respond("/get_unique_values/category_title", 500, "");

        let select = block_on(populate_unique_values(&transport, OptionContext::Category));
        assert_eq!(labels(&select), vec!["対人", "その他"]);
    }

    #[test]
    fn non_sequence_payload_counts_as_failure() {
        let transport = MockTransport::new();
        transport.respond(
            "/get_unique_values/players",
            200,
            r#"{"error": "Invalid column"}"#,
        );

        let select = block_on(populate_unique_values(&transport, OptionContext::PlayerCount));
        assert_eq!(select.placeholder, "プレイヤー数を選択");
        assert!(select.options.is_empty());
    }

    #[test]
    fn levels_are_deduplicated_in_server_order() {
        let transport = MockTransport::new();
        transport.respond(
            LEVELS_PATH,
            200,
            r#"[{"level": "中学生"}, {"level": "小学生以上"}, {"level": "中学生"}]"#,
        );

        let select = block_on(populate_levels(&transport));
        assert_eq!(labels(&select), vec!["中学生", "小学生以上"]);
    }

    #[test]
    fn empty_or_failed_levels_use_defaults() {
        let transport = MockTransport::new();
        transport.respond(LEVELS_PATH, 200, "[]");
        assert_eq!(labels(&block_on(populate_levels(&transport))), DEFAULT_LEVELS);

        let transport = MockTransport::new();
        transport.fail(LEVELS_PATH, ApiError::Network("offline".into()));
        assert_eq!(labels(&block_on(populate_levels(&transport))), DEFAULT_LEVELS);
    }

    #[test]
    fn channels_dedupe_select_but_keep_every_link() {
        let transport = MockTransport::new();
        transport.respond(
            CHANNELS_PATH,
            200,
            r#"[{"id": 1, "channel_name": "A", "channel_link": "https://youtube.com/@a"},
                {"id": 1, "channel_name": "A", "channel_link": "https://youtube.com/@a"},
                {"id": 2, "channel_name": "B", "channel_link": "javascript:alert(1)"}]"#,
        );

        let listing = block_on(populate_channels(&transport));
        let values: Vec<&str> = listing
            .select
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["1", "2"]);

        let links = listing.links.unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].href, "https://youtube.com/@a");
        assert_eq!(links[2].href, "#");
    }

    #[test]
    fn empty_channel_list_leaves_links_alone() {
        let transport = MockTransport::new();
        transport.respond(CHANNELS_PATH, 200, "[]");

        let listing = block_on(populate_channels(&transport));
        assert!(listing.select.options.is_empty());
        assert!(listing.links.is_none());
    }

    #[test]
    fn channel_failure_uses_placeholder_channels() {
        let transport = MockTransport::new();
        transport.respond(CHANNELS_PATH, 404, "");

        let listing = block_on(populate_channels(&transport));
        assert_eq!(listing.select.options[0].value, "channel_1");
        assert_eq!(listing.select.options[1].label, "サッカーチャンネル2");
        assert!(listing.links.is_none());
    }

    #[test]
    fn schedule_runs_twice_at_fixed_offsets() {
        let schedule = PopulateSchedule::default();
        assert_eq!(schedule.runs(), 2);
        assert_eq!(schedule.delays(), vec![100, 4_900]);
    }

    #[test]
    fn token_is_primed_before_the_first_populate() {
        let transport = Rc::new(MockTransport::new());
        transport.respond(CSRF_TOKEN_PATH, 200, r#"{"csrf_token": "t"}"#);
        let csrf = CsrfTokenManager::new(Rc::clone(&transport));
        let slept = RefCell::new(Vec::new());
        let token_calls_at_run = RefCell::new(Vec::new());

        block_on(PopulateSchedule::default().run_after_token(
            &csrf,
            |delay| {
                slept.borrow_mut().push(delay);
                async {}
            },
            |run| {
                token_calls_at_run
                    .borrow_mut()
                    .push((run, transport.calls_to(CSRF_TOKEN_PATH)))
            },
        ));

        assert_eq!(slept.into_inner(), vec![100, 4_900]);
        assert_eq!(token_calls_at_run.into_inner(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn failed_token_fetch_still_populates() {
        let transport = Rc::new(MockTransport::new());
        transport.respond(CSRF_TOKEN_PATH, 503, "");
        let csrf = CsrfTokenManager::new(Rc::clone(&transport));
        let runs = RefCell::new(0);

        block_on(PopulateSchedule::default().run_after_token(
            &csrf,
            |_| async {},
            |_| *runs.borrow_mut() += 1,
        ));
        assert_eq!(runs.into_inner(), 2);
    }
}
