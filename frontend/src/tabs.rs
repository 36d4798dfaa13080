use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    About,
}

impl Tab {
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Search => "tab1",
            Tab::About => "tab2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Search => "動画検索",
            Tab::About => "このサイトについて",
        }
    }

    pub fn all_variants() -> [Self; 2] {
        [Tab::Search, Tab::About]
    }
}

/// Which page regions are shown for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLayout {
    pub search_visible: bool,
    pub full_width: bool,
    pub paragraph_visible: bool,
    pub pagination_visible: bool,
}

impl TabLayout {
    pub fn for_tab(tab: Tab) -> Self {
        let about = tab == Tab::About;
        Self {
            search_visible: !about,
            full_width: about,
            paragraph_visible: about,
            pagination_visible: !about,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tabs">
            { for Tab::all_variants().into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={classes!("tab-button", (tab == props.active).then_some("active"))}
                        data-tab={tab.id()}
                        tabindex="-1"
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(tab))}
                    >
                        { tab.label() }
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_tab_shows_search_and_pagination() {
        let layout = TabLayout::for_tab(Tab::Search);
        assert!(layout.search_visible);
        assert!(layout.pagination_visible);
        assert!(!layout.full_width);
        assert!(!layout.paragraph_visible);
    }

    #[test]
    fn about_tab_hides_search_and_widens_content() {
        let layout = TabLayout::for_tab(Tab::About);
        assert!(!layout.search_visible);
        assert!(!layout.pagination_visible);
        assert!(layout.full_width);
        assert!(layout.paragraph_visible);
    }
}
