use crate::models::Activity;
use crate::utils::{format_iso8601_duration, format_number, trusted_embed_url};
use yew::prelude::*;

/// Display-ready card contents. Everything here is plain text; only
/// `embed_src` ends up in an attribute, and only after the allow-list check.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    /// Empty when the activity's video URL is not a trusted embed.
    pub embed_src: String,
    pub rows: Vec<String>,
}

impl CardView {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            title: activity.title.clone(),
            embed_src: trusted_embed_url(&activity.video_url)
                .unwrap_or_default()
                .to_string(),
            rows: vec![
                format!("アップロード日: {}", activity.upload_date),
                format!("再生回数: {}", format_number(activity.view_count.unwrap_or(0))),
                format!("いいね: {}", format_number(activity.like_count.unwrap_or(0))),
                format!("動画時間: {}", format_iso8601_duration(&activity.duration)),
                format!("チャネル名: {}", activity.channel_category),
            ],
        }
    }

    pub fn has_embed(&self) -> bool {
        !self.embed_src.is_empty()
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: Activity,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = CardView::from_activity(&props.activity);
    let loading = card.has_embed().then_some("lazy");

    html! {
        <div class="card">
            <div><strong>{ &card.title }</strong></div>
            <div class="video-container">
                <iframe
                    src={card.embed_src.clone()}
                    loading={loading}
                    frameborder="0"
                    allowfullscreen={true}
                />
            </div>
            <div class="info">
                { for card.rows.iter().map(|row| html! { <div>{ row }</div> }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(video_url: &str) -> Activity {
        Activity {
            title: "<script>alert(1)</script>".into(),
            video_url: video_url.into(),
            upload_date: "2023年11月22日11時00分".into(),
            view_count: Some(12_345),
            like_count: None,
            duration: "PT3M5S".into(),
            channel_category: "サッカーチャンネル".into(),
        }
    }

    #[test]
    fn untrusted_embed_is_blanked() {
        let card = CardView::from_activity(&activity("https://evil.example/embed/x"));
        assert_eq!(card.embed_src, "");
        assert!(!card.has_embed());
    }

    #[test]
    fn trusted_embed_is_kept_verbatim() {
        let card = CardView::from_activity(&activity("https://www.youtube.com/embed/abc"));
        assert_eq!(card.embed_src, "https://www.youtube.com/embed/abc");
    }

    #[test]
    fn rows_have_fixed_labels_and_formatting() {
        let card = CardView::from_activity(&activity(""));
        assert_eq!(
            card.rows,
            vec![
                "アップロード日: 2023年11月22日11時00分",
                "再生回数: 12,345",
                "いいね: 0",
                "動画時間: 03:05",
                "チャネル名: サッカーチャンネル",
            ]
        );
    }

    #[test]
    fn upload_date_is_shown_as_sent() {
        let mut raw = activity("");
        raw.upload_date = "2024-03-01T10:00:00Z".into();
        let card = CardView::from_activity(&raw);
        assert_eq!(card.rows[0], "アップロード日: 2024-03-01T10:00:00Z");
    }

    #[test]
    fn title_is_carried_as_plain_text() {
        let card = CardView::from_activity(&activity(""));
        assert_eq!(card.title, "<script>alert(1)</script>");
    }
}
