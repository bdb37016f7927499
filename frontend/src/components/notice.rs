use shared::MutationOutcome;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

impl From<&MutationOutcome> for Notice {
    fn from(outcome: &MutationOutcome) -> Self {
        if outcome.success {
            Notice::success(outcome.message.clone())
        } else {
            Notice::error(outcome.message.clone())
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let class = match notice.kind {
        NoticeKind::Success => "form-message success",
        NoticeKind::Error => "form-message error",
    };

    html! {
        <div class={class} role="status">
            <span>{&notice.text}</span>
            {if let Some(on_dismiss) = props.on_dismiss.clone() {
                html! {
                    <button
                        type="button"
                        class="notice-dismiss"
                        aria-label="Dismiss"
                        onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(()))}
                    >
                        {"×"}
                    </button>
                }
            } else { html! {} }}
        </div>
    }
}
