use gloo_timers::callback::Timeout;
use yew::{Callback, Html, Properties, function_component, html, use_effect_with};

const DISMISS_AFTER_MS: u32 = 4_000;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
            Self::Info => "alert alert-info",
        }
    }
}

/// A single notification surfaced at the corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
}

impl ToastMessage {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn info(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    /// Current notification, if any.
    pub message: Option<ToastMessage>,
    /// Emitted when the toast times out or is clicked away.
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // Auto-dismiss; replacing the message rearms the timer.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |message| {
            let timer = message.as_ref().map(|_| {
                Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(()))
            });
            move || {
                if let Some(timer) = timer {
                    timer.cancel();
                }
            }
        });
    }

    let Some(message) = props.message.clone() else {
        return Html::default();
    };

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class="toast toast-end z-50" onclick={on_click}>
            <div class={message.kind.alert_class()} role="alert">
                <div>
                    <div class="font-semibold">{ message.title.clone() }</div>
                    {
                        message.detail.clone().map_or_else(
                            Html::default,
                            |detail| html! { <div class="text-sm">{ detail }</div> },
                        )
                    }
                </div>
            </div>
        </div>
    }
}
