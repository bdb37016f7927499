use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::components::notice::Notice;

const NOTICE_TIMEOUT_MS: u32 = 4000;

pub struct UseNoticeResult {
    pub notice: Option<Notice>,
    pub show: Callback<Notice>,
    pub dismiss: Callback<()>,
}

/// A single notice slot that clears itself after a few seconds. A newer
/// notice resets the timer.
#[hook]
pub fn use_notice() -> UseNoticeResult {
    let notice = use_state(|| Option::<Notice>::None);
    let generation = use_mut_ref(|| 0u32);

    let show = {
        let notice = notice.clone();
        let generation = generation.clone();
        use_callback((), move |next: Notice, _| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation = generation.wrapping_add(1);
                *generation
            };
            notice.set(Some(next));

            let notice = notice.clone();
            let generation = generation.clone();
            Timeout::new(NOTICE_TIMEOUT_MS, move || {
                if *generation.borrow() == current {
                    notice.set(None);
                }
            })
            .forget();
        })
    };

    let dismiss = {
        let notice = notice.clone();
        use_callback((), move |_: (), _| notice.set(None))
    };

    UseNoticeResult {
        notice: (*notice).clone(),
        show,
        dismiss,
    }
}
