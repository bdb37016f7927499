use shared::Route;
use yew::prelude::*;

use crate::components::notice::{Notice, NoticeBanner};
use crate::navigation::Navigator;

#[derive(Properties, PartialEq)]
pub struct NotFoundPageProps {
    pub navigator: Navigator,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    let on_home = {
        let navigator = props.navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.go(Route::Dashboard))
    };

    html! {
        <div class="page not-found">
            <NoticeBanner notice={Some(Notice::error("Page not found"))} />
            <button class="btn btn-secondary" onclick={on_home}>{"Go to Dashboard"}</button>
        </div>
    }
}
