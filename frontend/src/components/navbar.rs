use shared::Route;
use yew::prelude::*;

use crate::navigation::Navigator;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub navigator: Navigator,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_back = {
        let navigator = props.navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.go(Route::Dashboard))
    };
    let on_logout = {
        let navigator = props.navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.logout())
    };

    html! {
        <nav class="navbar">
            <button class="btn btn-secondary" onclick={on_back}>{"Back to Dashboard"}</button>
            <h1 class="navbar-title">{"Admin Panel"}</h1>
            <button class="btn btn-danger" onclick={on_logout}>{"Logout"}</button>
        </nav>
    }
}
