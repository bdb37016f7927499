use gloo::timers::callback::Timeout;
use shared::Route;
use yew::prelude::*;

/// Navigation capability handed to every page instead of ambient history
/// access.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
    pub redirect_delay_ms: u32,
}

impl Navigator {
    pub fn go(&self, route: Route) {
        self.on_navigate.emit(route);
    }

    /// Navigate once the configured post-submit delay has elapsed.
    pub fn go_after_delay(&self, route: Route) {
        let on_navigate = self.on_navigate.clone();
        Timeout::new(self.redirect_delay_ms, move || on_navigate.emit(route)).forget();
    }

    pub fn logout(&self) {
        self.on_logout.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct RedirectProps {
    pub to: Route,
    pub navigator: Navigator,
}

/// Replaces itself with a navigation as soon as it mounts.
#[function_component(Redirect)]
pub fn redirect(props: &RedirectProps) -> Html {
    use_effect_with(props.to.clone(), {
        let navigator = props.navigator.clone();
        move |to| {
            navigator.go(to.clone());
            || ()
        }
    });
    html! {}
}
