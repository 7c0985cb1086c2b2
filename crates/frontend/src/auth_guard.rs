//! Route guard component

use crate::app::GuardHandle;
use crate::routes::Route;
use budget_frontend_common::{GuardDecision, NavigationIntent};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub route: Route,
    pub children: Children,
}

/// Renders its children only when the guard lets the navigation through
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let guard = use_context::<GuardHandle>().expect("GuardHandle context not found");
    let previous = use_mut_ref(|| None::<String>);

    let to = props.route.to_path();
    let mut intent = NavigationIntent::new(to.clone());
    if let Some(from) = previous.borrow().clone() {
        intent = intent.coming_from(from);
    }

    match guard.0.evaluate(&intent) {
        GuardDecision::Proceed(_) => {
            *previous.borrow_mut() = Some(to);
            html! { <>{ props.children.clone() }</> }
        }
        GuardDecision::Redirect(target) => match Route::recognize(&target) {
            Some(route) => html! { <Redirect<Route> to={route} /> },
            None => html! { <Redirect<Route> to={Route::Login} /> },
        },
    }
}
