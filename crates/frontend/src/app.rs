use crate::auth_guard::Guarded;
use crate::routes::Route;
use crate::views::{
    CreateAccount, Dashboard, EditBudget, ForgotPassword, Login, NotFound, Profile,
    ResetPassword, Setup,
};
use budget_frontend_common::RouteGuard;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Guard shared with every routed view
#[derive(Clone)]
pub struct GuardHandle(pub Rc<RouteGuard>);

impl PartialEq for GuardHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, Clone)]
pub struct AppProps {
    pub guard: Rc<RouteGuard>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.guard, &other.guard)
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let guard = GuardHandle(props.guard.clone());

    html! {
        <ContextProvider<GuardHandle> context={guard}>
            <BrowserRouter>
                <main class="app">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<GuardHandle>>
    }
}

fn switch(route: Route) -> Html {
    let view = match route {
        Route::Root | Route::Login => html! { <Login /> },
        Route::CreateAccount => html! { <CreateAccount /> },
        Route::ForgotPassword => html! { <ForgotPassword /> },
        Route::ResetPassword => html! { <ResetPassword /> },
        Route::Setup => html! { <Setup /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Profile => html! { <Profile /> },
        Route::EditBudget => html! { <EditBudget /> },
        Route::NotFound => return html! { <NotFound /> },
    };

    html! { <Guarded {route}>{view}</Guarded> }
}
