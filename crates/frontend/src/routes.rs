//! Route table

use budget_frontend_common::{RouteDescriptor, RouteEntry, RouteTable, RouteTableError};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/create-account")]
    CreateAccount,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/setup")]
    Setup,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[at("/edit-budget")]
    EditBudget,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const ENTRIES: [RouteEntry; 9] = [
    RouteEntry::Redirect {
        path: "/",
        to: "/login",
    },
    RouteEntry::View(RouteDescriptor::public("/login", "login")),
    RouteEntry::View(RouteDescriptor::public("/create-account", "create-account")),
    RouteEntry::View(RouteDescriptor::public("/forgot-password", "forgot-password")),
    RouteEntry::View(RouteDescriptor::public("/reset-password", "reset-password")),
    RouteEntry::View(RouteDescriptor::protected("/setup", "setup")),
    RouteEntry::View(RouteDescriptor::protected("/dashboard", "dashboard")),
    RouteEntry::View(RouteDescriptor::protected("/profile", "profile")),
    RouteEntry::View(RouteDescriptor::protected("/edit-budget", "edit-budget")),
];

/// Validated route table for the router guard
pub fn route_table() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(ENTRIES)
}
