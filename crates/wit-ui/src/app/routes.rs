//! Routing definitions for the WIT UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/labels/print")]
    LabelPrint,
    #[at("/reset-password/:token")]
    ResetPassword { token: String },
    #[at("/reset-password")]
    ResetPasswordMissing,
    #[not_found]
    #[at("/404")]
    NotFound,
}
