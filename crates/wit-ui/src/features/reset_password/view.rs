//! Password reset page.

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::features::reset_password::api::reset_password;
use crate::features::reset_password::logic::{
    RESET_FALLBACK_MESSAGE, ValidationError, check_token, failure_phase, rejected_phase,
    success_phase, validate,
};
use crate::features::reset_password::state::{ResetFailureKind, ResetForm, ResetPhase};

#[derive(Properties, PartialEq)]
pub(crate) struct ResetPasswordPageProps {
    #[prop_or_default]
    pub token: String,
}

#[function_component(ResetPasswordPage)]
pub(crate) fn reset_password_page(props: &ResetPasswordPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let form = use_state(ResetForm::default);
    let phase = use_state(ResetPhase::default);
    let validation = use_state(|| None::<ValidationError>);

    if let Err(err) = check_token(&props.token) {
        return terminal_panel(&err.to_string(), "/forgot-password", "Request a new link");
    }

    let on_password = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(ResetForm {
                    password: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };
    let on_confirm = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(ResetForm {
                    confirm: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };
    let on_submit = {
        let form = form.clone();
        let phase = phase.clone();
        let validation = validation.clone();
        let token = props.token.clone();
        let client = api_ctx.as_ref().map(|ctx| Rc::clone(&ctx.client));
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !phase.is_editable() {
                return;
            }
            let request = match validate(&token, &form) {
                Ok(request) => request,
                Err(err) => {
                    match rejected_phase(err) {
                        Some(terminal) => phase.set(terminal),
                        None => validation.set(Some(err)),
                    }
                    return;
                }
            };
            validation.set(None);
            let Some(client) = client.clone() else {
                phase.set(ResetPhase::Failed {
                    kind: ResetFailureKind::Generic,
                    message: RESET_FALLBACK_MESSAGE.to_string(),
                });
                return;
            };
            phase.set(ResetPhase::Submitting);
            let phase = phase.clone();
            let token = token.clone();
            spawn_local(async move {
                let next = match reset_password(&client, &token, &request).await {
                    Ok(response) => success_phase(response),
                    Err(err) => failure_phase(&err),
                };
                phase.set(next);
            });
        })
    };

    match &*phase {
        ResetPhase::Succeeded { message } => {
            return html! {
                <div class="card mx-auto max-w-md bg-base-100 shadow">
                    <div class="card-body space-y-3">
                        <h2 class="card-title">{"Password updated"}</h2>
                        <p class="text-sm">{message.clone()}</p>
                        <a class="btn btn-primary" href="/login">{"Go to login"}</a>
                    </div>
                </div>
            };
        }
        ResetPhase::Failed {
            kind: ResetFailureKind::TokenInvalid,
            message,
        } => return terminal_panel(message, "/forgot-password", "Request a new link"),
        _ => {}
    }

    let submitting = matches!(*phase, ResetPhase::Submitting);
    let error = (*validation).map(|err| err.to_string()).or_else(|| match &*phase {
        ResetPhase::Failed { message, .. } => Some(message.clone()),
        _ => None,
    });

    html! {
        <div class="card mx-auto max-w-md bg-base-100 shadow">
            <form class="card-body space-y-3" onsubmit={on_submit}>
                <h2 class="card-title">{"Choose a new password"}</h2>
                <label class="form-control gap-1">
                    <span class="label-text">{"New password"}</span>
                    <input
                        type="password"
                        class="input input-bordered"
                        autocomplete="new-password"
                        value={form.password.clone()}
                        disabled={submitting}
                        oninput={on_password}
                    />
                </label>
                <label class="form-control gap-1">
                    <span class="label-text">{"Confirm password"}</span>
                    <input
                        type="password"
                        class="input input-bordered"
                        autocomplete="new-password"
                        value={form.confirm.clone()}
                        disabled={submitting}
                        oninput={on_confirm}
                    />
                </label>
                { error.map_or_else(Html::default, |message| html! {
                    <p class="text-sm text-error" role="alert">{message}</p>
                }) }
                <button type="submit" class="btn btn-primary" disabled={submitting}>
                    { if submitting { "Resetting…" } else { "Reset password" } }
                </button>
            </form>
        </div>
    }
}

fn terminal_panel(message: &str, href: &'static str, action: &'static str) -> Html {
    html! {
        <div class="card mx-auto max-w-md bg-base-100 shadow">
            <div class="card-body space-y-3">
                <p class="text-sm text-error" role="alert">{message.to_string()}</p>
                <a class="btn btn-outline" {href}>{action}</a>
            </div>
        </div>
    }
}
