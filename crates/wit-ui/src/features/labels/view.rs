//! Label dialog and print page views.
//!
//! # Design
//! - The reducer owns all dialog state; effects only start fetches.
//! - A fetch starts whenever the request token changes while loading, so a
//!   retry and a reopen follow the same path.
//! - Print reads the mounted preview markup, never a re-render.

use std::rc::Rc;

use gloo::console;
use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::modal::Modal;
use crate::features::labels::actions::LabelDialogAction;
use crate::features::labels::api::load_labels;
use crate::features::labels::logic::{
    LabelCard, PrintQuery, PrintQueryError, can_print, dialog_title, label_card, print_target,
    reduce, sync_action,
};
use crate::features::labels::print::{
    GRID_CLASS, GRID_GAP_MM, PRINT_SETTLE_DELAY_MS, print_labels,
};
use crate::features::labels::provider::FETCH_FALLBACK_MESSAGE;
use crate::features::labels::state::{
    Columns, FetchPhase, LabelDialogState, LabelMode, LabelRequest, LabelSizePreset, LabelTarget,
};
use crate::services::print_host::BrowserPrintHost;

const TITLE_ID: &str = "label-dialog-title";

impl Reducible for LabelDialogState {
    type Action = LabelDialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(reduce(&self, action))
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LabelDialogProps {
    pub open: bool,
    pub mode: LabelMode,
    pub target: LabelTarget,
    pub on_close: Callback<()>,
}

#[function_component(LabelDialog)]
pub(crate) fn label_dialog(props: &LabelDialogProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let state = use_reducer(LabelDialogState::default);
    let preview_ref = use_node_ref();
    let request = LabelRequest::from_target(props.mode, &props.target);
    let pending = request.clone().ok().flatten();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(open, pending): &(bool, Option<LabelRequest>)| {
                state.dispatch(sync_action(*open, pending.is_some()));
                || ()
            },
            (props.open, pending.clone()),
        );
    }

    {
        let dispatcher = state.clone();
        let fetch = state.is_loading().then(|| pending.clone()).flatten();
        let client = api_ctx.as_ref().map(|ctx| Rc::clone(&ctx.client));
        use_effect_with_deps(
            move |token: &u64| {
                let token = *token;
                if let Some(request) = fetch {
                    spawn_local(async move {
                        let action = match client {
                            Some(client) => match load_labels(&client, &request).await {
                                Ok(labels) => LabelDialogAction::Loaded { token, labels },
                                Err(err) => LabelDialogAction::Failed {
                                    token,
                                    message: err.message(),
                                },
                            },
                            None => LabelDialogAction::Failed {
                                token,
                                message: FETCH_FALLBACK_MESSAGE.to_string(),
                            },
                        };
                        dispatcher.dispatch(action);
                    });
                }
                || ()
            },
            state.request_token,
        );
    }

    let on_close = props.on_close.clone();
    let on_retry = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LabelDialogAction::Fetch))
    };
    let on_size = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let size = LabelSizePreset::from_value(&select.value());
                state.dispatch(LabelDialogAction::SetLabelSize(size));
            }
        })
    };
    let on_columns = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let columns = Columns::from_value(&select.value());
                state.dispatch(LabelDialogAction::SetColumns(columns));
            }
        })
    };
    let on_qr_only = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(LabelDialogAction::SetQrOnly(input.checked()));
            }
        })
    };
    let on_print = {
        let state = state.clone();
        let preview_ref = preview_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let markup = preview_ref
                .cast::<web_sys::Element>()
                .map(|element| element.inner_html());
            let snapshot = (*state).clone();
            spawn_local(async move {
                let settle = TimeoutFuture::new(PRINT_SETTLE_DELAY_MS);
                if let Err(err) =
                    print_labels(&BrowserPrintHost, &snapshot, markup.as_deref(), settle).await
                {
                    console::error!("label print failed", err.to_string());
                }
            });
        })
    };

    let title = dialog_title(props.mode, state.labels().len());
    let body = match (&request, &state.phase) {
        (Err(err), _) => html! { <p class="text-sm text-error">{err.to_string()}</p> },
        (Ok(None), _) => html! {
            <p class="text-sm text-base-content/70">{"Nothing selected to print."}</p>
        },
        (Ok(Some(request)), FetchPhase::Idle | FetchPhase::Loading) => html! {
            <div class="flex items-center gap-2 text-sm">
                <span class="loading loading-spinner loading-sm"></span>
                {loading_text(request.expected_count())}
            </div>
        },
        (Ok(Some(_)), FetchPhase::Failed(message)) => html! {
            <div class="alert alert-error flex items-center justify-between">
                <span>{message.clone()}</span>
                <button class="btn btn-sm" onclick={on_retry}>{"Retry"}</button>
            </div>
        },
        (Ok(Some(_)), FetchPhase::Ready(labels)) => {
            let grid_style = format!(
                "display: grid; grid-template-columns: repeat({}, 1fr); gap: {GRID_GAP_MM}mm;",
                state.columns.get()
            );
            html! {
                <div ref={preview_ref.clone()} class="label-preview">
                    <div class={GRID_CLASS} style={grid_style}>
                        { for labels.iter().map(|record| render_card(&label_card(record, state.show_qr_only))) }
                    </div>
                </div>
            }
        }
    };

    let printable = can_print(&state, pending.is_some());
    let (width, height) = state.label_size.dimensions_mm();

    html! {
        <Modal open={props.open} labelled_by={AttrValue::from(TITLE_ID)} on_close={on_close.clone()}>
            <div class="space-y-4">
                <h3 id={TITLE_ID} class="text-lg font-semibold">{title}</h3>
                <div class="flex flex-wrap items-end gap-4">
                    <label class="form-control gap-1">
                        <span class="label-text text-xs">{"Label size"}</span>
                        <select class="select select-bordered select-sm" onchange={on_size}>
                            { for LabelSizePreset::all().into_iter().map(|preset| html! {
                                <option value={preset.as_value()} selected={preset == state.label_size}>
                                    {preset.caption()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="form-control gap-1">
                        <span class="label-text text-xs">{"Columns"}</span>
                        <select class="select select-bordered select-sm" onchange={on_columns}>
                            { for Columns::all().map(|columns| html! {
                                <option value={columns.get().to_string()} selected={columns == state.columns}>
                                    {columns.get().to_string()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="label cursor-pointer gap-2">
                        <input
                            type="checkbox"
                            class="toggle toggle-sm"
                            checked={state.show_qr_only}
                            onchange={on_qr_only}
                        />
                        <span class="label-text">{"QR code only"}</span>
                    </label>
                </div>
                <p class="text-xs text-base-content/60">
                    {format!("Load {width} × {height} mm label stock before printing.")}
                </p>
                {body}
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={Callback::from(move |_| on_close.emit(()))}>
                        {"Close"}
                    </button>
                    <button class="btn btn-primary" disabled={!printable} onclick={on_print}>
                        {"Print"}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

fn loading_text(count: usize) -> String {
    if count == 1 {
        "Loading label…".to_string()
    } else {
        format!("Loading {count} labels…")
    }
}

fn render_card(card: &LabelCard) -> Html {
    let qr_style = format!("width: {0}mm; height: {0}mm;", card.qr_size_mm);
    let info = card.name.as_ref().map(|name| {
        html! {
            <div class="label-info">
                <div class="label-name">{name.clone()}</div>
                { line("label-detail", card.detail.as_ref()) }
                { line("label-barcode", card.barcode.as_ref()) }
                { line("label-expiration", card.expiration.as_ref().map(|date| format!("Expires {date}")).as_ref()) }
            </div>
        }
    });

    html! {
        <div class="label-card" key={card.id.clone()}>
            <img class="label-qr" src={card.qr_src.clone()} alt="QR code" style={qr_style} />
            { info.unwrap_or_default() }
        </div>
    }
}

fn line(class: &'static str, text: Option<&String>) -> Html {
    text.map_or_else(Html::default, |text| {
        html! { <div class={class}>{text.clone()}</div> }
    })
}

#[function_component(LabelPrintPage)]
pub(crate) fn label_print_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let target = location
        .as_ref()
        .map_or(Ok(PrintQuery::default()), |location| location.query::<PrintQuery>())
        .map_err(|_| PrintQueryError::Malformed)
        .and_then(print_target);

    let on_close = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    match target {
        Ok((mode, target)) => html! {
            <LabelDialog open={true} {mode} {target} {on_close} />
        },
        Err(err) => html! {
            <div class="panel">
                <p class="text-sm text-error">{err.message()}</p>
            </div>
        },
    }
}
