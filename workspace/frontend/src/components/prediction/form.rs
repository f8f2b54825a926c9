use ::common::{
    month_options, FetchState, PredictionForm as FormValues, PredictionResult, FALLBACK_AIRPORTS,
    FALLBACK_CARRIERS,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::fields::{OptionSelect, SeveritySlider};
use super::result_card::ResultCard;
use crate::api_client::prediction::{get_airports, get_carriers, predict};
use crate::common::error::FieldError;
use crate::common::fetch_render::FetchRender;
use crate::common::loading::ButtonSpinner;
use crate::common::toast::ToastContext;

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|code| code.to_string()).collect()
}

fn as_options(codes: &[String]) -> Vec<(String, String)> {
    codes.iter().map(|code| (code.clone(), code.clone())).collect()
}

fn select_handler(
    form: &UseStateHandle<FormValues>,
    apply: fn(&mut FormValues, String),
) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

fn input_handler(
    form: &UseStateHandle<FormValues>,
    apply: fn(&mut FormValues, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

fn severity(value: String) -> u8 {
    value.parse().unwrap_or(1)
}

#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let form = use_state(FormValues::default);
    let outcome = use_state(|| FetchState::<PredictionResult>::NotStarted);
    let validation = use_state(|| None::<String>);
    let carriers = use_state(|| codes(&FALLBACK_CARRIERS));
    let airports = use_state(|| codes(&FALLBACK_AIRPORTS));
    let toast_ctx = use_context::<ToastContext>();

    // Options start from the built-in lists and are replaced once the service answers
    {
        let carriers = carriers.clone();
        let airports = airports.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                carriers.set(get_carriers().await);
                airports.set(get_airports().await);
            });
            || ()
        });
    }

    let submit = {
        let form = form.clone();
        let outcome = outcome.clone();
        let validation = validation.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_: ()| {
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    log::debug!("Prediction form incomplete: {}", e);
                    validation.set(Some(e.to_string()));
                    return;
                }
            };

            validation.set(None);
            outcome.set(FetchState::Loading);

            let outcome = outcome.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = predict(request).await;
                if let Some(toast_ctx) = &toast_ctx {
                    match &result {
                        Ok(prediction) => toast_ctx
                            .show_success(format!("Prediction ready: {}", prediction.delay_category)),
                        Err(e) => toast_ctx.show_error(e.user_message()),
                    }
                }
                outcome.set(FetchState::resolve(result));
            });
        })
    };

    let on_submit = {
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let render_result = Callback::from(|result: PredictionResult| {
        html! { <ResultCard result={result} /> }
    });

    let is_loading = outcome.is_loading();
    let months: Vec<(String, String)> = month_options()
        .into_iter()
        .map(|option| (option.value, option.label.to_string()))
        .collect();

    html! {
        <section id="prediction" class="px-4 py-20">
            <div class="mx-auto max-w-4xl">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-white mb-4 md:text-4xl">{"Flight Delay Prediction"}</h2>
                    <p class="text-slate-400 text-lg">{"Enter flight details to get accurate delay predictions"}</p>
                </div>

                <div class="grid grid-cols-1 gap-8 lg:grid-cols-2">
                    <div class="card bg-slate-800/50 border border-slate-700">
                        <div class="card-body">
                            <h3 class="card-title text-white">
                                <i class="fas fa-plane text-blue-400"></i>
                                {"Flight Parameters"}
                            </h3>
                            <p class="text-slate-400">{"Configure your flight details and conditions"}</p>

                            <form onsubmit={on_submit} class="space-y-6 mt-4" novalidate={true}>
                                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                                    <OptionSelect
                                        id="carrier"
                                        label="Carrier"
                                        placeholder="Select carrier"
                                        options={as_options(&carriers)}
                                        selected={form.carrier.clone()}
                                        onchange={select_handler(&form, |f, v| f.carrier = v)}
                                    />
                                    <OptionSelect
                                        id="airport"
                                        label="Airport"
                                        placeholder="Select airport"
                                        options={as_options(&airports)}
                                        selected={form.airport.clone()}
                                        onchange={select_handler(&form, |f, v| f.airport = v)}
                                    />
                                </div>

                                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                                    <OptionSelect
                                        id="month"
                                        label="Month"
                                        placeholder="Select month"
                                        options={months}
                                        selected={form.month.clone()}
                                        onchange={select_handler(&form, |f, v| f.month = v)}
                                    />
                                    <div class="form-control space-y-2">
                                        <label class="label" for="arr_flights">
                                            <span class="label-text text-slate-300">{"Arriving Flights"}</span>
                                        </label>
                                        <input
                                            id="arr_flights"
                                            type="number"
                                            min="1"
                                            placeholder="e.g., 150"
                                            class="input input-bordered w-full bg-slate-700 border-slate-600 text-white placeholder:text-slate-400"
                                            value={form.arr_flights.clone()}
                                            oninput={input_handler(&form, |f, v| f.arr_flights = v)}
                                        />
                                    </div>
                                </div>

                                <div class="space-y-4">
                                    <SeveritySlider
                                        id="weather_severity"
                                        label="Weather Severity"
                                        value={form.weather_severity}
                                        oninput={input_handler(&form, |f, v| f.weather_severity = severity(v))}
                                    />
                                    <SeveritySlider
                                        id="nas_severity"
                                        label="NAS Severity"
                                        value={form.nas_severity}
                                        oninput={input_handler(&form, |f, v| f.nas_severity = severity(v))}
                                    />
                                    <SeveritySlider
                                        id="equipment_issues"
                                        label="Equipment Issues"
                                        value={form.equipment_issues}
                                        oninput={input_handler(&form, |f, v| f.equipment_issues = severity(v))}
                                    />
                                </div>

                                if let Some(message) = (*validation).clone() {
                                    <FieldError message={message} />
                                }

                                <button
                                    type="submit"
                                    class="btn w-full bg-blue-600 hover:bg-blue-700 text-white border-none"
                                    disabled={is_loading}
                                >
                                    if is_loading {
                                        <ButtonSpinner />
                                        {"Predicting..."}
                                    } else {
                                        {"Predict Delays"}
                                    }
                                </button>
                            </form>
                        </div>
                    </div>

                    <FetchRender<PredictionResult>
                        state={(*outcome).clone()}
                        render={render_result}
                        on_retry={Some(submit)}
                        loading_text={Some("Crunching the numbers...".to_string())}
                    />
                </div>
            </div>
        </section>
    }
}
