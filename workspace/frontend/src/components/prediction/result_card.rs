use ::common::PredictionResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub result: PredictionResult,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let result = &props.result;
    let category = &result.delay_category;

    html! {
        <div class="card bg-slate-800/50 border border-slate-700">
            <div class="card-body space-y-6">
                <div>
                    <h3 class="card-title text-white">{"Prediction Results"}</h3>
                    <p class="text-slate-400">{"Delay forecast based on your parameters"}</p>
                </div>

                <div class="text-center">
                    <div class={classes!("text-2xl", "font-bold", "mb-2", category.tone().css_class())}>
                        {category.label().to_string()}
                    </div>
                    <p class="text-slate-400">{"Overall Assessment"}</p>
                </div>

                <div class="grid grid-cols-1 gap-4">
                    <div class="bg-slate-700/50 rounded-lg p-4">
                        <div class="text-2xl font-bold text-white mb-1">
                            {format!("{} min", result.total_minutes_rounded())}
                        </div>
                        <p class="text-slate-400 text-sm">{"Total Delay Minutes"}</p>
                    </div>

                    <div class="bg-slate-700/50 rounded-lg p-4">
                        <div class="text-2xl font-bold text-white mb-1">
                            {format!("{} min", result.average_minutes_rounded())}
                        </div>
                        <p class="text-slate-400 text-sm">{"Average Delay per Flight"}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
