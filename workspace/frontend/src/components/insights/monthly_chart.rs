use ::common::MonthlyDelay;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct MonthlyChartProps {
    pub series: Vec<MonthlyDelay>,
}

/// Bar chart of the monthly averages, drawn by the page's Plotly bundle.
#[function_component(MonthlyChart)]
pub fn monthly_chart(props: &MonthlyChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.series.clone()), move |(chart_ref, series)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let labels: Vec<&str> = series.iter().map(|m| m.label).collect();
            let delays: Vec<f64> = series.iter().map(|m| m.delay).collect();

            let trace = serde_json::json!([{
                "x": labels,
                "y": delays,
                "type": "bar",
                "marker": {"color": "#60a5fa"},
                "name": "Average delay (min)"
            }]);

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "font": {"color": "#94a3b8"},
                "xaxis": {"showgrid": false},
                "yaxis": {"showgrid": true, "gridcolor": "#334155"}
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            let converted = (
                serde_wasm_bindgen::to_value(&trace),
                serde_wasm_bindgen::to_value(&layout),
                serde_wasm_bindgen::to_value(&config),
            );
            match converted {
                (Ok(data), Ok(layout), Ok(config)) if !div_id.is_empty() => {
                    newPlot(&div_id, data, layout, config);
                }
                (Ok(_), Ok(_), Ok(_)) => log::warn!("Monthly chart container has no id"),
                _ => log::error!("Failed to convert monthly chart data for Plotly"),
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-monthly-delays" class="chart-container" style="height: 260px;"></div>
    }
}
