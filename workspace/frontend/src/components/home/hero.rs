use yew::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scrolls the section with `id` into view.
fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("Scroll target #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

struct Highlight {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "fas fa-chart-line text-blue-400",
        title: "Accurate Predictions",
        text: "ML-powered delay forecasting with high precision",
    },
    Highlight {
        icon: "fas fa-clock text-purple-400",
        title: "Real-time Analysis",
        text: "Instant predictions based on current conditions",
    },
    Highlight {
        icon: "fas fa-shield-alt text-green-400",
        title: "Reliable Data",
        text: "Built on comprehensive aviation datasets",
    },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let on_start = Callback::from(|_: MouseEvent| scroll_to("prediction"));
    let on_insights = Callback::from(|_: MouseEvent| scroll_to("insights"));

    html! {
        <section class="relative overflow-hidden px-4 py-20 md:py-32">
            <div class="absolute inset-0 bg-gradient-to-r from-blue-600/20 to-purple-600/20"></div>
            <div class="relative mx-auto max-w-7xl">
                <div class="text-center">
                    <div class="mb-8 flex justify-center">
                        <div class="rounded-full bg-blue-500/10 p-4">
                            <i class="fas fa-plane text-5xl text-blue-400"></i>
                        </div>
                    </div>
                    <h1 class="mb-6 text-4xl font-bold tracking-tight text-white md:text-6xl lg:text-7xl">
                        {"Flight Delay"}
                        <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            {" Predictor"}
                        </span>
                    </h1>
                    <p class="mx-auto mb-8 max-w-2xl text-lg text-slate-300 md:text-xl">
                        {"Advanced machine learning models to predict flight delays with precision. "}
                        {"Make informed decisions for your aviation operations."}
                    </p>
                    <div class="flex flex-col gap-4 sm:flex-row sm:justify-center">
                        <button class="btn btn-lg bg-blue-600 hover:bg-blue-700 text-white border-none px-8" onclick={on_start}>
                            {"Start Prediction"}
                        </button>
                        <button class="btn btn-lg btn-outline border-slate-600 text-slate-300 hover:bg-slate-800 px-8" onclick={on_insights}>
                            {"View Insights"}
                        </button>
                    </div>
                </div>

                <div class="mt-16 grid grid-cols-1 gap-8 md:grid-cols-3">
                    { for HIGHLIGHTS.iter().map(|highlight| html! {
                        <div class="text-center">
                            <div class="mb-4 flex justify-center">
                                <i class={classes!(highlight.icon, "text-3xl")}></i>
                            </div>
                            <h3 class="mb-2 text-lg font-semibold text-white">{highlight.title}</h3>
                            <p class="text-slate-400">{highlight.text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
