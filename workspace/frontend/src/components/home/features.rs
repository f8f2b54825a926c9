use yew::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "fas fa-brain text-blue-400",
        title: "Machine Learning Models",
        description: "Advanced Random Forest and Gradient Boosting algorithms for accurate predictions",
    },
    Feature {
        icon: "fas fa-database text-purple-400",
        title: "Comprehensive Data",
        description: "Analysis of carriers, airports, weather conditions, and operational factors",
    },
    Feature {
        icon: "fas fa-chart-bar text-green-400",
        title: "Detailed Insights",
        description: "Monthly trends, carrier performance, and airport-specific delay patterns",
    },
    Feature {
        icon: "fas fa-bolt text-yellow-400",
        title: "Real-time Processing",
        description: "Instant predictions with customizable severity parameters",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="px-4 py-20">
            <div class="mx-auto max-w-7xl">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold text-white mb-4 md:text-4xl">{"Advanced Aviation Analytics"}</h2>
                    <p class="text-slate-400 text-lg max-w-2xl mx-auto">
                        {"Powered by cutting-edge machine learning technology and comprehensive aviation data"}
                    </p>
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="card bg-slate-800/50 border border-slate-700">
                            <div class="card-body items-center text-center">
                                <div class="rounded-full bg-slate-700/50 p-3 mb-2">
                                    <i class={classes!(feature.icon, "text-2xl")}></i>
                                </div>
                                <h3 class="card-title text-white text-lg">{feature.title}</h3>
                                <p class="text-slate-400">{feature.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
