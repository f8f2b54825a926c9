use ::common::Insights;
use yew::prelude::*;

use super::monthly_chart::MonthlyChart;
use super::ranked_list::RankedList;
use crate::api_client::insights::get_insights;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;

const RANKED_ENTRIES: usize = 5;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    icon: AttrValue,
    children: Children,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card bg-slate-800/50 border border-slate-700">
            <div class="card-body">
                <div class="flex flex-row items-center justify-between pb-2">
                    <span class="text-sm font-medium text-slate-300">{&props.title}</span>
                    <i class={props.icon.clone()}></i>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn render_insights(insights: Insights) -> Html {
    let performance = insights.model_performance;
    let monthly = insights.monthly_series();

    html! {
        <>
            <div class="grid grid-cols-1 gap-8 lg:grid-cols-3 mb-8">
                <StatCard title="Best Model" icon="fas fa-chart-bar text-blue-400">
                    <div class="text-2xl font-bold text-white">{&insights.best_model}</div>
                    <span class="badge mt-2 bg-blue-500/20 text-blue-400 border-none">{"Active Model"}</span>
                </StatCard>
                <StatCard title="R² Score" icon="fas fa-chart-line text-green-400">
                    <div class="text-2xl font-bold text-white">{performance.r2_percent()}</div>
                    <p class="text-xs text-slate-400 mt-2">{"Model Accuracy"}</p>
                </StatCard>
                <StatCard title="Mean Absolute Error" icon="fas fa-calendar text-purple-400">
                    <div class="text-2xl font-bold text-white">{performance.mae_minutes()}</div>
                    <p class="text-xs text-slate-400 mt-2">{"Average Prediction Error"}</p>
                </StatCard>
            </div>

            <div class="grid grid-cols-1 gap-8 lg:grid-cols-2">
                <RankedList
                    title="Top Performing Carriers"
                    description="Carriers with lowest average delays"
                    icon="fas fa-plane text-blue-400"
                    bubble_class="bg-blue-500/20 text-blue-400"
                    entries={insights.top_carriers(RANKED_ENTRIES)}
                />
                <RankedList
                    title="Busiest Airports"
                    description="Airports with highest delay volumes"
                    icon="fas fa-chart-bar text-purple-400"
                    bubble_class="bg-purple-500/20 text-purple-400"
                    entries={insights.busiest_airports(RANKED_ENTRIES)}
                />
            </div>

            <div class="card bg-slate-800/50 border border-slate-700 mt-8">
                <div class="card-body">
                    <h3 class="card-title text-white">
                        <i class="fas fa-calendar text-green-400"></i>
                        {"Monthly Delay Patterns"}
                    </h3>
                    <p class="text-slate-400">{"Average delays throughout the year"}</p>
                    <div class="grid grid-cols-2 gap-4 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 mt-4">
                        { for monthly.iter().map(|entry| html! {
                            <div key={entry.month.to_string()} class="text-center">
                                <div class="text-lg font-bold text-white mb-1">{entry.delay_label()}</div>
                                <div class="text-sm text-slate-400">{entry.label}</div>
                            </div>
                        }) }
                    </div>
                    <MonthlyChart series={monthly.clone()} />
                </div>
            </div>
        </>
    }
}

#[function_component(InsightsDashboard)]
pub fn insights_dashboard() -> Html {
    let (state, refetch) = use_fetch_with_refetch(get_insights);

    let on_refresh = {
        let refetch = refetch.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Insights refresh triggered");
            refetch.emit(());
        })
    };

    html! {
        <section id="insights" class="px-4 py-20">
            <div class="mx-auto max-w-7xl">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-white mb-4 md:text-4xl">{"Aviation Insights"}</h2>
                    <p class="text-slate-400 text-lg">{"Data-driven insights from our machine learning models"}</p>
                    <button
                        class="btn btn-ghost btn-sm text-slate-300 mt-4"
                        onclick={on_refresh}
                        disabled={state.is_loading()}
                    >
                        <i class="fas fa-sync-alt"></i>
                        {" Refresh"}
                    </button>
                </div>

                <FetchRender<Insights>
                    state={(*state).clone()}
                    render={Callback::from(render_insights)}
                    on_retry={Some(refetch)}
                    loading_text={Some("Loading insights...".to_string())}
                />
            </div>
        </section>
    }
}
