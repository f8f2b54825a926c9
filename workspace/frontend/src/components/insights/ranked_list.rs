use ::common::RankedDelay;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RankedListProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub icon: AttrValue,
    /// Colour classes of the rank bubble
    pub bubble_class: AttrValue,
    pub entries: Vec<RankedDelay>,
}

#[function_component(RankedList)]
pub fn ranked_list(props: &RankedListProps) -> Html {
    let bubble = classes!(
        "w-8", "h-8", "rounded-full", "flex", "items-center", "justify-center", "text-sm", "font-bold",
        props.bubble_class.to_string(),
    );

    html! {
        <div class="card bg-slate-800/50 border border-slate-700">
            <div class="card-body">
                <h3 class="card-title text-white">
                    <i class={props.icon.clone()}></i>
                    {&props.title}
                </h3>
                <p class="text-slate-400">{&props.description}</p>
                <div class="space-y-4 mt-4">
                    { for props.entries.iter().map(|entry| html! {
                        <div key={entry.code.clone()} class="flex items-center justify-between">
                            <div class="flex items-center gap-3">
                                <div class={bubble.clone()}>{entry.rank}</div>
                                <span class="text-white font-medium">{&entry.code}</span>
                            </div>
                            <span class="badge badge-outline border-slate-600 text-slate-300">
                                {entry.delay_label()}
                            </span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
