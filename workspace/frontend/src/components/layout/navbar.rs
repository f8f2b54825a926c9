use yew::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <div class="navbar bg-slate-900/80 backdrop-blur z-40 sticky top-0 border-b border-slate-800">
            <div class="flex-1 px-4 gap-2">
                <i class="fas fa-plane text-blue-400"></i>
                <span class="text-lg font-bold text-white">{"Flight Delay Predictor"}</span>
            </div>
            <div class="flex-none gap-2">
                <a class="btn btn-ghost btn-sm text-slate-300" href="#prediction">{"Predict"}</a>
                <a class="btn btn-ghost btn-sm text-slate-300" href="#insights">{"Insights"}</a>
            </div>
        </div>
    }
}
