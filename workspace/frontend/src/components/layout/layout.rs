use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-gradient-to-br from-slate-900 via-blue-900 to-slate-800">
            <Navbar />
            <main class="flex-1">
                { for props.children.iter() }
            </main>
            <footer class="px-4 py-8 text-center text-xs text-slate-500">
                {"Predictions are based on historical data and current conditions"}
            </footer>
        </div>
    }
}
