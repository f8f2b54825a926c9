use yew::prelude::*;

use crate::components::home::{Features, Hero};
use crate::components::insights::InsightsDashboard;
use crate::components::prediction::PredictionForm;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <Features />
            <PredictionForm />
            <InsightsDashboard />
        </>
    }
}
