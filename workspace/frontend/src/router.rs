use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::home::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Layout><HomePage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="flex flex-col items-center py-32 gap-6">
                        <h1 class="text-4xl font-bold text-white">{"404 Not Found"}</h1>
                        <Link<Route> to={Route::Home} classes="btn bg-blue-600 text-white border-none">
                            {"Back to the predictor"}
                        </Link<Route>>
                    </div>
                </Layout>
            }
        }
    }
}
