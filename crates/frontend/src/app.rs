use crate::client::{SharedClient, api_client};
use crate::router::{AppRouter, route_table};
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let client = use_memo((), |_| api_client().map(SharedClient::new));
    let routes = use_memo((), |_| route_table().map(Rc::new));

    match (&*client, &*routes) {
        (Ok(client), Ok(routes)) => html! {
            <ContextProvider<SharedClient> context={client.clone()}>
                <AppRouter routes={routes.clone()} />
            </ContextProvider<SharedClient>>
        },
        (Err(e), _) => {
            tracing::error!("Failed to create API client: {e}");
            startup_error(&e.to_string())
        }
        (_, Err(e)) => {
            tracing::error!("Invalid route table: {e}");
            startup_error(&e.to_string())
        }
    }
}

fn startup_error(message: &str) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center">
            <p class="text-red-600">{format!("Application failed to start: {message}")}</p>
        </div>
    }
}
