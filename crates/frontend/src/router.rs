//! Route table and the component that renders it

use portal_router::{RouteDefinition, RouteError, RouteTable, WebHistory};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Renders the view for a matched route from its captured params
pub type View = fn(&HashMap<String, String>) -> Html;

/// The application's routes, resolved under the build's `BASE_URL`.
///
/// Add pages here, e.g. `RouteDefinition::new("/dashboard", dashboard as View)`.
pub fn route_table() -> Result<RouteTable<View>, RouteError> {
    let routes: Vec<RouteDefinition<View>> = Vec::new();
    RouteTable::new(WebHistory::from_env(), routes)
}

#[derive(Properties, Clone)]
pub struct AppRouterProps {
    pub routes: Rc<RouteTable<View>>,
}

impl PartialEq for AppRouterProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.routes, &other.routes)
    }
}

/// History-mode router over the route table
#[function_component(AppRouter)]
pub fn app_router(props: &AppRouterProps) -> Html {
    let base = props.routes.history().base();
    let basename = (base != "/").then(|| AttrValue::from(base.to_string()));

    html! {
        <BrowserRouter {basename}>
            <RouteOutlet routes={props.routes.clone()} />
        </BrowserRouter>
    }
}

#[function_component(RouteOutlet)]
fn route_outlet(props: &AppRouterProps) -> Html {
    let Some(location) = use_location() else {
        return html! {};
    };

    match props.routes.resolve(location.path()) {
        Some(found) => (found.route.view)(&found.params),
        None => {
            // No fallback view: an unmatched location renders nothing
            tracing::debug!(path = location.path(), "No route matched");
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_starts_empty() {
        let table = route_table().unwrap();
        assert!(table.is_empty());
        assert!(table.resolve("/").is_none());
        assert!(table.resolve("/dashboard").is_none());
    }
}
