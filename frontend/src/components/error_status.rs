use yew::prelude::*;

/// Catch-all page for unknown routes
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <h4 class="error-status">{"404 - Page Not Found"}</h4>
        </div>
    }
}

/// Shown for the fixed forbidden route
#[function_component(Forbidden)]
pub fn forbidden() -> Html {
    html! {
        <div class="container">
            <div class="card text-center">
                <h1>{"You are not allowed to access this page"}</h1>
            </div>
        </div>
    }
}
