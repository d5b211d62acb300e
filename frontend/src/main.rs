use wasm_bindgen::JsValue;
use yew::prelude::*;

mod components;
mod services;

use components::add_expense::AddExpensePage;
use components::error_status::{Forbidden, NotFound};
use components::expenses::ExpensesPage;

/// The app's route table: the form at the root, a fixed post-submit
/// destination, a fixed forbidden page, everything else is a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AddExpense,
    Expenses,
    Forbidden,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::AddExpense,
            "/expenses" => Route::Expenses,
            "/forbidden" => Route::Forbidden,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::AddExpense => "/",
            Route::Expenses => "/expenses",
            Route::Forbidden => "/forbidden",
            Route::NotFound => "/404",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let route = use_state(|| {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::AddExpense)
    });

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(next.path()));
                }
            }
            route.set(next);
        })
    };

    let on_saved = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Expenses))
    };

    let on_add_another = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Route::AddExpense))
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Expense Tracker"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    {match *route {
                        Route::AddExpense => html! { <AddExpensePage on_saved={on_saved} /> },
                        Route::Expenses => html! { <ExpensesPage on_add_another={on_add_another} /> },
                        Route::Forbidden => html! { <Forbidden /> },
                        Route::NotFound => html! { <NotFound /> },
                    }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
