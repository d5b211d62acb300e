use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpensesPageProps {
    pub on_add_another: Callback<()>,
}

/// Post-submit landing page
#[function_component(ExpensesPage)]
pub fn expenses_page(props: &ExpensesPageProps) -> Html {
    let on_click = {
        let on_add_another = props.on_add_another.clone();
        Callback::from(move |_: MouseEvent| on_add_another.emit(()))
    };

    html! {
        <section class="expenses-section">
            <div class="form-message success">
                {"Expense saved!"}
            </div>
            <button class="btn btn-primary" onclick={on_click}>
                {"Add another expense"}
            </button>
        </section>
    }
}
