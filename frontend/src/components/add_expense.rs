use shared::{format_amount_input, ExpenseCategory, ExpenseForm, ExpenseType};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

const COMPONENT: &str = "add-expense";

#[derive(Properties, PartialEq)]
pub struct AddExpensePageProps {
    /// Emitted once the expense is saved; the app shell navigates away
    pub on_saved: Callback<()>,
    #[prop_or_default]
    pub api: ApiClient,
}

/// The add-expense form: field state, validation and the submit flow.
///
/// Submit is a small state machine: an invalid form (or one with a
/// request already in flight) only marks every field touched; a valid
/// one flips `submitting`, issues exactly one API call, and on failure
/// returns to an editable form with the values preserved.
#[function_component(AddExpensePage)]
pub fn add_expense_page(props: &AddExpensePageProps) -> Html {
    let form = use_state(|| ExpenseForm::new(date_utils::today()));
    let form_error = use_state(|| Option::<String>::None);

    let on_title_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.title.set(input.value());
            form.set(next);
        })
    };

    // Masks the amount as the user types: the sanitized string goes both
    // back into the visible input and into the form state.
    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_amount_input(&input.value());
            input.set_value(&formatted);
            let mut next = (*form).clone();
            next.amount.set(formatted);
            form.set(next);
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.category.set(select.value());
            form.set(next);
        })
    };

    let on_type_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.expense_type.set(select.value());
            form.set(next);
        })
    };

    let on_due_date_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.due_date.set(input.value());
            form.set(next);
        })
    };

    let on_description_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description.set(input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let on_saved = props.on_saved.clone();
        let api = props.api.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Blocked: surface the errors, issue no request
            if form.submit_blocked() {
                let mut next = (*form).clone();
                next.mark_all_touched();
                form.set(next);
                return;
            }

            let body = match form.to_body() {
                Ok(body) => body,
                Err(err) => {
                    // A malformed value slipped past validation; treat it
                    // like a validation failure and stay editable
                    Logger::warn_with_component(COMPONENT, &err.to_string());
                    let mut next = (*form).clone();
                    next.mark_all_touched();
                    next.submitting = false;
                    form.set(next);
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };

            let mut submitted = (*form).clone();
            submitted.submitting = true;
            form.set(submitted.clone());
            form_error.set(None);

            let form = form.clone();
            let form_error = form_error.clone();
            let on_saved = on_saved.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.add_expense(&body).await {
                    Ok(response) => {
                        if let Some(expense) = response.data {
                            Logger::info_with_component(
                                COMPONENT,
                                &format!("Expense {} saved", expense.id),
                            );
                        }
                        let mut next = submitted;
                        next.submitting = false;
                        form.set(next);
                        on_saved.emit(());
                    }
                    Err(message) => {
                        Logger::error_with_component(COMPONENT, &message);
                        // Keep the values so the user can retry manually
                        let mut next = submitted;
                        next.submitting = false;
                        form.set(next);
                        form_error.set(Some(message));
                    }
                }
            });
        })
    };

    let field_error = |field: &shared::FieldState| -> Html {
        if let Some(err) = field.visible_error() {
            html! { <div class="field-error">{err.message()}</div> }
        } else {
            html! {}
        }
    };

    html! {
        <section class="add-expense-section">
            <h2>{"Add Expense"}</h2>

            {if let Some(error) = (*form_error).as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="add-expense-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="title">{"Title"}</label>
                    <input
                        type="text"
                        id="title"
                        placeholder="Rent, groceries, electricity..."
                        value={form.title.value.clone()}
                        oninput={on_title_input}
                        disabled={form.submitting}
                    />
                    {field_error(&form.title)}
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="text"
                        id="amount"
                        inputmode="decimal"
                        placeholder="1,200.00"
                        value={form.amount.value.clone()}
                        oninput={on_amount_input}
                        disabled={form.submitting}
                    />
                    {field_error(&form.amount)}
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        onchange={on_category_change}
                        disabled={form.submitting}
                    >
                        <option value="" selected={form.category.value.is_empty()}>
                            {"Select a category"}
                        </option>
                        {for ExpenseCategory::ALL.iter().map(|category| {
                            html! {
                                <option
                                    value={category.as_str()}
                                    selected={form.category.value == category.as_str()}
                                >
                                    {category.as_str()}
                                </option>
                            }
                        })}
                    </select>
                    {field_error(&form.category)}
                </div>

                <div class="form-group">
                    <label for="type">{"Type"}</label>
                    <select
                        id="type"
                        onchange={on_type_change}
                        disabled={form.submitting}
                    >
                        <option value="" selected={form.expense_type.value.is_empty()}>
                            {"Select a type"}
                        </option>
                        {for ExpenseType::ALL.iter().map(|expense_type| {
                            html! {
                                <option
                                    value={expense_type.as_str()}
                                    selected={form.expense_type.value == expense_type.as_str()}
                                >
                                    {expense_type.as_str()}
                                </option>
                            }
                        })}
                    </select>
                    {field_error(&form.expense_type)}
                </div>

                <div class="form-group">
                    <label for="due-date">{"Due date"}</label>
                    <input
                        type="date"
                        id="due-date"
                        value={form.due_date.value.clone()}
                        onchange={on_due_date_change}
                        disabled={form.submitting}
                    />
                    {field_error(&form.due_date)}
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        placeholder="What is this expense for?"
                        value={form.description.value.clone()}
                        oninput={on_description_input}
                        disabled={form.submitting}
                    />
                    {field_error(&form.description)}
                </div>

                <button
                    type="submit"
                    class="btn btn-primary add-expense-btn"
                    disabled={form.submitting}
                >
                    {if form.submitting {
                        "Saving..."
                    } else {
                        "Add Expense"
                    }}
                </button>
            </form>
        </section>
    }
}
