//! Budget setup and editing

use super::{ErrorText, bind, parse_money};
use crate::routes::Route;
use budget_frontend_common::ServiceError;
use budget_frontend_common::components::Spinner;
use budget_frontend_common::services::BudgetService;
use budget_http::types::BudgetSetup;
use std::collections::BTreeMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const DEFAULT_CATEGORIES: [&str; 5] = ["Housing", "Food", "Transportation", "Utilities", "Entertainment"];

fn budget_service() -> Result<BudgetService, ServiceError> {
    Ok(BudgetService::from_session()?)
}

#[derive(Debug, Clone, PartialEq)]
struct CategoryRow {
    name: String,
    amount: String,
}

fn parse_amount(label: &str, value: &str) -> Result<f64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    parse_money(value).ok_or_else(|| format!("{label} must be a number"))
}

fn collect(income: &str, savings: &str, rows: &[CategoryRow]) -> Result<BudgetSetup, String> {
    let mut categories = BTreeMap::new();
    for row in rows.iter().filter(|row| !row.name.trim().is_empty()) {
        let amount = parse_amount(&row.name, &row.amount)?;
        categories.insert(row.name.trim().to_string(), amount);
    }
    Ok(BudgetSetup {
        income: parse_amount("Income", income)?,
        savings_goal: parse_amount("Savings goal", savings)?,
        categories,
    })
}

#[derive(Properties, PartialEq)]
struct BudgetFormProps {
    initial: BudgetSetup,
    submit_label: AttrValue,
    on_submit: Callback<BudgetSetup>,
    error: Option<String>,
}

#[function_component(BudgetForm)]
fn budget_form(props: &BudgetFormProps) -> Html {
    let income = use_state(|| props.initial.income.to_string());
    let savings = use_state(|| props.initial.savings_goal.to_string());
    let rows = use_state(|| {
        props
            .initial
            .categories
            .iter()
            .map(|(name, amount)| CategoryRow {
                name: name.clone(),
                amount: amount.to_string(),
            })
            .collect::<Vec<_>>()
    });
    let local_error = use_state(|| None::<String>);

    let edit_row = |index: usize, name_field: bool| {
        let rows = rows.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*rows).clone();
            if let Some(row) = next.get_mut(index) {
                if name_field {
                    row.name = input.value();
                } else {
                    row.amount = input.value();
                }
            }
            rows.set(next);
        })
    };

    let add_row = {
        let rows = rows.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*rows).clone();
            next.push(CategoryRow {
                name: String::new(),
                amount: String::new(),
            });
            rows.set(next);
        })
    };

    let onsubmit = {
        let (income, savings, rows, local_error) =
            (income.clone(), savings.clone(), rows.clone(), local_error.clone());
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match collect(&income, &savings, &rows) {
                Ok(budget) => match budget.validate() {
                    Ok(()) => {
                        local_error.set(None);
                        on_submit.emit(budget);
                    }
                    Err(error) => local_error.set(Some(error.to_string())),
                },
                Err(error) => local_error.set(Some(error)),
            }
        })
    };

    let allocated = collect(&income, &savings, &rows)
        .map(|budget| budget.total_allocated())
        .unwrap_or_default();

    html! {
        <form {onsubmit}>
            <label>{"Monthly income"}
                <input type="number" step="0.01" value={(*income).clone()} oninput={bind(&income)} />
            </label>
            <label>{"Savings goal"}
                <input type="number" step="0.01" value={(*savings).clone()} oninput={bind(&savings)} />
            </label>
            <h2>{"Categories"}</h2>
            { for rows.iter().enumerate().map(|(index, row)| html! {
                <div class="category-row" key={index.to_string()}>
                    <input placeholder="Category" value={row.name.clone()} oninput={edit_row(index, true)} />
                    <input type="number" step="0.01" value={row.amount.clone()} oninput={edit_row(index, false)} />
                </div>
            }) }
            <button type="button" onclick={add_row}>{"Add category"}</button>
            <p class="allocated">{format!("Allocated: ${allocated:.2}")}</p>
            <button type="submit">{props.submit_label.clone()}</button>
            <ErrorText message={(*local_error).clone().or_else(|| props.error.clone())} />
        </form>
    }
}

fn default_budget() -> BudgetSetup {
    BudgetSetup {
        categories: DEFAULT_CATEGORIES
            .iter()
            .map(|name| ((*name).to_string(), 0.0))
            .collect(),
        ..BudgetSetup::default()
    }
}

#[function_component(Setup)]
pub fn setup() -> Html {
    let navigator = use_navigator();
    let error = use_state(|| None::<String>);

    let on_submit = {
        let error = error.clone();
        Callback::from(move |budget: BudgetSetup| {
            let (error, navigator) = (error.clone(), navigator.clone());
            spawn_local(async move {
                let result = match budget_service() {
                    Ok(service) => service.setup(&budget).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <section class="card">
            <h1>{"Set up your budget"}</h1>
            <BudgetForm initial={default_budget()} submit_label="Save budget" {on_submit} error={(*error).clone()} />
        </section>
    }
}

#[function_component(EditBudget)]
pub fn edit_budget() -> Html {
    let navigator = use_navigator();
    let current = use_state(|| None::<BudgetSetup>);
    let error = use_state(|| None::<String>);

    {
        let (current, error) = (current.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                let result = match budget_service() {
                    Ok(service) => service.summary().await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(summary) => current.set(Some(BudgetSetup {
                        income: summary.income,
                        savings_goal: summary.savings_goal,
                        categories: summary.categories,
                    })),
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        });
    }

    let on_submit = {
        let error = error.clone();
        Callback::from(move |budget: BudgetSetup| {
            let (error, navigator) = (error.clone(), navigator.clone());
            spawn_local(async move {
                let result = match budget_service() {
                    Ok(service) => service.update(&budget).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <section class="card">
            <h1>{"Edit budget"}</h1>
            if let Some(budget) = &*current {
                <BudgetForm initial={budget.clone()} submit_label="Update budget" {on_submit} error={(*error).clone()} />
            } else if error.is_some() {
                <ErrorText message={(*error).clone()} />
            } else {
                <Spinner text="Loading budget..." />
            }
            <Link<Route> to={Route::Dashboard}>{"Back to dashboard"}</Link<Route>>
        </section>
    }
}
