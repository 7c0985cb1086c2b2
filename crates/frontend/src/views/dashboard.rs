//! Budget overview and expense log

use super::{ErrorText, bind, parse_money};
use crate::routes::Route;
use budget_frontend_common::ServiceError;
use budget_frontend_common::components::Spinner;
use budget_frontend_common::services::{AuthService, BudgetService};
use budget_http::types::{BudgetSummary, Expense, ExpenseCreate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn budget_service() -> Result<BudgetService, ServiceError> {
    Ok(BudgetService::from_session()?)
}

#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    summary: BudgetSummary,
    expenses: Vec<Expense>,
}

async fn load() -> Result<Snapshot, ServiceError> {
    let service = budget_service()?;
    let summary = service.summary().await?;
    let expenses = service.expenses().await?;
    Ok(Snapshot { summary, expenses })
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let navigator = use_navigator();
    let snapshot = use_state(|| None::<Snapshot>);
    let error = use_state(|| None::<String>);
    let revision = use_state(|| 0u32);

    {
        let (snapshot, error) = (snapshot.clone(), error.clone());
        use_effect_with(*revision, move |_| {
            spawn_local(async move {
                match load().await {
                    Ok(loaded) => {
                        error.set(None);
                        snapshot.set(Some(loaded));
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        });
    }

    let reload = {
        let revision = revision.clone();
        Callback::from(move |()| revision.set(revision.wrapping_add(1)))
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        match AuthService::from_session() {
            Ok(service) => service.logout(),
            Err(error) => tracing::error!(%error, "Logout without a session"),
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let body = match &*snapshot {
        Some(Snapshot { summary, expenses }) => html! {
            <>
                <SummaryTable summary={summary.clone()} />
                <AddExpense categories={summary.categories.keys().cloned().collect::<Vec<_>>()} on_added={reload.clone()} error={error.setter()} />
                <ExpenseList expenses={expenses.clone()} on_deleted={reload} error={error.setter()} />
            </>
        },
        None if error.is_none() => html! { <Spinner text="Loading your budget..." /> },
        None => html! {
            <Link<Route> to={Route::Setup}>{"Set up a budget"}</Link<Route>>
        },
    };

    html! {
        <section class="dashboard">
            <header>
                <h1>{"Dashboard"}</h1>
                <nav>
                    <Link<Route> to={Route::EditBudget}>{"Edit budget"}</Link<Route>>
                    <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
                    <button onclick={on_logout}>{"Log out"}</button>
                </nav>
            </header>
            <ErrorText message={(*error).clone()} />
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryTableProps {
    summary: BudgetSummary,
}

#[function_component(SummaryTable)]
fn summary_table(props: &SummaryTableProps) -> Html {
    let summary = &props.summary;
    html! {
        <div class="summary">
            <p>{format!("Income: ${:.2}", summary.income)}</p>
            <p>{format!("Savings goal: ${:.2}", summary.savings_goal)}</p>
            <p>{format!("Remaining: ${:.2}", summary.remaining)}</p>
            <table>
                <thead>
                    <tr><th>{"Category"}</th><th>{"Budget"}</th><th>{"Spent"}</th><th>{"Left"}</th></tr>
                </thead>
                <tbody>
                    { for summary.categories.iter().map(|(name, allocated)| {
                        let spent = summary.expenses.get(name).copied().unwrap_or_default();
                        let left = summary.category_remaining(name).unwrap_or_default();
                        html! {
                            <tr key={name.clone()}>
                                <td>{name.clone()}</td>
                                <td>{format!("${allocated:.2}")}</td>
                                <td>{format!("${spent:.2}")}</td>
                                <td class={classes!((left < 0.0).then_some("over"))}>{format!("${left:.2}")}</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AddExpenseProps {
    categories: Vec<String>,
    on_added: Callback<()>,
    error: UseStateSetter<Option<String>>,
}

#[function_component(AddExpense)]
fn add_expense(props: &AddExpenseProps) -> Html {
    let category = use_state(|| props.categories.first().cloned().unwrap_or_default());
    let amount = use_state(String::new);
    let description = use_state(String::new);

    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let onsubmit = {
        let (category, amount, description) = (category.clone(), amount.clone(), description.clone());
        let (on_added, error) = (props.on_added.clone(), props.error.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(value) = parse_money(&amount) else {
                error.set(Some("Amount must be a number".into()));
                return;
            };
            let expense = ExpenseCreate {
                category: (*category).clone(),
                amount: value,
                description: (*description).clone(),
            };
            let (on_added, error) = (on_added.clone(), error.clone());
            let (amount, description) = (amount.clone(), description.clone());
            spawn_local(async move {
                let result = match budget_service() {
                    Ok(service) => service.add_expense(&expense).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        amount.set(String::new());
                        description.set(String::new());
                        on_added.emit(());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <form class="add-expense" {onsubmit}>
            <select onchange={on_category}>
                { for props.categories.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == *category}>{name.clone()}</option>
                }) }
            </select>
            <input type="number" step="0.01" placeholder="Amount" value={(*amount).clone()} oninput={bind(&amount)} />
            <input placeholder="Description" value={(*description).clone()} oninput={bind(&description)} />
            <button type="submit">{"Add expense"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseListProps {
    expenses: Vec<Expense>,
    on_deleted: Callback<()>,
    error: UseStateSetter<Option<String>>,
}

#[function_component(ExpenseList)]
fn expense_list(props: &ExpenseListProps) -> Html {
    let delete = |id: i64| {
        let (on_deleted, error) = (props.on_deleted.clone(), props.error.clone());
        Callback::from(move |_: MouseEvent| {
            let (on_deleted, error) = (on_deleted.clone(), error.clone());
            spawn_local(async move {
                let result = match budget_service() {
                    Ok(service) => service.delete_expense(id).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => on_deleted.emit(()),
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    if props.expenses.is_empty() {
        return html! { <p class="empty">{"No expenses yet"}</p> };
    }

    html! {
        <ul class="expenses">
            { for props.expenses.iter().map(|expense| html! {
                <li key={expense.id.to_string()}>
                    <span>{expense.created_at.format("%Y-%m-%d").to_string()}</span>
                    <span>{expense.category.clone()}</span>
                    <span>{expense.description.clone()}</span>
                    <span>{format!("${:.2}", expense.amount_spent)}</span>
                    <button onclick={delete(expense.id)}>{"Delete"}</button>
                </li>
            }) }
        </ul>
    }
}
