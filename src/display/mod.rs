//! Terminal output formatting
//!
//! Formats budget status and meal lists for terminal output.

use crate::ledger::BudgetState;
use crate::models::MealEntry;

/// Format the budget status summary (the home-screen numbers)
pub fn format_status(state: &BudgetState, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Today: {}  ({} day{} left in {})\n",
        state.today,
        state.days_remaining,
        if state.days_remaining == 1 { "" } else { "s" },
        state.current_month.month_key,
    ));
    output.push_str(&format!(
        "Allowance: {}   Spent: {}   Remaining: {}\n",
        state.today_allowance.format_with_symbol(symbol),
        state.today_spent.format_with_symbol(symbol),
        state.today_remaining.format_with_symbol(symbol),
    ));
    output.push_str(&format!(
        "Month: {} of {} target\n",
        state.month_total_spent().format_with_symbol(symbol),
        state.monthly_target.format_with_symbol(symbol),
    ));

    if state.today_remaining.is_negative() {
        output.push_str(&format!(
            "Over today's allowance by {}\n",
            (-state.today_remaining).format_with_symbol(symbol),
        ));
    }

    output
}

/// Format today's meals as a table
pub fn format_meal_list(meals: &[MealEntry], symbol: &str) -> String {
    if meals.is_empty() {
        return "No meals recorded today.".to_string();
    }

    let amount_width = meals
        .iter()
        .map(|m| m.amount.format_with_symbol(symbol).len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<5}  {:<9}  {:>amount_width$}\n",
        "ID",
        "Time",
        "Meal",
        "Amount",
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<5}  {:-<9}  {:->amount_width$}\n",
        "",
        "",
        "",
        "",
        amount_width = amount_width,
    ));

    for meal in meals {
        output.push_str(&format!(
            "{:<13}  {:<5}  {:<9}  {:>amount_width$}\n",
            meal.id.to_string(),
            meal.time.format("%H:%M").to_string(),
            meal.meal_type.to_string(),
            meal.amount.format_with_symbol(symbol),
            amount_width = amount_width,
        ));
    }

    let total: crate::models::Money = meals.iter().map(|m| m.amount).sum();
    output.push_str(&format!(
        "\nTotal: {}\n",
        total.format_with_symbol(symbol)
    ));

    output
}
