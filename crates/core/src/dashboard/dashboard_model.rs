use serde::{Deserialize, Serialize};

/// Income and expense totals for one month of the trailing summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryPoint {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySpendingPoint {
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub monthly_summary: Vec<MonthlySummaryPoint>,
    pub category_spending: Vec<CategorySpending>,
    pub daily_spending: Vec<DailySpendingPoint>,
}

/// Summary statistics shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_balance: f64,
    pub total_transactions: i64,
    pub charts: DashboardCharts,
}
