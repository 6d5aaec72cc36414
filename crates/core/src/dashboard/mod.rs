//! Dashboard module - monthly totals and chart series derived from transactions.

mod dashboard_model;
mod dashboard_service;


pub use dashboard_model::{
    CategorySpending, DailySpendingPoint, DashboardCharts, DashboardStats, MonthlySummaryPoint,
};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
