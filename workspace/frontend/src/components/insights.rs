mod dashboard;
mod monthly_chart;
mod ranked_list;

pub use dashboard::InsightsDashboard;
