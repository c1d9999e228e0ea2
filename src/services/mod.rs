pub mod backend;
pub mod backend_api;
pub mod dashboard_view;
pub mod deferral;
pub mod maintenance_summary;
pub mod pipeline;
pub mod risk_projection;
pub mod scenario_runner;
pub mod schedule_kpis;
pub mod timeline;
