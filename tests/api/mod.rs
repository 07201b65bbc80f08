mod admin_tests;
mod health_tests;
mod land_cost_tests;
mod static_tests;
