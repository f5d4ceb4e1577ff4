mod analytics_tests;
mod appeals_tests;
mod auth_tests;
mod dashboard_tests;
mod denials_tests;
