//! In-process HTTP tests driving the router

mod api_tests;
