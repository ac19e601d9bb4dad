mod config_tests;
mod selector_tests;
