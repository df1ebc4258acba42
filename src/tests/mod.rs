pub mod json_tests;
