mod reset_code_tests;
mod session_tests;
