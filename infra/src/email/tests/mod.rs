mod console_tests;
mod create_dispatcher_tests;
