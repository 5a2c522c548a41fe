mod event_loop_tests;
mod support;
