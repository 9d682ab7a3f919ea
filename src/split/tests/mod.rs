mod fake_backend;
mod batch_tests;
