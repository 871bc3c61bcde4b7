//! Generate command tests

mod tests_run;
