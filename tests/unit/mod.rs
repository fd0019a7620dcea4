//! Unit test modules.

mod progression_test;
mod schedule_test;
mod sessions_test;
mod zones_test;
