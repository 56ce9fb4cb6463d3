//! Dispatcher tests.

mod programs;
mod stack;
