//! Unit tests for the project board.

mod view_tests;
