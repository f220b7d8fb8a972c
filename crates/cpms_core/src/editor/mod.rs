//! Nested section editing as a stateless pure-function set.

pub mod section_editor;
