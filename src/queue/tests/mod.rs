//! Test modules for the fixture queues
//!
//! Tests are organized by functional area.

mod code_queue;
mod edge_cases;
