//! Venue-level tests driving the engine through its public surface, with a
//! recording listener standing in for an external consumer.

mod fixtures;

mod delete;
mod insert;
