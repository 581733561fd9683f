//! Service layer: operations over live games.

pub mod games;
