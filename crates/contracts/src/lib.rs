//! Wire types shared between the catalog admin frontend and the REST backend.

pub mod domain;
