//! Infrastructure layer - artifacts, datasets, training, logging

pub mod artifact;
pub mod dataset;
pub mod logging;
pub mod training;
