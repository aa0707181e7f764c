pub mod app;
pub mod config;

#[cfg(feature = "backend")]
pub mod cli;
#[cfg(feature = "backend")]
pub mod client;
#[cfg(feature = "backend")]
pub mod controller;

#[cfg(all(test, feature = "backend"))]
mod test_support;
