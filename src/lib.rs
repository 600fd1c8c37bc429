pub mod app;
pub mod config;
pub mod diary;
pub mod error;
pub mod extractors;
pub mod navigation;
pub mod nutrition;
pub mod profile;
pub mod recipes;
pub mod seed;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_support;
