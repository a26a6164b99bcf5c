pub mod city;
pub mod clean;
pub mod filter;
pub mod input;
pub mod loader;
pub mod reports;
pub mod session;
pub mod trip;
