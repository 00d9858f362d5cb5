pub mod exercises;
pub mod health;
pub mod pages;
