pub mod roster;
pub mod display;
pub mod export;
pub mod web;
