pub mod command;
pub mod console;
pub mod controller;
pub mod domain;
pub mod events;
pub mod library;
pub mod repository;
