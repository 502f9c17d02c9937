//! HTTP request handlers
//!
//! `pages` serves the HTML poll pages, the rest make up the JSON API.

pub mod admin;
pub mod health;
pub mod pages;
pub mod questions;
