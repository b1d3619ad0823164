//! Study Mentor - Personalized Learning Assistant Backend
//!
//! This crate serves a form-and-chat workflow: a student logs in with a
//! free-text identifier, records subject/grade pairs once, and then chats
//! with a language-model assistant whose tone follows the stored grade
//! average.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
