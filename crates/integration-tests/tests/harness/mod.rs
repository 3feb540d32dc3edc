//! Shared fixtures for the end-to-end tests
#![allow(dead_code)]

pub mod config;
pub mod mock_supabase;
pub mod mock_tts;
pub mod server;
