// src/lib.rs

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod safety;
pub mod store;
pub mod translator;

pub use crate::core::types::{Region, SafetyLevel, SlangTerm, TranslationResult};
pub use crate::translator::SlangTranslator;
