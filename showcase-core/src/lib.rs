//! Showcase Core
//!
//! Core types and pure logic for the Showcase portfolio renderer.
//!
//! This crate contains:
//! - Domain types: repository records as returned by the GitHub API
//! - DTOs: GraphQL request/response envelopes for pinned repositories
//! - Curation: exclusion filtering and priority ordering
//! - Rendering: HTML cards and Markdown listings
//! - Page: splicing rendered output into an HTML page or text template

pub mod curation;
pub mod domain;
pub mod dto;
pub mod page;
pub mod render;
