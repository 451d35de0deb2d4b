//! diss-storage
//!
//! The document store. Two logical collections live under one S3 bucket,
//! one JSON object per document: the `valid_identifiers` allow-list and the
//! `transcripts` session records. Thin wrappers around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod identifiers;
pub mod objects;
pub mod records;
