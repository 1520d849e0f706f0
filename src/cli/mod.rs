// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem: job files, output configuration and reporting

pub mod config;
pub mod job;
pub mod reporter;
pub mod runner;

pub use config::{OutputConfig, OutputFormat};
pub use job::{DimsJob, JobFile, JobOutput, JobReport, LayoutJob, NamedJob, RectJob};
pub use reporter::Reporter;
pub use runner::{load_job_file, run_job, run_job_file};
