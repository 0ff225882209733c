mod common;
mod interpretation;
mod report;
mod scoring;
