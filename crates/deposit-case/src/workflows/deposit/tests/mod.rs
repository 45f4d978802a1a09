mod common;
mod context;
mod report;
mod scoring;
mod timeline;
