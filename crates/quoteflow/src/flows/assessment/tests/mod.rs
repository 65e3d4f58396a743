mod common;
mod scoring;
