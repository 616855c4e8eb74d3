pub mod assembler;
pub mod config;
pub mod error;
pub mod geography;
pub mod output;
pub mod report;
pub mod route;
pub mod runner;
pub mod splitter;
pub mod utils;
pub mod xml_tree;

#[cfg(test)]
mod xml_tree_test;
