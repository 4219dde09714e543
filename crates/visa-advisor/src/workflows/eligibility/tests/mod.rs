mod common;
mod strategy;
