mod clear;
pub use clear::*;
