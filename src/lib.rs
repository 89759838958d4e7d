//! aardvark: an animal guessing game backed by a self-extending decision tree.
//!
//! The player thinks of an animal; the program walks a binary tree of yes/no
//! questions and guesses the animal at the leaf it reaches. A wrong guess
//! turns that leaf into a new question separating the two animals.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
