//! Self-prefix/suffix problems answered with the prefix function.

pub mod happy_prefix;
pub mod palindrome;

pub use happy_prefix::{longest_happy_prefix, longest_happy_prefix_of};
pub use palindrome::{shortest_palindrome, shortest_palindrome_of, shortest_palindrome_with};
