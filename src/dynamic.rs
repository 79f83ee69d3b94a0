pub mod edit_distance;
pub mod three_row;
pub mod two_row;
pub mod window;

#[cfg(test)]
mod tests;

// Re-export the engines and convenience functions with descriptive names
pub use edit_distance::{
    damerau_levenshtein, damerau_levenshtein_with_costs, levenshtein, levenshtein_less_equal,
    levenshtein_less_equal_with_costs, levenshtein_with_costs,
};
pub use three_row::damerau_levenshtein as three_row_distance;
pub use two_row::levenshtein as two_row_distance;
pub use window::{Window, WindowPlan};
