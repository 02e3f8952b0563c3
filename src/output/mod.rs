// Output formatting — terminal rendering of counter comparisons.

pub mod terminal;
