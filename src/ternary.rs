/// Conditional expression on one line.  The boundary rules for the
/// energy neighbours and the seam windows are small tables of edge
/// cases, and `cargo fmt` spreads a plain `if` across five lines per
/// case; this keeps each rule readable as a single row.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
