/// Adjacent-exchange bubble sort
pub mod bubble;
/// Frequency-table counting sort and its stability-preserving placement
pub mod counting;
/// Shift-based insertion sort
pub mod insertion;
/// Merge step and recursive merge sort
pub mod merge;
/// Procedure selection and run configuration
pub mod procedure;
/// Run state, schedulers, and counters shared by all procedures
pub mod stepper;
