use crate::simulator::Statistics;
use std::fs;
use std::path::Path;

/// The fixed results file read by the external grader
pub const RESULTS_FILE: &str = ".csim_results";

/// Prints the summary line for a run, `hits:<n> misses:<n> evictions:<n>`
pub fn print_summary(stats: &Statistics) {
    println!("{stats}");
}

/// Persists the three counters, space separated in hits/misses/evictions
/// order, for external grading. The order and format are load-bearing and
/// must not change
///
/// # Arguments
///
/// * `stats`: The final statistics of a run
/// * `path`: The results file path, normally [`RESULTS_FILE`]
///
/// returns: Result<(), String>
pub fn write_results(stats: &Statistics, path: &Path) -> Result<(), String> {
    let contents = format!("{} {} {}\n", stats.hits, stats.misses, stats.evictions);
    fs::write(path, contents)
        .map_err(|e| format!("Couldn't write the results file at {}: {e}", path.display()))
}
