//! Stop-to-stop travel-time matrix.

use crate::models::STOP_COUNT;

/// Travel minutes between every ordered pair of stops on one line.
pub type TimeMatrix = [[f64; STOP_COUNT]; STOP_COUNT];

/// Builds the pairwise travel-time matrix from cumulative times.
///
/// `matrix[i][j] = |cumulative_times[j] - cumulative_times[i]|`, the
/// in-vehicle minutes between stops `i` and `j` in either direction.
/// Symmetric with a zero diagonal by construction.
pub fn build_time_matrix(cumulative_times: &[f64; STOP_COUNT]) -> TimeMatrix {
    let mut matrix = [[0.0; STOP_COUNT]; STOP_COUNT];
    for i in 0..STOP_COUNT {
        for j in 0..STOP_COUNT {
            matrix[i][j] = (cumulative_times[j] - cumulative_times[i]).abs();
        }
    }
    matrix
}
