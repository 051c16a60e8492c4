// Movement cost between two voicings.
//
// The bass is compared positionally: it is the foundation and must be heard
// to move as one line. Upper voices are free to trade places, so their cost
// is the cheapest one-to-one matching of previous upper pitches to new upper
// pitches, summed over absolute semitone distances.
//
// The matching is solved as an assignment problem with the Hungarian
// algorithm (potentials + augmenting paths, O(n^2 m)) instead of trying every
// permutation, so cost stays polynomial in the voice count. When the two
// voicings have different numbers of upper voices, every voice on the
// smaller side is matched into a distinct voice on the larger side.

use keychord_theory::pitch::distance;

/// Result of matching previous upper voices to new upper voices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// `(previous index, next index)` pairs, sorted by previous index.
    pub pairs: Vec<(usize, usize)>,
    /// Sum of absolute semitone distances over `pairs`.
    pub cost: u32,
}

/// Total voice movement from `prev` to `next`: bass distance plus the
/// cheapest matching of the upper voices. Zero if either voicing is empty.
pub fn movement_cost(prev: &[u8], next: &[u8]) -> u32 {
    match (prev.split_first(), next.split_first()) {
        (Some((&prev_bass, prev_upper)), Some((&next_bass, next_upper))) => {
            distance(prev_bass, next_bass) + upper_assignment(prev_upper, next_upper).cost
        }
        _ => 0,
    }
}

/// Cheapest one-to-one matching between two sets of upper-voice pitches.
pub fn upper_assignment(prev_upper: &[u8], next_upper: &[u8]) -> Assignment {
    if prev_upper.is_empty() || next_upper.is_empty() {
        return Assignment {
            pairs: Vec::new(),
            cost: 0,
        };
    }

    // The solver wants rows <= columns.
    let transposed = prev_upper.len() > next_upper.len();
    let (rows, cols) = if transposed {
        (next_upper, prev_upper)
    } else {
        (prev_upper, next_upper)
    };
    let costs: Vec<Vec<i64>> = rows
        .iter()
        .map(|&r| cols.iter().map(|&c| distance(r, c) as i64).collect())
        .collect();

    let mut pairs: Vec<(usize, usize)> = solve_assignment(&costs)
        .into_iter()
        .enumerate()
        .map(|(row, col)| if transposed { (col, row) } else { (row, col) })
        .collect();
    pairs.sort_unstable();

    let cost = pairs
        .iter()
        .map(|&(p, n)| distance(prev_upper[p], next_upper[n]))
        .sum();
    Assignment { pairs, cost }
}

/// Hungarian algorithm for a rectangular matrix with `rows <= cols`.
/// Returns the chosen column for each row.
fn solve_assignment(costs: &[Vec<i64>]) -> Vec<usize> {
    const INF: i64 = i64::MAX / 4;
    let n = costs.len();
    let m = costs[0].len();

    // 1-based potentials; column 0 is a virtual start column.
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; m + 1];
    // owner[j] = row matched to column j (1-based, 0 = free).
    let mut owner = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for row in 1..=n {
        owner[0] = row;
        let mut j0 = 0usize;
        let mut min_slack = vec![INF; m + 1];
        let mut used = vec![false; m + 1];
        loop {
            used[j0] = true;
            let i0 = owner[j0];
            let mut delta = INF;
            let mut j1 = 0usize;
            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let slack = costs[i0 - 1][j - 1] - u[i0] - v[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }
            for j in 0..=m {
                if used[j] {
                    u[owner[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }
            j0 = j1;
            if owner[j0] == 0 {
                break;
            }
        }
        // Flip the augmenting path.
        loop {
            let j1 = way[j0];
            owner[j0] = owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=m {
        if owner[j] != 0 {
            assignment[owner[j] - 1] = j - 1;
        }
    }
    assignment
}
