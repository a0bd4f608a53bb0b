//! Brute-force references for the graph queries.

/// Path-halving find over a plain parent table.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Joins `left` and `right`, returning `false` when they were already joined.
fn join(parent: &mut [usize], left: usize, right: usize) -> bool {
    let left = find_root(parent, left);
    let right = find_root(parent, right);
    if left == right {
        return false;
    }
    parent[right] = left;
    true
}

/// Number of connected components.
pub(super) fn component_count(vertex_count: usize, edges: &[(usize, usize, f64)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let merges = edges
        .iter()
        .filter(|&&(from, to, _)| join(&mut parent, from, to))
        .count();
    vertex_count - merges
}

/// Returns `true` when the edges form no cycle, self-loops included.
pub(super) fn is_acyclic<'a>(
    vertex_count: usize,
    edges: impl IntoIterator<Item = &'a (usize, usize, f64)>,
) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    edges
        .into_iter()
        .all(|&(from, to, _)| join(&mut parent, from, to))
}

/// Weight of a minimum spanning forest found by trying every edge subset of
/// the right size. Only viable for a handful of edges.
pub(super) fn exhaustive_forest_weight(vertex_count: usize, edges: &[(usize, usize, f64)]) -> f64 {
    assert!(edges.len() < 20, "exhaustive search over {} edges", edges.len());
    let forest_size = vertex_count - component_count(vertex_count, edges);
    let mut best = f64::INFINITY;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != forest_size {
            continue;
        }
        let chosen: Vec<_> = edges
            .iter()
            .enumerate()
            .filter(|(position, _)| mask & (1 << position) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if is_acyclic(vertex_count, chosen.iter().copied()) {
            best = best.min(chosen.iter().map(|edge| edge.2).sum());
        }
    }
    best
}

/// All-pairs distances; unreachable pairs stay infinite.
pub(super) fn floyd_warshall(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Vec<Vec<f64>> {
    let mut distance = vec![vec![f64::INFINITY; vertex_count]; vertex_count];
    for (vertex, row) in distance.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }
    for &(from, to, weight) in edges {
        distance[from][to] = distance[from][to].min(weight);
        distance[to][from] = distance[to][from].min(weight);
    }
    for via in 0..vertex_count {
        for from in 0..vertex_count {
            for to in 0..vertex_count {
                let detour = distance[from][via] + distance[via][to];
                if detour < distance[from][to] {
                    distance[from][to] = detour;
                }
            }
        }
    }
    distance
}
