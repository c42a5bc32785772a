/// Levenshtein edit distance between `a` and `b`, counted in chars.
///
/// Fills the full `(m+1) x (n+1)` table: `t[i][0] = i`, `t[0][j] = j`, and
/// each cell takes the diagonal on a char match or one plus the cheapest of
/// deletion, insertion and substitution otherwise.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j]
                    .min(table[i][j - 1])
                    .min(table[i - 1][j - 1])
            };
        }
    }

    table[m][n]
}
