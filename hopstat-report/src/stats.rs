/// Standard median: the middle value, or the mean of the two middle values for
/// an even count. `None` when there are no values.
#[must_use]
pub fn median<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut xs: Vec<f64> = values.into_iter().collect();
    if xs.is_empty() {
        return None;
    }

    xs.sort_by(f64::total_cmp);

    let mid = xs.len() / 2;
    if xs.len() % 2 == 1 {
        Some(xs[mid])
    } else {
        Some((xs[mid - 1] + xs[mid]) / 2.0)
    }
}
