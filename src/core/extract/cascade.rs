/// Runs `strategies` in order and returns the first one whose result is non-empty,
/// together with that result. Results of different strategies are never merged.
pub fn first_success<S, T, F>(strategies: impl IntoIterator<Item = S>, mut run: F) -> Option<(S, Vec<T>)>
where
    F: FnMut(&S) -> Vec<T>,
{
    strategies.into_iter().find_map(|strategy| {
        let found = run(&strategy);
        (!found.is_empty()).then_some((strategy, found))
    })
}
