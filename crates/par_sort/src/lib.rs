mod algorithms;

/// Subranges shorter than this take the sequential path in both parallel
/// variants; it is the knob trading parallelism granularity against
/// scheduling overhead.
pub const DEFAULT_BLOCK_SIZE: usize = 10_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortStrategy {
    StdUnstable,
    Sequential,
    ParLineSpan,
    ParLogSpan,
}

pub const ALL_STRATEGIES: [SortStrategy; 4] = [
    SortStrategy::StdUnstable,
    SortStrategy::Sequential,
    SortStrategy::ParLineSpan,
    SortStrategy::ParLogSpan,
];

pub fn all_strategies() -> &'static [SortStrategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: SortStrategy) -> &'static str {
    match strategy {
        SortStrategy::StdUnstable => "std_unstable",
        SortStrategy::Sequential => "seq",
        SortStrategy::ParLineSpan => "par_line_span",
        SortStrategy::ParLogSpan => "par_log_span",
    }
}

pub fn sort_u64(strategy: SortStrategy, data: &mut [u64]) {
    sort_u64_with_block_size(strategy, data, DEFAULT_BLOCK_SIZE);
}

pub fn sort_u64_with_block_size(strategy: SortStrategy, data: &mut [u64], block_size: usize) {
    match strategy {
        SortStrategy::StdUnstable => data.sort_unstable(),
        SortStrategy::Sequential => algorithms::sequential::sort(data),
        SortStrategy::ParLineSpan => algorithms::par_line_span::sort(data, block_size),
        SortStrategy::ParLogSpan => algorithms::par_log_span::sort(data, block_size),
    }
}
