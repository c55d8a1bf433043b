//! Step-driven algorithm bodies.
//!
//! Each algorithm is a zero-sized strategy implementing
//! [`Algorithm`](crate::playback::Algorithm); drive it with a
//! [`PlaybackController`](crate::playback::PlaybackController).
//!
//! | family | algorithms |
//! |---|---|
//! | sorting | bubble, selection, insertion, quick (Lomuto), merge (bottom-up) |
//! | searching | linear, binary |
//! | array techniques | Kadane, sliding window, prefix sum, Moore voting, subarray sum, two pointer, Dutch flag |
//! | string matching | naive, Rabin-Karp, KMP |

mod binary_search;
#[cfg(test)]
mod binary_search_test;
mod bubble_sort;
mod dutch_flag;
#[cfg(test)]
mod dutch_flag_test;
mod insertion_sort;
mod kadane;
#[cfg(test)]
mod kadane_test;
mod kmp;
#[cfg(test)]
mod kmp_test;
mod linear_search;
mod merge_sort;
#[cfg(test)]
mod merge_sort_test;
mod moore_voting;
#[cfg(test)]
mod moore_voting_test;
mod naive_match;
mod prefix_sum;
#[cfg(test)]
mod prefix_sum_test;
mod quick_sort;
#[cfg(test)]
mod quick_sort_test;
mod rabin_karp;
#[cfg(test)]
mod rabin_karp_test;
mod selection_sort;
mod sliding_window;
#[cfg(test)]
mod sliding_window_test;
mod subarray_sum;
#[cfg(test)]
mod subarray_sum_test;
mod two_pointer;
#[cfg(test)]
mod two_pointer_test;

pub use binary_search::{BinarySearch, BinarySearchState};
pub use bubble_sort::{BubbleSort, BubbleSortState};
pub use dutch_flag::{DutchFlag, DutchFlagState};
pub use insertion_sort::{InsertionSort, InsertionSortState};
pub use kadane::{Kadane, KadaneState};
pub use kmp::{Kmp, KmpState, failure_table};
pub use linear_search::{LinearSearch, LinearSearchState, SearchInput};
pub use merge_sort::{Merge, MergeSort, MergeSortState};
pub use moore_voting::{MooreVoting, MooreVotingState, VotePass};
pub use naive_match::{NaiveMatch, NaiveMatchState, TEXT_LEN, TextInput};
pub use prefix_sum::{PrefixSum, PrefixSumInput, PrefixSumState};
pub use quick_sort::{QuickSort, QuickSortState};
pub use rabin_karp::{RabinKarp, RabinKarpState};
pub use selection_sort::{SelectionSort, SelectionSortState};
pub use sliding_window::{SlidingWindow, SlidingWindowState, WindowInput};
pub use subarray_sum::{SubarraySum, SubarraySumState};
pub use two_pointer::{TwoPointer, TwoPointerState};
