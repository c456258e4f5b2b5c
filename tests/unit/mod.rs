
mod constructor_tests;
mod edge_case_tests;
mod multi_pair_tests;
mod negative_tests;
mod seeker_bounds_tests;
