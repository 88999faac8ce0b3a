mod stub_removal_tests;
mod visit_filter_tests;
