pub mod facet_filter;
