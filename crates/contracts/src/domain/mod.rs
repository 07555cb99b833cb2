pub mod a001_post;
